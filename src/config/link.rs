//! `[link]` section configuration.
//!
//! Scheme, host and port used when composing absolute site URLs.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[link]` section in blogr.toml - URL construction settings.
///
/// The port is omitted from generated links when it is a default
/// port (80 or 443).
///
/// # Example
/// ```toml
/// [link]
/// scheme = "https"
/// host = "example.com"
/// port = 443
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    /// URL scheme for generated links.
    #[serde(default = "defaults::link::scheme")]
    #[educe(Default = defaults::link::scheme())]
    pub scheme: String,

    /// URL host for generated links.
    #[serde(default = "defaults::link::host")]
    #[educe(Default = defaults::link::host())]
    pub host: String,

    /// URL port; left out of links when it equals 80 or 443.
    #[serde(default = "defaults::link::port")]
    #[educe(Default = defaults::link::port())]
    pub port: u16,
}
