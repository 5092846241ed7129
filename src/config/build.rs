//! `[build]` section configuration.
//!
//! Contains the four directory paths the build pipeline works with.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in blogr.toml - build directory paths.
///
/// All paths are relative to the project root until `update_with_cli`
/// normalizes them to absolute paths.
///
/// # Example
/// ```toml
/// [build]
/// contents = "contents"
/// assets = "assets"
/// layouts = "layouts"
/// output = "public"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not usually from the file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Root of the Markdown content tree.
    #[serde(default = "defaults::build::contents")]
    #[educe(Default = defaults::build::contents())]
    pub contents: PathBuf,

    /// Static assets copied verbatim into `<output>/assets`.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Template file plus layout subdirectories copied to the output root.
    #[serde(default = "defaults::build::layouts")]
    #[educe(Default = defaults::build::layouts())]
    pub layouts: PathBuf,

    /// Destination root for the generated site.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,
}
