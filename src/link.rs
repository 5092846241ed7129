//! Link resolution - output file paths to absolute site URLs.
//!
//! The resolver is a pure string transformation, shared by the nav
//! index pass and the render pass, and also registered with the
//! template engine as the `link` function so templates can resolve
//! arbitrary internal links.

use crate::config::SiteConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tera::Value;

/// Resolves output-relative file paths into absolute site URLs.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    scheme: String,
    host: String,
    port: u16,
    output_root: PathBuf,
}

impl LinkResolver {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            scheme: config.link.scheme.clone(),
            host: config.link.host.clone(),
            port: config.link.port,
            output_root: config.build.output.clone(),
        }
    }

    /// Compose `scheme://host[:port]/relative` for an output path.
    ///
    /// The output-root prefix is stripped; the port is omitted when it
    /// is a default port (80 or 443).
    pub fn resolve(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.output_root).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        let relative = relative.trim_start_matches('/');

        match self.port {
            80 | 443 => format!("{}://{}/{}", self.scheme, self.host, relative),
            port => format!("{}://{}:{}/{}", self.scheme, self.host, port, relative),
        }
    }
}

impl tera::Function for LinkResolver {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let path = args
            .get("path")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("`link` requires a string `path` argument"))?;

        Ok(Value::String(self.resolve(Path::new(path))))
    }

    fn is_safe(&self) -> bool {
        true
    }
}
