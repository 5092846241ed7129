//! Build error types.
//!
//! Every error here is fatal: the pipeline has no skip-and-continue
//! mode, so the first error aborts the whole build and the process
//! exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Build-pipeline errors
#[derive(Debug, Error)]
pub enum BuildError {
    /// Front matter missing, unparseable, or missing required fields.
    #[error("Malformed content in `{path}`: {reason}")]
    MalformedContent { path: PathBuf, reason: String },

    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Template rendering failed for `{0}`")]
    TemplateRender(PathBuf, #[source] tera::Error),
}

impl BuildError {
    /// Shorthand for the front-matter failure case.
    pub fn malformed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::MalformedContent {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
