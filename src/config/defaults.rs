//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn contents() -> PathBuf {
        "contents".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub fn layouts() -> PathBuf {
        "layouts".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }
}

// ============================================================================
// [link] Section Defaults
// ============================================================================

pub mod link {
    pub fn scheme() -> String {
        "http".into()
    }

    pub fn host() -> String {
        "localhost".into()
    }

    pub fn port() -> u16 {
        8080
    }
}
