//! Front-matter extraction.
//!
//! A content file is `<preamble>` + `---` + `<YAML metadata>` + `---`
//! + `<body>`. Only the first two delimiter markers are significant,
//! so a body containing a `---` horizontal rule is never truncated.
//!
//! `title` and `date` are required; every page render depends on
//! them, so their absence is a hard error rather than a silent skip.

use crate::error::BuildError;
use crate::utils::date;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Front-matter delimiter marker.
const DELIMITER: &str = "---";

/// Parsed and validated page metadata.
#[derive(Debug, Clone)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDate,
}

/// Raw YAML shape; extra keys are tolerated, `title` and `date` are not optional.
#[derive(Debug, Deserialize)]
struct RawFrontMatter {
    title: String,
    date: String,
}

/// Split raw file text into front matter and body.
///
/// Errors with [`BuildError::MalformedContent`] naming `path` when the
/// delimiters are missing, the YAML does not parse, a required field
/// is absent, or the date is not a valid `YYYY-MM-DD`.
pub fn extract(raw: &str, path: &Path) -> Result<(FrontMatter, String)> {
    let (metadata, body) = split(raw)
        .ok_or_else(|| BuildError::malformed(path, "missing front-matter delimiters"))?;

    let raw_meta: RawFrontMatter = serde_yaml::from_str(metadata)
        .map_err(|e| BuildError::malformed(path, format!("invalid front matter: {e}")))?;

    let parsed_date = date::parse(&raw_meta.date).map_err(|e| {
        BuildError::malformed(path, format!("invalid date `{}`: {e}", raw_meta.date))
    })?;

    Ok((
        FrontMatter {
            title: raw_meta.title,
            date: parsed_date,
        },
        body.to_string(),
    ))
}

/// Split on the first two delimiter occurrences only.
fn split(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.splitn(3, DELIMITER);
    let _preamble = parts.next()?;
    let metadata = parts.next()?;
    let body = parts.next()?;
    Some((metadata, body))
}
