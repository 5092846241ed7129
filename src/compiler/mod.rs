//! Content indexing and rendering pipeline.
//!
//! This module implements the two-pass build over the content tree:
//!
//! - **nav**: first pass, builds the per-section navigation index
//! - **pages**: second pass, renders every page through the template
//! - **front_matter**: metadata extraction shared by both passes
//! - **markdown**: Markdown to HTML with highlighted code blocks
//! - **assets**: output directory setup and asset/layout copying
//!
//! # Build Flow
//!
//! ```text
//! build_nav() ──────► NavMap (complete, read-only)
//!                        │
//! render_pages(nav) ◄────┘
//!        │
//!        └──► HTML files + Vec<ChangedPage>
//! ```
//!
//! The nav pass must finish for the whole tree before rendering
//! starts: every page lists the `articles` section regardless of
//! where it lives.

pub mod assets;
pub mod front_matter;
pub mod markdown;
pub mod nav;
pub mod pages;

use crate::error::BuildError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Map a content source file to its output location.
///
/// Content-root-relative path, extension swapped to `.html`, rooted at
/// the output root. Both build passes go through this one function, so
/// an indexed link always equals the page's written location.
pub fn output_path(source: &Path, contents_root: &Path, output_root: &Path) -> Result<PathBuf> {
    let relative = source.strip_prefix(contents_root).map_err(|_| {
        BuildError::Io(
            source.to_path_buf(),
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "file is not in the contents directory",
            ),
        )
    })?;

    Ok(output_root.join(relative.with_extension("html")))
}

/// Section key for a content directory: its content-root-relative path
/// with forward slashes. The content root itself maps to `""`.
pub fn section_key(dir: &Path, contents_root: &Path) -> String {
    dir.strip_prefix(contents_root)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default()
}

/// Directory entries sorted by file name.
///
/// Both passes walk with the same ordering, which also keeps rebuild
/// output byte-identical for unchanged input.
pub fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| BuildError::Io(dir.to_path_buf(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::Io(dir.to_path_buf(), e))?;
        let name = entry.file_name();
        if IGNORED_FILES.contains(&name.to_string_lossy().as_ref()) {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();

    Ok(paths)
}

/// Check whether a path is a Markdown content file.
pub fn is_content_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Collect all files from a directory recursively.
///
/// A missing directory yields an empty list.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
