//! Output directory setup and asset/layout copying.
//!
//! Mechanical I/O around the two content passes: ensure the output
//! tree exists, copy static assets into `<output>/assets`, and copy
//! layout subdirectories (stylesheets, images shipped with the
//! template) to the output root. Overwrites are unconditional.

use crate::compiler::collect_all_files;
use crate::config::SiteConfig;
use crate::error::BuildError;
use crate::log;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Ensure the output root and `<output>/assets` exist.
///
/// Idempotent: safe to repeat across builds.
pub fn prepare_output(config: &SiteConfig) -> Result<()> {
    let assets_dir = config.build.output.join("assets");
    fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Io(assets_dir.clone(), e))?;
    Ok(())
}

/// Copy every asset file into `<output>/assets`, preserving structure.
pub fn copy_assets(config: &SiteConfig) -> Result<()> {
    let src_root = &config.build.assets;
    let dst_root = config.build.output.join("assets");

    for src in collect_all_files(src_root) {
        let Ok(relative) = src.strip_prefix(src_root) else {
            continue;
        };
        log!("assets"; "{}", relative.display());
        copy_file(&src, &dst_root.join(relative))?;
    }

    Ok(())
}

/// Copy layout subdirectories into the output root.
///
/// The template file itself stays out of the output tree; only
/// directories shipped alongside it (css/, images/, ...) are copied.
pub fn copy_layouts(config: &SiteConfig) -> Result<()> {
    let layouts = &config.build.layouts;

    let entries = match fs::read_dir(layouts) {
        Ok(entries) => entries,
        Err(e) => return Err(BuildError::Io(layouts.clone(), e).into()),
    };

    for entry in entries {
        let entry = entry.map_err(|e| BuildError::Io(layouts.clone(), e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        for src in collect_all_files(&path) {
            let Ok(relative) = src.strip_prefix(layouts) else {
                continue;
            };
            log!("layouts"; "{}", relative.display());
            copy_file(&src, &config.build.output.join(relative))?;
        }
    }

    Ok(())
}

/// Copy one file, creating parent directories as needed.
fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::Io(parent.to_path_buf(), e))?;
    }
    fs::copy(src, dst).map_err(|e| BuildError::Io(dst.to_path_buf(), e))?;
    Ok(())
}
