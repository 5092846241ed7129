//! Site building orchestration.
//!
//! Sequences the full rebuild:
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output() ──► output root + assets dir
//!     ├── copy_layouts() / copy_assets()
//!     ├── load_templates() ──► page template + `link` function
//!     │
//!     ├── build_nav() ──────► complete NavMap (pass 1)
//!     │
//!     └── render_pages(nav) ► HTML tree (pass 2)
//! ```
//!
//! Every step is synchronous and sequential; the first error aborts
//! the whole build.

use crate::compiler::markdown::MarkdownRenderer;
use crate::compiler::nav::build_nav;
use crate::compiler::pages::{ChangedPage, TEMPLATE_NAME, render_pages};
use crate::compiler::assets;
use crate::config::SiteConfig;
use crate::error::BuildError;
use crate::link::LinkResolver;
use crate::log;
use anyhow::Result;
use tera::Tera;

/// File name of the page template inside the layouts directory.
const TEMPLATE_FILE: &str = "index.html";

/// Build the entire site from scratch.
///
/// Returns the pages written during the render pass, in traversal
/// order.
pub fn build_site(config: &SiteConfig) -> Result<Vec<ChangedPage>> {
    assets::prepare_output(config)?;
    assets::copy_layouts(config)?;
    assets::copy_assets(config)?;

    let resolver = LinkResolver::from_config(config);
    let templates = load_templates(config, &resolver)?;

    log!("index"; "indexing {}", config.build.contents.display());
    let nav = build_nav(config, &resolver)?;
    log!("index"; "found {} sections", nav.len());

    let markdown = MarkdownRenderer::new();
    let changed = render_pages(config, &nav, &templates, &markdown, &resolver)?;
    log!("build"; "done, {} pages", changed.len());

    Ok(changed)
}

/// Load the page template once and register the `link` function.
fn load_templates(config: &SiteConfig, resolver: &LinkResolver) -> Result<Tera> {
    let path = config.build.layouts.join(TEMPLATE_FILE);

    let mut tera = Tera::default();
    tera.add_template_file(&path, Some(TEMPLATE_NAME))
        .map_err(|e| BuildError::TemplateRender(path, e))?;
    tera.register_function("link", resolver.clone());

    Ok(tera)
}
