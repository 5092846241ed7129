//! Page rendering - second pass over the content tree.
//!
//! Mirrors the nav pass traversal. Each directory becomes an output
//! directory; each Markdown file is re-read, re-parsed, rendered to
//! HTML, pushed through the page template and written to its mapped
//! output location. No state is cached between the two passes.

use crate::compiler::markdown::MarkdownRenderer;
use crate::compiler::nav::{NavMap, PageSummary};
use crate::compiler::{front_matter, is_content_file, output_path, section_key, sorted_entries};
use crate::config::SiteConfig;
use crate::error::BuildError;
use crate::link::LinkResolver;
use crate::log;
use crate::utils::date;
use anyhow::Result;
use std::fs;
use std::path::Path;
use tera::Tera;

/// Section key whose pages are listed (date-descending) on every page.
pub const ARTICLES_SECTION: &str = "articles";

/// Name the page template is registered under.
pub const TEMPLATE_NAME: &str = "index";

/// Record of a page written during the render pass.
///
/// Returned to the caller for future incremental-publish or
/// notification use; currently only counted and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedPage {
    pub title: String,
    pub link: String,
    /// Section key the page belongs to.
    pub section: String,
}

/// Render every content page, consuming the completed nav index.
///
/// Returns the changed pages in traversal order. Any unreadable file,
/// malformed front matter or template failure aborts the whole pass.
pub fn render_pages(
    config: &SiteConfig,
    nav: &NavMap,
    templates: &Tera,
    markdown: &MarkdownRenderer,
    resolver: &LinkResolver,
) -> Result<Vec<ChangedPage>> {
    let articles = articles_by_date(nav);
    walk(&config.build.contents, config, &articles, templates, markdown, resolver)
}

/// The `articles` section's summaries, sorted descending by date.
///
/// Lexicographic comparison is sufficient: the nav pass produces
/// zero-padded `YYYY/MM/DD` keys.
fn articles_by_date(nav: &NavMap) -> Vec<PageSummary> {
    let mut articles = nav.get(ARTICLES_SECTION).cloned().unwrap_or_default();
    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles
}

fn walk(
    dir: &Path,
    config: &SiteConfig,
    articles: &[PageSummary],
    templates: &Tera,
    markdown: &MarkdownRenderer,
    resolver: &LinkResolver,
) -> Result<Vec<ChangedPage>> {
    let contents = &config.build.contents;
    let key = section_key(dir, contents);
    let mut changed = Vec::new();

    for path in sorted_entries(dir)? {
        if path.is_dir() {
            let out_dir = config.build.output.join(
                path.strip_prefix(contents)
                    .unwrap_or(path.as_path()),
            );
            log!("render"; "=== {}", out_dir.display());
            fs::create_dir_all(&out_dir).map_err(|e| BuildError::Io(out_dir.clone(), e))?;

            changed.extend(walk(&path, config, articles, templates, markdown, resolver)?);
        } else if is_content_file(&path) {
            let dst = output_path(&path, contents, &config.build.output)?;
            log!("render"; "{} => {}", path.display(), dst.display());

            let raw =
                fs::read_to_string(&path).map_err(|e| BuildError::Io(path.clone(), e))?;
            let (meta, body) = front_matter::extract(&raw, &path)?;

            let permalink = resolver.resolve(&dst);

            let mut context = tera::Context::new();
            context.insert(
                "page_title",
                &format!("{} | {}", config.base.title, meta.title),
            );
            context.insert("title", &meta.title);
            context.insert("content", &markdown.render(&body));
            context.insert("date", &date::display(meta.date));
            context.insert("permalink", &permalink);
            context.insert("articles", articles);

            let html = templates
                .render(TEMPLATE_NAME, &context)
                .map_err(|e| BuildError::TemplateRender(path.clone(), e))?;
            fs::write(&dst, html).map_err(|e| BuildError::Io(dst.clone(), e))?;

            changed.push(ChangedPage {
                title: meta.title,
                link: permalink,
                section: key.clone(),
            });
        }
    }

    Ok(changed)
}
