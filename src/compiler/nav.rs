//! Navigation index - first pass over the content tree.
//!
//! Walks the tree depth-first and builds the [`NavMap`]: one entry per
//! section (directory), each holding the page summaries of the files
//! directly inside it, in traversal order. The map is complete before
//! rendering starts; pages read it but never write it.

use crate::compiler::{front_matter, is_content_file, output_path, section_key, sorted_entries};
use crate::config::SiteConfig;
use crate::error::BuildError;
use crate::link::LinkResolver;
use crate::utils::date;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Lightweight navigation record for one page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub link: String,
    /// Zero-padded `YYYY/MM/DD`, lexicographically sortable.
    pub date: String,
}

/// Section key → page summaries in traversal order.
///
/// Every directory in the content tree has an entry; the root section
/// is keyed `""`.
pub type NavMap = BTreeMap<String, Vec<PageSummary>>;

/// Build the navigation index for the whole content tree.
///
/// Links are computed through the same [`output_path`] mapping the
/// render pass uses, so an indexed link always matches the page's
/// written location. A single malformed file fails the whole pass.
pub fn build_nav(config: &SiteConfig, resolver: &LinkResolver) -> Result<NavMap> {
    let mut nav = NavMap::new();
    nav.insert(String::new(), Vec::new()); // Root.

    walk(&config.build.contents, config, resolver, &mut nav)?;

    Ok(nav)
}

fn walk(
    dir: &Path,
    config: &SiteConfig,
    resolver: &LinkResolver,
    nav: &mut NavMap,
) -> Result<()> {
    let contents = &config.build.contents;
    let key = section_key(dir, contents);

    for path in sorted_entries(dir)? {
        if path.is_dir() {
            nav.entry(section_key(&path, contents)).or_default();
            walk(&path, config, resolver, nav)?;
        } else if is_content_file(&path) {
            let raw =
                fs::read_to_string(&path).map_err(|e| BuildError::Io(path.clone(), e))?;
            let (meta, _body) = front_matter::extract(&raw, &path)?;

            let dst = output_path(&path, contents, &config.build.output)?;

            // Summaries live under the parent directory's key, not the
            // file's own path.
            nav.entry(key.clone()).or_default().push(PageSummary {
                title: meta.title,
                link: resolver.resolve(&dst),
                date: date::nav_key(meta.date),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.contents = root.join("contents");
        config.build.output = root.join("public");
        config
    }

    fn write_page(path: &Path, title: &str, date: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            path,
            format!("---\ntitle: {title}\ndate: {date}\n---\n# {title}\n"),
        )
        .unwrap();
    }

    #[test]
    fn test_root_key_always_present() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("contents")).unwrap();
        let config = make_config(dir.path());
        let resolver = LinkResolver::from_config(&config);

        let nav = build_nav(&config, &resolver).unwrap();
        assert_eq!(nav.get(""), Some(&Vec::new()));
    }

    #[test]
    fn test_file_registered_under_parent_section() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let resolver = LinkResolver::from_config(&config);

        write_page(
            &config.build.contents.join("articles/2024/post.md"),
            "Post",
            "2024-01-15",
        );

        let nav = build_nav(&config, &resolver).unwrap();

        // Directory-only sections get (empty) entries
        assert_eq!(nav.get("articles"), Some(&Vec::new()));
        // The file summarizes under its parent's key
        let deep = nav.get("articles/2024").unwrap();
        assert_eq!(deep.len(), 1);
        assert_eq!(deep[0].title, "Post");
        assert_eq!(deep[0].date, "2024/01/15");
        assert!(deep[0].link.ends_with("/articles/2024/post.html"));
    }

    #[test]
    fn test_link_matches_render_output_path() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let resolver = LinkResolver::from_config(&config);

        write_page(
            &config.build.contents.join("articles/hello.md"),
            "Hello",
            "2023-06-15",
        );

        let nav = build_nav(&config, &resolver).unwrap();
        let summary = &nav.get("articles").unwrap()[0];

        let dst = output_path(
            &config.build.contents.join("articles/hello.md"),
            &config.build.contents,
            &config.build.output,
        )
        .unwrap();
        assert_eq!(summary.link, resolver.resolve(&dst));
    }

    #[test]
    fn test_traversal_order_within_section() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let resolver = LinkResolver::from_config(&config);

        write_page(&config.build.contents.join("b.md"), "B", "2023-01-01");
        write_page(&config.build.contents.join("a.md"), "A", "2024-01-01");
        write_page(&config.build.contents.join("c.md"), "C", "2022-01-01");

        let nav = build_nav(&config, &resolver).unwrap();
        let titles: Vec<_> = nav.get("").unwrap().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_date_fails_whole_pass() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let resolver = LinkResolver::from_config(&config);

        write_page(&config.build.contents.join("good.md"), "Good", "2024-01-01");
        fs::write(
            config.build.contents.join("bad.md"),
            "---\ntitle: No Date\n---\nbody",
        )
        .unwrap();

        let err = build_nav(&config, &resolver).unwrap_err();
        let err = err.downcast::<BuildError>().unwrap();
        assert!(matches!(err, BuildError::MalformedContent { .. }));
    }

    #[test]
    fn test_non_markdown_files_skipped() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let resolver = LinkResolver::from_config(&config);

        fs::create_dir_all(&config.build.contents).unwrap();
        fs::write(config.build.contents.join("notes.txt"), "not a page").unwrap();

        let nav = build_nav(&config, &resolver).unwrap();
        assert_eq!(nav.get(""), Some(&Vec::new()));
    }
}
