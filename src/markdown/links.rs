//! Link resolution between documentation pages.

use anyhow::{Result, bail};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

use crate::content::page_path_for;

/// Extensions of link targets that are documentation pages.
const DOC_LINK_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Resolves relative links between documentation sources.
///
/// Transforms links to other doc files (./orders.mdx, ../concepts/auth.md)
/// into relative URLs of the generated pages (orders.html,
/// ../concepts/auth.html) as seen from the page being rendered. Only pages
/// in the published set are linked; links to anything else stay as written.
pub struct LinkResolver<'p> {
    current_path: PathBuf,
    depth: usize,
    published: &'p HashSet<String>,
}

impl<'p> LinkResolver<'p> {
    /// Creates link resolver for the doc file being rendered.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Content relative path of the current doc file
    /// * `depth`: Directory depth of the generated page from site root
    /// * `published`: Site relative paths of every page the build writes
    pub fn new(
        current_path: impl AsRef<Path>,
        depth: usize,
        published: &'p HashSet<String>,
    ) -> Self {
        Self {
            current_path: current_path.as_ref().to_path_buf(),
            depth,
            published,
        }
    }

    /// Resolves link to a URL usable from the generated page.
    ///
    /// Handles different link types:
    /// - Absolute URLs (http://, https://, mailto:) remain unchanged
    /// - Anchor links (#section) and root links (/path) remain unchanged
    /// - Relative links to `.md`/`.mdx` files resolve to the generated page,
    ///   keeping any `#fragment`
    /// - Links to doc files without a generated page (hidden or missing)
    ///   remain unchanged and are reported with a warning
    /// - Other relative links remain unchanged
    ///
    /// # Errors
    ///
    /// Returns error if the link escapes the content root
    pub fn resolve(&self, link: &str) -> Result<String> {
        if link.contains("://") || link.starts_with("mailto:") {
            return Ok(link.to_string());
        }
        if link.starts_with('#') || link.starts_with('/') {
            return Ok(link.to_string());
        }

        let (target, fragment) = match link.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (link, None),
        };

        let is_doc = Path::new(target)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| DOC_LINK_EXTENSIONS.contains(&ext));
        if !is_doc {
            return Ok(link.to_string());
        }

        let current_dir = self.current_path.parent().unwrap_or_else(|| Path::new(""));
        let normalized = normalize_path(&current_dir.join(target))?;

        let page_path = page_path_for(&normalized);
        if !self.published.contains(&page_path) {
            warn!(
                "{}: link {} has no generated page",
                self.current_path.display(),
                link
            );
            return Ok(link.to_string());
        }

        let mut url = format!("{}{}", "../".repeat(self.depth), page_path);
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        Ok(url)
    }
}

/// Normalizes path by resolving .. and . components.
///
/// # Errors
///
/// Returns error if path attempts to escape the content root
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => components.push(c),
            Component::ParentDir => {
                if components.pop().is_none() {
                    bail!("Path escapes content root: {}", path.display());
                }
            }
            _ => {}
        }
    }

    Ok(components.iter().collect())
}
