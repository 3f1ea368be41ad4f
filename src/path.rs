//! Path utilities for HTML generation

/// Calculates relative path depth for a generated page.
///
/// Determines how many `../` prefixes are needed to reach the site root
/// from a page at the given site relative path.
///
/// # Arguments
///
/// * `page_path`: Site relative page path with `/` separators
///
/// # Returns
///
/// Number of directory levels needed to traverse back to root
pub fn calculate_depth(page_path: &str) -> usize {
    page_path.trim_start_matches('/').matches('/').count()
}

/// Returns the `../` prefix that leads from a page back to the site root.
pub fn root_prefix(page_path: &str) -> String {
    "../".repeat(calculate_depth(page_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_level_page() {
        assert_eq!(calculate_depth("index.html"), 0);
        assert_eq!(root_prefix("index.html"), "");
    }

    #[test]
    fn test_docs_pages() {
        assert_eq!(calculate_depth("docs/intro.html"), 1);
        assert_eq!(calculate_depth("docs/concepts/auth.html"), 2);
        assert_eq!(calculate_depth("docs/a/b/c.html"), 3);
    }

    #[test]
    fn test_root_prefix_nested() {
        assert_eq!(root_prefix("docs/concepts/auth.html"), "../../");
        assert_eq!(root_prefix("/docs/intro.html"), "../");
    }
}
