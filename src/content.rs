//! Documentation content discovery and frontmatter parsing.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File extensions treated as documentation pages.
const DOC_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Frontmatter fence line.
const FENCE: &str = "---";

/// Per document metadata parsed from the YAML block at the top of a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    pub section: String,
    #[serde(default)]
    pub hidden: bool,
    /// Sort key, any number; fractions slot pages between neighbours
    #[serde(default)]
    pub priority: Option<f64>,
}

/// One documentation file as returned by [`load_docs`].
#[derive(Debug, Clone, PartialEq)]
pub struct DocNode {
    /// Content relative path with `/` separators, unique per node
    pub id: String,
    pub file_absolute_path: PathBuf,
    pub relative_path: PathBuf,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl DocNode {
    /// Site relative URL of the page generated for this node.
    ///
    /// Strips the file extension and places the page under `docs/`, so
    /// `concepts/auth.mdx` becomes `docs/concepts/auth.html`.
    pub fn page_path(&self) -> String {
        page_path_for(&self.relative_path)
    }
}

/// Computes the generated page URL for a content relative file path.
pub fn page_path_for(relative: &Path) -> String {
    let stem = relative.with_extension("");
    let parts: Vec<String> = stem
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("docs/{}.html", parts.join("/"))
}

/// Loads every documentation page under a content directory.
///
/// Walks the directory recursively, parses frontmatter from each `.mdx` or
/// `.md` file and returns nodes sorted ascending by `priority`. Nodes without
/// a priority sort after all prioritised nodes. Ties keep path order.
///
/// Files without a frontmatter block are skipped with a warning.
///
/// # Errors
///
/// Returns error if the directory cannot be walked, a file cannot be read,
/// a frontmatter block is not valid YAML for [`Frontmatter`], or two files
/// would be generated to the same page (`auth.md` next to `auth.mdx`).
pub fn load_docs(content_dir: impl AsRef<Path>) -> Result<Vec<DocNode>> {
    let root = content_dir.as_ref();
    if !root.is_dir() {
        bail!("Content directory does not exist: {}", root.display());
    }

    let mut nodes = Vec::new();
    let mut page_owners: HashMap<String, PathBuf> = HashMap::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk content directory {}", root.display()))?;
        if !entry.file_type().is_file() || !is_doc_file(entry.path()) {
            continue;
        }

        let path = entry.path();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let Some((frontmatter, body)) = split_frontmatter(&source) else {
            warn!("Skipping {}: no frontmatter block", path.display());
            continue;
        };

        let frontmatter: Frontmatter = serde_yaml::from_str(frontmatter)
            .with_context(|| format!("Invalid frontmatter in {}", path.display()))?;

        let relative_path = path
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", path.display(), root.display()))?
            .to_path_buf();
        let id = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let page_path = page_path_for(&relative_path);
        if let Some(owner) = page_owners.get(&page_path) {
            bail!(
                "{} and {} both generate {}",
                owner.display(),
                relative_path.display(),
                page_path
            );
        }
        page_owners.insert(page_path, relative_path.clone());

        debug!(id = %id, section = %frontmatter.section, "Loaded doc");

        nodes.push(DocNode {
            id,
            file_absolute_path: path.canonicalize().unwrap_or_else(|_| path.to_path_buf()),
            relative_path,
            frontmatter,
            body: body.to_string(),
        });
    }

    // Stable sort keeps the path order of the walk for equal priorities
    nodes.sort_by(|a, b| compare_priority(a.frontmatter.priority, b.frontmatter.priority));

    Ok(nodes)
}

/// Orders priorities ascending, missing priorities last.
fn compare_priority(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn is_doc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Splits a source file into its YAML frontmatter and body.
///
/// Returns `None` when the file does not open with a `---` fence or the
/// fence is never closed.
pub fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            let yaml = &source[yaml_start..offset];
            let body = &source[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Should create parent dirs");
        }
        fs::write(path, content).expect("Should write fixture");
    }

    #[test]
    fn test_split_frontmatter_basic() {
        // Arrange
        let source = "---\ntitle: Intro\nsection: Guides\n---\n# Body\n";

        // Act
        let (yaml, body) = split_frontmatter(source).expect("Should split");

        // Assert
        assert_eq!(yaml, "title: Intro\nsection: Guides\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_frontmatter_missing_fence() {
        assert!(split_frontmatter("# Just markdown\n").is_none());
        assert!(split_frontmatter("---\ntitle: Unclosed\n").is_none());
        assert!(split_frontmatter("").is_none());
    }

    #[test]
    fn test_split_frontmatter_crlf_and_bom() {
        // Arrange
        let source = "\u{feff}---\r\ntitle: A\r\n---\r\nbody";

        // Act
        let (yaml, body) = split_frontmatter(source).expect("Should split");

        // Assert
        assert_eq!(yaml, "title: A\r\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_frontmatter_defaults() {
        // Arrange & Act
        let fm: Frontmatter =
            serde_yaml::from_str("title: Auth\nsection: Guides\n").expect("Should parse");

        // Assert
        assert!(!fm.hidden, "hidden should default to false");
        assert_eq!(fm.priority, None);
    }

    #[test]
    fn test_page_path_for_nested() {
        assert_eq!(
            page_path_for(Path::new("concepts/auth.mdx")),
            "docs/concepts/auth.html"
        );
        assert_eq!(page_path_for(Path::new("intro.md")), "docs/intro.html");
    }

    #[test]
    fn test_load_docs_sorted_by_priority() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        write(
            dir.path(),
            "b.mdx",
            "---\ntitle: B\nsection: Guides\npriority: 2\n---\nB",
        );
        write(
            dir.path(),
            "a.mdx",
            "---\ntitle: A\nsection: Guides\npriority: 5\n---\nA",
        );
        write(
            dir.path(),
            "nested/c.md",
            "---\ntitle: C\nsection: Features\npriority: 1\n---\nC",
        );
        write(dir.path(), "z.mdx", "---\ntitle: Z\nsection: Features\n---\nZ");

        // Act
        let nodes = load_docs(dir.path()).expect("Should load docs");

        // Assert
        let titles: Vec<&str> = nodes.iter().map(|n| n.frontmatter.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A", "Z"]);
        assert_eq!(nodes[0].id, "nested/c.md");
        assert_eq!(nodes[0].page_path(), "docs/nested/c.html");
    }

    #[test]
    fn test_load_docs_skips_non_docs_and_missing_frontmatter() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        write(dir.path(), "notes.txt", "---\ntitle: T\nsection: S\n---\n");
        write(dir.path(), "plain.mdx", "# No frontmatter");
        write(dir.path(), "ok.mdx", "---\ntitle: Ok\nsection: Guides\n---\n");

        // Act
        let nodes = load_docs(dir.path()).expect("Should load docs");

        // Assert
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].frontmatter.title, "Ok");
    }

    #[test]
    fn test_load_docs_invalid_frontmatter() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        write(dir.path(), "bad.mdx", "---\nsection: Guides\n---\n");

        // Act
        let result = load_docs(dir.path());

        // Assert
        let err = result.expect_err("Missing title should fail");
        assert!(format!("{:#}", err).contains("bad.mdx"));
    }

    #[test]
    fn test_load_docs_fractional_priority() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        write(dir.path(), "a.mdx", "---\ntitle: A\nsection: S\npriority: 2\n---\n");
        write(dir.path(), "b.mdx", "---\ntitle: B\nsection: S\npriority: 1.5\n---\n");
        write(dir.path(), "c.mdx", "---\ntitle: C\nsection: S\npriority: 1\n---\n");

        // Act
        let nodes = load_docs(dir.path()).expect("Fractional priority should load");

        // Assert
        let titles: Vec<&str> = nodes.iter().map(|n| n.frontmatter.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
        assert_eq!(nodes[1].frontmatter.priority, Some(1.5));
    }

    #[test]
    fn test_load_docs_same_page_from_two_sources() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        write(dir.path(), "auth.md", "---\ntitle: Md\nsection: Guides\n---\nFROM_MD");
        write(dir.path(), "auth.mdx", "---\ntitle: Mdx\nsection: Guides\n---\nFROM_MDX");

        // Act
        let result = load_docs(dir.path());

        // Assert
        let message = format!("{:#}", result.expect_err("Colliding pages should fail"));
        assert!(message.contains("auth.md "), "Should name the first file: {}", message);
        assert!(message.contains("auth.mdx"), "Should name the second file: {}", message);
        assert!(message.contains("docs/auth.html"));
    }

    #[test]
    fn test_compare_priority_missing_last() {
        assert_eq!(compare_priority(Some(3.0), None), Ordering::Less);
        assert_eq!(compare_priority(None, Some(-1.0)), Ordering::Greater);
        assert_eq!(compare_priority(Some(0.5), Some(0.25)), Ordering::Greater);
        assert_eq!(compare_priority(None, None), Ordering::Equal);
    }

    #[test]
    fn test_load_docs_missing_directory() {
        // Act
        let result = load_docs("/nonexistent/content/docs");

        // Assert
        assert!(result.is_err(), "Missing directory should be an error");
    }
}
