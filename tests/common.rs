//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories filled with
//! frontmatter annotated documentation pages.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary content directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes file under a directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes a documentation page with frontmatter.
///
/// # Arguments
///
/// * `root`: Content directory
/// * `path`: Content relative file path
/// * `title`: Frontmatter title
/// * `section`: Frontmatter section
/// * `priority`: Frontmatter priority
/// * `hidden`: Frontmatter hidden flag
/// * `body`: Markdown body
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_doc(
    root: &Path,
    path: &str,
    title: &str,
    section: &str,
    priority: i64,
    hidden: bool,
    body: &str,
) -> Result<()> {
    let content = format!(
        "---\ntitle: {}\nsection: {}\npriority: {}\nhidden: {}\n---\n{}",
        title, section, priority, hidden, body
    );
    write_file(root, path, &content)
}

/// Populates a content directory with a small documentation set.
///
/// Layout:
/// - Getting Started: Intro
/// - Main Concepts: Authentication, Secret (hidden)
/// - Guides: Checkout
/// - Features: Legacy (hidden, only entry)
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn write_sample_docs(root: &Path) -> Result<()> {
    write_doc(
        root,
        "getting-started/intro.mdx",
        "Intro",
        "Getting Started",
        1,
        false,
        "# Welcome\n\nStart with [authentication](../concepts/auth.mdx).\n",
    )?;
    write_doc(
        root,
        "concepts/auth.mdx",
        "Authentication",
        "Main Concepts",
        2,
        false,
        "## Tokens\n\n```json\n{\"access_token\": \"abc\"}\n```\n",
    )?;
    write_doc(
        root,
        "concepts/secret.mdx",
        "Secret",
        "Main Concepts",
        3,
        true,
        "Internal only.\n",
    )?;
    write_doc(
        root,
        "guides/checkout.mdx",
        "Checkout",
        "Guides",
        4,
        false,
        "Walk through [tokens](../concepts/auth.mdx#tokens).\n\nSee also the [internal notes](../concepts/secret.mdx).\n",
    )?;
    write_doc(
        root,
        "features/legacy.mdx",
        "Legacy",
        "Features",
        5,
        true,
        "Deprecated.\n",
    )?;
    Ok(())
}
