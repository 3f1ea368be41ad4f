//! End-to-end tests for the Guidebook binary.

mod common;

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Tests full binary execution generates valid output.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    common::write_sample_docs(content.path())?;
    let output = TempDir::new()?;

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_guidebook"))
        .arg(content.path())
        .arg("-o")
        .arg(output.path())
        .args(["--name", "E2E Docs", "--tagline", "End to end"])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");
    let html = fs::read_to_string(output.path().join("index.html"))?;
    assert!(html.contains("E2E Docs"));
    assert!(html.contains("End to end"));
    assert!(html.contains("Guidebook"));
    assert!(output.path().join("docs/concepts/auth.html").exists());

    Ok(())
}

/// Tests binary fails for a missing content directory.
#[test]
fn test_missing_content_e2e() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_guidebook"))
        .arg("/nonexistent/guidebook/content")
        .arg("-o")
        .arg(output.path())
        .status()?;

    // Assert
    assert!(!status.success(), "Missing content should fail");
    assert!(!output.path().join("index.html").exists());

    Ok(())
}
