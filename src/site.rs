//! Site build orchestration

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::write_assets;
use crate::config::Config;
use crate::content::{DocNode, load_docs};
use crate::pages::{guide, landing};
use crate::sections::{sections_from_docs, visible_guides};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub sections: usize,
    pub guides_rendered: usize,
    pub hidden_skipped: usize,
    pub index_path: PathBuf,
}

/// Builds the static site described by the configuration
///
/// Loads and groups the documentation, then writes assets, the landing page
/// at `index.html`, and one page per visible guide under `docs/`.
///
/// # Errors
///
/// Returns error if content loading, rendering, or any file write fails
pub fn build(config: &Config) -> Result<BuildReport> {
    let docs = load_docs(&config.content).context("Failed to load documentation")?;
    let sections = sections_from_docs(&docs);
    let context = config.execution_context();
    info!(docs = docs.len(), sections = sections.len(), "Loaded content");

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_assets(&assets_dir, context)?;

    let html = landing::generate(landing::LandingPageData {
        site_name: config.site_name(),
        tagline: config.tagline.as_deref(),
        sections: &sections,
        context,
    });
    let index_path = config.output.join("index.html");
    write_page(&index_path, &html.into_string())?;

    let nodes_by_id: HashMap<&str, &DocNode> =
        docs.iter().map(|node| (node.id.as_str(), node)).collect();

    let published: HashSet<String> = sections
        .iter()
        .flat_map(visible_guides)
        .map(|guide| guide.path.clone())
        .collect();

    let mut guides_rendered = 0;
    for section in &sections {
        for visible in visible_guides(section) {
            let Some(node) = nodes_by_id.get(visible.id.as_str()) else {
                continue;
            };

            let html = guide::generate(guide::GuidePageData {
                site_name: config.site_name(),
                node,
                sections: &sections,
                published: &published,
                context,
            })?;
            write_page(&config.output.join(&visible.path), &html.into_string())?;
            guides_rendered += 1;
        }
    }

    let hidden_skipped = docs.len() - guides_rendered;
    debug!(hidden_skipped, "Skipped hidden guides");

    Ok(BuildReport {
        sections: sections.len(),
        guides_rendered,
        hidden_skipped,
        index_path,
    })
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write page {}", path.display()))?;
    info!("Generated: {}", path.display());
    Ok(())
}
