//! CSS and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

use crate::scroll::{ExecutionContext, SCRIPT_FILE};

const BASE: &str = include_str!("../assets/base.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");
const CARD: &str = include_str!("../assets/components/card.css");
const NAV: &str = include_str!("../assets/components/nav.css");

const LANDING_PAGE: &str = include_str!("../assets/page-landing.css");
const GUIDE_PAGE: &str = include_str!("../assets/page-guide.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

const SMOOTH_SCROLL: &str = include_str!("../assets/smooth-scroll.js");

/// Writes all bundled assets to the output assets directory
///
/// The scroll script is only written for browser builds, since headless
/// pages never reference it.
pub fn write_assets(assets_dir: &Path, context: ExecutionContext) -> Result<()> {
    write_bundled(assets_dir, "landing.css", &[BASE, FOOTER, CARD, LANDING_PAGE])?;
    write_bundled(assets_dir, "guide.css", &[BASE, FOOTER, NAV, GUIDE_PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    if context.has_document() {
        write_bundled(assets_dir, SCRIPT_FILE, &[SMOOTH_SCROLL])?;
    }
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    debug!("Wrote asset {}", name);
    Ok(())
}
