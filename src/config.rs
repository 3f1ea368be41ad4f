//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::scroll::ExecutionContext;

/// Site name used when none is given.
const DEFAULT_SITE_NAME: &str = "Documentation";

/// Command line configuration for Guidebook.
#[derive(Debug, Clone, Parser)]
#[command(name = "guidebook", version, about, long_about = None)]
pub struct Config {
    /// Directory containing .md/.mdx documentation pages
    #[arg(default_value = "content/docs")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in the hero banner and page titles
    #[arg(long)]
    pub name: Option<String>,

    /// Line shown under the site name in the hero banner
    #[arg(long)]
    pub tagline: Option<String>,

    /// Render pages without browser scripts
    #[arg(long)]
    pub headless: bool,

    /// Open the generated landing page in the default browser
    #[arg(long)]
    pub open: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content path does not exist or is not a directory,
    /// or if the log level is not a known level name.
    pub fn validate(&self) -> Result<()> {
        self.log_filter()?;

        if !self.content.exists() {
            bail!("Content path does not exist: {}", self.content.display());
        }
        if !self.content.is_dir() {
            bail!("Content path is not a directory: {}", self.content.display());
        }

        Ok(())
    }

    /// Parses `--log-level` into a level filter.
    ///
    /// # Errors
    ///
    /// Returns error for anything other than `off`, `error`, `warn`, `info`,
    /// `debug` or `trace`.
    pub fn log_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .with_context(|| format!("Invalid log level: {}", self.log_level))
    }

    /// Returns the configured site name or the default.
    pub fn site_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SITE_NAME)
    }

    /// Returns the execution context pages are rendered for.
    pub fn execution_context(&self) -> ExecutionContext {
        if self.headless {
            ExecutionContext::Headless
        } else {
            ExecutionContext::Browser
        }
    }
}
