use anyhow::{Context, Result};
use guidebook::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();
    let level = config.log_filter()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into())),
        )
        .init();

    config.validate().context("Invalid configuration")?;

    info!("Starting guidebook v{}", env!("CARGO_PKG_VERSION"));

    let report = guidebook::build(&config).context("Failed to build site")?;

    info!(
        sections = report.sections,
        guides = report.guides_rendered,
        hidden = report.hidden_skipped,
        "Site generated in {}",
        config.output.display()
    );

    if config.open
        && let Err(e) = open::that(&report.index_path)
    {
        warn!("Failed to open {}: {}", report.index_path.display(), e);
    }

    Ok(())
}
