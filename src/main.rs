use anyhow::Result;
use clap::Parser;
use gift_shop_cli::{cli::{Args, CliApp}, utils::Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    let level = if args.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🦀 Gift shop starting...");
    tracing::debug!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let app = CliApp::new(config);
    app.run(args).map_err(|e| {
        tracing::error!("Shop session failed: {:#}", e);
        e
    })?;

    tracing::info!("🦀 Gift shop closed");
    Ok(())
}
