use anyhow::Result;
use clap::Parser;
use escape_eqs::cli::args::Args;
use escape_eqs::cli::commands::escape;
use escape_eqs::config::default_asset_path;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.path.unwrap_or_else(default_asset_path);
    debug!("Asset path: {}", path.display());

    escape::execute(&path, args.dry_run, args.backup, args.format).await
}
