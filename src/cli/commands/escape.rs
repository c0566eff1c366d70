use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, instrument};

use crate::cli::args::OutputFormat;
use crate::core::escaper::LiteralNewlineEscaper;
use crate::io::file_operations::{create_backup, read_file_safe, write_file_safe};
use crate::report::Report;

/// Rewrites the asset at `path` and returns what happened.
///
/// The file is read completely before anything is written. The write happens
/// even when no field changed, unless `dry_run` is set.
#[instrument]
pub async fn run(path: &Path, dry_run: bool, backup: bool) -> Result<Report> {
    let source = read_file_safe(path).await?;

    let escaper = LiteralNewlineEscaper::new().context("Failed to build field pattern")?;
    let escaped = escaper.escape(&source);

    info!(
        "{} field values with raw line breaks in {}",
        escaped.replaced,
        path.display()
    );

    if dry_run {
        info!("DRY RUN: {} left untouched", path.display());
        return Ok(Report {
            path: path.to_path_buf(),
            blocks_replaced: escaped.replaced,
            written: false,
            backup: None,
        });
    }

    let backup = if backup {
        Some(create_backup(path).await?)
    } else {
        None
    };

    write_file_safe(path, &escaped.text).await?;

    Ok(Report {
        path: path.to_path_buf(),
        blocks_replaced: escaped.replaced,
        written: true,
        backup,
    })
}

pub async fn execute(path: &Path, dry_run: bool, backup: bool, format: OutputFormat) -> Result<()> {
    let report = run(path, dry_run, backup)
        .await
        .with_context(|| format!("Failed to escape {}", path.display()))?;

    match format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
