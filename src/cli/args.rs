use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "escape-eqs")]
#[command(version)]
#[command(about = "Escape raw line breaks inside preset equation strings")]
pub struct Args {
    /// Asset to rewrite in place (defaults to js/lib/butterchurn-presets.min.js)
    pub path: Option<PathBuf>,

    /// Dry run - report the count without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Create a backup file before writing
    #[arg(short = 'b', long)]
    pub backup: bool,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
