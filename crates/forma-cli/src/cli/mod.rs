use clap::{Parser, ValueEnum};
use forma_config::FormaConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `forma` binary.
#[derive(Debug, Parser)]
#[command(
    name = "forma",
    version,
    about = "Forma - schema inference and generic document access"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Local database file, overriding the configured database
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract global flags, filling the output format from configuration
    /// when `--format` is absent.
    ///
    /// # Errors
    ///
    /// Fails if the configured default format is not a known format.
    pub fn global_flags(&self, config: &FormaConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true).map_err(
                |error| anyhow::anyhow!("invalid general.default_format: {error}"),
            )?,
        };

        Ok(GlobalFlags {
            format,
            db: self.db.clone(),
        })
    }
}
