//! CLI for the CDSR archive path codec.

mod commands;

use anyhow::Result;
use cdsr_core::config::{self, CdsrConfig, OutputFormat};
use cdsr_core::PathDecoder;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_batch, run_build, run_completions, run_decode, run_man, run_names};

/// Top-level CLI for the CDSR archive path codec.
#[derive(Debug, Parser)]
#[command(name = "cdsr")]
#[command(about = "Decode CDSR archive paths and build collection/item names", long_about = None)]
pub struct Cli {
    /// Read configuration from FILE instead of ~/.config/cdsr/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode archive paths and print their metadata.
    Decode {
        /// Asset or directory paths under a TIFF root.
        #[arg(required = true)]
        paths: Vec<String>,
        /// Print one JSON object per path.
        #[arg(long)]
        json: bool,
    },

    /// Print `collection item` for asset paths.
    Names {
        /// Asset paths under a TIFF root.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Build names from a JSON metadata object.
    Build {
        /// JSON object, or `-` to read it from stdin.
        metadata: String,
    },

    /// Decode every path listed in a file (one per line, or a JSON array).
    Batch {
        /// Path to the list, or `-` for stdin.
        file: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page on stdout.
    Man,
}

fn load_config(path: Option<&PathBuf>) -> Result<CdsrConfig> {
    match path {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Generators need no configuration.
        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let decoder = PathDecoder::new(cfg.decoder_options());

        match cli.command {
            CliCommand::Decode { paths, json } => {
                let json = json || cfg.output == OutputFormat::Json;
                run_decode(&decoder, cfg.item_layout, &paths, json)?;
            }
            CliCommand::Names { paths } => run_names(&decoder, cfg.item_layout, &paths)?,
            CliCommand::Build { metadata } => run_build(&metadata, cfg.item_layout)?,
            CliCommand::Batch { file } => run_batch(&decoder, cfg.item_layout, &file)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
