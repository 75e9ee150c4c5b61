//! CLI for urlqr.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlqr_core::config;

use commands::{run_generate, run_interactive};
use prompt::TerminalPrompter;

/// Top-level CLI. Without a subcommand, urlqr prompts for its input.
#[derive(Debug, Parser)]
#[command(name = "urlqr")]
#[command(about = "Turn a URL, or a CSV file of URLs, into QR-code PNG files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ask for the URL or CSV path and the output directory on the terminal.
    Interactive {
        /// Keep processing a CSV batch after a row fails.
        #[arg(long)]
        keep_going: bool,
    },

    /// Generate QR codes without prompting.
    Generate {
        /// A URL (anything containing "://") or the path of an existing .csv file with a `url` column.
        input: String,

        /// Directory for the PNG files (defaults to `default_output_dir` from config, "qrcodes").
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Keep processing a CSV batch after a row fails.
        #[arg(long)]
        keep_going: bool,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Interactive { keep_going: false }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or_default() {
            CliCommand::Interactive { keep_going } => {
                run_interactive(&cfg, keep_going, &mut TerminalPrompter)?
            }
            CliCommand::Generate {
                input,
                output_dir,
                keep_going,
            } => run_generate(&cfg, &input, output_dir.as_deref(), keep_going)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
