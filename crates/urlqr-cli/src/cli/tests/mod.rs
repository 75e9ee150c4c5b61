//! CLI tests: argument parsing and the interactive flow.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command.unwrap_or_default()
}

mod parse;
