//! Tests for argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_no_subcommand_is_interactive() {
    match parse(&["urlqr"]) {
        CliCommand::Interactive { keep_going } => assert!(!keep_going),
        _ => panic!("expected Interactive"),
    }
}

#[test]
fn cli_parse_interactive_keep_going() {
    match parse(&["urlqr", "interactive", "--keep-going"]) {
        CliCommand::Interactive { keep_going } => assert!(keep_going),
        _ => panic!("expected Interactive with keep_going"),
    }
}

#[test]
fn cli_parse_generate_url() {
    match parse(&["urlqr", "generate", "https://example.com"]) {
        CliCommand::Generate {
            input,
            output_dir,
            keep_going,
        } => {
            assert_eq!(input, "https://example.com");
            assert!(output_dir.is_none());
            assert!(!keep_going);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_output_dir_short_and_long() {
    for flag in ["-o", "--output-dir"] {
        match parse(&["urlqr", "generate", "urls.csv", flag, "out/codes"]) {
            CliCommand::Generate {
                input, output_dir, ..
            } => {
                assert_eq!(input, "urls.csv");
                assert_eq!(output_dir.as_deref(), Some(Path::new("out/codes")));
            }
            _ => panic!("expected Generate with {}", flag),
        }
    }
}

#[test]
fn cli_parse_generate_keep_going() {
    match parse(&["urlqr", "generate", "urls.csv", "--keep-going"]) {
        CliCommand::Generate { keep_going, .. } => assert!(keep_going),
        _ => panic!("expected Generate with keep_going"),
    }
}

#[test]
fn cli_parse_generate_requires_input() {
    assert!(Cli::try_parse_from(["urlqr", "generate"]).is_err());
}
