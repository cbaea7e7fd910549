//! Tests for build, batch, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_build() {
    match parse(&["cdsr", "build", r#"{"satellite":"CBERS4"}"#]) {
        CliCommand::Build { metadata } => assert_eq!(metadata, r#"{"satellite":"CBERS4"}"#),
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_stdin() {
    match parse(&["cdsr", "build", "-"]) {
        CliCommand::Build { metadata } => assert_eq!(metadata, "-"),
        _ => panic!("expected Build from stdin"),
    }
}

#[test]
fn cli_parse_batch() {
    match parse(&["cdsr", "batch", "paths.txt"]) {
        CliCommand::Batch { file } => assert_eq!(file, "paths.txt"),
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["cdsr", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_unknown_shell() {
    assert!(Cli::try_parse_from(["cdsr", "completions", "cmd"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["cdsr", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
