//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary graph directories and drive commands
//! with scripted input. These helpers keep the test cases concise.

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) const SQUARE: &str = "# Description: four-cycle\n1 2\n2 3\n3 4\n4 1\n";
pub(super) const BRIDGED: &str =
    "# Descrição: dois triângulos\n1 2 3\n2 3\n3 4\n4 5 6\n5 6\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn parse(args: &[&str]) -> Cli {
    match Cli::try_parse_from(std::iter::once("karger").chain(args.iter().copied())) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments must parse: {err}"),
    }
}

/// Runs `cli` with `input` as the scripted answers and returns the output.
pub(super) fn run_with_input(cli: Cli, input: &str) -> (Result<(), CliError>, String) {
    let mut reader = Cursor::new(input.as_bytes());
    let mut output = Vec::new();
    let result = run_cli(cli, &mut reader, &mut output);
    (result, String::from_utf8_lossy(&output).into_owned())
}

pub(super) fn run_expecting_error(cli: Cli, input: &str, panic_msg: &str) -> CliError {
    match run_with_input(cli, input).0 {
        Ok(()) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
