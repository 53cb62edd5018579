//! Command-line interface for estimating minimum cuts of graph files.
//!
//! `run` estimates the cut of one file, `list` shows the files of an input
//! directory with their descriptions and `interactive` walks through file
//! choice, trial count and report saving with prompts.

mod catalogue;
mod commands;
mod prompt;
mod report;

pub use catalogue::{Catalogue, CatalogueEntry};
pub use commands::{
    Cli, CliError, Command, DEFAULT_INPUT_DIR, DEFAULT_REPORT_DIR, EngineArgs,
    InteractiveCommand, ListCommand, RunCommand, RunConfig, RunSummary, SamplingArg, execute,
    run_cli,
};
pub use prompt::Prompt;
pub use report::{render_summary, report_path, write_report};

#[cfg(test)]
mod test_helpers;
