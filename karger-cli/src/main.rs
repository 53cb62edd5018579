//! CLI entry point for estimating minimum cuts with Karger's algorithm.
//!
//! Parses command-line arguments with clap, runs the selected command with
//! stdin as the prompt source and stdout as the result sink, and maps errors
//! to exit codes. An input directory without files is reported and treated
//! as success. Logging is initialised first so every step can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use karger_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field, warn};

/// Parse CLI arguments, execute the command and flush the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match run_cli(cli, &mut input, &mut writer) {
        Ok(()) => {}
        Err(CliError::EmptyDirectory { dir }) => {
            warn!(dir = %dir.display(), "no graph files to choose from");
            writeln!(writer, "No files found in `{}`.", dir.display())
                .context("failed to write output")?;
        }
        Err(err) => return Err(err).context("failed to execute command"),
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err.downcast_ref::<CliError>().and_then(CliError::code);
        let code_field = code.map(|code| field::display(code.as_str()));
        error!(error = %err, code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
