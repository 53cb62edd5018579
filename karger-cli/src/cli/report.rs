//! Result rendering and saved reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use super::commands::{CliError, RunSummary};

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::time::Duration;
/// # use karger_cli::cli::{RunSummary, render_summary};
/// # use karger_core::MinCutSummary;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = RunSummary {
///     file_name: "square.txt".into(),
///     vertices: 4,
///     summary: MinCutSummary::new(2, 50, 50, Duration::from_millis(3)),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("square.txt has size 2, occurring 50 times in 50 trials."));
/// assert!(text.contains("0.00300 seconds"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    let result = &summary.summary;
    writeln!(
        writer,
        "\nThe minimum cut found for {} has size {}, occurring {} times in {} trials.",
        summary.file_name,
        result.min_cut(),
        result.occurrences(),
        result.trials()
    )?;
    writeln!(
        writer,
        "Total execution time: {:.5} seconds.",
        result.elapsed().as_secs_f64()
    )
}

/// Report location for the graph file `file_name` inside `report_dir`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use karger_cli::cli::report_path;
///
/// assert_eq!(
///     report_path(Path::new("reports"), "square.txt"),
///     Path::new("reports/square_report.txt"),
/// );
/// ```
#[must_use]
pub fn report_path(report_dir: &Path, file_name: &str) -> PathBuf {
    let stem = Path::new(file_name)
        .file_stem()
        .map_or_else(|| file_name.into(), |stem| stem.to_string_lossy());
    report_dir.join(format!("{stem}_report.txt"))
}

/// Writes the report for `summary` into `report_dir`, creating the directory
/// when needed, and returns the report path.
///
/// # Errors
/// Returns [`CliError::Report`] when the directory or file cannot be written.
#[instrument(
    name = "cli.write_report",
    err,
    skip(report_dir, summary),
    fields(dir = %report_dir.display(), file = summary.file_name.as_str()),
)]
pub fn write_report(report_dir: &Path, summary: &RunSummary) -> Result<PathBuf, CliError> {
    let path = report_path(report_dir, &summary.file_name);
    let failed = |source| CliError::Report {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(report_dir).map_err(failed)?;
    let file = File::create(&path).map_err(failed)?;
    let mut writer = BufWriter::new(file);
    render_report(summary, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(failed)?;
    info!(path = %path.display(), "report saved");
    Ok(path)
}

fn render_report(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    let result = &summary.summary;
    writeln!(writer, "Minimum cut found for {}:", summary.file_name)?;
    writeln!(writer, "Cut size: {}", result.min_cut())?;
    writeln!(
        writer,
        "Occurred {} times in {} trials.",
        result.occurrences(),
        result.trials()
    )?;
    writeln!(
        writer,
        "Total execution time: {:.5} seconds.",
        result.elapsed().as_secs_f64()
    )
}
