//! Command implementations and argument parsing for the karger CLI.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use karger_core::{EdgeSampling, KargerBuilder, KargerError, KargerErrorCode, MinCutSummary};
use karger_providers_text::{GraphFile, TextGraphError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::catalogue::Catalogue;
use super::prompt::Prompt;
use super::report::{render_summary, write_report};

/// Directory scanned by `list` and `interactive` when `--dir` is absent.
pub const DEFAULT_INPUT_DIR: &str = "test_cases";
/// Directory receiving reports when `--report-dir` is absent.
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "karger",
    about = "Estimate the minimum cut of a multigraph with Karger's contraction algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Estimate the minimum cut of one graph file.
    Run(RunCommand),
    /// List the graph files of a directory with their descriptions.
    List(ListCommand),
    /// Pick a file, trial count and report option through prompts.
    Interactive(InteractiveCommand),
}

/// Engine options shared by `run` and `interactive`.
#[derive(Debug, Args, Clone)]
pub struct EngineArgs {
    /// Seed for reproducible runs; OS entropy is used when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How vertex pairs are drawn for contraction.
    #[arg(long, value_enum, default_value_t = SamplingArg::VertexNeighbour)]
    pub sampling: SamplingArg,
}

/// Sampling strategies exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplingArg {
    /// Pick a vertex with edges, then one of its neighbours.
    VertexNeighbour,
    /// Pick one edge uniformly.
    UniformEdge,
}

impl From<SamplingArg> for EdgeSampling {
    fn from(value: SamplingArg) -> Self {
        match value {
            SamplingArg::VertexNeighbour => Self::VertexThenNeighbour,
            SamplingArg::UniformEdge => Self::UniformEdge,
        }
    }
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Adjacency-list graph file.
    pub path: PathBuf,

    /// Number of trials; defaults to C(n, 2) * ln(n) for n vertices.
    #[arg(long)]
    pub trials: Option<NonZeroUsize>,

    /// Engine options.
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Save a report after the run.
    #[arg(long)]
    pub report: bool,

    /// Directory receiving the report.
    #[arg(long, default_value = DEFAULT_REPORT_DIR)]
    pub report_dir: PathBuf,
}

/// Options accepted by the `list` command.
#[derive(Debug, Args, Clone)]
pub struct ListCommand {
    /// Directory holding graph files.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub dir: PathBuf,
}

/// Options accepted by the `interactive` command.
#[derive(Debug, Args, Clone)]
pub struct InteractiveCommand {
    /// Directory holding graph files.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub dir: PathBuf,

    /// Directory receiving the report.
    #[arg(long, default_value = DEFAULT_REPORT_DIR)]
    pub report_dir: PathBuf,

    /// Engine options.
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file could not be parsed.
    #[error(transparent)]
    Text(#[from] TextGraphError),
    /// The engine rejected the graph or configuration.
    #[error(transparent)]
    Core(#[from] KargerError),
    /// The input directory holds no files.
    #[error("no graph files found in `{dir}`")]
    EmptyDirectory {
        /// Directory that was scanned.
        dir: PathBuf,
    },
    /// Input ended before a valid menu choice was entered.
    #[error("input ended before a file between 1 and {choices} was chosen")]
    InvalidSelection {
        /// Number of files on offer.
        choices: usize,
    },
    /// Writing the report failed.
    #[error("failed to write report `{path}`: {source}")]
    Report {
        /// Report file path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading prompts or writing output failed.
    #[error("console i/o failed: {0}")]
    Console(#[from] io::Error),
}

impl CliError {
    /// Stable engine code for errors raised by the core library.
    #[must_use]
    pub fn code(&self) -> Option<KargerErrorCode> {
        match self {
            Self::Core(err) | Self::Text(TextGraphError::Graph { source: err, .. }) => {
                Some(err.code())
            }
            _ => None,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Graph file to load.
    pub path: PathBuf,
    /// Trial override; `None` uses the recommendation.
    pub trials: Option<NonZeroUsize>,
    /// RNG seed.
    pub seed: Option<u64>,
    /// Sampling strategy.
    pub sampling: EdgeSampling,
}

/// Outcome of a run against one graph file.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// File name of the graph.
    pub file_name: String,
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Batch result.
    pub summary: MinCutSummary,
}

/// Executes the CLI command represented by `cli`.
///
/// Prompts read from `input`; results and prompts go to `output`.
///
/// # Errors
/// Returns [`CliError`] when loading, running or reporting fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::{self, Cursor};
/// # use clap::Parser;
/// # use karger_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 2\n2 3\n3 4\n4 1\n")?;
/// let path = file.path().to_str().ok_or("temp path is not UTF-8")?;
/// let cli = Cli::try_parse_from(["karger", "run", path, "--trials", "20", "--seed", "1"])?;
/// let mut output = Vec::new();
/// run_cli(cli, &mut io::empty(), &mut output)?;
/// assert!(String::from_utf8(output)?.contains("has size 2"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli<R, W>(cli: Cli, input: &mut R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let span = Span::current();
    match cli.command {
        Command::Run(command) => {
            span.record("command", field::display("run"));
            run_command(command, output)
        }
        Command::List(command) => {
            span.record("command", field::display("list"));
            list_command(&command, output)
        }
        Command::Interactive(command) => {
            span.record("command", field::display("interactive"));
            interactive_command(command, input, output)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, output),
    fields(path = %command.path.display(), report = command.report),
)]
pub(super) fn run_command<W: Write>(command: RunCommand, output: &mut W) -> Result<(), CliError> {
    let RunCommand {
        path,
        trials,
        engine,
        report,
        report_dir,
    } = command;
    let config = RunConfig {
        path,
        trials,
        seed: engine.seed,
        sampling: engine.sampling.into(),
    };
    let file = open_graph(&config.path)?;
    let summary = execute(&file, &config, output)?;
    render_summary(&summary, &mut *output)?;
    if report {
        let saved = write_report(&report_dir, &summary)?;
        writeln!(output, "Report saved to: {}", saved.display())?;
    }
    Ok(())
}

#[instrument(
    name = "cli.list",
    err,
    skip(command, output),
    fields(dir = %command.dir.display()),
)]
pub(super) fn list_command<W: Write>(command: &ListCommand, output: &mut W) -> Result<(), CliError> {
    let catalogue = Catalogue::load(&command.dir)?;
    catalogue.render(output)?;
    Ok(())
}

#[instrument(
    name = "cli.interactive",
    err,
    skip(command, input, output),
    fields(dir = %command.dir.display()),
)]
pub(super) fn interactive_command<R, W>(
    command: InteractiveCommand,
    input: &mut R,
    output: &mut W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let catalogue = Catalogue::load(&command.dir)?;
    let mut prompt = Prompt::new(input, output);
    let entry = prompt.choose_file(&catalogue)?;
    let file = open_graph(entry.path())?;
    let trials = prompt.choose_trials(file.graph().vertex_count())?;
    let config = RunConfig {
        path: entry.path().to_path_buf(),
        trials,
        seed: command.engine.seed,
        sampling: command.engine.sampling.into(),
    };

    let summary = execute(&file, &config, prompt.output())?;
    render_summary(&summary, prompt.output())?;
    if prompt.confirm_report()? {
        let saved = write_report(&command.report_dir, &summary)?;
        writeln!(prompt.output(), "Report saved to: {}", saved.display())?;
    }
    Ok(())
}

/// Runs the engine configured by `config` against an already loaded file.
///
/// Announces the vertex and trial counts on `output` before the batch
/// starts.
///
/// # Errors
/// Returns [`CliError::Core`] when the graph has fewer than two vertices and
/// [`CliError::Console`] when `output` fails.
#[instrument(
    name = "cli.run_graph",
    err,
    skip(file, config, output),
    fields(file = file.name(), seeded = config.seed.is_some(), trials = field::Empty),
)]
pub fn execute<W: Write>(
    file: &GraphFile,
    config: &RunConfig,
    output: &mut W,
) -> Result<RunSummary, CliError> {
    let mut builder = KargerBuilder::new()
        .with_trial_override(config.trials.map(NonZeroUsize::get))
        .with_sampling(config.sampling);
    if let Some(seed) = config.seed {
        builder = builder.with_seed(seed);
    }
    let karger = builder.build()?;

    let graph = file.graph();
    let vertices = graph.vertex_count();
    let trials = karger.trial_count_for(graph);
    Span::current().record("trials", trials);
    writeln!(output, "|V| = {vertices}; {trials} trials will run.")?;
    output.flush()?;

    let summary = karger.run(graph)?;
    info!(
        file = file.name(),
        min_cut = summary.min_cut(),
        occurrences = summary.occurrences(),
        "run completed"
    );
    Ok(RunSummary {
        file_name: file.name().to_owned(),
        vertices,
        summary,
    })
}

fn open_graph(path: &Path) -> Result<GraphFile, CliError> {
    GraphFile::try_from_path(path).map_err(|err| match err {
        TextGraphError::Io(source) => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => CliError::Text(other),
    })
}
