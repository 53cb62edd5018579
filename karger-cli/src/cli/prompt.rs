//! Line-based prompts used by the `interactive` command.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use karger_core::{TrialCount, parse_trial_override};
use tracing::{debug, warn};

use super::catalogue::{Catalogue, CatalogueEntry};
use super::commands::CliError;

/// Reads answers from `input` and writes questions to `output`.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use karger_cli::cli::Prompt;
///
/// let mut input = Cursor::new("\n");
/// let mut output = Vec::new();
/// let trials = Prompt::new(&mut input, &mut output).choose_trials(10)?;
/// assert_eq!(trials, None);
/// assert!(String::from_utf8_lossy(&output).contains("(103)"));
/// # Ok::<(), karger_cli::cli::CliError>(())
/// ```
pub struct Prompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R, W> Prompt<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    /// Wraps an input and output stream.
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    /// Output stream for messages outside the prompts.
    pub fn output(&mut self) -> &mut W {
        &mut *self.output
    }

    /// Lists `catalogue` and asks for a file until a valid number is given.
    ///
    /// # Errors
    /// Returns [`CliError::InvalidSelection`] when input ends first.
    pub fn choose_file<'c>(
        &mut self,
        catalogue: &'c Catalogue,
    ) -> Result<&'c CatalogueEntry, CliError> {
        writeln!(self.output, "Available files:\n")?;
        catalogue.render(&mut *self.output)?;
        loop {
            writeln!(self.output, "\nChoose a file number:")?;
            let Some(line) = self.read_line()? else {
                return Err(CliError::InvalidSelection {
                    choices: catalogue.len(),
                });
            };
            let Ok(choice) = line.trim().parse::<usize>() else {
                writeln!(self.output, "Invalid input. Enter a valid number.")?;
                continue;
            };
            match catalogue.get(choice) {
                Some(entry) => {
                    writeln!(self.output, "You chose: {}", entry.name())?;
                    debug!(choice, file = entry.name(), "file selected");
                    return Ok(entry);
                }
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Asks for a trial count; blank, missing or invalid answers keep the
    /// recommendation and yield `None`.
    ///
    /// # Errors
    /// Returns [`CliError::Console`] when reading or writing fails.
    pub fn choose_trials(&mut self, vertices: usize) -> Result<Option<NonZeroUsize>, CliError> {
        let recommended = TrialCount::Recommended.resolve(vertices);
        write!(
            self.output,
            "Press Enter to use the recommended number of trials ({recommended}), \
             or type another number: "
        )?;
        let answer = self.read_line()?.unwrap_or_default();
        match parse_trial_override(&answer) {
            Ok(trials) => Ok(trials),
            Err(err) => {
                warn!(error = %err, recommended, "invalid trial count; using recommendation");
                writeln!(
                    self.output,
                    "Invalid input. Using the recommended number of trials."
                )?;
                Ok(None)
            }
        }
    }

    /// Asks whether to save a report; `y` and `s` confirm.
    ///
    /// # Errors
    /// Returns [`CliError::Console`] when reading or writing fails.
    pub fn confirm_report(&mut self) -> Result<bool, CliError> {
        write!(self.output, "\nSave the report to a file? (y/n): ")?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "s"
        ))
    }

    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
