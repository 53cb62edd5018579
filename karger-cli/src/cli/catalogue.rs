//! Graph files on offer in an input directory.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use karger_providers_text::{DEFAULT_DESCRIPTION, read_description};
use tracing::{Span, field, instrument, warn};

use super::commands::CliError;

/// One listed graph file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    name: String,
    path: PathBuf,
    description: String,
}

impl CatalogueEntry {
    /// File name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Description comment of the file.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Regular files of a directory sorted by name, with their descriptions.
#[derive(Debug, Clone)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// Scans `dir` for regular files.
    ///
    /// Files that are not UTF-8 text are listed with the default description.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when `dir` or a file in it cannot be read and
    /// [`CliError::EmptyDirectory`] when `dir` holds no files.
    #[instrument(
        name = "cli.catalogue",
        err,
        skip(dir),
        fields(dir = %dir.display(), files = field::Empty),
    )]
    pub fn load(dir: &Path) -> Result<Self, CliError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error(dir))? {
            let path = entry.map_err(io_error(dir))?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let description = describe(&path)?;
            entries.push(CatalogueEntry {
                name,
                path,
                description,
            });
        }
        if entries.is_empty() {
            return Err(CliError::EmptyDirectory {
                dir: dir.to_path_buf(),
            });
        }
        entries.sort_by(|left, right| left.name.cmp(&right.name));
        Span::current().record("files", entries.len());
        Ok(Self { entries })
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no file is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for the 1-based menu `choice`.
    #[must_use]
    pub fn get(&self, choice: usize) -> Option<&CatalogueEntry> {
        choice
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    /// Writes one `index: file - description` line per entry.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing fails.
    pub fn render(&self, mut writer: impl Write) -> io::Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(
                writer,
                "{}: {} - {}",
                index + 1,
                entry.name,
                entry.description
            )?;
        }
        Ok(())
    }
}

fn describe(path: &Path) -> Result<String, CliError> {
    let file = File::open(path).map_err(io_error(path))?;
    match read_description(BufReader::new(file)) {
        Ok(description) => Ok(description),
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            warn!(path = %path.display(), "file is not UTF-8 text; using default description");
            Ok(DEFAULT_DESCRIPTION.to_owned())
        }
        Err(source) => Err(io_error(path)(source)),
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}
