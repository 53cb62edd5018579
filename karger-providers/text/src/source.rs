//! Adjacency-list parsing.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use karger_core::{Multigraph, VertexId};
use tracing::{debug, instrument};

use crate::{
    description::{DEFAULT_DESCRIPTION, description_marker},
    errors::TextGraphError,
};

/// A parsed graph file together with its name and description.
#[derive(Debug, Clone)]
pub struct GraphFile {
    name: String,
    graph: Multigraph,
    description: Option<String>,
}

impl GraphFile {
    /// Parses a graph and its description from `reader`.
    ///
    /// # Errors
    /// Returns [`TextGraphError::MalformedInput`] for non-integer data lines,
    /// [`TextGraphError::Graph`] for self-loops, both with the 1-based line
    /// number, and [`TextGraphError::Io`]
    /// when reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use karger_providers_text::GraphFile;
    ///
    /// let input = "# Description: a path\n1 2\n2 3\n";
    /// let file = GraphFile::try_from_reader("path.txt", Cursor::new(input))?;
    /// assert_eq!(file.graph().vertex_count(), 3);
    /// assert_eq!(file.graph().edge_count(), 2);
    /// assert_eq!(file.description(), "a path");
    /// # Ok::<(), karger_providers_text::TextGraphError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextGraphError> {
        let mut description = None;
        let graph = parse_lines(reader, |comment| {
            if description.is_none() {
                description = description_marker(comment).map(str::to_owned);
            }
        })?;
        Ok(Self {
            name: name.into(),
            graph,
            description,
        })
    }

    /// Opens and parses the file at `path`, naming it after its file name.
    ///
    /// # Errors
    /// Same as [`GraphFile::try_from_reader`], plus [`TextGraphError::Io`]
    /// when the file cannot be opened.
    #[instrument(
        name = "providers.text.load",
        err,
        skip(path),
        fields(path = %path.as_ref().display()),
    )]
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, TextGraphError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(|| "graph".to_owned(), |name| name.to_string_lossy().into_owned());
        let file = Self::try_from_reader(name, BufReader::new(File::open(path)?))?;
        debug!(
            vertices = file.graph.vertex_count(),
            edges = file.graph.edge_count(),
            "graph file parsed"
        );
        Ok(file)
    }

    /// File name used in listings and reports.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed graph.
    #[must_use]
    pub fn graph(&self) -> &Multigraph {
        &self.graph
    }

    /// Description comment, or [`DEFAULT_DESCRIPTION`].
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// Parses an adjacency list from `reader`, ignoring comments.
///
/// # Errors
/// See [`GraphFile::try_from_reader`].
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Multigraph, TextGraphError> {
    parse_lines(reader, |_| {})
}

fn parse_lines<R, F>(reader: R, mut on_comment: F) -> Result<Multigraph, TextGraphError>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut graph = Multigraph::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            on_comment(trimmed);
            continue;
        }
        let (source, neighbours) = parse_entry(trimmed).ok_or_else(|| {
            TextGraphError::MalformedInput {
                line: index + 1,
                content: Arc::from(trimmed),
            }
        })?;
        graph.add_vertex(source);
        for neighbour in neighbours {
            graph
                .add_edge(source, neighbour)
                .map_err(|source| TextGraphError::Graph {
                    line: index + 1,
                    source,
                })?;
        }
    }
    Ok(graph)
}

fn parse_entry(line: &str) -> Option<(VertexId, Vec<VertexId>)> {
    let ids = line
        .split_whitespace()
        .map(|token| token.parse::<i64>().ok().map(VertexId::new))
        .collect::<Option<Vec<_>>>()?;
    let (&source, neighbours) = ids.split_first()?;
    Some((source, neighbours.to_vec()))
}
