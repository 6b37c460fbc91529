//! # EdgeList
//!
//! The EdgeList-Format consists of `m` lines `u v` representing a directed edge
//! `Edge(u - 1, v - 1)`. The writer separates nodes by a single space; the reader accepts any
//! whitespace. There is no header; the number of edges equals the number of lines.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    path::Path,
};

use tracing::{debug, trace};

use super::*;
use crate::prelude::*;

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes all edges to the writer, one `u v` line per edge, and flushes it.
    ///
    /// # Errors
    /// Returns an error if writing or flushing fails.
    pub fn try_write_edges<W, I, E>(&self, edges: I, mut writer: W) -> Result<NumEdges>
    where
        W: Write,
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut written: NumEdges = 0;
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            writeln!(writer, "{} {}", to_external(u), to_external(v))?;
            written += 1;
        }

        writer.flush()?;
        trace!(edges = written, "edge list written");

        Ok(written)
    }

    /// Writes all edges to a file, creating or truncating it.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    pub fn try_write_edges_file<P, I, E>(&self, edges: I, path: P) -> Result<NumEdges>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let path = path.as_ref();
        debug!(path = %path.display(), "writing edge list");

        self.try_write_edges(edges, BufWriter::new(File::create(path)?))
    }
}

/// Trait for writing edges to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the edges to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the edges to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl EdgeListWrite for [Edge] {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::new().try_write_edges(self, writer).map(|_| ())
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        EdgeListWriter::new().try_write_edges_file(self, path).map(|_| ())
    }
}

/// A reader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// If set, every endpoint must lie in `1..=n`
    number_of_nodes: Option<NumNodes>,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
            number_of_nodes: None,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Rejects edges with endpoints outside of `1..=n`
    pub fn number_of_nodes(mut self, n: NumNodes) -> EdgeListReader {
        self.number_of_nodes = Some(n);
        self
    }

    /// Creates a lazy iterator over the edges of the reader
    pub fn edges<R: BufRead>(&self, reader: R) -> EdgeListEdgesReader<'_, R> {
        EdgeListEdgesReader {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier: &self.comment_identifier,
            number_of_nodes: self.number_of_nodes,
        }
    }

    /// Reads all edges from a reader in the order they appear.
    ///
    /// # Errors
    /// Returns an error if reading fails or a line is not a valid edge.
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<Vec<Edge>> {
        self.edges(reader).collect()
    }

    /// Reads all edges from a file in the order they appear.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or contains an invalid line.
    pub fn try_read_edges_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Edge>> {
        self.try_read_edges(BufReader::new(File::open(path)?))
    }
}

/// Trait for reading edges with default EdgeListReader settings.
pub trait EdgeListRead: Sized {
    /// Tries to read the edges from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the edges from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl EdgeListRead for Vec<Edge> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_edges(reader)
    }
}

/// Lazy EdgeList parser that consumes the reader
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// 1-based number of the last line read
    line_number: usize,
    /// Comment identifier
    comment_identifier: &'a str,
    /// Upper bound for (1-based) endpoints
    number_of_nodes: Option<NumNodes>,
}

impl<'a, R: BufRead> Iterator for EdgeListEdgesReader<'a, R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Returns the next non-empty, non-comment-line if it exists or propagate an error
    fn next_content_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next content line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_content_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: u64 = parse_next_value!(parts, "Source node");
        let dest: u64 = parse_next_value!(parts, "Target node");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Line {}: expected exactly two nodes.", self.line_number)
        );

        if let Some(n) = self.number_of_nodes {
            raise_error_unless!(
                (1..=n as u64).contains(&from) && (1..=n as u64).contains(&dest),
                ErrorKind::InvalidData,
                format!("Line {}: node out of range 1..={n}.", self.line_number)
            );
        }

        match (from_external(from), from_external(dest)) {
            (Some(u), Some(v)) => Ok(Some(Edge(u, v))),
            _ => Err(io_error!(
                ErrorKind::InvalidData,
                format!("Line {}: nodes are numbered from 1.", self.line_number)
            )),
        }
    }
}
