/*!
# IO

Utilities for reading and writing graphs from and to text formats.

## Formats

- **Graph6**: the compact printable-ASCII format of [nauty](https://pallini.di.uniroma1.it/),
  one graph per line. Supported for reading and writing.
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).
  Supported for writing only.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod dot;
pub mod graph6;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dot::*;
pub use graph6::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// nauty's graph6 format
    Graph6,
    /// DOT language of GraphViz
    Dot,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "graph6" | "g6" => Ok(FileFormat::Graph6),
            "dot" => Ok(FileFormat::Dot),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format is unsupported for reading
    /// or if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: GraphFromScratch,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        raise_error_unless!(
            format == FileFormat::Graph6,
            ErrorKind::InvalidInput,
            format!("{format:?} does not support GraphRead")
        );
        Graph6Reader::default().try_read_graph(reader)
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyList,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Graph6 => Graph6Writer::default().try_write_graph(self, writer),
            FileFormat::Dot => DotWriter::default().try_write_graph(self, writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_format_from_str() {
        assert_eq!("graph6".parse::<FileFormat>().unwrap(), FileFormat::Graph6);
        assert_eq!("G6".parse::<FileFormat>().unwrap(), FileFormat::Graph6);
        assert_eq!("DOT".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!(
            "metis".parse::<FileFormat>().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn dispatch() {
        let graph = Graph::try_from_reader("Bw\n".as_bytes(), FileFormat::Graph6).unwrap();
        assert_eq!(graph.number_of_edges(), 3);

        let err = Graph::try_from_reader("graph {}".as_bytes(), FileFormat::Dot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::Graph6)
            .unwrap();
        assert_eq!(buffer, b"Bw\n");
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("g6graphs-io-{}.g6", std::process::id()));

        let graph = Graph::try_from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        graph.try_write_to_file(&path, FileFormat::Graph6).unwrap();

        let read = Graph::try_from_file(&path, FileFormat::Graph6).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, graph);
    }

    #[test]
    fn reader_writer_file_helpers() {
        let path = std::env::temp_dir().join(format!("g6graphs-rw-{}.g6", std::process::id()));

        let graph = Graph::from_graph6("C~").unwrap();
        Graph6Writer::new()
            .with_header(true)
            .try_write_graph_file(&graph, &path)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">>graph6<<C~\n");

        let read: Graph = Graph6Reader::new().try_read_graph_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read, graph);

        let missing = Graph6Reader::new()
            .try_read_graph_file(&path)
            .map(|_: Graph| ())
            .unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::NotFound);
    }
}
