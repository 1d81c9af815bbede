//! # Dot
//!
//! Writes graphs in the [GraphViz](https://graphviz.org/) Dot-Format for quick visual inspection.
//! Every present vertex gets its own statement so that isolated vertices are drawn as well.
//!
//! ```
//! use g6graphs::{prelude::*, io::DotWrite};
//!
//! let graph = Graph::from_graph6("Bo").unwrap();
//! let mut out = Vec::new();
//! graph.try_write_dot(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "graph {\nu0;u1;u2;\nu0--u1;u0--u2;\n}\n"
//! );
//! ```
use std::io::Write;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: false,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes are written 1-indexed
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "graph {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes one statement per node
    pub fn write_nodes<W, I>(&self, writer: &mut W, nodes: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            write!(writer, "{};", self.format_node(u))?;
        }
        writeln!(writer)
    }

    /// Writes an iterator of (undirected) edges
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        for Edge(u, v) in edges {
            write!(writer, "{}--{};", self.format_node(u), self.format_node(v))?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "}}")
    }
}

impl<G: AdjacencyList> GraphWriter<G> for DotWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, graph.vertices())?;
        self.write_edges(&mut writer, graph.edges())?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_dot(BufWriter::new(File::create(path)?))
    }
}

impl<G: AdjacencyList> DotWrite for G {
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<()> {
        DotWriter::default().try_write_graph(self, writer)
    }
}
