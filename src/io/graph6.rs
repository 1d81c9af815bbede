//! # Graph6
//!
//! graph6 packs the upper triangle of the adjacency matrix into printable ASCII:
//! - the first byte is `n + 63`,
//! - the bits `x(0,1), x(0,2), x(1,2), x(0,3), x(1,3), x(2,3), ...` (column by column)
//!   follow in groups of six, each group stored as one byte `group + 63`, most significant bit first.
//!
//! The last group is padded with zero bits. Only `n <= MAX_NODES` is supported, so the
//! multi-byte size headers of the full format never occur.
//!
//! ```
//! use g6graphs::prelude::*;
//!
//! // n = 3 and bits `110000` for the pairs (0,1), (0,2), (1,2)
//! let graph: Graph = "Bo".parse().unwrap();
//! assert_eq!(graph.number_of_vertices(), 3);
//! assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge(0, 1), Edge(0, 2)]);
//! assert_eq!(graph.to_graph6(), "Bo");
//! ```

use std::{
    fmt::Display,
    io::{BufRead, ErrorKind, Lines, Write},
    marker::PhantomData,
    str::FromStr,
};

use smallvec::SmallVec;
use tracing::debug;

use super::*;

/// Optional header line written by nauty's tools in front of graph6 data
pub const GRAPH6_HEADER: &str = ">>graph6<<";

/// Offset added to every 6-bit group (and to the vertex count)
const BIAS: u8 = 63;

/// Largest byte allowed in graph6 data
const MAX_BYTE: u8 = 126;

/// Number of bits encoded per data byte
const BITS_PER_BYTE: usize = 6;

/// Number of data bytes required to encode a graph with `n` vertices
pub const fn graph6_data_len(n: NumNodes) -> usize {
    let n = n as usize;
    let pairs = n * n.saturating_sub(1) / 2;
    pairs.div_ceil(BITS_PER_BYTE)
}

/// Consumes the data bytes of a graph6 string one bit at a time, most significant bit first
struct BitReader<'a> {
    data: &'a [u8],
    /// Offset of `data` within the full input, used for error positions
    offset: usize,
    /// Number of bytes consumed so far
    consumed: usize,
    /// Current 6-bit group
    group: u8,
    /// Number of unread bits in `group`
    remaining: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            offset,
            consumed: 0,
            group: 0,
            remaining: 0,
        }
    }

    /// Returns the next bit; fetches the next byte once the current group is exhausted
    fn next_bit(&mut self) -> DecodeResult<bool> {
        if self.remaining == 0 {
            let position = self.offset + self.consumed;
            let byte = *self.data.get(self.consumed).ok_or(DecodeError::Truncated {
                expected: self.consumed + 1,
                found: self.data.len(),
            })?;
            self.group = decode_byte(byte, position)?;
            self.consumed += 1;
            self.remaining = BITS_PER_BYTE;
        }

        self.remaining -= 1;
        Ok((self.group >> self.remaining) & 1 == 1)
    }

    /// Returns *true* if all bits left in the current group are zero
    fn padding_is_zero(&self) -> bool {
        self.group & ((1 << self.remaining) - 1) == 0
    }
}

/// Maps a graph6 byte to its 6-bit value
fn decode_byte(byte: u8, position: usize) -> DecodeResult<u8> {
    if (BIAS..=MAX_BYTE).contains(&byte) {
        Ok(byte - BIAS)
    } else {
        Err(DecodeError::InvalidByte { position, byte })
    }
}

/// Decoder (and line-based reader) for graph6 data
#[derive(Debug, Clone, Copy)]
pub struct Graph6Reader {
    /// Accept (and skip) a leading `>>graph6<<`
    allow_header: bool,
    /// Reject non-zero padding bits in the last data byte
    strict_padding: bool,
}

impl Default for Graph6Reader {
    fn default() -> Self {
        Self {
            allow_header: true,
            strict_padding: false,
        }
    }
}

impl Graph6Reader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a leading `>>graph6<<` is accepted (default: *true*)
    pub fn allow_header(mut self, allow_header: bool) -> Self {
        self.allow_header = allow_header;
        self
    }

    /// Sets whether non-zero padding bits are rejected (default: *false*)
    pub fn strict_padding(mut self, strict_padding: bool) -> Self {
        self.strict_padding = strict_padding;
        self
    }

    /// Decodes a single graph6 string into its number of vertices and its edges.
    ///
    /// A single trailing line break is ignored. Nothing is returned unless the whole
    /// input is well-formed.
    pub fn decode_edges(
        &self,
        input: impl AsRef<[u8]>,
    ) -> DecodeResult<(NumNodes, SmallVec<[Edge; 32]>)> {
        let input = input.as_ref();
        let mut bytes = input
            .strip_suffix(b"\r\n")
            .or_else(|| input.strip_suffix(b"\n"))
            .unwrap_or(input);

        let mut offset = 0;
        if self.allow_header {
            if let Some(rest) = bytes.strip_prefix(GRAPH6_HEADER.as_bytes()) {
                bytes = rest;
                offset = GRAPH6_HEADER.len();
            }
        }

        let (&first, data) = bytes.split_first().ok_or(DecodeError::Empty)?;
        let n = decode_byte(first, offset)? as NumNodes;
        if n > MAX_NODES {
            return Err(DecodeError::TooManyVertices(n));
        }

        let expected = graph6_data_len(n);
        if data.len() < expected {
            return Err(DecodeError::Truncated {
                expected,
                found: data.len(),
            });
        }
        if data.len() > expected {
            return Err(DecodeError::TrailingData {
                position: offset + 1 + expected,
            });
        }

        let mut bits = BitReader::new(data, offset + 1);
        let mut edges = SmallVec::new();
        for v in 1..n {
            for u in 0..v {
                if bits.next_bit()? {
                    edges.push(Edge(u, v));
                }
            }
        }
        debug_assert_eq!(bits.consumed, expected);

        if self.strict_padding && !bits.padding_is_zero() {
            return Err(DecodeError::NonZeroPadding);
        }

        debug!(n, m = edges.len(), "decoded graph6");
        Ok((n, edges))
    }

    /// Decodes a single graph6 string into a graph
    pub fn decode<G: GraphFromScratch>(&self, input: impl AsRef<[u8]>) -> crate::Result<G> {
        let (n, edges) = self.decode_edges(input)?;
        G::try_from_edges(n, edges)
    }

    /// Returns an iterator decoding one graph per non-empty line of `reader`
    pub fn lines<G, R>(&self, reader: R) -> Graph6Lines<G, R>
    where
        G: GraphFromScratch,
        R: BufRead,
    {
        Graph6Lines {
            lines: reader.lines(),
            format: *self,
            _graph: PhantomData,
        }
    }
}

impl<G: GraphFromScratch> GraphReader<G> for Graph6Reader {
    /// Reads the graph on the first non-empty line of `reader`
    fn try_read_graph<R: BufRead>(&self, reader: R) -> std::io::Result<G> {
        self.lines(reader)
            .next()
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "No graph6 line found"))?
    }
}

/// Iterator over the graphs of a graph6 file, one per non-empty line
pub struct Graph6Lines<G, R> {
    lines: Lines<R>,
    format: Graph6Reader,
    _graph: PhantomData<G>,
}

impl<G: GraphFromScratch, R: BufRead> Iterator for Graph6Lines<G, R> {
    type Item = std::io::Result<G>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            return Some(self.format.decode(line).map_err(std::io::Error::from));
        }
    }
}

/// Encoder for graph6 data
#[derive(Debug, Clone, Copy, Default)]
pub struct Graph6Writer {
    /// Prefix the output with `>>graph6<<`
    header: bool,
}

impl Graph6Writer {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `>>graph6<<` is written in front of the graph (default: *false*)
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Encodes `graph` as a graph6 string (without line break).
    ///
    /// Present vertices are relabelled to `0..k` in ascending order, so a graph whose
    /// vertices are exactly `0..k` is encoded verbatim while gaps left by deleted
    /// vertices are closed.
    pub fn encode<G: AdjacencyList>(&self, graph: &G) -> String {
        let mut labels = [0 as Node; MAX_NODES as usize];
        let mut n: NumNodes = 0;
        for u in graph.vertices() {
            labels[u as usize] = n;
            n += 1;
        }

        // at most 120 pairs
        let mut bits: u128 = 0;
        for Edge(u, v) in graph.edges() {
            let index = Edge(labels[u as usize], labels[v as usize]).graph6_index();
            bits |= 1 << index;
        }

        let num_bits = (n as usize) * (n as usize).saturating_sub(1) / 2;
        let mut out = String::with_capacity(GRAPH6_HEADER.len() + 1 + graph6_data_len(n));
        if self.header {
            out.push_str(GRAPH6_HEADER);
        }
        out.push((BIAS + n as u8) as char);

        for chunk in 0..graph6_data_len(n) {
            let mut group = 0u8;
            for j in 0..BITS_PER_BYTE {
                let index = chunk * BITS_PER_BYTE + j;
                if index < num_bits && (bits >> index) & 1 == 1 {
                    group |= 1 << (BITS_PER_BYTE - 1 - j);
                }
            }
            out.push((BIAS + group) as char);
        }

        debug!(n, m = graph.edges().count(), "encoded graph6");
        out
    }
}

impl<G: AdjacencyList> GraphWriter<G> for Graph6Writer {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.encode(graph))
    }
}

/// Shorthand for decoding graph6 with default settings
pub trait Graph6Read: Sized {
    /// Decodes a single graph6 string
    fn from_graph6(input: impl AsRef<[u8]>) -> crate::Result<Self>;
}

impl<G: GraphFromScratch> Graph6Read for G {
    fn from_graph6(input: impl AsRef<[u8]>) -> crate::Result<Self> {
        Graph6Reader::default().decode(input)
    }
}

/// Shorthand for encoding graph6 with default settings
pub trait Graph6Write {
    /// Encodes the graph as graph6 string (without line break)
    fn to_graph6(&self) -> String;

    /// Writes the graph as a graph6 line
    fn try_write_graph6<W: Write>(&self, writer: W) -> std::io::Result<()>;
}

impl<G: AdjacencyList> Graph6Write for G {
    fn to_graph6(&self) -> String {
        Graph6Writer::default().encode(self)
    }

    fn try_write_graph6<W: Write>(&self, writer: W) -> std::io::Result<()> {
        Graph6Writer::default().try_write_graph(self, writer)
    }
}

impl<Nbs: Neighborhood> FromStr for SimpleGraph<Nbs> {
    type Err = GraphError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_graph6(s)
    }
}

impl<Nbs: Neighborhood> Display for SimpleGraph<Nbs> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_graph6())
    }
}
