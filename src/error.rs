//! Error types for graph construction, decoding, and editing.

use thiserror::Error;

use crate::node::{MAX_NODES, Node, NumNodes};

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Result type for graph6 decoding.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors raised while decoding a graph6 string.
///
/// Decoding is all-or-nothing: if any of these is returned, no graph was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contained no bytes (after stripping an optional `>>graph6<<` header).
    #[error("graph6 input is empty")]
    Empty,

    /// A byte outside the printable range `63..=126`.
    #[error("invalid graph6 byte {byte:#04x} at position {position}")]
    InvalidByte { position: usize, byte: u8 },

    /// The header declares more vertices than a graph can hold.
    #[error("graph6 header declares {0} vertices, at most {} are supported", MAX_NODES)]
    TooManyVertices(NumNodes),

    /// Fewer data bytes than the header requires.
    #[error("graph6 input truncated: expected {expected} data bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    /// Bytes left over after the last required data byte.
    #[error("unexpected trailing data at position {position}")]
    TrailingData { position: usize },

    /// Non-zero padding bits in the final data byte (strict mode only).
    #[error("non-zero padding bits in final graph6 data byte")]
    NonZeroPadding,
}

/// Errors raised by graph construction and editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id outside `0..MAX_NODES`.
    #[error("vertex {node} is out of range (capacity is {})", MAX_NODES)]
    OutOfRange { node: Node },

    /// A graph with more vertices than supported was requested.
    #[error("cannot create a graph with {0} vertices, at most {} are supported", MAX_NODES)]
    TooManyVertices(NumNodes),

    /// An edge endpoint refers to an unoccupied vertex slot.
    #[error("vertex {node} is not present in the graph")]
    VertexNotPresent { node: Node },

    /// Self-loops are not allowed in simple graphs.
    #[error("self-loop at vertex {node} is not allowed")]
    SelfLoop { node: Node },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<GraphError> for std::io::Error {
    fn from(err: GraphError) -> Self {
        let kind = match err {
            GraphError::Decode(_) => std::io::ErrorKind::InvalidData,
            _ => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}

impl From<DecodeError> for std::io::Error {
    fn from(err: DecodeError) -> Self {
        GraphError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::OutOfRange { node: 20 }.to_string(),
            "vertex 20 is out of range (capacity is 16)"
        );
        assert_eq!(
            GraphError::from(DecodeError::Truncated {
                expected: 2,
                found: 1
            })
            .to_string(),
            "graph6 input truncated: expected 2 data bytes, found 1"
        );
        assert_eq!(
            DecodeError::InvalidByte {
                position: 3,
                byte: b' '
            }
            .to_string(),
            "invalid graph6 byte 0x20 at position 3"
        );
    }

    #[test]
    fn io_error_kinds() {
        let err: std::io::Error = DecodeError::Empty.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

        let err: std::io::Error = GraphError::SelfLoop { node: 1 }.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
