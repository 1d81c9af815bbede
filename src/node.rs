/*!
# Node Representation

Nodes are plain `u32` values in the range `0..MAX_NODES`.
A graph has a fixed number of vertex *slots*; a slot may be occupied or not, see
[`VertexSet`](crate::repr::VertexSet).
*/

use crate::error::{GraphError, Result};

/// Nodes can be any unsigned integer from `0` to `MAX_NODES - 1`
pub type Node = u32;

/// Number of nodes in a graph
pub type NumNodes = Node;

/// Fixed capacity of every graph: vertex slots are `0..MAX_NODES`
pub const MAX_NODES: NumNodes = 16;

/// Returns `u` as an index into per-slot storage or `GraphError::OutOfRange` if `u >= MAX_NODES`
#[inline]
pub fn node_index(u: Node) -> Result<usize> {
    if u < MAX_NODES {
        Ok(u as usize)
    } else {
        Err(GraphError::OutOfRange { node: u })
    }
}

/// Returns the bit in a slot mask that corresponds to `u`.
/// ** Panics if `u >= MAX_NODES` **
#[inline]
pub const fn node_bit(u: Node) -> u16 {
    assert!(u < MAX_NODES, "vertex out of range");
    1 << u
}

/// Iterator over the set bits of a `u16` slot mask in ascending order
#[derive(Debug, Clone, Copy)]
pub struct MaskIter(u16);

impl MaskIter {
    pub(crate) const fn new(mask: u16) -> Self {
        Self(mask)
    }
}

impl Iterator for MaskIter {
    type Item = Node;

    #[inline]
    fn next(&mut self) -> Option<Node> {
        if self.0 == 0 {
            return None;
        }

        let u = self.0.trailing_zeros();
        // clear the lowest set bit
        self.0 &= self.0 - 1;
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for MaskIter {}

impl DoubleEndedIterator for MaskIter {
    fn next_back(&mut self) -> Option<Node> {
        if self.0 == 0 {
            return None;
        }

        let u = 15 - self.0.leading_zeros();
        self.0 &= !node_bit(u);
        Some(u)
    }
}
