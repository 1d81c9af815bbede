/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of the underlying
data structure.

The digest encodes:
- the mask of present vertices (two bytes, little endian), and
- a sorted list of normalized edges (one byte per endpoint),

before feeding them into a cryptographic hash function.

## Example
```
use g6graphs::{prelude::*, repr::digest::GraphDigest};

let mut graph = Graph::new(10);
graph.add_edge(4, 3).unwrap();
graph.add_edge(1, 2).unwrap();

assert_eq!(
    graph.digest_sha256(),
    "9b3f9d2784dc44fc82804e4e08297232c38cbc5b93ce67ebfbe5dc9568ea5240"
);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a graph.
///
/// Two graphs with the same vertex set and edge set yield the same digest,
/// regardless of the neighborhood representation or the order of insertion.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`
    /// and returns it as a hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph (64 hex characters).
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        let mask = self.vertices().fold(0u16, |mask, u| mask | node_bit(u));
        hasher.update(mask.to_le_bytes());

        // `edges` are normalized and sorted
        for Edge(u, v) in self.edges() {
            hasher.update([u as u8, v as u8]);
        }

        format!("{:x}", hasher.finalize())
    }
}
