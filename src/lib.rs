/*!
`g6graphs` is a small graph library for **simple** graphs with at most **16** vertices:
undirected, unweighted, without self-loops or multi-edges. Graphs are usually read from
nauty's [graph6](https://users.cecs.anu.edu.au/~bdm/data/formats.txt) format.

# Representation

A graph has 16 vertex *slots* numbered `0..16` (see [`MAX_NODES`]). Which slots are occupied is
tracked by a 16-bit mask ([`VertexSet`](crate::repr::VertexSet)); each slot owns a sorted,
duplicate-free neighborhood. Deleting a vertex frees its slot and removes it from every other
neighborhood; adding it again yields an isolated vertex.

For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Graphs always report edges
normalized (smaller endpoint first) and each edge exactly once.

See the [`repr`] module for the available representations:
- [`AdjListGraph`](crate::repr::AdjListGraph) (alias [`Graph`](crate::repr::Graph)): sorted adjacency lists,
- [`AdjMatrixGraph`](crate::repr::AdjMatrixGraph): adjacency-matrix rows.

# Errors

Every operation range-checks its vertex arguments and reports [`GraphError`] instead of clamping.
Editing operations are atomic: if they fail, the graph is unchanged. In particular:
- adding an edge requires both endpoints to be present and distinct; re-adding an edge is a no-op,
- deleting a missing edge is a no-op.

# Usage

```
use g6graphs::prelude::*;

let mut graph = Graph::from_graph6("Dhc").unwrap(); // the 5-cycle
assert_eq!(graph.degree_sequence(), vec![2, 2, 2, 2, 2]);

graph.delete_vertex(0).unwrap();
assert_eq!(graph.number_of_vertices(), 4);
assert_eq!(graph.number_of_edges(), 3);
assert!(!graph.is_edge(0, 1).unwrap());

graph.add_edge(1, 4).unwrap();
assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge(1, 2), Edge(1, 4), Edge(2, 3), Edge(3, 4)]);
```

In most use-cases, `use g6graphs::prelude::*;` suffices for your needs.
*/

pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `g6graphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits, all representations, and the graph6 shorthands.
pub mod prelude {
    pub use super::{
        edge::*,
        error::*,
        io::{Graph6Read, Graph6Write},
        node::*,
        ops::*,
        repr::*,
    };
}
