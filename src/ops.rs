use itertools::Itertools;
use smallvec::SmallVec;

use crate::*;

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphNodeOrder {
    /// Returns the number of (present) vertices of the graph
    fn number_of_vertices(&self) -> NumNodes;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns an iterator over all present vertices in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if vertex `u` is present.
    /// Fails with `GraphError::OutOfRange` if `u >= MAX_NODES`.
    fn has_vertex(&self, u: Node) -> Result<bool>;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// All vertex arguments are range-checked: a vertex `u >= MAX_NODES` yields
/// `GraphError::OutOfRange`. A vertex slot that is in range but not occupied
/// behaves like an isolated vertex.
///
/// Implementors only provide the unchecked `slot_*` accessors; everything else
/// is derived from them.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of slot `u` in ascending order.
    /// ** Panics if `u >= MAX_NODES` **
    fn slot_neighbors(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of slot `u`.
    /// ** Panics if `u >= MAX_NODES` **
    fn slot_degree(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the neighbors of `u` in ascending order.
    fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        node_index(u)?;
        Ok(self.slot_neighbors(u))
    }

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        node_index(u)?;
        Ok(self.slot_degree(u))
    }

    /// Returns the degrees of all present vertices in ascending vertex order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        // `vertices` only yields slots below `MAX_NODES`
        self.vertices().map(|u| self.slot_degree(u))
    }

    /// Returns the degrees of all present vertices sorted in descending order.
    /// The sequence has exactly one entry per vertex and sums up to twice the number of edges.
    fn degree_sequence(&self) -> Vec<NumNodes> {
        self.degrees().sorted_unstable_by(|a, b| b.cmp(a)).collect()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a distribution `(degree, number of vertices)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.slot_degree(u) > 0)
    }

    /// Returns an iterator over the edges incident to `u`.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> Result<impl Iterator<Item = Edge> + '_> {
        Ok(self
            .neighbors_of(u)?
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized()))
    }

    /// Returns an iterator over all edges in the graph.
    /// Each edge is reported exactly once in normalized form, in lexicographic order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.slot_neighbors(u)
                .map(move |v| Edge(u, v))
                .filter(Edge::is_normalized)
        })
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `{u, v}` exists in the graph.
    fn is_edge(&self, u: Node, v: Node) -> Result<bool>;

    /// Allows multiple edge-queries for a single node
    fn has_neighbors<const N: usize>(&self, u: Node, neighbors: [Node; N]) -> Result<[bool; N]> {
        let mut res = [false; N];
        for (r, v) in res.iter_mut().zip(neighbors) {
            *r = self.is_edge(u, v)?;
        }
        Ok(res)
    }

    /// Returns *true* if a self-loop `(u, u)` exists; never the case in a simple graph.
    fn has_self_loop(&self, u: Node) -> Result<bool> {
        self.is_edge(u, u)
    }
}

/// Trait for creating a new graph
pub trait GraphNew: Sized {
    /// Creates a graph with `n` isolated vertices `0..n`.
    /// Fails with `GraphError::TooManyVertices` if `n > MAX_NODES`.
    fn try_new(n: NumNodes) -> Result<Self>;

    /// Creates a graph with `n` isolated vertices `0..n`.
    /// ** Panics if `n > MAX_NODES` **
    fn new(n: NumNodes) -> Self {
        match Self::try_new(n) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a graph without any vertices
    fn empty() -> Self {
        Self::new(0)
    }
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing {
    /// Marks vertex `u` as present. Does not touch any adjacency.
    /// Returns *true* exactly if `u` was not present before.
    fn try_add_vertex(&mut self, u: Node) -> Result<bool>;

    /// Marks vertex `u` as present; idempotent.
    fn add_vertex(&mut self, u: Node) -> Result<()> {
        self.try_add_vertex(u).map(|_| ())
    }

    /// Removes vertex `u` together with all its incident edges.
    /// Returns *true* exactly if `u` was present before.
    fn try_delete_vertex(&mut self, u: Node) -> Result<bool>;

    /// Removes vertex `u` together with all its incident edges; no-op if `u` is absent.
    fn delete_vertex(&mut self, u: Node) -> Result<()> {
        self.try_delete_vertex(u).map(|_| ())
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was not present previously.
    ///
    /// Fails without modifying the graph if either endpoint is out of range
    /// (`OutOfRange`), not present (`VertexNotPresent`), or if `u == v` (`SelfLoop`).
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds the edge `{u, v}` to the graph; re-adding an existing edge is a no-op.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_add_edge(u, v).map(|_| ())
    }

    /// Adds all edges in the collection and returns the number of newly inserted edges.
    /// If any edge is rejected, all edges inserted by this call are removed again.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<NumEdges> {
        let mut inserted: SmallVec<[Edge; 16]> = SmallVec::new();
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            match self.try_add_edge(u, v) {
                Ok(true) => inserted.push(Edge(u, v)),
                Ok(false) => {}
                Err(err) => {
                    for Edge(u, v) in inserted {
                        // endpoints were validated on insertion
                        let _ = self.try_delete_edge(u, v);
                    }
                    return Err(err);
                }
            }
        }
        Ok(inserted.len() as NumEdges)
    }

    /// Removes the edge `{u, v}` from the graph.
    /// Returns *true* exactly if the edge was present.
    /// Only fails if an endpoint is out of range.
    fn try_delete_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Removes the edge `{u, v}`; deleting a missing edge is a no-op.
    fn delete_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_delete_edge(u, v).map(|_| ())
    }

    /// Removes all edges incident to `u` but keeps `u` itself.
    /// Returns the number of removed edges.
    fn clear_vertex(&mut self, u: Node) -> Result<NumNodes>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Creates a graph with vertices `0..n` and the given edges
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::try_new(n)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
