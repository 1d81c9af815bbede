use std::fmt::Debug;

use itertools::Itertools;
use tracing::trace;

use super::*;
use crate::testing::test_graph_ops;

/// A simple undirected graph on the vertex slots `0..MAX_NODES`.
///
/// Invariants maintained by every operation:
/// - `u` is a neighbor of `v` exactly if `v` is a neighbor of `u`,
/// - no vertex is its own neighbor,
/// - every neighbor is a present vertex,
/// - `num_edges` equals half the degree sum.
///
/// Every editing operation either applies completely or fails without modifying the graph.
#[derive(Clone)]
pub struct SimpleGraph<Nbs: Neighborhood> {
    vertices: VertexSet,
    nbs: [Nbs; MAX_NODES as usize],
    num_edges: NumEdges,
}

/// Representation using sorted adjacency lists
pub type AdjListGraph = SimpleGraph<SortedNeighborhood>;

/// Representation using an adjacency matrix
pub type AdjMatrixGraph = SimpleGraph<BitNeighborhood>;

/// The default representation
pub type Graph = AdjListGraph;

impl<Nbs: Neighborhood> SimpleGraph<Nbs> {
    /// Returns the set of present vertices
    pub fn vertex_set(&self) -> VertexSet {
        self.vertices
    }

    /// Returns the index of `u` after checking that `u` is a present vertex
    fn present_index(&self, u: Node) -> Result<usize> {
        let idx = node_index(u)?;
        if self.vertices.contains(u)? {
            Ok(idx)
        } else {
            Err(GraphError::VertexNotPresent { node: u })
        }
    }

    /// Removes all edges at `u` without range-checking
    fn clear_slot(&mut self, u: usize) -> NumNodes {
        let node = u as Node;
        let degree = self.nbs[u].num_of_neighbors();

        for v in MaskIter::new(self.nbs[u].as_mask()) {
            let removed = self.nbs[v as usize].try_remove_neighbor(node);
            debug_assert!(removed);
        }
        self.nbs[u].clear();
        self.num_edges -= degree as NumEdges;

        trace!(vertex = node, removed = degree, "cleared incident edges");
        degree
    }
}

impl<Nbs: Neighborhood> Default for SimpleGraph<Nbs> {
    fn default() -> Self {
        Self {
            vertices: VertexSet::new(),
            nbs: std::array::from_fn(|_| Nbs::default()),
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for SimpleGraph<Nbs> {
    fn number_of_vertices(&self) -> NumNodes {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.iter()
    }

    fn has_vertex(&self, u: Node) -> Result<bool> {
        self.vertices.contains(u)
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for SimpleGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for SimpleGraph<Nbs> {
    fn slot_neighbors(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn slot_degree(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for SimpleGraph<Nbs> {
    fn is_edge(&self, u: Node, v: Node) -> Result<bool> {
        let u = node_index(u)?;
        node_index(v)?;
        Ok(self.nbs[u].has_neighbor(v))
    }
}

impl<Nbs: Neighborhood> GraphNew for SimpleGraph<Nbs> {
    fn try_new(n: NumNodes) -> Result<Self> {
        Ok(Self {
            vertices: VertexSet::with_first(n)?,
            ..Default::default()
        })
    }
}

impl<Nbs: Neighborhood> GraphVertexEditing for SimpleGraph<Nbs> {
    fn try_add_vertex(&mut self, u: Node) -> Result<bool> {
        self.vertices.insert(u)
    }

    fn try_delete_vertex(&mut self, u: Node) -> Result<bool> {
        let idx = node_index(u)?;
        if !self.vertices.remove(u)? {
            return Ok(false);
        }

        self.clear_slot(idx);
        trace!(vertex = u, "deleted vertex");
        Ok(true)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for SimpleGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        let iu = self.present_index(u)?;
        let iv = self.present_index(v)?;
        if iu == iv {
            return Err(GraphError::SelfLoop { node: u });
        }

        if self.nbs[iu].try_add_neighbor(v) {
            let mirrored = self.nbs[iv].try_add_neighbor(u);
            debug_assert!(mirrored);
            self.num_edges += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn try_delete_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        let iu = node_index(u)?;
        let iv = node_index(v)?;

        if self.nbs[iu].try_remove_neighbor(v) {
            let mirrored = self.nbs[iv].try_remove_neighbor(u);
            debug_assert!(mirrored);
            self.num_edges -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn clear_vertex(&mut self, u: Node) -> Result<NumNodes> {
        let idx = node_index(u)?;
        Ok(self.clear_slot(idx))
    }
}

impl<Nbs: Neighborhood> PartialEq for SimpleGraph<Nbs> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self
                .nbs
                .iter()
                .zip(&other.nbs)
                .all(|(a, b)| a.as_mask() == b.as_mask())
    }
}

impl<Nbs: Neighborhood> Eq for SimpleGraph<Nbs> {}

impl<Nbs: Neighborhood> Debug for SimpleGraph<Nbs> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleGraph")
            .field("vertices", &self.vertices.iter().collect_vec())
            .field("edges", &self.edges().collect_vec())
            .finish()
    }
}

impl<Nbs: Neighborhood> From<&SimpleGraph<Nbs>> for AdjMatrixGraph {
    fn from(graph: &SimpleGraph<Nbs>) -> Self {
        let mut matrix = AdjMatrixGraph {
            vertices: graph.vertices,
            num_edges: graph.num_edges,
            ..Default::default()
        };
        for (row, nbs) in matrix.nbs.iter_mut().zip(&graph.nbs) {
            for v in nbs.neighbors() {
                row.try_add_neighbor(v);
            }
        }
        matrix
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_list_graph,
    AdjListGraph,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphVertexEditing,
        Graph6
    )
);

test_graph_ops!(
    test_adj_matrix_graph,
    AdjMatrixGraph,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphVertexEditing,
        Graph6
    )
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph = Graph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_vertices(), 0);
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.degree_sequence().is_empty());
        assert_eq!(graph.edges().count(), 0);
        assert!(graph.is_edgeless());
    }

    #[test]
    fn edgeless_ignores_vertex_count() {
        let mut graph = Graph::new(5);
        assert!(graph.is_edgeless());
        assert!(!graph.is_empty());

        graph.add_edge(3, 4).unwrap();
        assert!(!graph.is_edgeless());
    }

    #[test]
    fn try_new_capacity() {
        assert_eq!(Graph::try_new(16).unwrap().number_of_vertices(), 16);
        assert_eq!(
            Graph::try_new(17).unwrap_err(),
            GraphError::TooManyVertices(17)
        );
    }

    #[test]
    #[should_panic]
    fn new_panics_above_capacity() {
        let _ = Graph::new(17);
    }

    #[test]
    fn add_edge_keeps_lists_sorted() {
        let mut graph = Graph::new(6);
        for (u, v) in [(0, 5), (0, 2), (0, 4), (0, 1), (3, 0)] {
            graph.add_edge(u, v).unwrap();
        }

        assert_eq!(graph.neighbors_of(0).unwrap().collect_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(graph.neighbors_of(3).unwrap().collect_vec(), vec![0]);
        assert_eq!(graph.degree_of(0).unwrap(), 5);
        assert_eq!(graph.number_of_edges(), 5);
    }

    #[test]
    fn duplicate_edge_is_noop() {
        let mut graph = Graph::new(3);
        assert!(graph.try_add_edge(0, 1).unwrap());
        assert!(!graph.try_add_edge(0, 1).unwrap());
        assert!(!graph.try_add_edge(1, 0).unwrap());

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors_of(0).unwrap().collect_vec(), vec![1]);
        assert_eq!(graph.neighbors_of(1).unwrap().collect_vec(), vec![0]);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1)]);
    }

    #[test]
    fn delete_missing_edge_is_noop() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        let before = graph.clone();

        assert!(!graph.try_delete_edge(2, 3).unwrap());
        graph.delete_edge(1, 2).unwrap();
        graph.delete_edge(3, 3).unwrap();
        // absent but in-range endpoints are fine as well
        graph.delete_edge(0, 12).unwrap();

        assert_eq!(graph, before);
        assert!(graph.try_delete_edge(1, 0).unwrap());
        assert!(graph.is_edgeless());
    }

    #[test]
    fn rejected_edges_leave_graph_untouched() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        let before = graph.clone();

        assert_eq!(graph.add_edge(2, 2), Err(GraphError::SelfLoop { node: 2 }));
        assert_eq!(
            graph.add_edge(0, 16),
            Err(GraphError::OutOfRange { node: 16 })
        );
        assert_eq!(
            graph.add_edge(7, 0),
            Err(GraphError::VertexNotPresent { node: 7 })
        );
        assert_eq!(
            graph.delete_edge(0, 99),
            Err(GraphError::OutOfRange { node: 99 })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn add_edges_rolls_back() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        let before = graph.clone();

        let res = graph.add_edges([(1, 2), (0, 1), (2, 3), (3, 3)]);
        assert_eq!(res, Err(GraphError::SelfLoop { node: 3 }));
        assert_eq!(graph, before);

        assert_eq!(graph.add_edges([(1, 2), (0, 1), (2, 3)]), Ok(2));
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn queries_range_checked() {
        let graph = Graph::new(2);
        assert_eq!(graph.has_vertex(1), Ok(true));
        assert_eq!(graph.has_vertex(2), Ok(false));
        assert_eq!(graph.has_vertex(16), Err(GraphError::OutOfRange { node: 16 }));
        assert!(graph.neighbors_of(16).is_err());
        assert!(graph.degree_of(31).is_err());
        assert!(graph.is_edge(0, 16).is_err());
        assert!(graph.is_edge(16, 0).is_err());
        assert_eq!(graph.degree_of(9), Ok(0));
        assert_eq!(graph.has_self_loop(1), Ok(false));
    }

    #[test]
    fn delete_vertex_propagates() {
        // star around 2 plus the edge {0, 1}
        let mut graph = Graph::try_from_edges(5, [(2, 0), (2, 1), (2, 3), (2, 4), (0, 1)]).unwrap();
        assert_eq!(graph.degree_sequence(), vec![4, 2, 2, 1, 1]);

        assert!(graph.try_delete_vertex(2).unwrap());
        assert!(!graph.try_delete_vertex(2).unwrap());

        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 3, 4]);
        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_edges(), 1);
        for u in 0..MAX_NODES {
            assert!(!graph.is_edge(2, u).unwrap());
            assert!(!graph.is_edge(u, 2).unwrap());
        }
        assert_eq!(graph.neighbors_of(0).unwrap().collect_vec(), vec![1]);
        assert_eq!(graph.degree_sequence(), vec![1, 1, 0, 0]);

        // re-adding the vertex does not resurrect its edges
        graph.add_vertex(2).unwrap();
        assert_eq!(graph.degree_of(2), Ok(0));
        assert_eq!(graph.number_of_vertices(), 5);
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1).unwrap();

        assert!(!graph.try_add_vertex(1).unwrap());
        assert!(graph.try_add_vertex(9).unwrap());
        graph.add_vertex(9).unwrap();

        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 9]);
        assert_eq!(graph.neighbors_of(1).unwrap().collect_vec(), vec![0]);
        assert_eq!(graph.add_vertex(16), Err(GraphError::OutOfRange { node: 16 }));

        graph.add_edge(9, 0).unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1), Edge(0, 9)]);
    }

    #[test]
    fn clear_vertex_keeps_vertex() {
        let mut graph = Graph::try_from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2)]).unwrap();
        assert_eq!(graph.clear_vertex(0), Ok(3));
        assert!(graph.has_vertex(0).unwrap());
        assert_eq!(graph.edges().collect_vec(), vec![Edge(1, 2)]);
        assert_eq!(graph.vertices_with_neighbors().collect_vec(), vec![1, 2]);
    }

    #[test]
    fn slot_accessors_agree_with_checked_queries() {
        let mut graph = Graph::try_from_edges(6, [(0, 1), (0, 5), (1, 5), (3, 4)]).unwrap();
        graph.delete_vertex(4).unwrap();

        for u in 0..MAX_NODES {
            assert_eq!(graph.degree_of(u), Ok(graph.slot_degree(u)));
            assert_eq!(
                graph.neighbors_of(u).unwrap().collect_vec(),
                graph.slot_neighbors(u).collect_vec()
            );
        }
        assert_eq!(graph.degrees().collect_vec(), vec![2, 2, 0, 0, 2]);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(0, 1), Edge(0, 5), Edge(1, 5)]
        );
    }

    #[test]
    #[should_panic]
    fn slot_degree_panics_out_of_range() {
        let _ = Graph::new(2).slot_degree(MAX_NODES);
    }

    #[test]
    fn degree_statistics() {
        let graph = Graph::try_from_edges(5, [(0, 1), (0, 2), (0, 3), (1, 2)]).unwrap();
        assert_eq!(graph.max_degree(), 3);
        assert_eq!(graph.degree_sequence(), vec![3, 2, 2, 1, 0]);
        assert_eq!(graph.degree_distribution(), vec![(0, 1), (1, 1), (2, 2), (3, 1)]);
        assert_eq!(graph.has_neighbors(0, [1, 4, 3]), Ok([true, false, true]));
    }

    #[test]
    fn adjacency_matrix_conversion() {
        let list = Graph::try_from_edges(6, [(0, 5), (4, 1), (2, 3)]).unwrap();
        let matrix = AdjMatrixGraph::from(&list);

        assert_eq!(matrix.number_of_edges(), 3);
        assert_eq!(matrix.edges().collect_vec(), list.edges().collect_vec());
        assert_eq!(
            matrix.vertices().collect_vec(),
            list.vertices().collect_vec()
        );
    }

    #[test]
    fn debug_output() {
        let graph = Graph::try_from_edges(3, [(2, 0)]).unwrap();
        assert_eq!(
            format!("{graph:?}"),
            "SimpleGraph { vertices: [0, 1, 2], edges: [(0,2)] }"
        );
    }
}
