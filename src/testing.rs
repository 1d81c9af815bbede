/// Every graph representation should pass these tests.
/// The graph under test is compared against a plain `[u16; MAX_NODES]` adjacency matrix.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random non-loop edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                if n < 2 {
                    return Vec::new();
                }

                (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = (u + rng.random_range(1..n)) % n;
                    Edge(u, v)
                }).collect_vec()
            }

            /// Checks all invariants of `graph` and compares it to the reference
            fn assert_matches(graph: &$graph, vertices: u16, adj_matrix: &[u16; MAX_NODES as usize]) {
                assert_eq!(graph.vertices().collect_vec(), MaskIter::new(vertices).collect_vec());
                assert_eq!(graph.number_of_vertices(), vertices.count_ones());

                let mut degree_sum = 0;
                for u in 0..MAX_NODES {
                    let row = adj_matrix[u as usize];
                    assert_eq!(graph.neighbors_of(u).unwrap().collect_vec(), MaskIter::new(row).collect_vec());
                    assert_eq!(graph.degree_of(u).unwrap(), row.count_ones());
                    assert!(!graph.is_edge(u, u).unwrap());

                    for v in 0..MAX_NODES {
                        assert_eq!(graph.is_edge(u, v).unwrap(), graph.is_edge(v, u).unwrap());
                    }

                    if vertices & node_bit(u) != 0 {
                        degree_sum += graph.degree_of(u).unwrap();
                    } else {
                        assert_eq!(row, 0);
                    }
                }

                let edges = graph.edges().collect_vec();
                assert_eq!(edges.len() as NumEdges, graph.number_of_edges());
                assert_eq!(degree_sum, 2 * graph.number_of_edges());
                assert!(edges.windows(2).all(|w| w[0] < w[1]));
                assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));

                let sequence = graph.degree_sequence();
                assert_eq!(sequence.len(), graph.len());
                assert!(sequence.windows(2).all(|w| w[0] >= w[1]));
                assert_eq!(sequence.iter().sum::<NumNodes>(), degree_sum);
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..=MAX_NODES {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_vertices(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.degree_sequence(), vec![0; n as usize]);
            }

            assert_eq!(<$graph>::try_new(MAX_NODES + 1).unwrap_err(), GraphError::TooManyVertices(MAX_NODES + 1));
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [2 as NumNodes, 5, 11, 16] {
                for m_ub in [n, n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix = [0u16; MAX_NODES as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize] |= node_bit(v);
                            adj_matrix[v as usize] |= node_bit(u);
                        }

                        let graph = <$graph>::try_from_edges(n, edges.iter()).unwrap();

                        let mut expected = edges.iter().map(|e| e.normalized()).collect_vec();
                        expected.sort_unstable();
                        expected.dedup();

                        assert_eq!(graph.edges().collect_vec(), expected);
                        assert_matches(&graph, VertexSet::with_first(n).unwrap().mask(), &adj_matrix);
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [2 as NumNodes, 5, 11, 16] {
                for m_ub in [n, n * 2, n * 5] {
                    for _ in 0..10 {
                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix = [0u16; MAX_NODES as usize];

                        for Edge(u, v) in random_edges(rng, n, m_ub as NumEdges) {
                            let inserted = adj_matrix[u as usize] & node_bit(v) == 0;
                            adj_matrix[u as usize] |= node_bit(v);
                            adj_matrix[v as usize] |= node_bit(u);
                            assert_eq!(graph.try_add_edge(u, v).unwrap(), inserted);
                        }

                        let vertices = VertexSet::with_first(n).unwrap().mask();
                        assert_matches(&graph, vertices, &adj_matrix);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let present = adj_matrix[u as usize] & node_bit(v) != 0;
                            assert_eq!(graph.try_delete_edge(u, v).unwrap(), present);
                            if present {
                                adj_matrix[u as usize] &= !node_bit(v);
                                adj_matrix[v as usize] &= !node_bit(u);
                                m -= 1;
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }
                        assert_matches(&graph, vertices, &adj_matrix);

                        // add/delete round trip restores the adjacency exactly
                        let before = graph.clone();
                        for (u, v) in (0..n).tuple_combinations() {
                            if !graph.is_edge(u, v).unwrap() {
                                graph.add_edge(u, v).unwrap();
                                graph.delete_edge(v, u).unwrap();
                                assert_eq!(graph, before);
                            }
                        }

                        for u in 0..n {
                            graph.clear_vertex(u).unwrap();
                        }
                        assert!(graph.is_edgeless());
                        assert_matches(&graph, vertices, &[0; MAX_NODES as usize]);
                    }
                }
            }
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for _ in 0..200 {
                let mut graph = <$graph>::empty();
                let mut vertices = 0u16;
                let mut adj_matrix = [0u16; MAX_NODES as usize];

                for _ in 0..60 {
                    let u = rng.random_range(0..MAX_NODES);
                    let v = rng.random_range(0..MAX_NODES);

                    match rng.random_range(0..4) {
                        0 => {
                            assert_eq!(graph.try_add_vertex(u).unwrap(), vertices & node_bit(u) == 0);
                            vertices |= node_bit(u);
                        }
                        1 => {
                            assert_eq!(graph.try_delete_vertex(u).unwrap(), vertices & node_bit(u) != 0);
                            vertices &= !node_bit(u);
                            for w in MaskIter::new(adj_matrix[u as usize]) {
                                adj_matrix[w as usize] &= !node_bit(u);
                            }
                            adj_matrix[u as usize] = 0;
                        }
                        _ => {
                            let valid = u != v && vertices & node_bit(u) != 0 && vertices & node_bit(v) != 0;
                            let res = graph.try_add_edge(u, v);
                            assert_eq!(res.is_ok(), valid);
                            if valid {
                                adj_matrix[u as usize] |= node_bit(v);
                                adj_matrix[v as usize] |= node_bit(u);
                            }
                        }
                    }

                    assert_matches(&graph, vertices, &adj_matrix);
                }
            }
        }
    };
    ($graph:ident: Graph6) => {
        #[test]
        fn test_graph6() {
            use crate::io::*;

            let rng = &mut Pcg64Mcg::seed_from_u64(9);

            for n in 0..=MAX_NODES {
                for _ in 0..10 {
                    let m_ub = rng.random_range(0..=(n * n) as NumEdges);
                    let graph = <$graph>::try_from_edges(n, random_edges(rng, n, m_ub)).unwrap();

                    let encoded = graph.to_graph6();
                    let decoded = <$graph>::from_graph6(&encoded).unwrap();
                    assert_eq!(decoded, graph);
                    assert_eq!(decoded.to_string(), encoded);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
