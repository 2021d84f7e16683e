//! Tests for the spanning tree implementations.

#[cfg(test)]
mod tests {
    use crate::generators::random_undirected_graph;
    use crate::graph::model::{total_weight, Edge, WeightMatrix};
    use crate::graph::spanning_tree::code::*;
    use crate::utils::lab_rng;

    /// Square 0-1-2-3 with a heavy diagonal 0-2.
    fn square() -> WeightMatrix {
        WeightMatrix::from_rows(vec![
            vec![0, 1, 9, 4],
            vec![1, 0, 2, 0],
            vec![9, 2, 0, 3],
            vec![4, 0, 3, 0],
        ])
    }

    /// Every vertex appears in some edge and the edges form no cycle.
    fn spans_without_cycle(n: usize, edges: &[Edge]) -> bool {
        let mut components = UnionFind::new(n);
        edges.iter().all(|e| components.union(e.from, e.to))
    }

    #[test]
    fn test_square_graph() {
        let graph = square();
        for variant in available_variants() {
            let edges = (variant.function)(&graph);
            assert_eq!(edges.len(), 3, "{}", variant.name);
            assert_eq!(total_weight(&edges), 6, "{}", variant.name);
            assert!(spans_without_cycle(4, &edges));
        }
    }

    #[test]
    fn test_prim_and_kruskal_weights_match() {
        let mut rng = lab_rng(Some(21));
        for size in [2, 10, 50, 150] {
            for probability in [0.1, 0.5, 1.0] {
                let graph = random_undirected_graph(&mut rng, size, 10, probability).unwrap();
                let prim_edges = prim(&graph);
                let kruskal_edges = kruskal(&graph);
                assert_eq!(prim_edges.len(), kruskal_edges.len());
                assert_eq!(total_weight(&prim_edges), total_weight(&kruskal_edges));
                assert!(spans_without_cycle(size, &prim_edges));
                assert!(spans_without_cycle(size, &kruskal_edges));
            }
        }
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        // components {0, 1} and {2, 3, 4}
        let graph = WeightMatrix::from_rows(vec![
            vec![0, 5, 0, 0, 0],
            vec![5, 0, 0, 0, 0],
            vec![0, 0, 0, 2, 7],
            vec![0, 0, 2, 0, 1],
            vec![0, 0, 7, 1, 0],
        ]);
        for variant in available_variants() {
            let edges = (variant.function)(&graph);
            assert_eq!(edges.len(), 3, "{}", variant.name);
            assert_eq!(total_weight(&edges), 8, "{}", variant.name);
        }
    }

    #[test]
    fn test_edge_weights_come_from_graph() {
        let graph = square();
        for variant in available_variants() {
            for edge in (variant.function)(&graph) {
                assert_eq!(edge.weight, graph[(edge.from, edge.to)]);
            }
        }
    }

    #[test]
    fn test_trivial_graphs() {
        for variant in available_variants() {
            assert!((variant.function)(&WeightMatrix::filled(0, 0)).is_empty());
            assert!((variant.function)(&WeightMatrix::filled(1, 0)).is_empty());
        }
    }

    #[test]
    fn test_union_find() {
        let mut sets = UnionFind::new(6);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert!(sets.connected(0, 3));
        assert!(!sets.connected(0, 4));
        assert_eq!(sets.find(2), sets.find(1));
    }
}
