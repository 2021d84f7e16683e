//! Tests for the shortest path implementations.

#[cfg(test)]
mod tests {
    use crate::generators::random_digraph;
    use crate::graph::model::{SquareMatrix, WeightMatrix, WeightedDigraph, INFINITY};
    use crate::graph::shortest_path::bench::finite_distance_sum;
    use crate::graph::shortest_path::code::*;
    use crate::utils::lab_rng;

    /// 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (2), 1 -> 3 (5); vertex 4 isolated.
    fn small_graph() -> WeightedDigraph {
        let weights = WeightMatrix::from_rows(vec![
            vec![0, 4, 1, 0, 0],
            vec![0, 0, 0, 5, 0],
            vec![0, 2, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let mut adjacency = SquareMatrix::filled(5, 0u8);
        for i in 0..5 {
            for j in 0..5 {
                if weights[(i, j)] != 0 {
                    adjacency[(i, j)] = 1;
                }
            }
        }
        WeightedDigraph { adjacency, weights }
    }

    #[test]
    fn test_dijkstra_small_graph() {
        let graph = small_graph();
        let dist = dijkstra(&graph.adjacency, &graph.weights, 0);
        assert_eq!(dist, vec![0, 3, 1, 8, INFINITY]);
    }

    #[test]
    fn test_floyd_warshall_small_graph() {
        let graph = small_graph();
        let dist = floyd_warshall(&normalize_missing_edges(&graph.adjacency, &graph.weights));
        assert_eq!(dist.row(0), &[0, 3, 1, 8, INFINITY]);
        assert_eq!(dist.row(3), &[INFINITY, INFINITY, INFINITY, 0, INFINITY]);
    }

    #[test]
    fn test_normalize_covers_whole_matrix() {
        let weights = WeightMatrix::from_rows(vec![vec![0, 0, 7], vec![0, 0, 0], vec![3, 0, 0]]);
        let adjacency = SquareMatrix::from_rows(vec![vec![0u8, 0, 1], vec![0, 0, 0], vec![1, 0, 0]]);
        let normalized = normalize_missing_edges(&adjacency, &weights);
        for i in 0..3 {
            assert_eq!(normalized[(i, i)], 0);
        }
        assert_eq!(normalized[(0, 2)], 7);
        assert_eq!(normalized[(2, 0)], 3);
        assert_eq!(normalized[(2, 1)], INFINITY);
        assert_eq!(normalized[(1, 2)], INFINITY);
    }

    #[test]
    fn test_normalize_reads_edges_from_adjacency() {
        // 0 -> 1 exists with weight 0; 1 -> 0 carries a weight but no edge
        let adjacency = SquareMatrix::from_rows(vec![vec![0u8, 1], vec![0, 0]]);
        let weights = WeightMatrix::from_rows(vec![vec![0, 0], vec![12, 0]]);
        let normalized = normalize_missing_edges(&adjacency, &weights);
        assert_eq!(normalized.row(0), &[0, 0]);
        assert_eq!(normalized.row(1), &[INFINITY, 0]);
    }

    #[test]
    fn test_zero_weight_edge_agrees_across_variants() {
        let adjacency = SquareMatrix::from_rows(vec![vec![0u8, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        let weights = WeightMatrix::from_rows(vec![vec![0, 0, 50], vec![0, 0, 4], vec![9, 0, 0]]);
        let all_pairs = floyd_warshall(&normalize_missing_edges(&adjacency, &weights));
        for source in 0..3 {
            let dist = dijkstra(&adjacency, &weights, source);
            assert_eq!(dist.as_slice(), all_pairs.row(source), "source {}", source);
        }
        assert_eq!(all_pairs.row(0), &[0, 0, 4]);
    }

    #[test]
    fn test_dijkstra_matches_floyd_warshall_rows() {
        let mut rng = lab_rng(Some(11));
        for coefficient in [0, 30, 80, 100] {
            for size in [1, 5, 25, 60] {
                let graph = random_digraph(&mut rng, size, coefficient).unwrap();
                let all_pairs = floyd_warshall(&normalize_missing_edges(&graph.adjacency, &graph.weights));
                for source in 0..size {
                    let dist = dijkstra(&graph.adjacency, &graph.weights, source);
                    assert_eq!(dist.as_slice(), all_pairs.row(source), "source {} size {}", source, size);
                }
            }
        }
    }

    #[test]
    fn test_variants_agree_on_distance_sum() {
        let graph = random_digraph(&mut lab_rng(Some(5)), 30, 30).unwrap();
        let sums: Vec<u64> = available_variants()
            .iter()
            .map(|v| finite_distance_sum(&(v.function)(&graph)))
            .collect();
        assert_eq!(sums[0], sums[1]);
    }

    #[test]
    fn test_no_edges_leaves_everything_unreachable() {
        let adjacency = SquareMatrix::filled(4, 0u8);
        let weights = SquareMatrix::filled(4, 0u64);
        let dist = dijkstra(&adjacency, &weights, 2);
        assert_eq!(dist, vec![INFINITY, INFINITY, 0, INFINITY]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_dijkstra_source_out_of_range() {
        let graph = small_graph();
        dijkstra(&graph.adjacency, &graph.weights, 5);
    }
}
