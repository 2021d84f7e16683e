//! Tests for the traversal implementations.

#[cfg(test)]
mod tests {
    use crate::generators::{balanced_tree, random_tree, unbalanced_tree};
    use crate::graph::model::AdjacencyList;
    use crate::graph::traversal::code::*;
    use crate::utils::lab_rng;

    fn labelled(graph: &AdjacencyList, func: TraversalFn) -> Vec<String> {
        let root = graph.index_of("D").unwrap();
        graph.labels_of(&func(graph, root)).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_balanced_tree_orders() {
        let graph = balanced_tree();
        assert_eq!(labelled(&graph, breadth_first), ["D", "B", "E", "A", "C", "F"]);
        assert_eq!(labelled(&graph, depth_first), ["D", "B", "A", "C", "E", "F"]);
    }

    #[test]
    fn test_unbalanced_tree_orders() {
        let graph = unbalanced_tree();
        assert_eq!(labelled(&graph, breadth_first), ["D", "B", "E", "A", "C", "F", "S", "T", "N"]);
        assert_eq!(labelled(&graph, depth_first), ["D", "B", "A", "S", "N", "T", "C", "E", "F"]);
    }

    #[test]
    fn test_each_vertex_visited_once() {
        let mut rng = lab_rng(Some(3));
        for size in [1, 2, 50, 5000] {
            let tree = random_tree(&mut rng, size);
            for variant in available_variants() {
                let mut order = (variant.function)(&tree, 0);
                assert_eq!(order[0], 0);
                order.sort_unstable();
                assert_eq!(order, (0..size).collect::<Vec<_>>(), "{}", variant.name);
            }
        }
    }

    #[test]
    fn test_only_reachable_vertices() {
        let mut graph = AdjacencyList::with_vertices(5);
        graph.add_edge(0, 1);
        graph.add_edge(1, 0);
        graph.add_edge(3, 4);
        for variant in available_variants() {
            assert_eq!((variant.function)(&graph, 0), vec![0, 1], "{}", variant.name);
            assert_eq!((variant.function)(&graph, 2), vec![2], "{}", variant.name);
        }
    }

    #[test]
    fn test_cycles_do_not_revisit() {
        let mut graph = AdjacencyList::with_vertices(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);
        graph.add_edge(0, 2);
        assert_eq!(depth_first(&graph, 0), vec![0, 1, 2]);
        assert_eq!(breadth_first(&graph, 0), vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_root_out_of_range() {
        depth_first(&balanced_tree(), 42);
    }
}
