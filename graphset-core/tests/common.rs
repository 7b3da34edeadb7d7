use graphset_core::{Array, Graph};

// Helper to build a graph with one integer feature per node (the node id).
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_graph(num_nodes: usize, edges: &[[usize; 2]]) -> Graph {
    let x = Array::new((0..num_nodes as i64).collect(), vec![num_nodes, 1])
        .expect("Test features creation failed");
    Graph::new(x, edges.to_vec()).expect("Test graph creation failed")
}

// Path graph 0 -> 1 -> ... -> n-1 with edges in both directions.
#[allow(dead_code)]
pub(crate) fn create_undirected_path(num_nodes: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 1..num_nodes {
        edges.push([i - 1, i]);
        edges.push([i, i - 1]);
    }
    create_test_graph(num_nodes, &edges)
}
