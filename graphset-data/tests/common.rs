use graphset_core::{Array, Graph};

/// Molecule-like graph: a chain of `n` atoms with a bond type per edge and a
/// scalar graph label.
pub fn chain_molecule(n: usize, label: f32) -> Graph {
    let mut edges = Vec::new();
    let mut bonds = Vec::new();
    for i in 1..n {
        edges.push([i - 1, i]);
        edges.push([i, i - 1]);
        bonds.extend_from_slice(&[(i % 3) as i64, (i % 3) as i64]);
    }
    let num_edges = edges.len();
    let x = Array::new((0..n).map(|i| (i % 5) as i64).collect(), vec![n, 1]).unwrap();
    Graph::new(x, edges)
        .unwrap()
        .with_edge_attr(Array::new(bonds, vec![num_edges, 1]).unwrap())
        .unwrap()
        .with_labels(Array::from_vec(vec![label]))
}

/// Grid of `rows x cols` nodes, undirected, with one class label per node.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let n = rows * cols;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                edges.push([v, v + 1]);
                edges.push([v + 1, v]);
            }
            if r + 1 < rows {
                edges.push([v, v + cols]);
                edges.push([v + cols, v]);
            }
        }
    }
    let x = Array::new(vec![1; n], vec![n, 1]).unwrap();
    let y = Array::new((0..n).map(|v| (v % 2) as f32).collect(), vec![n, 1]).unwrap();
    Graph::new(x, edges).unwrap().with_labels(y)
}
