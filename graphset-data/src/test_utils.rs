// Shared helpers for the unit tests of this crate.

use crate::datasets::Dataset;
use graphset_core::{Array, Graph, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Small undirected path graph whose node features encode `id`, with a
/// graph-level label `[[id]]`.
pub(crate) fn small_graph(id: usize) -> Graph {
    let n = 2 + id % 3;
    let x = Array::new(vec![id as i64; n], vec![n, 1]).unwrap();
    let mut edges = Vec::new();
    for i in 1..n {
        edges.push([i - 1, i]);
        edges.push([i, i - 1]);
    }
    let num_edges = edges.len();
    Graph::new(x, edges)
        .unwrap()
        .with_edge_attr(Array::new(vec![1; num_edges], vec![num_edges, 1]).unwrap())
        .unwrap()
        .with_labels(Array::new(vec![id as f32], vec![1, 1]).unwrap())
}

/// Undirected ring with node-level labels.
pub(crate) fn ring(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push([i, (i + 1) % n]);
        edges.push([(i + 1) % n, i]);
    }
    let x = Array::new((0..n as i64).collect(), vec![n, 1]).unwrap();
    let y = Array::new((0..n).map(|i| (i % 3) as f32).collect(), vec![n, 1]).unwrap();
    Graph::new(x, edges).unwrap().with_labels(y)
}

/// Dataset of [`small_graph`]s that counts how often items are fetched.
#[derive(Debug, Default)]
pub(crate) struct CountingDataset {
    pub len: usize,
    pub fetches: AtomicUsize,
}

impl CountingDataset {
    pub(crate) fn new(len: usize) -> Self {
        CountingDataset {
            len,
            fetches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Dataset for CountingDataset {
    type Item = Graph;

    fn get(&self, index: usize) -> Result<Graph> {
        if index >= self.len {
            return Err(graphset_core::GraphsetError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(small_graph(index))
    }

    fn len(&self) -> usize {
        self.len
    }
}
