//! Turns a raw [`Graph`] into the tensors consumed by a graph transformer:
//! single-table node embeddings ids, pairwise edge types, shortest-path
//! distances, edge features along shortest paths and node degrees.

pub mod algos;

use algos::{floyd_warshall, gen_edge_input, UNREACHABLE};
use graphset_core::{Array, Graph, Result, SamplingInfo};

/// Stride between the embedding ids of consecutive feature columns.
pub const FEATURE_OFFSET: i64 = 512;

/// A graph sample with its structural encodings.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedGraph {
    /// Position of the sample inside the dataset that produced it.
    pub idx: Option<usize>,
    /// Node features shifted by [`convert_to_single_emb`], `[N, F]`.
    pub x: Array<i64>,
    pub edge_index: Vec<[usize; 2]>,
    /// Flattened labels.
    pub y: Array<f32>,
    /// `[N + 1, N + 1]`, zero-initialised; row and column 0 belong to the graph token.
    pub attn_bias: Array<f32>,
    /// `[N, N, F_edge]`, `0` where no edge exists.
    pub attn_edge_type: Array<i64>,
    /// Shortest-path hop distances, `[N, N]`.
    pub spatial_pos: Array<i64>,
    pub in_degree: Vec<i64>,
    pub out_degree: Vec<i64>,
    /// `[N, N, max_dist, F_edge]`, `-1` padded.
    pub edge_input: Array<i64>,
    pub sampling: Option<SamplingInfo>,
}

impl PreprocessedGraph {
    pub fn num_nodes(&self) -> usize {
        self.x.shape()[0]
    }

    /// Length of the longest finite shortest path.
    pub fn max_dist(&self) -> usize {
        self.edge_input.shape()[2]
    }
}

/// Shifts every feature column into its own id range so that all columns can
/// share one embedding table: column `j` is offset by `1 + j * offset`.
pub fn convert_to_single_emb(x: &Array<i64>, offset: i64) -> Array<i64> {
    let cols = if x.rank() > 1 { x.shape()[1..].iter().product() } else { 1 };
    let mut position = 0usize;
    x.map(|&value| {
        let col = if cols == 0 { 0 } else { (position % cols) as i64 };
        position += 1;
        value + 1 + col * offset
    })
}

/// Computes the structural encodings of `graph`.
///
/// Missing edge attributes are treated as a single zero-valued column.
pub fn preprocess_item(graph: &Graph) -> Result<PreprocessedGraph> {
    let n = graph.num_nodes();
    let num_edges = graph.num_edges();

    let edge_attr = match graph.edge_attr() {
        Some(attr) if attr.rank() == 1 => attr.clone().reshape(vec![num_edges, 1])?,
        Some(attr) => attr.clone(),
        None => Array::zeros(vec![num_edges, 1]),
    };
    let num_edge_feat = edge_attr.shape()[1];
    let edge_types = convert_to_single_emb(&edge_attr, FEATURE_OFFSET).map(|v| v + 1);

    let mut attn_edge_type = Array::zeros(vec![n, n, num_edge_feat]);
    for (edge_id, &[src, dst]) in graph.edge_index().iter().enumerate() {
        let types = edge_types.row(edge_id)?;
        for (f, &t) in types.iter().enumerate() {
            attn_edge_type.set(&[src, dst, f], t)?;
        }
    }

    let adjacency = graph.adjacency();
    let (spatial_pos, path) = floyd_warshall(&adjacency)?;
    let max_dist = spatial_pos
        .as_slice()
        .iter()
        .copied()
        .filter(|&d| d < UNREACHABLE)
        .max()
        .unwrap_or(0) as usize;
    let edge_input = gen_edge_input(max_dist, &path, &attn_edge_type)?;

    let mut in_degree = vec![0i64; n];
    let mut out_degree = vec![0i64; n];
    for i in 0..n {
        for (j, &connected) in adjacency.row(i)?.iter().enumerate() {
            if connected {
                out_degree[i] += 1;
                in_degree[j] += 1;
            }
        }
    }

    Ok(PreprocessedGraph {
        idx: graph.idx(),
        x: convert_to_single_emb(graph.x(), FEATURE_OFFSET),
        edge_index: graph.edge_index().to_vec(),
        y: graph.y().clone().flatten(),
        attn_bias: Array::zeros(vec![n + 1, n + 1]),
        attn_edge_type,
        spatial_pos,
        in_degree,
        out_degree,
        edge_input,
        sampling: graph.sampling().cloned(),
    })
}

#[cfg(test)]
#[path = "preprocess_test.rs"]
mod tests;
