use crate::array::Array;
use crate::error::{GraphsetError, Result};
use log::debug;
use std::collections::HashMap;

/// Provenance of a neighbor-sampled subgraph.
///
/// `node_ids[local]` is the id of the local node in the graph the sample was
/// drawn from. The first `num_seeds` local nodes are the seed nodes of the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingInfo {
    pub node_ids: Vec<usize>,
    pub num_seeds: usize,
}

/// A single graph example.
///
/// Node features are integer (categorical) features of shape
/// `[num_nodes, num_features]`. Labels are either graph-level (any shape) or
/// node-level (first dimension equal to the number of nodes).
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    x: Array<i64>,
    edge_index: Vec<[usize; 2]>,
    edge_attr: Option<Array<i64>>,
    y: Array<f32>,
    idx: Option<usize>,
    sampling: Option<SamplingInfo>,
}

impl Graph {
    /// Creates a graph from node features and `(src, dst)` edges.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::RankMismatch` if `x` is not rank 2 and
    /// `GraphsetError::InvalidEdge` if an endpoint is not a node of the graph.
    pub fn new(x: Array<i64>, edge_index: Vec<[usize; 2]>) -> Result<Self> {
        if x.rank() != 2 {
            return Err(GraphsetError::RankMismatch {
                expected: 2,
                actual: x.rank(),
            });
        }
        let num_nodes = x.shape()[0];
        for &[src, dst] in &edge_index {
            if src >= num_nodes || dst >= num_nodes {
                return Err(GraphsetError::InvalidEdge {
                    src,
                    dst,
                    num_nodes,
                });
            }
        }
        Ok(Graph {
            x,
            edge_index,
            edge_attr: None,
            y: Array::from_vec(Vec::new()),
            idx: None,
            sampling: None,
        })
    }

    /// Attaches edge attributes, one entry per edge along dimension 0.
    pub fn with_edge_attr(mut self, edge_attr: Array<i64>) -> Result<Self> {
        if edge_attr.rank() == 0 || edge_attr.rank() > 2 {
            return Err(GraphsetError::RankMismatch {
                expected: 2,
                actual: edge_attr.rank(),
            });
        }
        if edge_attr.shape()[0] != self.edge_index.len() {
            return Err(GraphsetError::ShapeMismatch {
                expected: format!("{} edge attribute rows", self.edge_index.len()),
                actual: format!("{} rows", edge_attr.shape()[0]),
                operation: "Graph::with_edge_attr".to_string(),
            });
        }
        self.edge_attr = Some(edge_attr);
        Ok(self)
    }

    /// Attaches labels.
    pub fn with_labels(mut self, y: Array<f32>) -> Self {
        self.y = y;
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.x.shape()[0]
    }

    pub fn num_edges(&self) -> usize {
        self.edge_index.len()
    }

    pub fn x(&self) -> &Array<i64> {
        &self.x
    }

    pub fn edge_index(&self) -> &[[usize; 2]] {
        &self.edge_index
    }

    pub fn edge_attr(&self) -> Option<&Array<i64>> {
        self.edge_attr.as_ref()
    }

    pub fn y(&self) -> &Array<f32> {
        &self.y
    }

    pub fn idx(&self) -> Option<usize> {
        self.idx
    }

    pub fn set_idx(&mut self, idx: usize) {
        self.idx = Some(idx);
    }

    pub fn sampling(&self) -> Option<&SamplingInfo> {
        self.sampling.as_ref()
    }

    pub fn set_sampling(&mut self, sampling: SamplingInfo) {
        self.sampling = Some(sampling);
    }

    /// True when the labels carry one entry per node.
    pub fn has_node_labels(&self) -> bool {
        self.y.rank() > 0 && self.y.shape()[0] == self.num_nodes() && self.num_nodes() > 0
    }

    /// Reshapes the labels to rank 1 in place.
    pub fn flatten_labels(&mut self) {
        let y = std::mem::replace(&mut self.y, Array::from_vec(Vec::new()));
        self.y = y.flatten();
    }

    /// Number of edges pointing into each node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.num_nodes()];
        for &[_, dst] in &self.edge_index {
            degrees[dst] += 1;
        }
        degrees
    }

    /// Number of edges leaving each node.
    pub fn out_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.num_nodes()];
        for &[src, _] in &self.edge_index {
            degrees[src] += 1;
        }
        degrees
    }

    /// Incoming adjacency lists: for each node, its `(source, edge_id)` pairs
    /// in edge order.
    pub fn incoming(&self) -> Vec<Vec<(usize, usize)>> {
        let mut incoming = vec![Vec::new(); self.num_nodes()];
        for (edge_id, &[src, dst]) in self.edge_index.iter().enumerate() {
            incoming[dst].push((src, edge_id));
        }
        incoming
    }

    /// Dense `[num_nodes, num_nodes]` adjacency, `true` where an edge exists.
    pub fn adjacency(&self) -> Array<bool> {
        let n = self.num_nodes();
        let mut adj = Array::full(vec![n, n], false);
        for &[src, dst] in &self.edge_index {
            // Endpoints are validated at construction.
            if let Ok(row) = adj.row_mut(src) {
                row[dst] = true;
            }
        }
        adj
    }

    /// Returns the subgraph induced by `subset`.
    ///
    /// Nodes are relabelled in the order of `subset`. Only edges with both
    /// endpoints in the subset are kept, in their original order. Node-level
    /// labels are gathered; graph-level labels are copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::IndexOutOfBounds` for nodes outside the graph and
    /// `GraphsetError::DuplicateNode` when a node is listed twice.
    pub fn subgraph(&self, subset: &[usize]) -> Result<Graph> {
        let num_nodes = self.num_nodes();
        let mut relabel: HashMap<usize, usize> = HashMap::with_capacity(subset.len());
        for (local, &node) in subset.iter().enumerate() {
            if node >= num_nodes {
                return Err(GraphsetError::IndexOutOfBounds {
                    index: node,
                    len: num_nodes,
                });
            }
            if relabel.insert(node, local).is_some() {
                return Err(GraphsetError::DuplicateNode(node));
            }
        }

        let mut edge_index = Vec::new();
        let mut kept_edges = Vec::new();
        for (edge_id, &[src, dst]) in self.edge_index.iter().enumerate() {
            if let (Some(&s), Some(&d)) = (relabel.get(&src), relabel.get(&dst)) {
                edge_index.push([s, d]);
                kept_edges.push(edge_id);
            }
        }
        debug!(
            "Graph::subgraph: kept {} of {} nodes and {} of {} edges",
            subset.len(),
            num_nodes,
            edge_index.len(),
            self.edge_index.len()
        );

        let edge_attr = match &self.edge_attr {
            Some(attr) => Some(attr.select(&kept_edges)?),
            None => None,
        };
        let y = if self.has_node_labels() {
            self.y.select(subset)?
        } else {
            self.y.clone()
        };

        Ok(Graph {
            x: self.x.select(subset)?,
            edge_index,
            edge_attr,
            y,
            idx: None,
            sampling: None,
        })
    }

    /// Assembles a graph from already-relabelled parts, as produced by a
    /// neighbor sampler.
    pub fn from_sampled_parts(
        x: Array<i64>,
        edge_index: Vec<[usize; 2]>,
        edge_attr: Option<Array<i64>>,
        y: Array<f32>,
        sampling: SamplingInfo,
    ) -> Result<Graph> {
        let mut graph = Graph::new(x, edge_index)?;
        if let Some(attr) = edge_attr {
            graph = graph.with_edge_attr(attr)?;
        }
        graph.y = y;
        graph.sampling = Some(sampling);
        Ok(graph)
    }
}
