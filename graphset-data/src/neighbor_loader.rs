//! Mini-batch neighbor sampling over a single graph.

use graphset_core::{Array, Graph, GraphsetError, Result, SamplingInfo};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use std::collections::HashMap;

/// Fan-out per hop used when none is configured.
pub const DEFAULT_NUM_NEIGHBORS: [usize; 2] = [2, 3];

/// Iterates one epoch of neighbor-sampled subgraphs.
///
/// Every node of the graph is used exactly once as a seed. Seeds are grouped
/// into batches of `batch_size` (optionally after a seeded shuffle). For each
/// batch, hop `h` samples up to `num_neighbors[h]` incoming neighbors of every
/// node reached in the previous hop, uniformly and without replacement.
/// The yielded subgraph lists the seed nodes first, followed by the sampled
/// nodes in discovery order, and holds only the sampled edges.
#[derive(Debug)]
pub struct NeighborLoader<'a> {
    graph: &'a Graph,
    num_neighbors: Vec<usize>,
    batch_size: usize,
    incoming: Vec<Vec<(usize, usize)>>,
    seeds: Vec<usize>,
    position: usize,
    rng: StdRng,
}

impl<'a> NeighborLoader<'a> {
    /// Creates a new `NeighborLoader`.
    ///
    /// # Arguments
    ///
    /// * `graph`: The graph to sample from.
    /// * `num_neighbors`: Number of neighbors sampled per node at each hop.
    /// * `batch_size`: Number of seed nodes per subgraph.
    /// * `shuffle`: If `true`, seed nodes are visited in a random order.
    /// * `seed`: Seed of the random generator used for shuffling and sampling.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::Config` if `batch_size` is zero.
    pub fn new(
        graph: &'a Graph,
        num_neighbors: Vec<usize>,
        batch_size: usize,
        shuffle: bool,
        seed: u64,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(GraphsetError::Config(
                "NeighborLoader: batch_size must be > 0".to_string(),
            ));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seeds: Vec<usize> = (0..graph.num_nodes()).collect();
        if shuffle {
            seeds.shuffle(&mut rng);
        }
        Ok(NeighborLoader {
            graph,
            num_neighbors,
            batch_size,
            incoming: graph.incoming(),
            seeds,
            position: 0,
            rng,
        })
    }

    /// Number of batches in one epoch: `ceil(num_nodes / batch_size)`.
    pub fn num_batches(&self) -> usize {
        self.seeds.len().div_ceil(self.batch_size)
    }

    /// Samples the subgraph rooted at `batch`.
    fn sample(&mut self, batch: &[usize]) -> Result<Graph> {
        let mut node_ids: Vec<usize> = batch.to_vec();
        let mut local: HashMap<usize, usize> =
            batch.iter().enumerate().map(|(l, &n)| (n, l)).collect();
        let mut edge_index = Vec::new();
        let mut edge_ids = Vec::new();
        let mut frontier: Vec<usize> = batch.to_vec();

        for &fanout in &self.num_neighbors {
            let mut next_frontier = Vec::new();
            for &dst in &frontier {
                let candidates = &self.incoming[dst];
                let picked: Vec<(usize, usize)> = if candidates.len() <= fanout {
                    candidates.clone()
                } else {
                    index::sample(&mut self.rng, candidates.len(), fanout)
                        .into_iter()
                        .map(|i| candidates[i])
                        .collect()
                };
                let dst_local = local[&dst];
                for (src, edge_id) in picked {
                    let src_local = match local.get(&src) {
                        Some(&l) => l,
                        None => {
                            let l = node_ids.len();
                            node_ids.push(src);
                            local.insert(src, l);
                            next_frontier.push(src);
                            l
                        }
                    };
                    edge_index.push([src_local, dst_local]);
                    edge_ids.push(edge_id);
                }
            }
            frontier = next_frontier;
        }

        debug!(
            "NeighborLoader: batch of {} seeds sampled {} nodes and {} edges",
            batch.len(),
            node_ids.len(),
            edge_index.len()
        );

        let x = self.graph.x().select(&node_ids)?;
        let edge_attr = match self.graph.edge_attr() {
            Some(attr) => Some(attr.select(&edge_ids)?),
            None => None,
        };
        let y: Array<f32> = if self.graph.has_node_labels() {
            self.graph.y().select(&node_ids)?
        } else {
            self.graph.y().clone()
        };
        Graph::from_sampled_parts(
            x,
            edge_index,
            edge_attr,
            y,
            SamplingInfo {
                node_ids,
                num_seeds: batch.len(),
            },
        )
    }
}

impl<'a> Iterator for NeighborLoader<'a> {
    type Item = Result<Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.seeds.len() {
            return None;
        }
        let end = (self.position + self.batch_size).min(self.seeds.len());
        let batch = self.seeds[self.position..end].to_vec();
        self.position = end;
        Some(self.sample(&batch))
    }
}

#[cfg(test)]
#[path = "neighbor_loader_test.rs"]
mod tests;
