use crate::cache::{ItemCache, DEFAULT_CACHE_CAPACITY};
use crate::datasets::Dataset;
use crate::neighbor_loader::{NeighborLoader, DEFAULT_NUM_NEIGHBORS};
use crate::preprocess::{preprocess_item, PreprocessedGraph};
use graphset_core::{Graph, GraphsetError, Result};
use log::debug;

/// A dataset of neighbor-sampled subgraphs carved out of one graph.
///
/// The subgraphs are drawn eagerly at construction: one shuffled epoch of a
/// [`NeighborLoader`], i.e. `ceil(num_nodes / batch_size)` subgraphs. Items are
/// preprocessed on first access and memoised.
#[derive(Debug)]
pub struct RandomSubgraphDataset {
    graph: Graph,
    batch_size: usize,
    num_neighbors: Vec<usize>,
    subgraphs: Vec<Graph>,
    cache: ItemCache<PreprocessedGraph>,
}

impl RandomSubgraphDataset {
    /// Samples subgraphs of `graph` with the default fan-out `[2, 3]`.
    pub fn new(graph: Graph, batch_size: usize, seed: u64) -> Result<Self> {
        Self::with_options(
            graph,
            batch_size,
            DEFAULT_NUM_NEIGHBORS.to_vec(),
            seed,
            DEFAULT_CACHE_CAPACITY,
        )
    }

    /// Samples subgraphs of `graph` with an explicit fan-out and cache capacity.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::Config` if `batch_size` is zero, or any error
    /// raised while sampling.
    pub fn with_options(
        graph: Graph,
        batch_size: usize,
        num_neighbors: Vec<usize>,
        seed: u64,
        cache_capacity: usize,
    ) -> Result<Self> {
        let loader = NeighborLoader::new(&graph, num_neighbors.clone(), batch_size, true, seed)?;
        let subgraphs = loader.collect::<Result<Vec<_>>>()?;
        debug!(
            "RandomSubgraphDataset: {} nodes -> {} subgraphs (batch_size {}, fan-out {:?})",
            graph.num_nodes(),
            subgraphs.len(),
            batch_size,
            num_neighbors
        );
        Ok(RandomSubgraphDataset {
            graph,
            batch_size,
            num_neighbors,
            subgraphs,
            cache: ItemCache::new(cache_capacity),
        })
    }

    /// The graph the subgraphs were sampled from.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn num_neighbors(&self) -> &[usize] {
        &self.num_neighbors
    }

    /// The raw sampled subgraphs, before preprocessing.
    pub fn subgraphs(&self) -> &[Graph] {
        &self.subgraphs
    }

    pub fn cache(&self) -> &ItemCache<PreprocessedGraph> {
        &self.cache
    }
}

impl Dataset for RandomSubgraphDataset {
    type Item = PreprocessedGraph;

    fn get(&self, index: usize) -> Result<Self::Item> {
        self.cache.get_or_try_insert_with(index, || {
            let mut item = self
                .subgraphs
                .get(index)
                .cloned()
                .ok_or(GraphsetError::IndexOutOfBounds {
                    index,
                    len: self.subgraphs.len(),
                })?;
            item.set_idx(index);
            item.flatten_labels();
            preprocess_item(&item)
        })
    }

    fn len(&self) -> usize {
        self.subgraphs.len()
    }
}
