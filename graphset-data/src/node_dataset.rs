//! Node-level tasks: one large graph split by nodes into sampled subgraphs.

use crate::cache::{ItemCache, DEFAULT_CACHE_CAPACITY};
use crate::config::DatasetConfig;
use crate::datasets::Dataset;
use crate::neighbor_loader::DEFAULT_NUM_NEIGHBORS;
use crate::split::SplitIndices;
use crate::subgraph_dataset::RandomSubgraphDataset;
use graphset_core::{Graph, GraphsetError, Result};
use log::debug;
use std::fmt;

/// Default number of seed nodes per sampled subgraph.
pub const DEFAULT_BATCH_SIZE: usize = 4;

/// Splits the nodes of the first graph of a dataset into train / validation /
/// test partitions, each served as a [`RandomSubgraphDataset`].
///
/// Indexing the `NodeDataset` itself returns the whole graph.
pub struct NodeDataset<D> {
    dataset: D,
    seed: u64,
    num_nodes: usize,
    num_data: usize,
    split: SplitIndices,
    train_data: RandomSubgraphDataset,
    valid_data: RandomSubgraphDataset,
    test_data: RandomSubgraphDataset,
    cache: ItemCache<Graph>,
}

impl<D: Dataset<Item = Graph>> NodeDataset<D> {
    /// Creates a node dataset with the default fan-out and cache capacity.
    pub fn new(dataset: D, seed: u64, batch_size: usize) -> Result<Self> {
        let config = DatasetConfig {
            seed,
            batch_size,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            num_neighbors: DEFAULT_NUM_NEIGHBORS.to_vec(),
        };
        Self::from_config(dataset, &config)
    }

    /// Creates a node dataset from `config`.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::EmptyDataset` if `dataset` holds no graph and
    /// `GraphsetError::Config` for an invalid configuration.
    pub fn from_config(dataset: D, config: &DatasetConfig) -> Result<Self> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(GraphsetError::EmptyDataset);
        }
        let graph = dataset.get(0)?;
        let num_nodes = graph.num_nodes();
        let split = SplitIndices::random(num_nodes, config.seed)?;

        let partition = |nodes: &[usize]| -> Result<RandomSubgraphDataset> {
            RandomSubgraphDataset::with_options(
                graph.subgraph(nodes)?,
                config.batch_size,
                config.num_neighbors.clone(),
                config.seed,
                config.cache_capacity,
            )
        };
        let train_data = partition(&split.train)?;
        let valid_data = partition(&split.valid)?;
        let test_data = partition(&split.test)?;
        let num_data = train_data.len() + valid_data.len() + test_data.len();

        debug!(
            "NodeDataset: {} nodes -> {} train, {} valid, {} test subgraphs",
            num_nodes,
            train_data.len(),
            valid_data.len(),
            test_data.len()
        );

        Ok(NodeDataset {
            dataset,
            seed: config.seed,
            num_nodes,
            num_data,
            split,
            train_data,
            valid_data,
            test_data,
            cache: ItemCache::new(config.cache_capacity),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn train_idx(&self) -> &[usize] {
        &self.split.train
    }

    pub fn valid_idx(&self) -> &[usize] {
        &self.split.valid
    }

    pub fn test_idx(&self) -> &[usize] {
        &self.split.test
    }

    pub fn train_data(&self) -> &RandomSubgraphDataset {
        &self.train_data
    }

    pub fn valid_data(&self) -> &RandomSubgraphDataset {
        &self.valid_data
    }

    pub fn test_data(&self) -> &RandomSubgraphDataset {
        &self.test_data
    }

    pub fn cache(&self) -> &ItemCache<Graph> {
        &self.cache
    }
}

impl<D: Dataset<Item = Graph>> Dataset for NodeDataset<D> {
    type Item = Graph;

    /// Returns the whole graph, tagged with index 0 and flattened labels.
    fn get(&self, index: usize) -> Result<Self::Item> {
        if index >= self.num_data {
            return Err(GraphsetError::IndexOutOfBounds {
                index,
                len: self.num_data,
            });
        }
        self.cache.get_or_try_insert_with(index, || {
            let mut graph = self.dataset.get(0)?;
            graph.set_idx(0);
            graph.flatten_labels();
            Ok(graph)
        })
    }

    /// Total number of subgraphs over the three partitions.
    fn len(&self) -> usize {
        self.num_data
    }
}

impl<D> fmt::Debug for NodeDataset<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDataset")
            .field("seed", &self.seed)
            .field("num_nodes", &self.num_nodes)
            .field("num_data", &self.num_data)
            .field("train_subgraphs", &self.train_data.subgraphs().len())
            .field("valid_subgraphs", &self.valid_data.subgraphs().len())
            .field("test_subgraphs", &self.test_data.subgraphs().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "node_dataset_test.rs"]
mod tests;
