//! Graph-level dataset wrapper with train / validation / test partitions.

use crate::cache::{ItemCache, DEFAULT_CACHE_CAPACITY};
use crate::config::DatasetConfig;
use crate::datasets::{Dataset, Subset};
use crate::preprocess::{preprocess_item, PreprocessedGraph};
use crate::split::SplitIndices;
use graphset_core::{Graph, GraphsetError, Result};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Where a [`GraphDataset`] reads its raw graphs from.
enum Source<D> {
    /// The wrapped dataset itself.
    Full(Arc<D>),
    /// A re-indexed view of another source.
    Selected(Subset<Source<D>>),
    /// Several datasets read back to back.
    Chained(Vec<Arc<D>>),
}

impl<D: Dataset<Item = Graph>> Dataset for Source<D> {
    type Item = Graph;

    fn get(&self, index: usize) -> Result<Graph> {
        match self {
            Source::Full(dataset) => dataset.get(index),
            Source::Selected(subset) => subset.get(index),
            Source::Chained(parts) => {
                let mut offset = index;
                for part in parts {
                    if offset < part.len() {
                        return part.get(offset);
                    }
                    offset -= part.len();
                }
                Err(GraphsetError::IndexOutOfBounds {
                    index,
                    len: self.len(),
                })
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Source::Full(dataset) => dataset.len(),
            Source::Selected(subset) => subset.len(),
            Source::Chained(parts) => parts.iter().map(|p| p.len()).sum(),
        }
    }
}

struct Partitions<D> {
    train: GraphDataset<D>,
    valid: GraphDataset<D>,
    test: GraphDataset<D>,
}

/// Wraps a dataset of graphs, splits it into train / validation / test
/// partitions and serves preprocessed items through a bounded LRU cache.
///
/// The partitions are themselves `GraphDataset`s (without partitions of their
/// own) sharing the wrapped dataset.
pub struct GraphDataset<D> {
    source: Arc<Source<D>>,
    num_data: usize,
    seed: u64,
    split: Option<SplitIndices>,
    partitions: Option<Box<Partitions<D>>>,
    cache: ItemCache<PreprocessedGraph>,
}

impl<D: Dataset<Item = Graph>> GraphDataset<D> {
    /// Wraps `dataset` and splits it randomly: `len / 10` test samples, then
    /// `len / 5` validation samples from the remainder, the rest for training.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::EmptyDataset` if `dataset` has no samples.
    pub fn new(dataset: D, seed: u64) -> Result<Self> {
        Self::with_cache_capacity(dataset, seed, DEFAULT_CACHE_CAPACITY)
    }

    /// Same as [`GraphDataset::new`] with an explicit cache capacity.
    pub fn with_cache_capacity(dataset: D, seed: u64, cache_capacity: usize) -> Result<Self> {
        if dataset.is_empty() {
            return Err(GraphsetError::EmptyDataset);
        }
        let num_data = dataset.len();
        let split = SplitIndices::random(num_data, seed)?;
        let source = Arc::new(Source::Full(Arc::new(dataset)));
        Self::partitioned(source, num_data, seed, split, cache_capacity)
    }

    /// Builds the partitions from `config`.
    pub fn from_config(dataset: D, config: &DatasetConfig) -> Result<Self> {
        config.validate()?;
        Self::with_cache_capacity(dataset, config.seed, config.cache_capacity)
    }

    /// Wraps `dataset` with caller-supplied partition indices.
    ///
    /// `len()` of the result is the total number of supplied indices.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::IndexOutOfBounds` if an index does not address
    /// a sample of `dataset`.
    pub fn with_split_indices(dataset: D, seed: u64, split: SplitIndices) -> Result<Self> {
        split.validate_against(dataset.len())?;
        let num_data = split.len();
        let source = Arc::new(Source::Full(Arc::new(dataset)));
        Self::partitioned(source, num_data, seed, split, DEFAULT_CACHE_CAPACITY)
    }

    /// Wraps three already-split datasets.
    ///
    /// No split indices are recorded. The combined dataset reads the train,
    /// validation and test samples back to back.
    pub fn from_sets(train_set: D, valid_set: D, test_set: D, seed: u64) -> Self {
        let parts = [Arc::new(train_set), Arc::new(valid_set), Arc::new(test_set)];
        let mut dataset =
            GraphDataset::leaf(Arc::new(Source::Chained(parts.to_vec())), seed, DEFAULT_CACHE_CAPACITY);
        let [train, valid, test] = parts;
        let partitions = Partitions {
            train: dataset.create_subset(train),
            valid: dataset.create_subset(valid),
            test: dataset.create_subset(test),
        };
        debug!(
            "GraphDataset::from_sets: train {}, valid {}, test {}",
            partitions.train.len(),
            partitions.valid.len(),
            partitions.test.len()
        );
        dataset.partitions = Some(Box::new(partitions));
        dataset
    }

    fn partitioned(
        source: Arc<Source<D>>,
        num_data: usize,
        seed: u64,
        split: SplitIndices,
        cache_capacity: usize,
    ) -> Result<Self> {
        let mut dataset = GraphDataset {
            source,
            num_data,
            seed,
            split: None,
            partitions: None,
            cache: ItemCache::new(cache_capacity),
        };
        let partitions = Partitions {
            train: dataset.index_select(&split.train)?,
            valid: dataset.index_select(&split.valid)?,
            test: dataset.index_select(&split.test)?,
        };
        debug!(
            "GraphDataset: {} samples split into train {}, valid {}, test {} (seed {})",
            num_data,
            split.train.len(),
            split.valid.len(),
            split.test.len(),
            seed
        );
        dataset.split = Some(split);
        dataset.partitions = Some(Box::new(partitions));
        Ok(dataset)
    }

    fn leaf(source: Arc<Source<D>>, seed: u64, cache_capacity: usize) -> Self {
        GraphDataset {
            num_data: source.len(),
            source,
            seed,
            split: None,
            partitions: None,
            cache: ItemCache::new(cache_capacity),
        }
    }

    /// Returns a view of this dataset restricted to `indices`.
    ///
    /// The view has no partitions of its own and its own item cache.
    pub fn index_select(&self, indices: &[usize]) -> Result<GraphDataset<D>> {
        let subset = Subset::new(Arc::clone(&self.source), indices.to_vec())?;
        let source = Arc::new(Source::Selected(subset));
        Ok(GraphDataset::leaf(source, self.seed, self.cache.capacity()))
    }

    /// Wraps another dataset with this dataset's seed and cache settings.
    ///
    /// Accepts the dataset by value or already shared behind an `Arc`.
    pub fn create_subset(&self, subset: impl Into<Arc<D>>) -> GraphDataset<D> {
        let source = Arc::new(Source::Full(subset.into()));
        GraphDataset::leaf(source, self.seed, self.cache.capacity())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn split_indices(&self) -> Option<&SplitIndices> {
        self.split.as_ref()
    }

    pub fn train_idx(&self) -> Option<&[usize]> {
        self.split.as_ref().map(|s| s.train.as_slice())
    }

    pub fn valid_idx(&self) -> Option<&[usize]> {
        self.split.as_ref().map(|s| s.valid.as_slice())
    }

    pub fn test_idx(&self) -> Option<&[usize]> {
        self.split.as_ref().map(|s| s.test.as_slice())
    }

    pub fn train_data(&self) -> Option<&GraphDataset<D>> {
        self.partitions.as_ref().map(|p| &p.train)
    }

    pub fn valid_data(&self) -> Option<&GraphDataset<D>> {
        self.partitions.as_ref().map(|p| &p.valid)
    }

    pub fn test_data(&self) -> Option<&GraphDataset<D>> {
        self.partitions.as_ref().map(|p| &p.test)
    }

    pub fn cache(&self) -> &ItemCache<PreprocessedGraph> {
        &self.cache
    }
}

impl<D: Dataset<Item = Graph>> Dataset for GraphDataset<D> {
    type Item = PreprocessedGraph;

    /// Fetches sample `index`, tags it with its index, flattens its labels
    /// and preprocesses it. Results are memoised.
    fn get(&self, index: usize) -> Result<Self::Item> {
        if index >= self.num_data {
            return Err(GraphsetError::IndexOutOfBounds {
                index,
                len: self.num_data,
            });
        }
        self.cache.get_or_try_insert_with(index, || {
            let mut item = self.source.get(index)?;
            item.set_idx(index);
            item.flatten_labels();
            preprocess_item(&item)
        })
    }

    fn len(&self) -> usize {
        self.num_data
    }
}

impl<D> fmt::Debug for GraphDataset<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphDataset")
            .field("num_data", &self.num_data)
            .field("seed", &self.seed)
            .field("split", &self.split)
            .field("partitioned", &self.partitions.is_some())
            .field("cache_capacity", &self.cache.capacity())
            .finish()
    }
}

#[cfg(test)]
#[path = "graph_dataset_test.rs"]
mod tests;
