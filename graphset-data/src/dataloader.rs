// graphset-data/src/dataloader.rs
//! # DataLoader
//!
//! Groups the items of a [`Dataset`] into batches, in the order chosen by a
//! [`Sampler`].
//!
//! ```rust
//! use graphset_data::dataloader::DataLoader;
//! use graphset_data::datasets::VecDataset;
//! use graphset_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None).unwrap();
//! for batch in loader {
//!     println!("Batch: {:?}", batch.unwrap());
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use graphset_core::{GraphsetError, Result};
use log::debug;

/// Assembles the items of one batch before they are yielded.
pub type CollateFn<D> =
    Box<dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>> + Send + Sync>;

/// Batches the items of a dataset.
///
/// Iterating yields `Result<Vec<Item>>`: the first error raised while
/// fetching an item is returned in place of its batch.
pub struct DataLoader<D: Dataset, S: Sampler> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    /// Skip the final batch when it is smaller than `batch_size`.
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new `DataLoader`.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::Config` if `batch_size` is zero.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(GraphsetError::Config(
                "DataLoader batch_size must be positive".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        debug!(
            "DataLoader: {} samples drawn from {} items, batch_size {}, drop_last {}",
            sampler.len(dataset.len()),
            dataset.len(),
            batch_size,
            drop_last
        );
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        })
    }

    /// Number of batches a full pass yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match &self.collate_fn {
            Some(collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
