// graphset-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits the indices of a dataset.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over the indices of a dataset of `dataset_len` items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices the iterator will yield.
    ///
    /// May differ from `dataset_len` for samplers drawing a fixed number of
    /// samples.
    fn len(&self, dataset_len: usize) -> usize;
}
