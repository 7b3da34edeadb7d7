use super::traits::Dataset;
use graphset_core::{Graph, GraphsetError, Result};
use std::sync::Arc;

/// An in-memory dataset over shared storage.
///
/// Cloning a `VecDataset` is cheap: all clones read the same items.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + Sync + 'static`.
#[derive(Debug)]
pub struct VecDataset<T> {
    data: Arc<[T]>,
}

impl<T> Clone for VecDataset<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data: data.into() }
    }

    /// Borrows the stored items.
    pub fn items(&self) -> &[T] {
        &self.data
    }
}

impl VecDataset<Graph> {
    /// Creates a dataset of graph examples.
    pub fn from_graphs(graphs: impl IntoIterator<Item = Graph>) -> Self {
        Self::new(graphs.into_iter().collect())
    }
}

impl<T: Clone + Send + Sync + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at the given index.
    fn get(&self, index: usize) -> Result<Self::Item> {
        self.data
            .as_ref()
            .get(index)
            .cloned()
            .ok_or(GraphsetError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
