// graphset-data/src/datasets/traits.rs

use graphset_core::Result;
use std::sync::Arc;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a graph, a
/// preprocessed graph, or any other custom type that implements
/// `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::IndexOutOfBounds` if the index is out of bounds,
    /// or whatever error producing the item raised.
    fn get(&self, index: usize) -> Result<Self::Item>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<D: Dataset + ?Sized> Dataset for Arc<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item> {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
