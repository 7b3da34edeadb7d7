use super::traits::Dataset;
use graphset_core::{GraphsetError, Result};
use std::sync::Arc;

/// A view of a dataset restricted to, and reordered by, a list of indices.
///
/// `get(i)` forwards to `dataset.get(indices[i])`. The underlying dataset is
/// shared, so selecting a subset never copies items.
#[derive(Debug)]
pub struct Subset<D> {
    dataset: Arc<D>,
    indices: Arc<[usize]>,
}

impl<D> Clone for Subset<D> {
    fn clone(&self) -> Self {
        Self {
            dataset: Arc::clone(&self.dataset),
            indices: Arc::clone(&self.indices),
        }
    }
}

impl<D: Dataset> Subset<D> {
    /// Creates a new `Subset`.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::IndexOutOfBounds` if any index is not valid for
    /// `dataset`.
    pub fn new(dataset: Arc<D>, indices: Vec<usize>) -> Result<Self> {
        let len = dataset.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(GraphsetError::IndexOutOfBounds { index, len });
        }
        Ok(Self {
            dataset,
            indices: indices.into(),
        })
    }

    /// Indices into the underlying dataset, in view order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn dataset(&self) -> &Arc<D> {
        &self.dataset
    }
}

impl<D: Dataset> Dataset for Subset<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item> {
        let inner = self
            .indices
            .as_ref()
            .get(index)
            .copied()
            .ok_or(GraphsetError::IndexOutOfBounds {
                index,
                len: self.indices.len(),
            })?;
        self.dataset.get(inner)
    }

    fn len(&self) -> usize {
        self.indices.len()
    }
}
