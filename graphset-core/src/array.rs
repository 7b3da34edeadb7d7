// src/array.rs

use crate::error::{GraphsetError, Result};
use num_traits::Zero;
use std::ops::Index;

/// Dense row-major n-dimensional array.
///
/// Used for node features, edge attributes, labels and the structural
/// encodings computed during preprocessing. The invariant
/// `data.len() == shape.iter().product()` is established by every constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}

impl<T> Array<T> {
    /// Creates a new array from a flat buffer and a shape.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::ArrayCreationError` if the buffer length does not
    /// match the number of elements described by `shape`.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(GraphsetError::ArrayCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Array { data, shape })
    }

    /// Creates a rank-1 array from a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Array {
            data,
            shape: vec![len],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Size of the first dimension, `1` for scalars.
    pub fn leading_dim(&self) -> usize {
        self.shape.first().copied().unwrap_or(1)
    }

    /// Number of elements in one entry along dimension 0.
    fn row_len(&self) -> usize {
        self.shape.iter().skip(1).product()
    }

    /// Converts a multi-dimensional index into a flat offset.
    fn offset(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.shape.len() {
            return Err(GraphsetError::RankMismatch {
                expected: self.shape.len(),
                actual: index.len(),
            });
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(self.shape.iter()) {
            if i >= dim {
                return Err(GraphsetError::IndexOutOfBounds { index: i, len: dim });
            }
            offset = offset * dim + i;
        }
        Ok(offset)
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.offset(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Contiguous slice holding the `i`-th entry along dimension 0.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        if self.shape.is_empty() {
            return Err(GraphsetError::RankMismatch {
                expected: 1,
                actual: 0,
            });
        }
        if i >= self.shape[0] {
            return Err(GraphsetError::IndexOutOfBounds {
                index: i,
                len: self.shape[0],
            });
        }
        let width = self.row_len();
        Ok(&self.data[i * width..(i + 1) * width])
    }

    /// Mutable counterpart of [`Array::row`].
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T]> {
        if self.shape.is_empty() {
            return Err(GraphsetError::RankMismatch {
                expected: 1,
                actual: 0,
            });
        }
        if i >= self.shape[0] {
            return Err(GraphsetError::IndexOutOfBounds {
                index: i,
                len: self.shape[0],
            });
        }
        let width = self.row_len();
        Ok(&mut self.data[i * width..(i + 1) * width])
    }

    /// Returns an array with the same data and a new shape.
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self> {
        Array::new(self.data, shape)
    }

    /// Collapses the array to rank 1 (`reshape(-1)`).
    pub fn flatten(self) -> Self {
        Array::from_vec(self.data)
    }

    /// Applies `f` element-wise, keeping the shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Array<U> {
        Array {
            data: self.data.iter().map(f).collect(),
            shape: self.shape.clone(),
        }
    }
}

impl<T: Clone> Array<T> {
    /// Creates an array filled with `value`.
    pub fn full(shape: Vec<usize>, value: T) -> Self {
        let numel = shape.iter().product();
        Array {
            data: vec![value; numel],
            shape,
        }
    }

    /// Gathers entries along dimension 0, in the order given by `indices`.
    ///
    /// # Errors
    ///
    /// Returns `GraphsetError::IndexOutOfBounds` for any index past the first
    /// dimension and `GraphsetError::RankMismatch` for scalars.
    pub fn select(&self, indices: &[usize]) -> Result<Self> {
        if self.shape.is_empty() {
            return Err(GraphsetError::RankMismatch {
                expected: 1,
                actual: 0,
            });
        }
        let width = self.row_len();
        let mut data = Vec::with_capacity(indices.len() * width);
        for &i in indices {
            data.extend_from_slice(self.row(i)?);
        }
        let mut shape = self.shape.clone();
        shape[0] = indices.len();
        Ok(Array { data, shape })
    }
}

impl<T: Clone + Zero> Array<T> {
    /// Creates an array filled with zeros.
    pub fn zeros(shape: Vec<usize>) -> Self {
        Array::full(shape, T::zero())
    }
}

impl<T> Index<&[usize]> for Array<T> {
    type Output = T;

    /// # Panics
    /// Panics if the index rank or any coordinate is out of bounds.
    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.offset(index) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("Invalid index {:?} for shape {:?}: {}", index, self.shape, e),
        }
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod tests;
