//! Seeded train / validation / test splitting of index ranges.

use graphset_core::{GraphsetError, Result};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// The test partition holds `num_data / TEST_DIVISOR` indices.
pub const TEST_DIVISOR: usize = 10;
/// The validation partition holds `num_data / VALID_DIVISOR` indices, taken
/// from what remains after the test partition.
pub const VALID_DIVISOR: usize = 5;

/// Splits `indices` into a train part and a test part of `test_size` entries.
///
/// The indices are shuffled with a `StdRng` seeded from `seed`; the first
/// `test_size` shuffled entries form the test part. Both parts keep the
/// shuffled order, so the same `(indices, test_size, seed)` always yields the
/// same split.
///
/// # Errors
///
/// Returns `GraphsetError::InvalidSplit` if `test_size` exceeds the number of
/// indices.
pub fn train_test_split(
    indices: &[usize],
    test_size: usize,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if test_size > indices.len() {
        return Err(GraphsetError::InvalidSplit(format!(
            "test_size {} is larger than the number of samples {}",
            test_size,
            indices.len()
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shuffled = indices.to_vec();
    shuffled.shuffle(&mut rng);
    let train = shuffled.split_off(test_size);
    Ok((train, shuffled))
}

/// Indices of the train, validation and test partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub valid: Vec<usize>,
    pub test: Vec<usize>,
}

impl SplitIndices {
    pub fn new(train: Vec<usize>, valid: Vec<usize>, test: Vec<usize>) -> Self {
        SplitIndices { train, valid, test }
    }

    /// Randomly partitions `0..num_data`.
    ///
    /// The test partition receives `num_data / 10` indices and the validation
    /// partition `num_data / 5` of the remaining ones. Both steps use `seed`.
    pub fn random(num_data: usize, seed: u64) -> Result<Self> {
        let all: Vec<usize> = (0..num_data).collect();
        let (train_valid, test) = train_test_split(&all, num_data / TEST_DIVISOR, seed)?;
        let (train, valid) = train_test_split(&train_valid, num_data / VALID_DIVISOR, seed)?;
        debug!(
            "SplitIndices::random: {} samples -> train {}, valid {}, test {} (seed {})",
            num_data,
            train.len(),
            valid.len(),
            test.len(),
            seed
        );
        Ok(SplitIndices { train, valid, test })
    }

    /// Total number of indices over the three partitions.
    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the partitions are pairwise disjoint and together cover
    /// exactly `0..num_data`.
    pub fn is_partition_of(&self, num_data: usize) -> bool {
        if self.len() != num_data {
            return false;
        }
        let mut seen = vec![false; num_data];
        for &i in self.train.iter().chain(&self.valid).chain(&self.test) {
            if i >= num_data || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Checks that every index addresses a sample of a dataset of length
    /// `dataset_len`. Overlapping partitions are allowed but reported.
    pub fn validate_against(&self, dataset_len: usize) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.len());
        let mut overlapping = 0usize;
        for &i in self.train.iter().chain(&self.valid).chain(&self.test) {
            if i >= dataset_len {
                return Err(GraphsetError::IndexOutOfBounds {
                    index: i,
                    len: dataset_len,
                });
            }
            if !seen.insert(i) {
                overlapping += 1;
            }
        }
        if overlapping > 0 {
            warn!(
                "SplitIndices: {} indices appear in more than one partition",
                overlapping
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
