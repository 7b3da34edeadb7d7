// graphset-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Samples dataset indices in random order.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: Number of indices to draw. Defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
        }
    }

    /// Fixes the seed so that every call to `iter` yields the same order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = self.rng();
        let num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            return Box::new(indices.into_iter());
        }
        if num_samples > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                num_samples, dataset_len
            );
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut rng);
        indices.truncate(num_samples);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
