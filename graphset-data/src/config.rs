use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::neighbor_loader::DEFAULT_NUM_NEIGHBORS;
use graphset_core::{GraphsetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the dataset wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Seed of every split and of neighbor sampling
    pub seed: u64,

    /// Seed nodes per sampled subgraph (node-level tasks)
    pub batch_size: usize,

    /// Preprocessed items memoised per dataset, 0 disables the cache
    pub cache_capacity: usize,

    /// Neighbors sampled per node at each hop
    pub num_neighbors: Vec<usize>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            batch_size: 4,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            num_neighbors: DEFAULT_NUM_NEIGHBORS.to_vec(),
        }
    }
}

impl DatasetConfig {
    /// Parses a JSON document; missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DatasetConfig = serde_json::from_str(json)
            .map_err(|e| GraphsetError::ConfigIo(format!("invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GraphsetError::ConfigIo(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(GraphsetError::Config("batch_size must be > 0".to_string()));
        }
        if self.num_neighbors.is_empty() {
            return Err(GraphsetError::Config(
                "num_neighbors must list at least one hop".to_string(),
            ));
        }
        Ok(())
    }
}
