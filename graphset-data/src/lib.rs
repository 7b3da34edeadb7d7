//! Dataset wrappers for graph learning: seeded train / validation / test
//! splits, memoised preprocessing of graph samples and neighbor-sampled
//! subgraph datasets for node-level tasks.

pub mod cache;
pub mod config;
pub mod dataloader;
pub mod datasets;
pub mod graph_dataset;
pub mod neighbor_loader;
pub mod node_dataset;
pub mod preprocess;
pub mod samplers;
pub mod split;
pub mod subgraph_dataset;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cache::{ItemCache, DEFAULT_CACHE_CAPACITY};
pub use config::DatasetConfig;
pub use dataloader::DataLoader;
pub use datasets::{Dataset, Subset, VecDataset};
pub use graph_dataset::GraphDataset;
pub use neighbor_loader::NeighborLoader;
pub use node_dataset::NodeDataset;
pub use preprocess::{preprocess_item, PreprocessedGraph};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use split::SplitIndices;
pub use subgraph_dataset::RandomSubgraphDataset;
