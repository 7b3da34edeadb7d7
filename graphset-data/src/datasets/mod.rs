pub mod subset;
pub mod traits;
pub mod vec_dataset;

pub use subset::Subset;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
