//! Core data model for graphset: dense arrays, graph samples and the shared
//! error type.

pub mod array;
pub mod error;
pub mod graph;

pub use array::Array;
pub use error::{GraphsetError, Result};
pub use graph::{Graph, SamplingInfo};

// Re-export traits required by public functions/structs
pub use num_traits;
