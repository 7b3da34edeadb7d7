use thiserror::Error;

/// Custom error type for the graphset workspace.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GraphsetError {
    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Array creation error: data length {data_len} does not match shape {shape:?}")]
    ArrayCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Invalid edge ({src}, {dst}) for a graph with {num_nodes} nodes")]
    InvalidEdge {
        src: usize,
        dst: usize,
        num_nodes: usize,
    },

    #[error("Node {0} appears more than once in the node subset")]
    DuplicateNode(usize),

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIo(String),
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, GraphsetError>;
