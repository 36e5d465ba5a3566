/*!
 * Collection Types
 * Common types, errors and statistics for the container subsystem
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Collection operation result
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Collection errors
///
/// Every failure leaves the container in the state it had before the call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CollectionError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(collections::invalid_argument),
        help("Check sizes, capacities and keys passed to the container.")
    )]
    InvalidArgument(String),

    #[error("Index {index} out of bounds (len {len})")]
    #[diagnostic(
        code(collections::index_out_of_bounds),
        help("Indices must be smaller than the container length.")
    )]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Container is empty")]
    #[diagnostic(code(collections::empty))]
    Empty,

    #[error("Container is full ({capacity} items)")]
    #[diagnostic(
        code(collections::full),
        help("Drain the ring buffer before writing more items.")
    )]
    Full { capacity: usize },

    #[error("Capacity exceeded: fixed capacity of {capacity} items")]
    #[diagnostic(
        code(collections::capacity_exceeded),
        help("Fixed arrays never grow. Use a DynamicArray for unbounded pushes.")
    )]
    CapacityExceeded { capacity: usize },

    #[error("Allocation failed: requested {requested} bytes")]
    #[diagnostic(
        code(collections::allocation_failed),
        help("System may be low on memory. The container is unchanged.")
    )]
    AllocationFailed { requested: usize },

    #[error("Node handle does not belong to this list")]
    #[diagnostic(
        code(collections::invalid_node),
        help("The node was already removed or comes from another list.")
    )]
    InvalidNode,

    #[error("Value not found")]
    #[diagnostic(code(collections::not_found))]
    NotFound,

    #[error("Key not found: {0}")]
    #[diagnostic(code(collections::key_not_found))]
    KeyNotFound(String),

    #[error("Output buffer too small: need {required} bytes, got {provided}")]
    #[diagnostic(code(collections::buffer_too_small))]
    BufferTooSmall { required: usize, provided: usize },

    #[error("File is empty: {0}")]
    #[diagnostic(code(collections::empty_file))]
    EmptyFile(String),

    #[error("I/O error on {path}: {message}")]
    #[diagnostic(
        code(collections::io_error),
        help("Check file permissions and disk space.")
    )]
    Io { path: String, message: String },
}

impl CollectionError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        CollectionError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn index(index: usize, len: usize) -> Self {
        if len == 0 {
            CollectionError::Empty
        } else {
            CollectionError::IndexOutOfBounds { index, len }
        }
    }
}

/// Which end of a list-backed container an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum End {
    Front,
    #[default]
    Back,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            End::Front => write!(f, "FRONT"),
            End::Back => write!(f, "BACK"),
        }
    }
}

/// Result of a hash table insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was created
    Inserted,
    /// An existing entry had its value replaced
    Replaced,
}

/// Dynamic array statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayStats {
    pub len: usize,
    pub capacity: usize,
    pub initial_capacity: usize,
    pub element_size: usize,
    pub reallocations: usize,
}

impl ArrayStats {
    /// Percentage of capacity holding live elements
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.len as f64 / self.capacity as f64 * 100.0
        }
    }
}

/// Hash table statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashTableStats {
    pub size: usize,
    pub bucket_count: usize,
    pub empty_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

/// Reject zero-sized element types where a zero element size is invalid
pub(crate) fn ensure_sized<T>(container: &str) -> CollectionResult<()> {
    if std::mem::size_of::<T>() == 0 {
        return Err(CollectionError::InvalidArgument(format!(
            "{} requires a non-zero element size",
            container
        )));
    }
    Ok(())
}

/// Bytes needed for `count` elements of `T`
pub(crate) fn bytes_for<T>(count: usize) -> usize {
    count.saturating_mul(std::mem::size_of::<T>())
}
