//! Queue Error Types
//!
//! Defines error types specific to the queue operations.

use thiserror::Error;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur during queue operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Operation invoked without a queue
    #[error("No queue - operation requires an existing queue")]
    InvalidArgument,

    /// The allocator could not satisfy a request
    #[error("Allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    /// Removal attempted with no elements present
    #[error("Queue is empty - nothing to remove")]
    Empty,
}

impl QueueError {
    /// Create an allocation failed error
    pub fn allocation_failed(bytes: usize) -> Self {
        Self::AllocationFailed { bytes }
    }
}
