//! String Queue
//!
//! A queue of strings backed by a singly linked list. It supports O(1)
//! insertion at both ends, O(1) removal from the head, in-place reversal and
//! a stable merge sort that only relinks nodes.
//!
//! # Architecture
//!
//! - **StrQueue**: the queue itself and its public operations
//! - **NodeArena**: owning, index-linked node storage
//! - **handle**: free functions over a queue that may be absent
//! - **memory**: fallible payload and node allocation
//!
//! # Usage
//!
//! ```rust
//! use strqueue::queue::StrQueue;
//!
//! let mut queue = StrQueue::new();
//! queue.insert_tail("banana").unwrap();
//! queue.insert_tail("apple").unwrap();
//! queue.insert_head("cherry").unwrap();
//!
//! queue.sort();
//! assert_eq!(queue.remove_head().unwrap(), "apple");
//!
//! queue.reverse();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["cherry", "banana"]);
//! ```

pub mod error;
pub mod handle;
pub mod memory;
mod node;
mod sort;
pub mod statistics;
pub mod string_queue;

// Re-export main types for convenience
pub use error::{QueueError, QueueResult};
pub use statistics::QueueStatistics;
pub use string_queue::{Iter, StrQueue};

#[cfg(test)]
mod tests;
