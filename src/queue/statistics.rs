//! Queue Statistics
//!
//! Counters maintained incrementally by the queue's mutating operations, and
//! the snapshot type handed out to callers.

use serde::{Deserialize, Serialize};

/// Running counters owned by a queue
#[derive(Debug, Clone, Default)]
pub(crate) struct Counters {
    pub payload_bytes: usize,
    pub peak_payload_bytes: usize,
    pub total_inserted: u64,
    pub total_removed: u64,
}

impl Counters {
    pub fn update_on_insert(&mut self, payload_len: usize) {
        self.payload_bytes += payload_len;
        self.peak_payload_bytes = self.peak_payload_bytes.max(self.payload_bytes);
        self.total_inserted += 1;
    }

    pub fn update_on_remove(&mut self, payload_len: usize) {
        self.payload_bytes = self.payload_bytes.saturating_sub(payload_len);
        self.total_removed += 1;
    }
}

/// Point-in-time view of a queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueStatistics {
    /// Number of elements
    pub size: usize,

    /// Bytes held by payloads currently queued
    pub payload_bytes: usize,

    /// Highest `payload_bytes` seen so far
    pub peak_payload_bytes: usize,

    /// Successful insertions over the queue's lifetime
    pub total_inserted: u64,

    /// Successful removals over the queue's lifetime
    pub total_removed: u64,

    /// Node slots held by the arena
    pub allocated_slots: usize,

    /// Node slots waiting for reuse
    pub vacant_slots: usize,
}

impl QueueStatistics {
    /// One-line summary used by the shell's `stats` command
    pub fn to_compact_format(&self) -> String {
        format!(
            "Size: {} | Payload: {} bytes (peak {}) | Inserted: {} | Removed: {} | Slots: {} ({} vacant)",
            self.size,
            self.payload_bytes,
            self.peak_payload_bytes,
            self.total_inserted,
            self.total_removed,
            self.allocated_slots,
            self.vacant_slots
        )
    }
}
