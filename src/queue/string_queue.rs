//! String Queue
//!
//! A singly linked queue of owned strings. The queue caches both ends of the
//! chain, so insertion at either end is O(1) and removal happens at the head.
//! It can also be reversed in place and merge sorted.

use std::fmt;

use crate::queue::memory;
use crate::queue::node::{Link, NodeArena, NodeId};
use crate::queue::sort;
use crate::queue::statistics::{Counters, QueueStatistics};
use crate::queue::{QueueError, QueueResult};

/// Linked queue of strings with head and tail access
pub struct StrQueue {
    nodes: NodeArena,
    head: Link,
    tail: Link,
    size: usize,
    counters: Counters,
}

impl StrQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            size: 0,
            counters: Counters::default(),
        }
    }

    /// Copy `s` into a new element placed before the current head
    pub fn insert_head(&mut self, s: &str) -> QueueResult<()> {
        let id = self.allocate_node(s)?;
        self.nodes.set_next(id, self.head);
        if self.head.is_none() {
            self.become_non_empty(id);
        } else {
            self.head = Some(id);
            self.size += 1;
        }
        log::trace!("Inserted {:?} at head, size {}", s, self.size);
        Ok(())
    }

    /// Copy `s` into a new element placed after the current tail
    pub fn insert_tail(&mut self, s: &str) -> QueueResult<()> {
        let id = self.allocate_node(s)?;
        match self.tail {
            Some(tail) => {
                self.nodes.set_next(tail, Some(id));
                self.tail = Some(id);
                self.size += 1;
            }
            None => self.become_non_empty(id),
        }
        log::trace!("Inserted {:?} at tail, size {}", s, self.size);
        Ok(())
    }

    /// Remove the head element and hand its payload to the caller
    pub fn remove_head(&mut self) -> QueueResult<String> {
        let head = self.head.ok_or(QueueError::Empty)?;

        self.head = self.nodes.next(head);
        self.size -= 1;
        let value = self.nodes.release(head);
        self.counters.update_on_remove(value.len());
        if self.head.is_none() {
            self.become_empty();
        }

        log::trace!("Removed {:?} from head, size {}", value, self.size);
        Ok(value)
    }

    /// Remove the head element, copying its payload into `out`
    ///
    /// At most `out.len() - 1` bytes are copied, followed by a `0`
    /// terminator; anything longer is silently cut off. An empty buffer
    /// receives nothing. Returns the number of payload bytes copied.
    pub fn remove_head_into(&mut self, out: Option<&mut [u8]>) -> QueueResult<usize> {
        let value = self.remove_head()?;
        Ok(out.map_or(0, |buf| copy_truncated(&value, buf)))
    }

    /// Number of elements in the queue
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reverse the order of the elements by relinking in place
    pub fn reverse(&mut self) {
        let mut previous: Link = None;
        let mut current = self.head;

        while let Some(id) = current {
            let next = self.nodes.next(id);
            self.nodes.set_next(id, previous);
            previous = Some(id);
            current = next;
        }

        std::mem::swap(&mut self.head, &mut self.tail);
        log::debug!("Reversed queue of {} elements", self.size);
    }

    /// Sort the elements into ascending byte-wise order, keeping equal
    /// elements in their current relative order
    pub fn sort(&mut self) {
        if self.size <= 1 {
            return;
        }

        self.head = sort::merge_sort(&mut self.nodes, self.head);
        self.tail = sort::last_node(&self.nodes, self.head);
        log::debug!("Sorted queue of {} elements", self.size);
    }

    /// Payload at the head, if any
    pub fn front(&self) -> Option<&str> {
        self.head.map(|id| self.nodes.get(id).value.as_str())
    }

    /// Payload at the tail, if any
    pub fn back(&self) -> Option<&str> {
        self.tail.map(|id| self.nodes.get(id).value.as_str())
    }

    /// Iterate over the payloads from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.size,
        }
    }

    pub fn statistics(&self) -> QueueStatistics {
        QueueStatistics {
            size: self.size,
            payload_bytes: self.counters.payload_bytes,
            peak_payload_bytes: self.counters.peak_payload_bytes,
            total_inserted: self.counters.total_inserted,
            total_removed: self.counters.total_removed,
            allocated_slots: self.nodes.allocated_slots(),
            vacant_slots: self.nodes.vacant_slots(),
        }
    }

    /// Copy the payload and store it in an unlinked node
    ///
    /// Nothing is linked until both allocations have succeeded, so a failure
    /// leaves the queue as it was.
    fn allocate_node(&mut self, s: &str) -> QueueResult<NodeId> {
        let payload = memory::copy_payload(s)?;
        let id = self.nodes.allocate(payload)?;
        self.counters.update_on_insert(s.len());
        Ok(id)
    }

    /// A single node becomes both head and tail
    fn become_non_empty(&mut self, id: NodeId) {
        debug_assert_eq!(self.size, 0);
        self.head = Some(id);
        self.tail = Some(id);
        self.size = 1;
    }

    /// The last node has been released
    ///
    /// Vacant slots stay on the free list for the next insertions.
    fn become_empty(&mut self) {
        debug_assert_eq!(self.size, 0);
        self.head = None;
        self.tail = None;
    }

    #[cfg(test)]
    pub(crate) fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.size);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.nodes.next(id);
        }
        ids
    }

    /// Walk the chain and confirm the structural invariants hold
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.size == 0);
        assert_eq!(self.tail.is_none(), self.size == 0);

        let ids = self.node_ids();
        assert_eq!(ids.len(), self.size);
        assert_eq!(ids.last().copied(), self.tail);
        if let Some(tail) = self.tail {
            assert_eq!(self.nodes.next(tail), None);
        }
        assert_eq!(
            self.nodes.allocated_slots() - self.nodes.vacant_slots(),
            self.size
        );
    }
}

impl Default for StrQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StrQueue {
    fn drop(&mut self) {
        log::trace!("Releasing queue with {} elements", self.size);
        self.nodes.clear();
    }
}

impl fmt::Debug for StrQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StrQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over queue payloads, head first
pub struct Iter<'a> {
    nodes: &'a NodeArena,
    next: Link,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.nodes.get(id);
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Copy as much of `value` as fits into `buf`, leaving room for a terminator
fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let copied = value.len().min(room);
    buf[..copied].copy_from_slice(&value.as_bytes()[..copied]);
    buf[copied] = 0;
    copied
}
