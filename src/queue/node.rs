//! Node Storage
//!
//! Nodes live in an owned arena and link to each other by index. A removed
//! node's slot is put on an intrusive free list and reused by the next
//! insertion, so removal never allocates and a stale index can never reach
//! a freed payload through the queue's own links.

use crate::queue::memory;
use crate::queue::QueueResult;

/// Index of a node within the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Link to the next node, or none at the tail
pub type Link = Option<NodeId>;

/// One queued element
#[derive(Debug)]
pub struct Node {
    pub value: String,
    pub next: Link,
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// Owning storage for every node of a queue
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free_head: Option<usize>,
    vacant: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` in a new unlinked node
    ///
    /// The payload has already been copied by the caller; if the arena has to
    /// grow and cannot, `value` is dropped here and the arena is unchanged.
    pub fn allocate(&mut self, value: String) -> QueueResult<NodeId> {
        let node = Node { value, next: None };

        if let Some(index) = self.free_head {
            let next_free = match self.slots[index] {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot {}", index),
            };
            self.slots[index] = Slot::Occupied(node);
            self.free_head = next_free;
            self.vacant -= 1;
            return Ok(NodeId(index));
        }

        memory::reserve_slot(&mut self.slots)?;
        self.slots.push(Slot::Occupied(node));
        Ok(NodeId(self.slots.len() - 1))
    }

    /// Destroy the node at `id`, handing its payload to the caller
    pub fn release(&mut self, id: NodeId) -> String {
        let slot = std::mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant { next_free: self.free_head },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(id.0);
                self.vacant += 1;
                node.value
            }
            Slot::Vacant { .. } => unreachable!("release of vacant slot {}", id.0),
        }
    }

    pub fn get(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.0),
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.0),
        }
    }

    pub fn next(&self, id: NodeId) -> Link {
        self.get(id).next
    }

    pub fn set_next(&mut self, id: NodeId, next: Link) {
        self.get_mut(id).next = next;
    }

    /// Number of slots the arena holds, occupied or not
    pub fn allocated_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn vacant_slots(&self) -> usize {
        self.vacant
    }

    /// Drop every node and payload at once
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.vacant = 0;
    }
}
