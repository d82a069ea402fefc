//! Nullable Queue Handle API
//!
//! Free functions over a queue that may not exist, for drivers that keep a
//! queue slot which can be emptied (the shell's `free` command, for one).
//! An absent queue is never a crash: mutators report `false`, observers
//! report zero, and the remaining operations do nothing.

use crate::queue::{QueueError, QueueResult, StrQueue};

/// Create a new empty queue
///
/// An empty queue does not allocate, so creation cannot fail in practice;
/// the `Option` keeps the absent case expressible for callers.
pub fn create() -> Option<StrQueue> {
    Some(StrQueue::new())
}

/// Release the queue and everything it owns; `None` is a no-op
pub fn destroy(queue: Option<StrQueue>) {
    if let Some(queue) = queue {
        log::debug!("Destroying queue with {} elements", queue.size());
        drop(queue);
    }
}

/// Borrow the queue or report the missing argument
pub fn require(queue: Option<&mut StrQueue>) -> QueueResult<&mut StrQueue> {
    queue.ok_or(QueueError::InvalidArgument)
}

pub fn insert_head(queue: Option<&mut StrQueue>, s: &str) -> bool {
    report("insert_head", require(queue).and_then(|q| q.insert_head(s)))
}

pub fn insert_tail(queue: Option<&mut StrQueue>, s: &str) -> bool {
    report("insert_tail", require(queue).and_then(|q| q.insert_tail(s)))
}

/// Remove the head element, copying at most `out.len() - 1` bytes of it plus
/// a terminator into `out` when a buffer is given
pub fn remove_head(queue: Option<&mut StrQueue>, out: Option<&mut [u8]>) -> bool {
    report(
        "remove_head",
        require(queue).and_then(|q| q.remove_head_into(out)),
    )
}

pub fn size(queue: Option<&StrQueue>) -> usize {
    queue.map_or(0, StrQueue::size)
}

pub fn reverse(queue: Option<&mut StrQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut StrQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn report<T>(operation: &str, result: QueueResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::debug!("{} failed: {}", operation, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_queue() {
        assert!(!insert_head(None, "a"));
        assert!(!insert_tail(None, "a"));
        assert!(!remove_head(None, None));
        assert_eq!(size(None), 0);
        reverse(None);
        sort(None);
        destroy(None);
        assert_eq!(require(None).unwrap_err(), QueueError::InvalidArgument);
    }

    #[test]
    fn test_present_queue() {
        let mut queue = create();
        assert!(insert_tail(queue.as_mut(), "banana"));
        assert!(insert_tail(queue.as_mut(), "apple"));
        assert!(insert_head(queue.as_mut(), "cherry"));
        assert_eq!(size(queue.as_ref()), 3);

        sort(queue.as_mut());
        let mut buf = [0u8; 16];
        assert!(remove_head(queue.as_mut(), Some(&mut buf[..])));
        assert_eq!(&buf[..6], b"apple\0");

        reverse(queue.as_mut());
        assert!(remove_head(queue.as_mut(), None));
        assert_eq!(queue.as_ref().and_then(StrQueue::front), Some("banana"));

        destroy(queue);
    }

    #[test]
    fn test_remove_from_empty_writes_nothing() {
        let mut queue = create();
        let mut buf = [b'?'; 4];
        assert!(!remove_head(queue.as_mut(), Some(&mut buf[..])));
        assert_eq!(&buf, b"????");
        destroy(queue);
    }
}
