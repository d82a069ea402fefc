//! Fallible Queue Allocation
//!
//! Every allocation the queue performs goes through this module so that an
//! exhausted allocator is reported as [`QueueError::AllocationFailed`] instead
//! of aborting the process. Callers allocate everything they need before
//! touching any link, which keeps a failed insertion from leaving partial
//! state behind.

use crate::queue::{QueueError, QueueResult};

/// Copy `s` into a freshly allocated, exactly sized payload buffer
pub fn copy_payload(s: &str) -> QueueResult<String> {
    fault::check(s.len())?;

    let mut payload = String::new();
    payload.try_reserve_exact(s.len()).map_err(|_| {
        log::warn!("Payload allocation of {} bytes failed", s.len());
        QueueError::allocation_failed(s.len())
    })?;
    payload.push_str(s);
    Ok(payload)
}

/// Make room for one more element in `slots` without aborting on failure
pub fn reserve_slot<T>(slots: &mut Vec<T>) -> QueueResult<()> {
    let bytes = std::mem::size_of::<T>();
    fault::check(bytes)?;

    slots.try_reserve(1).map_err(|_| {
        log::warn!("Node allocation of {} bytes failed", bytes);
        QueueError::allocation_failed(bytes)
    })
}

#[cfg(not(test))]
mod fault {
    use crate::queue::QueueResult;

    #[inline(always)]
    pub fn check(_bytes: usize) -> QueueResult<()> {
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_payload_is_independent() {
        let original = String::from("payload");
        let copy = copy_payload(&original).unwrap();
        drop(original);
        assert_eq!(copy, "payload");
        assert_eq!(copy.capacity(), "payload".len());
    }

    #[test]
    fn test_copy_empty_payload() {
        let copy = copy_payload("").unwrap();
        assert!(copy.is_empty());
    }

    #[test]
    fn test_reserve_slot_grows_capacity() {
        let mut slots: Vec<u64> = Vec::new();
        reserve_slot(&mut slots).unwrap();
        assert!(slots.capacity() >= 1);
    }

    #[test]
    fn test_injected_failure() {
        fault::fail_after(1);
        assert!(copy_payload("first").is_ok());
        assert_eq!(copy_payload("second"), Err(QueueError::allocation_failed(6)));
        fault::reset();
        assert!(copy_payload("third").is_ok());
    }
}
