//! Merge Sort Over Linked Nodes
//!
//! Top-down merge sort that only rewrites `next` links: no node or payload is
//! created, copied or destroyed. Chains are split at their midpoint by a
//! slow/fast walk and merged back smallest-first, taking from the left chain
//! on ties so equal payloads keep their relative order.

use crate::queue::node::{Link, NodeArena, NodeId};

/// Sort the chain starting at `head`, returning the new head
///
/// Recursion only follows the splits, so the depth is O(log n). Merging is
/// iterative.
pub(crate) fn merge_sort(nodes: &mut NodeArena, head: Link) -> Link {
    let first = match head {
        Some(id) if nodes.next(id).is_some() => id,
        _ => return head,
    };

    let right = split_at_midpoint(nodes, first);
    let left = merge_sort(nodes, Some(first));
    let right = merge_sort(nodes, right);
    merge(nodes, left, right)
}

/// Cut the chain after its midpoint and return the second half
///
/// `fast` starts one node ahead of `slow` and moves two nodes per step, so
/// for an odd length the extra node stays in the first half.
fn split_at_midpoint(nodes: &mut NodeArena, head: NodeId) -> Link {
    let mut slow = head;
    let mut fast = nodes.next(head);

    loop {
        let Some(step) = fast.and_then(|f| nodes.next(f)) else {
            break;
        };
        let Some(mid) = nodes.next(slow) else {
            break;
        };
        slow = mid;
        fast = nodes.next(step);
    }

    let second = nodes.next(slow);
    nodes.set_next(slow, None);
    second
}

/// Merge two sorted chains, preferring `left` when payloads compare equal
fn merge(nodes: &mut NodeArena, mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut last: Link = None;

    let rest = loop {
        let (l, r) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            (Some(_), None) => break left,
            (None, _) => break right,
        };

        let chosen = if nodes.get(r).value < nodes.get(l).value {
            right = nodes.next(r);
            r
        } else {
            left = nodes.next(l);
            l
        };

        match last {
            Some(tail) => nodes.set_next(tail, Some(chosen)),
            None => head = Some(chosen),
        }
        last = Some(chosen);
    };

    match last {
        Some(tail) => {
            nodes.set_next(tail, rest);
            head
        }
        None => rest,
    }
}

/// Walk to the final node of the chain
pub(crate) fn last_node(nodes: &NodeArena, head: Link) -> Link {
    let mut current = head?;
    while let Some(next) = nodes.next(current) {
        current = next;
    }
    Some(current)
}
