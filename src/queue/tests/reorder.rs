//! Reversal and sorting scenarios

use crate::queue::StrQueue;

fn queue_of(values: &[&str]) -> StrQueue {
    let mut queue = StrQueue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

#[test]
fn test_sort_then_drain() {
    let mut queue = queue_of(&["banana", "apple", "cherry"]);
    queue.sort();
    assert_eq!(queue.remove_head().unwrap(), "apple");
    assert_eq!(queue.remove_head().unwrap(), "banana");
    assert_eq!(queue.remove_head().unwrap(), "cherry");
    assert!(queue.is_empty());
}

#[test]
fn test_head_inserts_then_reverse() {
    let mut queue = StrQueue::new();
    queue.insert_head("x").unwrap();
    queue.insert_head("y").unwrap();
    queue.insert_head("z").unwrap();

    queue.reverse();
    assert_eq!(queue.remove_head().unwrap(), "x");
    assert_eq!(queue.remove_head().unwrap(), "y");
}

#[test]
fn test_reverse_swaps_ends() {
    let mut queue = queue_of(&["head", "a", "b", "tail"]);
    queue.reverse();
    assert_eq!(queue.front(), Some("tail"));
    assert_eq!(queue.back(), Some("head"));
    assert_eq!(queue.size(), 4);
    queue.assert_invariants();
}

#[test]
fn test_double_reverse_restores_order() {
    let values = ["one", "two", "three", "four", "five"];
    let mut queue = queue_of(&values);
    queue.reverse();
    queue.reverse();
    assert_eq!(queue.iter().collect::<Vec<_>>(), values.to_vec());
    queue.assert_invariants();
}

#[test]
fn test_sort_already_sorted_is_noop() {
    let mut queue = queue_of(&["a", "b", "c", "d"]);
    let ids = queue.node_ids();
    queue.sort();
    assert_eq!(queue.node_ids(), ids);
}

#[test]
fn test_sort_reverse_sorted() {
    let mut queue = queue_of(&["e", "d", "c", "b", "a"]);
    queue.sort();
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(queue.back(), Some("e"));
    queue.assert_invariants();
}

#[test]
fn test_sort_large_queue() {
    let mut queue = StrQueue::new();
    // Deterministic scramble of 0..1000
    for i in 0..1000u32 {
        queue.insert_tail(&format!("{:04}", (i * 7919) % 1000)).unwrap();
    }
    queue.sort();

    let sorted: Vec<&str> = queue.iter().collect();
    assert_eq!(sorted.len(), 1000);
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(queue.front(), Some("0000"));
    assert_eq!(queue.back(), Some("0999"));
    queue.assert_invariants();
}

#[test]
fn test_sort_stability_with_tags() {
    let mut queue = queue_of(&["a", "b", "a", "c", "a"]);
    // Tag each node with its insertion position
    let tags: Vec<_> = queue.node_ids();

    queue.sort();
    let order: Vec<usize> = queue
        .node_ids()
        .iter()
        .map(|id| tags.iter().position(|t| t == id).unwrap())
        .collect();
    assert_eq!(order, vec![0, 2, 4, 1, 3]);
}

#[test]
fn test_sort_then_reverse_then_insert_tail() {
    let mut queue = queue_of(&["m", "z", "a"]);
    queue.sort();
    queue.reverse();
    queue.insert_tail("0").unwrap();
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["z", "m", "a", "0"]);
    queue.assert_invariants();
}
