//! Property tests for the string queue
//!
//! Each property drives a `StrQueue` alongside a `VecDeque` model and checks
//! that the observable contents agree.

use proptest::prelude::*;
use std::collections::VecDeque;
use strqueue::queue::{QueueError, StrQueue};

#[derive(Debug, Clone)]
enum Op {
    InsertHead(String),
    InsertTail(String),
    RemoveHead,
    Reverse,
    Sort,
}

fn payload() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]{0,3}",
        "[a-zA-Z0-9 ]{0,12}",
        any::<String>(),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => payload().prop_map(Op::InsertHead),
        3 => payload().prop_map(Op::InsertTail),
        2 => Just(Op::RemoveHead),
        1 => Just(Op::Reverse),
        1 => Just(Op::Sort),
    ]
}

fn contents(queue: &StrQueue) -> Vec<String> {
    queue.iter().map(str::to_string).collect()
}

fn queue_from(values: &[String]) -> StrQueue {
    let mut queue = StrQueue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

proptest! {
    #[test]
    fn operations_match_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut queue = StrQueue::new();
        let mut model: VecDeque<String> = VecDeque::new();
        let mut inserted = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::InsertHead(s) => {
                    queue.insert_head(&s).unwrap();
                    model.push_front(s);
                    inserted += 1;
                }
                Op::InsertTail(s) => {
                    queue.insert_tail(&s).unwrap();
                    model.push_back(s);
                    inserted += 1;
                }
                Op::RemoveHead => match model.pop_front() {
                    Some(expected) => {
                        prop_assert_eq!(queue.remove_head().unwrap(), expected);
                        removed += 1;
                    }
                    None => {
                        prop_assert_eq!(queue.remove_head(), Err(QueueError::Empty));
                    }
                },
                Op::Reverse => {
                    queue.reverse();
                    model = model.into_iter().rev().collect();
                }
                Op::Sort => {
                    queue.sort();
                    model.make_contiguous().sort();
                }
            }

            prop_assert_eq!(queue.size(), inserted - removed);
            prop_assert_eq!(queue.front(), model.front().map(String::as_str));
            prop_assert_eq!(queue.back(), model.back().map(String::as_str));
        }

        prop_assert_eq!(contents(&queue), Vec::from(model));
    }

    #[test]
    fn reverse_twice_restores_order(values in prop::collection::vec(payload(), 1..40)) {
        let mut queue = queue_from(&values);
        queue.reverse();
        queue.reverse();
        prop_assert_eq!(contents(&queue), values);
    }

    #[test]
    fn reverse_swaps_ends(values in prop::collection::vec(payload(), 1..40)) {
        let mut queue = queue_from(&values);
        queue.reverse();
        prop_assert_eq!(queue.size(), values.len());
        prop_assert_eq!(queue.front(), values.last().map(String::as_str));
        prop_assert_eq!(queue.back(), values.first().map(String::as_str));
    }

    #[test]
    fn sort_orders_and_is_idempotent(values in prop::collection::vec(payload(), 0..80)) {
        let mut queue = queue_from(&values);
        queue.sort();

        let sorted = contents(&queue);
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(&sorted, &expected);

        queue.sort();
        prop_assert_eq!(contents(&queue), sorted);
    }

    #[test]
    fn remove_into_truncates(value in payload(), capacity in 1usize..16) {
        let mut queue = StrQueue::new();
        queue.insert_tail(&value).unwrap();

        let mut buf = vec![0xffu8; capacity];
        let copied = queue.remove_head_into(Some(&mut buf[..])).unwrap();

        prop_assert_eq!(copied, value.len().min(capacity - 1));
        prop_assert_eq!(&buf[..copied], &value.as_bytes()[..copied]);
        prop_assert_eq!(buf[copied], 0);
        prop_assert!(queue.is_empty());
    }
}

#[test]
fn insert_tail_then_remove_head_on_fresh_queue() {
    let mut queue = StrQueue::new();
    queue.insert_tail("hello").unwrap();
    assert_eq!(queue.remove_head().unwrap(), "hello");
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.front(), None);
}
