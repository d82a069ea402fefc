//! Test module organization for the string queue

pub mod reorder;
