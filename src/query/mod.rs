//! Resource query-string parsing.

pub mod id;
