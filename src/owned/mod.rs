//! Heap-backed helpers: duplication, comparison, growing concatenation.

pub mod compare;
pub mod concat;
pub mod dup;
