//! Copy and concatenation that never write past a caller-supplied capacity.

pub mod concat;
pub mod copy;
