//! Command implementations
//!
//! - `compare`: Pair files of two trees by name and report token differences

pub mod compare;
