//! Token diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper, logging setup)
//! - `diff`: Sequence alignment and diff rendering
//! - `tokens`: Token extraction and the safe-token set

pub mod core;
pub mod diff;
pub mod tokens;
