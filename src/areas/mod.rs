//! Comparison inputs and state
//!
//! - `comparator`: Owns the output writer and the options of a run
//! - `workspace`: One side of a comparison (file reading, tree walking)

pub mod comparator;
pub mod workspace;
