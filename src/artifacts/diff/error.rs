use std::ops::Range;

/// Fatal conditions raised by the alignment and rendering core
///
/// None of these are data problems: each one means an aligner broke its
/// contract (or the positional aligner was handed incompatible streams),
/// and the whole comparison is aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    #[error("replace op range lengths should match: a{a:?} <=> b{b:?}")]
    ReplaceRangeMismatch { a: Range<usize>, b: Range<usize> },

    #[error("unknown diff op: {0}")]
    UnknownOp(String),

    #[error("token kinds do not match at position {index}: {a} <=> {b}")]
    KindMismatch { index: usize, a: String, b: String },

    #[error("op range {range:?} is out of bounds for sequence {side} of length {len}")]
    RangeOutOfBounds {
        side: char,
        range: Range<usize>,
        len: usize,
    },
}
