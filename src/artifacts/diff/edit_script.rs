//! Edit script representation
//!
//! An edit script is an ordered list of opcodes. Each opcode maps a range
//! of sequence A onto a range of sequence B and says how they relate.
//! A full script partitions both sequences; grouped scripts keep only the
//! change runs plus a bounded amount of surrounding equal context.

use crate::artifacts::diff::error::DiffError;
use derive_new::new;
use std::cmp::{max, min};
use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl OpTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpTag::Equal => "equal",
            OpTag::Replace => "replace",
            OpTag::Delete => "delete",
            OpTag::Insert => "insert",
        }
    }
}

impl Display for OpTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OpTag {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(OpTag::Equal),
            "replace" => Ok(OpTag::Replace),
            "delete" => Ok(OpTag::Delete),
            "insert" => Ok(OpTag::Insert),
            _ => Err(DiffError::UnknownOp(s.to_string())),
        }
    }
}

/// One edit operation: `a[a.start..a.end]` relates to `b[b.start..b.end]` by `tag`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct OpCode {
    pub tag: OpTag,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

impl Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} a[{}:{}] b[{}:{}]",
            self.tag, self.a.start, self.a.end, self.b.start, self.b.end
        )
    }
}

/// A run of `size` equal items starting at `a[a]` and `b[b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

pub trait DiffAlgorithm<T> {
    /// Full edit script partitioning both sequences
    fn opcodes(&self) -> Result<Vec<OpCode>, DiffError>;

    /// Change runs with at most `context` equal items around each change
    fn grouped_opcodes(&self, context: usize) -> Result<Vec<Vec<OpCode>>, DiffError> {
        Ok(group_opcodes(self.opcodes()?, context))
    }
}

/// Append the ops covering one unmatched region
///
/// Same-length regions become a single replace. Regions of different
/// lengths are reported as a delete followed by an insert.
pub fn push_change(ops: &mut Vec<OpCode>, a: Range<usize>, b: Range<usize>) {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => {}
        (false, true) => ops.push(OpCode::new(OpTag::Delete, a, b)),
        (true, false) => ops.push(OpCode::new(OpTag::Insert, a, b)),
        (false, false) if a.len() == b.len() => ops.push(OpCode::new(OpTag::Replace, a, b)),
        (false, false) => {
            ops.push(OpCode::new(OpTag::Delete, a.clone(), b.start..b.start));
            ops.push(OpCode::new(OpTag::Insert, a.end..a.end, b));
        }
    }
}

/// Build a full edit script from sorted, non-overlapping matching blocks
///
/// The last block must be the `(len_a, len_b, 0)` sentinel.
pub fn opcodes_from_blocks(blocks: &[Match]) -> Vec<OpCode> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        push_change(&mut ops, i..block.a, j..block.b);

        if block.size > 0 {
            ops.push(OpCode::new(
                OpTag::Equal,
                block.a..block.a + block.size,
                block.b..block.b + block.size,
            ));
        }

        (i, j) = (block.a + block.size, block.b + block.size);
    }

    ops
}

/// Split a full edit script into groups of changes with `context` items of
/// equal context on each side
///
/// Equal runs longer than twice the context split groups apart. With zero
/// context every group holds its changes plus zero-width equal boundaries.
pub fn group_opcodes(mut codes: Vec<OpCode>, context: usize) -> Vec<Vec<OpCode>> {
    if codes.is_empty() {
        codes.push(OpCode::new(OpTag::Equal, 0..1, 0..1));
    }

    if let Some(first) = codes.first_mut()
        && first.tag == OpTag::Equal
    {
        first.a.start = max(first.a.start, first.a.end.saturating_sub(context));
        first.b.start = max(first.b.start, first.b.end.saturating_sub(context));
    }

    if let Some(last) = codes.last_mut()
        && last.tag == OpTag::Equal
    {
        last.a.end = min(last.a.end, last.a.start + context);
        last.b.end = min(last.b.end, last.b.start + context);
    }

    let mut groups = Vec::new();
    let mut group = Vec::new();

    for mut code in codes {
        // a long unchanged stretch closes the current group
        if code.tag == OpTag::Equal && code.a.len() > 2 * context {
            group.push(OpCode::new(
                OpTag::Equal,
                code.a.start..min(code.a.end, code.a.start + context),
                code.b.start..min(code.b.end, code.b.start + context),
            ));
            groups.push(std::mem::take(&mut group));

            code.a.start = max(code.a.start, code.a.end - context);
            code.b.start = max(code.b.start, code.b.end - context);
        }

        group.push(code);
    }

    if !group.is_empty() && !(group.len() == 1 && group[0].tag == OpTag::Equal) {
        groups.push(group);
    }

    groups
}
