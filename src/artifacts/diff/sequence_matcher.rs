//! Longest-matching-block sequence alignment
//!
//! ## Algorithm
//!
//! Find the longest contiguous run of equal items shared by A and B, then
//! recurse on the regions to its left and right. The resulting matching
//! blocks are sorted, adjacent blocks are merged, and the gaps between them
//! become the change runs of the edit script.
//!
//! No item is ever treated as junk, so popular items are matched like any
//! other. Among equally long candidates the one starting earliest in A wins,
//! then the one starting earliest in B.

use crate::artifacts::diff::edit_script::{DiffAlgorithm, Match, OpCode, opcodes_from_blocks};
use crate::artifacts::diff::error::DiffError;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct SequenceMatcher<'d, T> {
    a: &'d [T],
    b: &'d [T],
    /// Positions of every item of B, ascending
    b2j: HashMap<&'d T, Vec<usize>>,
}

impl<'d, T: Eq + Hash> SequenceMatcher<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        let mut b2j: HashMap<&'d T, Vec<usize>> = HashMap::new();
        for (j, item) in b.iter().enumerate() {
            b2j.entry(item).or_default().push(j);
        }

        SequenceMatcher { a, b, b2j }
    }

    /// Longest block with `a_range.start <= i`, `i + size <= a_range.end`
    /// and likewise for `j` in `b_range`
    ///
    /// Returns a zero-sized match at the range starts when nothing matches.
    pub fn find_longest_match(&self, a_range: Range<usize>, b_range: Range<usize>) -> Match {
        let mut best = Match::new(a_range.start, b_range.start, 0);
        // j2len[j] = length of the longest match ending with a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in a_range {
            let mut next_j2len = HashMap::new();

            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < b_range.start {
                        continue;
                    }
                    if j >= b_range.end {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);

                    if k > best.size {
                        best = Match::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }

            j2len = next_j2len;
        }

        best
    }

    /// Sorted, merged matching blocks terminated by the `(len_a, len_b, 0)` sentinel
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (len_a, len_b) = (self.a.len(), self.b.len());
        let mut queue = vec![(0..len_a, 0..len_b)];
        let mut blocks = Vec::new();

        while let Some((a_range, b_range)) = queue.pop() {
            let (a_end, b_end) = (a_range.end, b_range.end);
            let found = self.find_longest_match(a_range.clone(), b_range.clone());

            if found.size == 0 {
                continue;
            }

            blocks.push(found);
            if a_range.start < found.a && b_range.start < found.b {
                queue.push((a_range.start..found.a, b_range.start..found.b));
            }
            if found.a + found.size < a_end && found.b + found.size < b_end {
                queue.push((found.a + found.size..a_end, found.b + found.size..b_end));
            }
        }

        blocks.sort();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }

        merged.push(Match::new(len_a, len_b, 0));
        merged
    }
}

impl<T: Eq + Hash> DiffAlgorithm<T> for SequenceMatcher<'_, T> {
    fn opcodes(&self) -> Result<Vec<OpCode>, DiffError> {
        Ok(opcodes_from_blocks(&self.matching_blocks()))
    }
}
