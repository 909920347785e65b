//! Token stream alignment and diff rendering
//!
//! This module implements the semantic diff between two token streams:
//!
//! - `edit_script`: Opcodes, matching blocks and change grouping
//! - `sequence_matcher`: Longest-matching-block alignment (the default)
//! - `myers`: Myers' shortest edit script alignment
//! - `positional`: Index-by-index pairing for streams with identical layout
//! - `token_diff`: Safe-token suppression and `**`/`--`/`++` line rendering
//! - `error`: Fatal alignment contract violations
//!
//! Only change runs matter downstream, so edit scripts are grouped with
//! zero lines of equal context before rendering.

pub mod edit_script;
pub mod error;
pub mod myers;
pub mod positional;
pub mod sequence_matcher;
pub mod token_diff;

use crate::artifacts::diff::edit_script::DiffAlgorithm;
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::myers::MyersDiff;
use crate::artifacts::diff::positional::PositionalDiff;
use crate::artifacts::diff::sequence_matcher::SequenceMatcher;
use crate::artifacts::diff::token_diff::{DiffLine, TokenDiff};
use crate::artifacts::tokens::safe_tokens::SafeTokens;
use crate::artifacts::tokens::token::Token;

pub const DIFF_CONTEXT: usize = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Longest matching blocks, recursively
    #[default]
    Matcher,
    /// Myers' shortest edit script
    Myers,
    /// Pair tokens by position; differing kinds are an error
    Positional,
}

/// Align two token streams and render the reportable differences, in order
pub fn diff_token_streams<'t>(
    a: &'t [Token],
    b: &'t [Token],
    safe_tokens: &'t SafeTokens,
    algorithm: Algorithm,
) -> Result<Vec<DiffLine<'t>>, DiffError> {
    let groups = match algorithm {
        Algorithm::Matcher => SequenceMatcher::new(a, b).grouped_opcodes(DIFF_CONTEXT)?,
        Algorithm::Myers => MyersDiff::new(a, b).grouped_opcodes(DIFF_CONTEXT)?,
        Algorithm::Positional => PositionalDiff::new(a, b).grouped_opcodes(DIFF_CONTEXT)?,
    };

    TokenDiff::new(a, b, safe_tokens).report(&groups)
}
