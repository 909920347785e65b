//! Classification and rendering of token edit scripts
//!
//! Every non-equal op is expanded into one line per token:
//!
//! - `** [...]`: a paired mismatch, with each differing field shown as
//!   `**old** => **new**`
//! - `-- [...]`: a token only present in A
//! - `++ [...]`: a token only present in B
//!
//! Tokens whose kind is in the safe set never produce a line. A paired
//! mismatch is only dropped when both sides are safe.

use crate::artifacts::diff::edit_script::{OpCode, OpTag};
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::tokens::FIELD_SEPARATOR;
use crate::artifacts::tokens::safe_tokens::SafeTokens;
use crate::artifacts::tokens::token::Token;
use derive_new::new;
use std::fmt::Display;
use std::ops::Range;

/// Placeholder for a field one side does not have
pub const MISSING_FIELD: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'t> {
    Changed { a: &'t Token, b: &'t Token },
    Removed(&'t Token),
    Added(&'t Token),
}

impl DiffLine<'_> {
    pub fn marker(&self) -> &'static str {
        match self {
            DiffLine::Changed { .. } => "**",
            DiffLine::Removed(_) => "--",
            DiffLine::Added(_) => "++",
        }
    }
}

impl Display for DiffLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffLine::Changed { a, b } => write!(f, "{} {}", self.marker(), render_token_diff(a, b)),
            DiffLine::Removed(token) | DiffLine::Added(token) => {
                write!(f, "{} {}", self.marker(), token)
            }
        }
    }
}

/// Field-by-field rendering of two tokens, A side first
pub fn render_token_diff(a: &Token, b: &Token) -> String {
    let width = a.fields().len().max(b.fields().len());

    let values = (0..width)
        .map(|index| match (a.field(index), b.field(index)) {
            (x, y) if x == y => x.unwrap_or(MISSING_FIELD).to_string(),
            (x, y) => format!(
                "**{}** => **{}**",
                x.unwrap_or(MISSING_FIELD),
                y.unwrap_or(MISSING_FIELD)
            ),
        })
        .collect::<Vec<_>>();

    format!("[{}]", values.join(FIELD_SEPARATOR))
}

#[derive(Debug, Clone, Copy, new)]
pub struct TokenDiff<'t> {
    a: &'t [Token],
    b: &'t [Token],
    safe_tokens: &'t SafeTokens,
}

impl<'t> TokenDiff<'t> {
    /// Walk the grouped edit script in order and collect the reported lines
    pub fn report(&self, groups: &[Vec<OpCode>]) -> Result<Vec<DiffLine<'t>>, DiffError> {
        let mut lines = Vec::new();

        for op in groups.iter().flatten() {
            match op.tag {
                OpTag::Equal => continue,
                OpTag::Replace => {
                    if op.a.len() != op.b.len() {
                        return Err(DiffError::ReplaceRangeMismatch {
                            a: op.a.clone(),
                            b: op.b.clone(),
                        });
                    }

                    let pairs = self.slice_a(&op.a)?.iter().zip(self.slice_b(&op.b)?);
                    lines.extend(
                        pairs
                            .filter(|(a, b)| !(self.is_safe(a) && self.is_safe(b)))
                            .map(|(a, b)| DiffLine::Changed { a, b }),
                    );
                }
                OpTag::Delete => lines.extend(
                    self.slice_a(&op.a)?
                        .iter()
                        .filter(|token| !self.is_safe(token))
                        .map(DiffLine::Removed),
                ),
                OpTag::Insert => lines.extend(
                    self.slice_b(&op.b)?
                        .iter()
                        .filter(|token| !self.is_safe(token))
                        .map(DiffLine::Added),
                ),
            }
        }

        Ok(lines)
    }

    fn is_safe(&self, token: &Token) -> bool {
        self.safe_tokens.contains(token.kind())
    }

    fn slice_a(&self, range: &Range<usize>) -> Result<&'t [Token], DiffError> {
        let a = self.a;
        a.get(range.clone()).ok_or(DiffError::RangeOutOfBounds {
            side: 'a',
            range: range.clone(),
            len: a.len(),
        })
    }

    fn slice_b(&self, range: &Range<usize>) -> Result<&'t [Token], DiffError> {
        let b = self.b;
        b.get(range.clone()).ok_or(DiffError::RangeOutOfBounds {
            side: 'b',
            range: range.clone(),
            len: b.len(),
        })
    }
}
