use crate::artifacts::diff::edit_script::{DiffAlgorithm, OpCode, OpTag, push_change};
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::tokens::token::Token;
use derive_new::new;

/// Index-by-index pairing without any alignment
///
/// Only meaningful for streams known to hold the same token layout. Two
/// paired tokens of different kinds abort the comparison; the longer
/// stream's tail is reported as deleted or inserted.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PositionalDiff<'d> {
    a: &'d [Token],
    b: &'d [Token],
}

impl DiffAlgorithm<Token> for PositionalDiff<'_> {
    fn opcodes(&self) -> Result<Vec<OpCode>, DiffError> {
        let paired = self.a.len().min(self.b.len());

        if let Some((index, (a, b))) = self
            .a
            .iter()
            .zip(self.b)
            .enumerate()
            .find(|(_, (a, b))| a.kind() != b.kind())
        {
            return Err(DiffError::KindMismatch {
                index,
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let same_at = |i: usize| self.a[i] == self.b[i];
        let mut ops = Vec::new();
        let mut start = 0;

        while start < paired {
            let equal = same_at(start);
            let end = (start..paired)
                .find(|&i| same_at(i) != equal)
                .unwrap_or(paired);

            if equal {
                ops.push(OpCode::new(OpTag::Equal, start..end, start..end));
            } else {
                push_change(&mut ops, start..end, start..end);
            }

            start = end;
        }

        push_change(&mut ops, paired..self.a.len(), paired..self.b.len());

        Ok(ops)
    }
}
