use crate::areas::workspace::PathKind;
use crate::artifacts::diff::Algorithm;
use crate::artifacts::tokens::safe_tokens::SafeTokens;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("cannot compare {a_kind} {} with {b_kind} {}", .a.display(), .b.display())]
    PathKindMismatch {
        a: PathBuf,
        a_kind: PathKind,
        b: PathBuf,
        b_kind: PathKind,
    },

    #[error("path does not exist: {}", .0.display())]
    MissingPath(PathBuf),
}

/// Immutable settings shared by every file pair of a run
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CompareOptions {
    pub safe_tokens: SafeTokens,
    pub algorithm: Algorithm,
    /// Compared case-insensitively, without the leading dot
    pub extension: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            safe_tokens: SafeTokens::default(),
            algorithm: Algorithm::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompareSummary {
    pub files_compared: usize,
    pub files_differing: usize,
    pub lines_reported: usize,
}

impl CompareSummary {
    pub fn has_differences(&self) -> bool {
        self.files_differing > 0
    }
}

pub struct Comparator {
    writer: RefCell<Box<dyn std::io::Write>>,
    options: CompareOptions,
}

impl Comparator {
    pub fn new(writer: Box<dyn std::io::Write>, options: CompareOptions) -> Self {
        Comparator {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }
}
