use crate::artifacts::tokens::token::Token;
use crate::artifacts::tokens::tokenizer::Tokenizer;
use anyhow::Context;
use codepage_437::{CP437_CONTROL, FromCp437};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Missing,
}

impl Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            PathKind::File => "file",
            PathKind::Directory => "directory",
            PathKind::Missing => "missing path",
        };
        write!(f, "{kind}")
    }
}

impl From<&Path> for PathKind {
    fn from(path: &Path) -> Self {
        // both checks follow symlinks
        if path.is_file() {
            PathKind::File
        } else if path.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Missing
        }
    }
}

/// One side of a comparison: a single file or a directory tree
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> PathKind {
        PathKind::from(self.path())
    }

    /// Location of `relative` inside this workspace; an empty path is the root itself
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.path.to_path_buf()
        } else {
            self.path.join(relative)
        }
    }

    pub fn kind_of(&self, relative: &Path) -> PathKind {
        PathKind::from(self.resolve(relative).as_path())
    }

    /// Entries below the root, depth first, siblings in file name order
    pub fn walk(&self) -> walkdir::IntoIter {
        WalkDir::new(&self.path)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
    }

    /// Read a file as code page 437 text
    ///
    /// Every byte maps to exactly one character, so the decoding never fails.
    pub fn read_file(&self, relative: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(relative);

        let data = std::fs::read(&file_path)
            .with_context(|| format!("failed to read {}", file_path.display()))?;

        Ok(String::from_cp437(data, &CP437_CONTROL))
    }

    pub fn read_tokens(&self, relative: &Path) -> anyhow::Result<Vec<Token>> {
        let content = self.read_file(relative)?;

        Ok(Tokenizer::new(&content).tokens().collect())
    }
}
