use crate::areas::comparator::{CompareError, CompareSummary, Comparator};
use crate::areas::workspace::{PathKind, Workspace};
use crate::artifacts::diff::diff_token_streams;
use crate::artifacts::diff::token_diff::DiffLine;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

impl Comparator {
    /// Compare two files, or two directory trees file by file
    ///
    /// Both paths must be of the same kind. Inside trees only same-named
    /// files with the configured extension and same-named directories are
    /// paired; anything without a counterpart of the same kind is skipped.
    pub fn compare_paths(&self, a: &Path, b: &Path) -> anyhow::Result<CompareSummary> {
        let a_side = Workspace::new(a.into());
        let b_side = Workspace::new(b.into());

        let (a_kind, b_kind) = (a_side.kind(), b_side.kind());
        if a_kind != b_kind {
            return Err(CompareError::PathKindMismatch {
                a: a.to_path_buf(),
                a_kind,
                b: b.to_path_buf(),
                b_kind,
            }
            .into());
        }

        let mut summary = CompareSummary::default();

        match a_kind {
            PathKind::File => self.compare_files(&a_side, &b_side, Path::new(""), &mut summary)?,
            PathKind::Directory => self.compare_dirs(&a_side, &b_side, &mut summary)?,
            PathKind::Missing => return Err(CompareError::MissingPath(a.to_path_buf()).into()),
        }

        self.writer().flush()?;

        debug!(
            files_compared = summary.files_compared,
            files_differing = summary.files_differing,
            lines_reported = summary.lines_reported,
            "comparison finished"
        );

        Ok(summary)
    }

    fn compare_dirs(
        &self,
        a_side: &Workspace,
        b_side: &Workspace,
        summary: &mut CompareSummary,
    ) -> anyhow::Result<()> {
        let mut entries = a_side.walk();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    trace!(path = ?err.path(), "skipping dangling link");
                    continue;
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("failed to walk {}", a_side.path().display()));
                }
            };
            let relative = entry.path().strip_prefix(a_side.path())?;

            match (PathKind::from(entry.path()), b_side.kind_of(relative)) {
                (PathKind::File, PathKind::File) if self.matches_extension(relative) => {
                    self.compare_files(a_side, b_side, relative, summary)?;
                }
                (PathKind::Directory, PathKind::Directory) => {}
                (PathKind::Directory, other) => {
                    trace!(path = %relative.display(), counterpart = %other, "skipping directory");
                    entries.skip_current_dir();
                }
                (kind, other) => {
                    trace!(path = %relative.display(), %kind, counterpart = %other, "skipping entry");
                }
            }
        }

        Ok(())
    }

    fn compare_files(
        &self,
        a_side: &Workspace,
        b_side: &Workspace,
        relative: &Path,
        summary: &mut CompareSummary,
    ) -> anyhow::Result<()> {
        let (a_path, b_path) = (a_side.resolve(relative), b_side.resolve(relative));

        let a_tokens = a_side.read_tokens(relative)?;
        let b_tokens = b_side.read_tokens(relative)?;

        let options = self.options();
        let lines = diff_token_streams(
            &a_tokens,
            &b_tokens,
            &options.safe_tokens,
            options.algorithm,
        )
        .with_context(|| format!("failed to diff {} <=> {}", a_path.display(), b_path.display()))?;

        debug!(
            a = %a_path.display(),
            b = %b_path.display(),
            tokens_a = a_tokens.len(),
            tokens_b = b_tokens.len(),
            lines = lines.len(),
            "compared file pair"
        );

        summary.files_compared += 1;
        if lines.is_empty() {
            return Ok(());
        }

        summary.files_differing += 1;
        summary.lines_reported += lines.len();

        self.print_report(&a_path, &b_path, &lines)
    }

    fn print_report(&self, a: &Path, b: &Path, lines: &[DiffLine]) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(
            writer,
            "{}",
            format!("Comparing {} <=> {}", a.display(), b.display()).bold()
        )?;

        for line in lines {
            let text = line.to_string();
            let painted = match line {
                DiffLine::Changed { .. } => text.yellow(),
                DiffLine::Removed(_) => text.red(),
                DiffLine::Added(_) => text.green(),
            };
            writeln!(writer, "{}", painted)?;
        }

        Ok(())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|extension| {
                extension
                    .to_string_lossy()
                    .eq_ignore_ascii_case(&self.options().extension)
            })
            .unwrap_or(false)
    }
}

/// A symlink whose target is gone; loops and real I/O failures are not
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_none()
        && err
            .path()
            .is_some_and(|path| path.symlink_metadata().is_ok() && path.metadata().is_err())
}
