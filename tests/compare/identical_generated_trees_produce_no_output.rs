use crate::common::command::{tokdiff_paths, workspace_dir};
use crate::common::file::write_identical_trees;
use assert_fs::TempDir;
use fake::Fake;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn identical_generated_trees_produce_no_output(
    workspace_dir: TempDir,
    #[values("matcher", "myers", "positional")] algorithm: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = (workspace_dir.path().join("a"), workspace_dir.path().join("b"));
    let files_count = (1..=6).fake::<usize>();
    write_identical_trees(&a, &b, files_count);

    tokdiff_paths(
        workspace_dir.path(),
        &a,
        &b,
        &["--no-default-safe", "--algorithm", algorithm, "--exit-code"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    Ok(())
}
