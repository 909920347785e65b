use crate::common::command::{stdout_of, tokdiff_paths, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn dangling_link_before_a_differing_file_is_skipped(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = (workspace_dir.path().join("a"), workspace_dir.path().join("b"));

    write_file(FileSpec::text(a.join("x.txt"), "[C:1]\n"));
    write_file(FileSpec::text(b.join("x.txt"), "[C:2]\n"));
    // sorts before x.txt and points nowhere
    std::os::unix::fs::symlink(workspace_dir.path().join("nowhere"), a.join("0_dangling"))?;

    let actual_output = stdout_of(&mut tokdiff_paths(workspace_dir.path(), &a, &b, &[]))?;
    let expected_output = format!(
        "Comparing {} <=> {}\n** [C:**1** => **2**]\n",
        a.join("x.txt").display(),
        b.join("x.txt").display()
    );

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
