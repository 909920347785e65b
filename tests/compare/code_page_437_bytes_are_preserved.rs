use crate::common::command::{stdout_of, tokdiff_paths, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn code_page_437_bytes_are_preserved(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let a = workspace_dir.path().join("a.txt");
    let b = workspace_dir.path().join("b.txt");

    // 0x82 is e-acute, 0xA4 is n-tilde, 0xFE is a small square
    write_file(FileSpec::new(a.clone(), b"[NAME:caf\x82]\n[GLYPH:\xFE]\n".to_vec()));
    write_file(FileSpec::new(b.clone(), b"[NAME:ca\xA4a]\n[GLYPH:\xFE]\n".to_vec()));

    let actual_output = stdout_of(&mut tokdiff_paths(workspace_dir.path(), &a, &b, &[]))?;
    let expected_output = format!(
        "Comparing {} <=> {}\n** [NAME:**caf\u{e9}** => **ca\u{f1}a**]\n",
        a.display(),
        b.display()
    );

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
