use crate::common::command::{stdout_of, tokdiff_paths, workspace_dir, write_file_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn removed_safe_token_is_suppressed(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = write_file_pair(
        workspace_dir.path(),
        "item.txt",
        "[ITEM_WEAPON:ITEM_WEAPON_AXE]\n[ITEM_SYMBOL:42]\n",
        "[ITEM_WEAPON:ITEM_WEAPON_AXE]\n",
    );

    let actual_output = stdout_of(&mut tokdiff_paths(workspace_dir.path(), &a, &b, &[]))?;

    pretty_assertions::assert_eq!(actual_output, "");

    Ok(())
}

#[rstest]
fn removed_custom_token_is_reported(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = write_file_pair(
        workspace_dir.path(),
        "item.txt",
        "[ITEM_WEAPON:ITEM_WEAPON_AXE]\n[CUSTOM_KIND:42]\n",
        "[ITEM_WEAPON:ITEM_WEAPON_AXE]\n",
    );

    let actual_output = stdout_of(&mut tokdiff_paths(workspace_dir.path(), &a, &b, &[]))?;
    let expected_output = format!(
        "Comparing {} <=> {}\n-- [CUSTOM_KIND:42]\n",
        a.display(),
        b.display()
    );

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn added_custom_token_is_reported(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = write_file_pair(
        workspace_dir.path(),
        "item.txt",
        "[ITEM_WEAPON:ITEM_WEAPON_AXE]\n",
        "[ITEM_WEAPON:ITEM_WEAPON_AXE]\n[ITEM_SYMBOL:7][CUSTOM_KIND:42]\n",
    );

    let actual_output = stdout_of(&mut tokdiff_paths(workspace_dir.path(), &a, &b, &[]))?;
    let expected_output = format!(
        "Comparing {} <=> {}\n++ [CUSTOM_KIND:42]\n",
        a.display(),
        b.display()
    );

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
