use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Two trees `a/` and `b/` holding one file each: `a/<name>` and `b/<name>`
pub fn write_file_pair(dir: &Path, name: &str, a: &str, b: &str) -> (PathBuf, PathBuf) {
    let (a_path, b_path) = (dir.join("a").join(name), dir.join("b").join(name));

    write_file(FileSpec::text(a_path.clone(), a));
    write_file(FileSpec::text(b_path.clone(), b));

    (a_path, b_path)
}

pub fn run_tokdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tokdiff").expect("Failed to find tokdiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("TOKDIFF_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn tokdiff_paths(dir: &Path, a: &Path, b: &Path, flags: &[&str]) -> Command {
    let mut cmd = run_tokdiff_command(dir, flags);
    cmd.arg(a).arg(b);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let assert = cmd.assert().success();
    let stdout = assert.get_output().stdout.clone();
    Ok(String::from_utf8(stdout)?)
}
