use assert_cmd::Command;
use std::path::Path;

pub fn board_cmd() -> Command {
    let mut cmd = Command::cargo_bin("board").unwrap();
    cmd.env_remove("BOARD_ROOT");
    cmd.env_remove("BOARD_SORT");
    cmd.env_remove("BOARD_LOG");
    cmd
}

/// Run `board add` in `dir` and return the new post id
#[allow(dead_code)]
pub fn add_post(dir: &Path, title: &str, content: &str, notice: bool) -> String {
    let mut cmd = board_cmd();
    cmd.current_dir(dir).arg("add").arg(title).arg(content);
    if notice {
        cmd.arg("--notice");
    }

    let output = cmd.output().unwrap();
    assert!(output.status.success(), "board add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .trim()
        .strip_prefix("Post created: ")
        .unwrap_or_else(|| panic!("unexpected add output: {}", stdout))
        .to_string()
}
