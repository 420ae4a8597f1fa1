#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a `urlsift` command isolated from the user's configuration.
#[allow(dead_code)]
pub fn urlsift_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("urlsift"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("URLSIFT_CONFIG_DIR", config_dir());
    cmd.env_remove("URLSIFT_CONFIG");
    cmd.env_remove("URLSIFT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write `content` to `name` inside `dir` and return the path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path
}
