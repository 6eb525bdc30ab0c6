#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(30);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a configured `llms-txt-explorer` command isolated from user config.
pub fn explorer_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llms-txt-explorer"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("LLMSTXT_CONFIG");
    cmd.env_remove("LLMSTXT_REGISTRY_URL");
    cmd.env("LLMSTXT_CONFIG_DIR", config_dir());
    cmd.arg("--quiet");
    cmd
}
