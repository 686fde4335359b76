#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Path to the shared sample export.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../clippings-core/tests/fixtures/sample_clippings.txt")
}

/// Create a configured `clippings` command suitable for integration tests.
///
/// Points `CLIPPINGS_CONFIG` inside `config_dir` so the developer's own
/// config never leaks in. A default config is written unless the test
/// already put one there.
#[allow(dead_code)]
pub fn clippings_cmd(config_dir: &Path) -> Command {
    let config = config_path(config_dir);
    if !config.exists() {
        std::fs::write(&config, "[convert]\nindent = 4\n").expect("failed to write test config");
    }

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clippings"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("NO_COLOR", "1");
    cmd.env("CLIPPINGS_CONFIG", config);
    cmd
}

#[allow(dead_code)]
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}
