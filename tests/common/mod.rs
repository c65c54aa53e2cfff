//! Shared helpers for tests that drive the `kconf` binary.

use std::path::PathBuf;

/// Cached binary path for the kconf CLI to avoid repeated lookups
#[allow(deprecated)]
pub static KCONF_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("kconf"));

/// Command for the cached binary, pointed at `base_url` with port 0 so the
/// mock server URI is used verbatim. Logging variables are cleared.
pub fn kconf_cmd(base_url: &str) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*KCONF_BIN);
    cmd.env_remove("KCONF_LOG")
        .env_remove("KCONF_LOG_FORMAT")
        .env_remove("KCONF_LOG_FILE")
        .arg(format!("--kong-address={base_url}"))
        .arg("--port=0");
    cmd
}
