//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment (temporary HOME, no `REALBIN_*` variables)
//! - Fixture builders for executables and launcher scripts

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run.
const ISOLATED_VARS: &[&str] = &[
    "REALBIN_STYLE",
    "REALBIN_MAX_HOPS",
    "REALBIN_PATH",
    "REALBIN_CONFIG",
    "REALBIN_LOG_MODE",
];

/// Test environment rooted in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A `realbin` command with HOME pointed at the temporary directory and
    /// all `REALBIN_*` variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("realbin").expect("Failed to find realbin binary");
        cmd.env("HOME", &self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as the normalized string realbin prints.
    pub fn path_str(&self) -> String {
        self.temp_path.to_string_lossy().replace('\\', "/")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file (creating parent directories) and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write an executable file.
    pub fn write_executable(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.write_file(name, contents);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to make file executable");
        }
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// The sh launcher pnpm installs into `node_modules/.bin`.
#[allow(dead_code)]
pub const PNPM_SH_LAUNCHER: &str = r#"#!/bin/sh
basedir=$(dirname "$(echo "$0" | sed -e 's,\\,/,g')")

case `uname` in
    *CYGWIN*) basedir=`cygpath -w "$basedir"`;;
esac

if [ -x "$basedir/node" ]; then
  exec "$basedir/node"  "$basedir/../pnpm/bin/pnpm.cjs" "$@"
else
  exec node  "$basedir/../pnpm/bin/pnpm.cjs" "$@"
fi
"#;
