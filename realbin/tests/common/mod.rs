//! Common test utilities for integration tests.
//!
//! This module provides a temporary directory tree builder for laying out
//! package-manager installs on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree addressed with `/`-separated relative paths.
pub struct TempTree {
    _dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TempTree {
    /// Create an empty tree.
    ///
    /// The root is canonicalized so resolved paths compare equal even when
    /// the system temp directory sits behind a symlink.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Absolute path of `relative` as a normalized string.
    pub fn normalized(&self, relative: &str) -> String {
        realbin::normalize_path(&self.path(relative))
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        self
    }

    /// Create a directory.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).expect("Failed to create directory");
        self
    }

    /// Create a symlink at `link` pointing to `target` inside the tree.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) -> &Self {
        let link_path = self.path(link);
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::os::unix::fs::symlink(self.path(target), link_path).expect("Failed to create symlink");
        self
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

/// The sh launcher pnpm writes into `.bin` directories.
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
