//! Integration tests for shim resolution against real directory trees.
//!
//! Each test lays out a small install (Volta, pnpm, npm, cmd-shim) in a
//! temporary directory and resolves through it with the OS filesystem.

#![cfg(unix)]

mod common;

use common::{TempTree, PNPM_SH_LAUNCHER};
use realbin::shim::{ScriptFlavor, ShimKind, ShimResolver};
use realbin::{resolve_real_binary_path, PathStyle};

const TSC_CMD_SHIM: &str = "@ECHO off\r\n\
GOTO start\r\n\
:find_dp0\r\n\
SET dp0=%~dp0\r\n\
EXIT /b\r\n\
:start\r\n\
SETLOCAL\r\n\
CALL :find_dp0\r\n\
\r\n\
IF EXIST \"%dp0%\\node.exe\" (\r\n\
  SET \"_prog=%dp0%\\node.exe\"\r\n\
) ELSE (\r\n\
  SET \"_prog=node\"\r\n\
  SET PATHEXT=%PATHEXT:;.JS;=;%\r\n\
)\r\n\
\r\n\
endLocal & goto #_undefined_# 2>NUL || title %COMSPEC% & \"%_prog%\"  \"%dp0%\\..\\typescript\\bin\\tsc\" %*\r\n";

fn posix() -> ShimResolver {
    ShimResolver::new().with_style(PathStyle::Posix)
}

#[test]
fn test_pnpm_launcher_chain() {
    let tree = TempTree::new();
    tree.file("x/.bin/pnpm", PNPM_SH_LAUNCHER);

    let resolution = posix().trace(&tree.path("x/.bin/pnpm"));

    assert_eq!(resolution.path, tree.normalized("x/pnpm/bin/pnpm.cjs"));
    assert_eq!(resolution.kind(), ShimKind::Launcher(ScriptFlavor::Sh));
    assert_eq!(resolution.hops.len(), 1);
    assert_eq!(resolution.hops[0].from, tree.normalized("x/.bin/pnpm"));
}

#[test]
fn test_node_npx_script_runs_npx_cli() {
    let tree = TempTree::new();
    tree.file(
        "node/bin/npx",
        "#!/usr/bin/env bash\n\
         CLI_BASEDIR=\"$(dirname \"$0\")\"\n\
         NPM_CLI_JS=\"$CLI_BASEDIR/node_modules/npm/bin/npm-cli.js\"\n\
         NPX_CLI_JS=\"$CLI_BASEDIR/node_modules/npm/bin/npx-cli.js\"\n\
         exec \"$NODE_EXE\" \"$NPX_CLI_JS\" \"$@\"\n",
    )
    .file("node/bin/node_modules/npm/bin/npm-cli.js", "")
    .file("node/bin/node_modules/npm/bin/npx-cli.js", "");

    let resolved = posix().resolve(&tree.path("node/bin/npx"));

    assert_eq!(
        resolved,
        tree.normalized("node/bin/node_modules/npm/bin/npx-cli.js")
    );
}

#[test]
fn test_shadow_bin_repair_then_launcher() {
    let tree = TempTree::new();
    tree.file("app/node_modules/.bin/pnpm", PNPM_SH_LAUNCHER);

    let resolution = posix().trace(&tree.path("app/node_modules/.bin/pnpm/bin/pnpm.cjs"));

    let kinds: Vec<ShimKind> = resolution.hops.iter().map(|hop| hop.kind).collect();
    assert_eq!(
        kinds,
        vec![ShimKind::ShadowBin, ShimKind::Launcher(ScriptFlavor::Sh)]
    );
    assert_eq!(
        resolution.path,
        tree.normalized("app/node_modules/pnpm/bin/pnpm.cjs")
    );
}

#[test]
fn test_volta_package_shim() {
    let tree = TempTree::new();
    tree.file(".volta/bin/tsc", "")
        .file(".volta/tools/user/bin/tsc.json", r#"{"package":"typescript"}"#)
        .file(".volta/tools/image/packages/typescript/bin/tsc", "#!/usr/bin/env node\n");

    let resolution = posix().trace(&tree.path(".volta/bin/tsc"));

    assert_eq!(resolution.kind(), ShimKind::VoltaUserShim);
    assert_eq!(
        resolution.path,
        tree.normalized(".volta/tools/image/packages/typescript/bin/tsc")
    );
}

#[test]
fn test_volta_npm_prefers_pinned_npm() {
    let tree = TempTree::new();
    tree.file(".volta/bin/npm", "")
        .file(
            ".volta/tools/user/platform.json",
            r#"{"node":{"runtime":"20.11.0","npm":"10.4.0"}}"#,
        )
        .file(".volta/tools/image/npm/10.4.0/bin/npm-cli.js", "")
        .file(
            ".volta/tools/image/node/20.11.0/lib/node_modules/npm/bin/npm-cli.js",
            "",
        );

    let resolution = posix().trace(&tree.path(".volta/bin/npm"));

    assert_eq!(resolution.kind(), ShimKind::VoltaNpm);
    assert_eq!(
        resolution.path,
        tree.normalized(".volta/tools/image/npm/10.4.0/bin/npm-cli.js")
    );
}

#[test]
fn test_volta_npm_falls_back_to_bundled_npm() {
    let tree = TempTree::new();
    tree.file(".volta/bin/npx", "")
        .file(
            ".volta/tools/user/platform.json",
            r#"{"node":{"runtime":"20.11.0","npm":null}}"#,
        )
        .file(
            ".volta/tools/image/node/20.11.0/lib/node_modules/npm/bin/npx-cli.js",
            "",
        );

    let resolved = posix().resolve(&tree.path(".volta/bin/npx"));

    assert_eq!(
        resolved,
        tree.normalized(".volta/tools/image/node/20.11.0/lib/node_modules/npm/bin/npx-cli.js")
    );
}

#[test]
fn test_volta_pinned_pnpm() {
    let tree = TempTree::new();
    tree.file(".volta/bin/pnpm", "")
        .file(
            ".volta/tools/user/platform.json",
            r#"{"node":{"runtime":"20.11.0"},"pnpm":"8.15.1"}"#,
        )
        .file(
            ".volta/tools/image/pnpm/8.15.1/bin/pnpm",
            "#!/usr/bin/env node\nrequire('../dist/pnpm.cjs')\n",
        );

    let resolution = posix().trace(&tree.path(".volta/bin/pnpm"));

    assert_eq!(resolution.kind(), ShimKind::VoltaUserShim);
    assert_eq!(
        resolution.path,
        tree.normalized(".volta/tools/image/pnpm/8.15.1/bin/pnpm")
    );
}

#[test]
fn test_volta_node_is_not_followed() {
    let tree = TempTree::new();
    tree.file(".volta/bin/node", "")
        .file(".volta/tools/user/bin/node.json", r#"{"package":"node"}"#)
        .file(".volta/tools/image/packages/node/bin/node", "");

    let resolution = posix().trace(&tree.path(".volta/bin/node"));

    assert!(!resolution.is_shim());
    assert_eq!(resolution.path, tree.normalized(".volta/bin/node"));
}

#[test]
fn test_volta_malformed_manifest_falls_through() {
    let tree = TempTree::new();
    tree.file(".volta/bin/tsc", "")
        .file(".volta/tools/user/bin/tsc.json", "{not json");

    let resolution = posix().trace(&tree.path(".volta/bin/tsc"));

    assert!(!resolution.is_shim());
    assert_eq!(resolution.path, tree.normalized(".volta/bin/tsc"));
}

#[test]
fn test_symlink_to_package_script() {
    let tree = TempTree::new();
    tree.file(
        "lib/node_modules/pnpm/bin/pnpm.cjs",
        "#!/usr/bin/env node\nrequire('../dist/pnpm.cjs')\n",
    )
    .symlink("lib/node_modules/pnpm/bin/pnpm.cjs", "bin/pnpm");

    let resolution = posix().trace(&tree.path("bin/pnpm"));

    assert_eq!(resolution.kind(), ShimKind::Symlink);
    assert_eq!(
        resolution.path,
        tree.normalized("lib/node_modules/pnpm/bin/pnpm.cjs")
    );
}

#[test]
fn test_windows_style_cmd_shim() {
    let tree = TempTree::new();
    tree.file("node_modules/.bin/tsc.cmd", TSC_CMD_SHIM)
        .file("node_modules/typescript/bin/tsc", "#!/usr/bin/env node\n");

    let resolver = ShimResolver::new().with_style(PathStyle::Windows);
    let resolution = resolver.trace(&tree.path("node_modules/.bin/tsc.cmd"));

    assert_eq!(resolution.kind(), ShimKind::Launcher(ScriptFlavor::Cmd));
    assert_eq!(
        resolution.path,
        tree.normalized("node_modules/typescript/bin/tsc")
    );
}

#[test]
fn test_generic_cmd_shim_ignored_in_posix_style() {
    let tree = TempTree::new();
    tree.file("node_modules/.bin/tsc", TSC_CMD_SHIM);

    let resolution = posix().trace(&tree.path("node_modules/.bin/tsc"));

    assert!(!resolution.is_shim());
}

#[test]
fn test_max_hops_zero_returns_input() {
    let tree = TempTree::new();
    tree.file("x/.bin/pnpm", PNPM_SH_LAUNCHER);

    let resolution = posix()
        .with_max_hops(0)
        .trace(&tree.path("x/.bin/pnpm"));

    assert!(!resolution.is_shim());
    assert_eq!(resolution.path, tree.normalized("x/.bin/pnpm"));
}

#[test]
fn test_self_referencing_launcher_stops() {
    let tree = TempTree::new();
    tree.file(
        "loop/.bin/yarn",
        "#!/bin/sh\nbasedir=$(dirname \"$0\")\nexec node  \"$basedir/yarn\" \"$@\"\n",
    );

    let resolution = posix().trace(&tree.path("loop/.bin/yarn"));

    assert!(!resolution.is_shim());
    assert_eq!(resolution.path, tree.normalized("loop/.bin/yarn"));
}

#[test]
fn test_graceful_degradation() {
    assert_eq!(
        resolve_real_binary_path("/definitely/not/../present/bin/tool"),
        "/definitely/present/bin/tool"
    );
}

#[test]
fn test_resolve_accepts_file_url() {
    let tree = TempTree::new();
    tree.file("x/.bin/pnpm", PNPM_SH_LAUNCHER);
    let url = url::Url::from_file_path(tree.path("x/.bin/pnpm")).expect("absolute path");

    assert_eq!(
        posix().resolve(&url),
        tree.normalized("x/pnpm/bin/pnpm.cjs")
    );
}
