use criterion::{black_box, criterion_group, criterion_main, Criterion};
use realbin::shim::{LauncherFormat, LauncherStrategy, ScriptFlavor, ShimResolver};
use realbin::PathStyle;
use std::fs;
use tempfile::TempDir;

const PNPM_SH: &str = r#"#!/bin/sh
basedir=$(dirname "$(echo "$0" | sed -e 's,\\,/,g')")
if [ -x "$basedir/node" ]; then
  exec "$basedir/node"  "$basedir/../pnpm/bin/pnpm.cjs" "$@"
else
  exec node  "$basedir/../pnpm/bin/pnpm.cjs" "$@"
fi
"#;

const CMD_SHIM: &str = "@ECHO off\r\nGOTO start\r\n:find_dp0\r\nSET dp0=%~dp0\r\nEXIT /b\r\n\
:start\r\nSETLOCAL\r\nCALL :find_dp0\r\n\r\n\
\"%_prog%\"  \"%dp0%\\..\\typescript\\bin\\tsc\" %*\r\n";

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("launcher_extract");

    let node_sh = LauncherStrategy::new(LauncherFormat::NodeInvocation, ScriptFlavor::Sh);
    group.bench_function("node_invocation_sh", |b| {
        b.iter(|| node_sh.extract(black_box(PNPM_SH)));
    });

    let cmd_shim = LauncherStrategy::new(LauncherFormat::CmdShim, ScriptFlavor::Cmd);
    group.bench_function("cmd_shim_cmd", |b| {
        b.iter(|| cmd_shim.extract(black_box(CMD_SHIM)));
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let dir = TempDir::new().expect("failed to create temp dir");
    let bin = dir.path().join(".bin");
    fs::create_dir_all(&bin).expect("failed to create bench dir");
    let launcher = bin.join("pnpm");
    fs::write(&launcher, PNPM_SH).expect("failed to write launcher");
    let plain = dir.path().join("plain-tool");
    fs::write(&plain, "#!/bin/sh\n").expect("failed to write tool");

    let resolver = ShimResolver::new().with_style(PathStyle::Posix);

    group.bench_function("pnpm_launcher", |b| {
        b.iter(|| resolver.resolve(black_box(&launcher)));
    });

    group.bench_function("real_executable", |b| {
        b.iter(|| resolver.resolve(black_box(&plain)));
    });

    group.bench_function("missing_path", |b| {
        b.iter(|| resolver.resolve(black_box("/no/such/dir/../tool")));
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_resolve);
criterion_main!(benches);
