//! Launcher script parsing.
//!
//! Package managers install small wrapper scripts (`.cmd`, `.ps1` and
//! extensionless shell scripts) that locate and run the real entry point.
//! Each known wrapper layout is a [`LauncherStrategy`]: a
//! [`LauncherFormat`] paired with a [`ScriptFlavor`]. A strategy is a pure
//! function from script text to the relative path the script runs.
//!
//! # Examples
//!
//! ```
//! use realbin::shim::{strategies_for, ScriptFlavor, ToolFamily};
//! use realbin::path::PathStyle;
//!
//! let script = "#!/bin/sh\nexec node  \"$basedir/../pnpm/bin/pnpm.cjs\" \"$@\"\n";
//! let found = strategies_for(PathStyle::Posix, ToolFamily::Pnpm, ScriptFlavor::Sh)
//!     .into_iter()
//!     .find_map(|strategy| strategy.extract(script));
//! assert_eq!(found.as_deref(), Some("../pnpm/bin/pnpm.cjs"));
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::path::PathStyle;

/// The script language a launcher is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFlavor {
    /// A Windows batch file (`.cmd`).
    Cmd,
    /// An extensionless POSIX shell script.
    Sh,
    /// A PowerShell script (`.ps1`).
    Ps1,
}

impl ScriptFlavor {
    /// The flavor implied by a lowercase file extension, without the dot.
    ///
    /// Binary executables (`exe`) and unknown extensions have no flavor.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "" => Some(Self::Sh),
            "cmd" => Some(Self::Cmd),
            "ps1" => Some(Self::Ps1),
            _ => None,
        }
    }
}

impl fmt::Display for ScriptFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cmd => write!(f, "cmd"),
            Self::Sh => write!(f, "sh"),
            Self::Ps1 => write!(f, "ps1"),
        }
    }
}

/// Groups of tools that share launcher layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolFamily {
    /// `npm`, as shipped with Node.js.
    Npm,
    /// `npx`, shipped alongside npm.
    Npx,
    /// `pnpm` and `yarn`.
    Pnpm,
    /// Any other package binary.
    Other,
}

impl ToolFamily {
    /// Classify a binary by its lowercase stem (name without extension).
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::shim::ToolFamily;
    ///
    /// assert_eq!(ToolFamily::of("npx"), ToolFamily::Npx);
    /// assert_eq!(ToolFamily::of("yarn"), ToolFamily::Pnpm);
    /// assert_eq!(ToolFamily::of("tsc"), ToolFamily::Other);
    /// ```
    #[must_use]
    pub fn of(stem: &str) -> Self {
        match stem {
            "npm" => Self::Npm,
            "npx" => Self::Npx,
            "pnpm" | "yarn" => Self::Pnpm,
            _ => Self::Other,
        }
    }
}

/// A known launcher layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherFormat {
    /// Node.js's own `npm` wrapper, which assigns `NPM_CLI_JS`.
    NpmCli,
    /// Node.js's own `npx` wrapper. It assigns `NPM_CLI_JS` as well, so only
    /// the `NPX_CLI_JS` assignment counts.
    NpxCli,
    /// The standalone pnpm layout that runs a copy under `.tools/`.
    PnpmTools,
    /// A wrapper that runs `node` on a script next to it.
    NodeInvocation,
    /// The plain `cmd-shim` template that runs its target directly.
    CmdShim,
    /// The layout written by the pnpm CI setup action, whose target lacks
    /// the leading `../`.
    SetupAction,
}

impl fmt::Display for LauncherFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NpmCli => "npm-cli",
            Self::NpxCli => "npx-cli",
            Self::PnpmTools => "pnpm-tools",
            Self::NodeInvocation => "node-invocation",
            Self::CmdShim => "cmd-shim",
            Self::SetupAction => "setup-action",
        };
        write!(f, "{name}")
    }
}

/// A launcher layout in one script flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LauncherStrategy {
    /// The layout to look for.
    pub format: LauncherFormat,
    /// The script language it is written in.
    pub flavor: ScriptFlavor,
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("launcher pattern is a valid regex")
}

static NPM_CLI_CMD: Lazy<Regex> = Lazy::new(|| pattern(r#"NPM_CLI_JS=%~dp0\\([^"\r\n]+)"#));
static NPM_CLI_SH: Lazy<Regex> = Lazy::new(|| pattern(r#"NPM_CLI_JS="\$CLI_BASEDIR/([^"]+)""#));
static NPM_CLI_PS1: Lazy<Regex> =
    Lazy::new(|| pattern(r#"\$NPM_CLI_JS="\$PSScriptRoot/([^"]+)""#));

static NPX_CLI_CMD: Lazy<Regex> = Lazy::new(|| pattern(r#"NPX_CLI_JS=%~dp0\\([^"\r\n]+)"#));
static NPX_CLI_SH: Lazy<Regex> = Lazy::new(|| pattern(r#"NPX_CLI_JS="\$CLI_BASEDIR/([^"]+)""#));
static NPX_CLI_PS1: Lazy<Regex> =
    Lazy::new(|| pattern(r#"\$NPX_CLI_JS="\$PSScriptRoot/([^"]+)""#));

static PNPM_TOOLS_SH: Lazy<Regex> = Lazy::new(|| pattern(r#""\$basedir/(\.tools/[^"]+)""#));

static NODE_SH: Lazy<Regex> =
    Lazy::new(|| pattern(r#"exec\s+(?:"\$basedir/)?node"?\s+"\$basedir/([^"]+)""#));
static NODE_CMD_PROG: Lazy<Regex> = Lazy::new(|| pattern(r#""%_prog%"\s+"%dp0%\\([^"]+)""#));
static NODE_CMD_DIRECT: Lazy<Regex> =
    Lazy::new(|| pattern(r#"node(?:\.exe)?"?\s+"%~dp0\\([^"]+)""#));
static NODE_PS1: Lazy<Regex> = Lazy::new(|| pattern(r#"node\$exe"\s+"\$basedir/([^"]+)""#));

static CMD_SHIM_CMD: Lazy<Regex> = Lazy::new(|| pattern(r#""%dp0%\\([^"]+)"\s+%\*"#));
static CMD_SHIM_SH: Lazy<Regex> = Lazy::new(|| pattern(r#"exec "\$basedir/([^"]+)"\s+"\$@""#));
static CMD_SHIM_PS1: Lazy<Regex> = Lazy::new(|| pattern(r#"& "\$basedir/([^"]+)"\s+\$args"#));

static SETUP_ACTION_CMD: Lazy<Regex> = Lazy::new(|| pattern(r#""%~dp0\\([^"]+\.[cm]?js)""#));
static SETUP_ACTION_SCRIPT: Lazy<Regex> = Lazy::new(|| pattern(r#""\$basedir/([^"]+\.[cm]?js)""#));

impl LauncherStrategy {
    /// Create a strategy.
    #[must_use]
    pub const fn new(format: LauncherFormat, flavor: ScriptFlavor) -> Self {
        Self { format, flavor }
    }

    fn patterns(self) -> Vec<&'static Regex> {
        use LauncherFormat as F;
        use ScriptFlavor as S;

        match (self.format, self.flavor) {
            (F::NpmCli, S::Cmd) => vec![&*NPM_CLI_CMD],
            (F::NpmCli, S::Sh) => vec![&*NPM_CLI_SH],
            (F::NpmCli, S::Ps1) => vec![&*NPM_CLI_PS1],
            (F::NpxCli, S::Cmd) => vec![&*NPX_CLI_CMD],
            (F::NpxCli, S::Sh) => vec![&*NPX_CLI_SH],
            (F::NpxCli, S::Ps1) => vec![&*NPX_CLI_PS1],
            (F::PnpmTools, S::Sh) => vec![&*PNPM_TOOLS_SH],
            (F::PnpmTools, _) => Vec::new(),
            (F::NodeInvocation, S::Cmd) => vec![&*NODE_CMD_PROG, &*NODE_CMD_DIRECT],
            (F::NodeInvocation, S::Sh) => vec![&*NODE_SH],
            (F::NodeInvocation, S::Ps1) => vec![&*NODE_PS1],
            (F::CmdShim, S::Cmd) => vec![&*CMD_SHIM_CMD],
            (F::CmdShim, S::Sh) => vec![&*CMD_SHIM_SH],
            (F::CmdShim, S::Ps1) => vec![&*CMD_SHIM_PS1],
            (F::SetupAction, S::Cmd) => vec![&*SETUP_ACTION_CMD],
            (F::SetupAction, S::Sh | S::Ps1) => vec![&*SETUP_ACTION_SCRIPT],
        }
    }

    /// Extract the path this launcher runs, relative to the script's
    /// directory.
    ///
    /// Returns `None` when the script does not follow this layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::shim::{LauncherFormat, LauncherStrategy, ScriptFlavor};
    ///
    /// let strategy = LauncherStrategy::new(LauncherFormat::CmdShim, ScriptFlavor::Cmd);
    /// let script = "@ECHO off\r\n\"%dp0%\\..\\tsc\\bin\\tsc\" %*\r\n";
    /// assert_eq!(strategy.extract(script).as_deref(), Some("..\\tsc\\bin\\tsc"));
    /// assert_eq!(strategy.extract("echo hi"), None);
    /// ```
    #[must_use]
    pub fn extract(&self, script: &str) -> Option<String> {
        let relative = self.patterns().into_iter().find_map(|regex| {
            regex
                .captures(script)
                .and_then(|captures| captures.get(1))
                .map(|capture| capture.as_str().trim().to_string())
        })?;
        if relative.is_empty() {
            return None;
        }

        if self.format == LauncherFormat::SetupAction
            && (relative.starts_with("pnpm/") || relative.starts_with("pnpm\\"))
        {
            return Some(format!("../{relative}"));
        }
        Some(relative)
    }
}

impl fmt::Display for LauncherStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.format, self.flavor)
    }
}

/// The strategies to try, in priority order, for a launcher of the given
/// tool family and flavor.
///
/// In Posix style only npm, npx, pnpm and yarn launchers are parsed. Other
/// extensionless files there are real executables or symlinks.
#[must_use]
pub fn strategies_for(
    style: PathStyle,
    family: ToolFamily,
    flavor: ScriptFlavor,
) -> Vec<LauncherStrategy> {
    let formats: &[LauncherFormat] = match family {
        ToolFamily::Npm => &[LauncherFormat::NpmCli],
        ToolFamily::Npx => &[LauncherFormat::NpxCli],
        ToolFamily::Pnpm => &[
            LauncherFormat::PnpmTools,
            LauncherFormat::NodeInvocation,
            LauncherFormat::CmdShim,
            LauncherFormat::SetupAction,
        ],
        ToolFamily::Other if style.is_windows() => &[LauncherFormat::CmdShim],
        ToolFamily::Other => &[],
    };

    formats
        .iter()
        .map(|format| LauncherStrategy::new(*format, flavor))
        .filter(|strategy| !strategy.patterns().is_empty())
        .collect()
}
