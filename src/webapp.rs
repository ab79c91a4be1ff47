use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Environment override for package-manager selection, `pnpm` or `npm`.
pub const PM_OVERRIDE_VAR: &str = "PIO_WEBAPP_PM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebappPackageManager {
    Pnpm,
    Npm,
}

impl WebappPackageManager {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pnpm" => Some(Self::Pnpm),
            "npm" => Some(Self::Npm),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
        }
    }

    pub fn executable(self) -> &'static str {
        self.name()
    }

    fn build_args(self) -> Vec<String> {
        vec!["run".to_string(), "build".to_string()]
    }
}

/// Probe order: pnpm first, npm as the universally available fallback.
pub(crate) fn candidates() -> [WebappPackageManager; 2] {
    [WebappPackageManager::Pnpm, WebappPackageManager::Npm]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommandSpec {
    pub pm: WebappPackageManager,
    pub args: Vec<String>,
}

impl BuildCommandSpec {
    pub fn for_build(pm: WebappPackageManager) -> Self {
        Self {
            pm,
            args: pm.build_args(),
        }
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.pm.executable(), self.args.join(" "))
    }
}

pub fn resolve_package_manager() -> Result<WebappPackageManager> {
    let env_override = env::var(PM_OVERRIDE_VAR).ok();
    resolve_package_manager_from_state(env_override.as_deref(), is_available)
}

pub(crate) fn resolve_package_manager_from_state<F>(
    env_override: Option<&str>,
    is_available: F,
) -> Result<WebappPackageManager>
where
    F: Fn(WebappPackageManager) -> bool,
{
    if let Some(raw) = env_override {
        let pm = WebappPackageManager::parse(raw).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported {PM_OVERRIDE_VAR} value `{raw}`. Supported values: pnpm, npm."
            )
        })?;
        if !is_available(pm) {
            bail!(
                "{PM_OVERRIDE_VAR} is set to `{}`, but `{}` is not available in PATH. Install it or unset {PM_OVERRIDE_VAR}.",
                pm.name(),
                pm.executable()
            );
        }
        return Ok(pm);
    }

    for pm in candidates() {
        if is_available(pm) {
            return Ok(pm);
        }
    }

    bail!(
        "No JavaScript package manager found in PATH. Install pnpm or npm, or set {PM_OVERRIDE_VAR}=pnpm|npm."
    )
}

/// A tool counts as available when its version query exits successfully.
pub fn is_available(pm: WebappPackageManager) -> bool {
    Command::new(pm.executable())
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|st| st.success())
        .unwrap_or(false)
}

/// Runs the build with stdio inherited so output streams live; blocks until
/// the child exits.
pub fn run_build(command: &BuildCommandSpec, webapp_dir: &Path) -> Result<()> {
    let status = Command::new(command.pm.executable())
        .args(&command.args)
        .current_dir(webapp_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| {
            format!(
                "spawning {} in {}",
                command.pm.executable(),
                webapp_dir.display()
            )
        })?;

    if !status.success() {
        bail!(
            "webapp build failed with exit code {}",
            status.code().unwrap_or_default()
        );
    }
    Ok(())
}
