use anyhow::Result;

use crate::context::BuildContext;
use crate::webapp::{self, BuildCommandSpec};

/// How a hook invocation ended. Fatal conditions are `Err` values; the CLI
/// layer maps those to a non-zero exit so the enclosing build aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    Built,
    SkippedMissingWebapp,
}

/// Builds the webapp bundle before the filesystem image upload.
///
/// A missing webapp directory is a soft-skip, not a failure: the surrounding
/// build is allowed to proceed without a webapp.
pub fn run_pre_upload_build(ctx: &BuildContext) -> Result<HookOutcome> {
    println!("Building webapp before filesystem image upload...");

    let webapp_dir = ctx.webapp_dir();
    if !webapp_dir.exists() {
        eprintln!(
            "warning: webapp directory not found at {}",
            webapp_dir.display()
        );
        return Ok(HookOutcome::SkippedMissingWebapp);
    }

    let pm = webapp::resolve_package_manager()?;
    println!("Using package manager: {}", pm.name());

    let command = BuildCommandSpec::for_build(pm);
    println!("{}", command.render());
    webapp::run_build(&command, &webapp_dir)?;

    println!("Webapp build completed successfully.");
    Ok(HookOutcome::Built)
}

/// Resolves the package manager and prints the command without executing it.
pub fn dry_run(ctx: &BuildContext) -> Result<HookOutcome> {
    let webapp_dir = ctx.webapp_dir();
    if !webapp_dir.exists() {
        eprintln!(
            "warning: webapp directory not found at {}",
            webapp_dir.display()
        );
        return Ok(HookOutcome::SkippedMissingWebapp);
    }

    let pm = webapp::resolve_package_manager()?;
    let command = BuildCommandSpec::for_build(pm);
    println!(
        "dry-run: would run `{}` in {}",
        command.render(),
        webapp_dir.display()
    );
    Ok(HookOutcome::Built)
}
