use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::context::BuildContext;
use crate::webapp;

/// Subset of the webapp's `package.json` the hook cares about.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scripts: HashMap<String, String>,
}

impl PackageManifest {
    pub fn has_build_script(&self) -> bool {
        self.scripts.contains_key("build")
    }
}

pub fn load_manifest(webapp_dir: &Path) -> Result<Option<PackageManifest>> {
    let path = webapp_dir.join("package.json");
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let manifest = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(manifest))
}

/// Reports whether the pre-upload hook can run in this project. Exits zero
/// when the hook would succeed or soft-skip, non-zero when it would abort.
pub fn run(ctx: &BuildContext) -> Result<()> {
    println!("project root: {}", ctx.project_root.display());

    let webapp_dir = ctx.webapp_dir();
    if !webapp_dir.exists() {
        println!(
            "webapp directory: missing at {} (uploadfs will skip the webapp build)",
            webapp_dir.display()
        );
        return Ok(());
    }
    println!("webapp directory: ok");

    let mut problems: Vec<String> = Vec::new();

    match load_manifest(&webapp_dir)? {
        Some(manifest) => {
            match manifest.name.as_deref() {
                Some(name) => println!("package.json: ok ({name})"),
                None => println!("package.json: ok"),
            }
            if manifest.has_build_script() {
                println!("build script: ok");
            } else {
                println!("build script: missing");
                problems.push("package.json declares no `build` script".to_string());
            }
        }
        None => {
            println!("package.json: missing");
            problems.push(format!(
                "no package.json in {}",
                webapp_dir.display()
            ));
        }
    }

    let mut any_available = false;
    for pm in webapp::candidates() {
        let available = webapp::is_available(pm);
        any_available |= available;
        println!(
            "{}: {}",
            pm.name(),
            if available { "ok" } else { "not found in PATH" }
        );
    }
    if !any_available {
        problems.push("no JavaScript package manager in PATH (pnpm or npm)".to_string());
    }

    if problems.is_empty() {
        println!("uploadfs hook is ready.");
        return Ok(());
    }
    bail!(
        "found {} problem(s): {}",
        problems.len(),
        problems.join("; ")
    )
}
