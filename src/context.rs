use std::path::PathBuf;

/// Name of the webapp subdirectory under the project root.
pub const WEBAPP_DIR_NAME: &str = "webapp";

/// Environment variable the enclosing build system exports with the project
/// root (PlatformIO sets `PROJECT_DIR` for spawned tools).
pub const PROJECT_DIR_VAR: &str = "PROJECT_DIR";

/// Paths the hook operates on, passed in explicitly by the CLI layer instead
/// of read from an ambient build-system global.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub project_root: PathBuf,
}

impl BuildContext {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Resolution order: explicit `--project-root` flag, then `PROJECT_DIR`
    /// from the environment, then the current directory.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        if let Some(root) = flag {
            return Self::new(root);
        }
        if let Ok(root) = std::env::var(PROJECT_DIR_VAR) {
            if !root.trim().is_empty() {
                return Self::new(root.trim());
            }
        }
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(root)
    }

    pub fn webapp_dir(&self) -> PathBuf {
        self.project_root.join(WEBAPP_DIR_NAME)
    }
}
