use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::context::BuildContext;
use crate::{doctor, hook};

/// Root CLI for pio-prebuild
#[derive(Parser)]
#[command(name = "pio-prebuild")]
#[command(about = "Pre-upload hook that builds the webapp bundle before a filesystem image upload")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the webapp before the filesystem image is assembled
    Uploadfs {
        /// Project root (defaults to $PROJECT_DIR, then the current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,
        /// Print the resolved build command without executing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Report whether the pre-upload hook can run in this project
    Doctor {
        /// Project root (defaults to $PROJECT_DIR, then the current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,
    },
}

/// Dispatch after parse
pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Uploadfs {
            project_root,
            dry_run,
        } => {
            let ctx = BuildContext::resolve(project_root);
            let result = if dry_run {
                hook::dry_run(&ctx)
            } else {
                hook::run_pre_upload_build(&ctx)
            };
            if let Err(e) = result {
                eprintln!("error (uploadfs): {e}");
                std::process::exit(1);
            }
        }
        Commands::Doctor { project_root } => {
            let ctx = BuildContext::resolve(project_root);
            if let Err(e) = doctor::run(&ctx) {
                eprintln!("error (doctor): {e}");
                std::process::exit(1);
            }
        }
    }
}
