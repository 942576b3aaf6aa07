use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lumedeploy", version, about = "Paper plugin deploy CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Plugin project root (contains .lume/project.json)"
    )]
    pub project_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Server root override (wins over ISKYWARS_SERVER_DIR)"
    )]
    pub server_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the built archive into the server plugins directory
    Deploy {
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Show how the server directory resolves
    Resolve,
    /// Expand the resource template with project values
    Render {
        #[arg(long, help = "Write the rendered file here instead of build/resources/")]
        out: Option<PathBuf>,
    },
    /// List jars in the server plugins directory
    Status,
    /// Remove this project's stale jars from the server
    Clean {
        #[arg(long, default_value_t = false, help = "Also remove the current archive")]
        all: bool,
    },
    /// Show recorded deploys
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check the project descriptor, template and archive
    Validate,
}
