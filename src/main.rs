use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::{Cli, Commands};
use domain::models::{ErrorBody, JsonErrOut};
use error::LumeError;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        report_failure(cli.json, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve | Commands::Render { .. } | Commands::Validate => {
            commands::handle_project_commands(cli)
        }
        _ => commands::handle_runtime_commands(cli),
    }
}

fn report_failure(json: bool, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<LumeError>()
        .map(LumeError::code)
        .unwrap_or("INTERNAL");
    if json {
        let out = JsonErrOut {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: err.to_string(),
            },
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
    } else {
        eprintln!("error: {}", err);
    }
}
