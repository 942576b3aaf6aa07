use crate::cli::{Cli, Commands};
use crate::domain::models::{CleanReport, DeployRecord, DeployReport};
use crate::services::output::{print_one, print_out};
use crate::services::{deploy, history, inventory, project, resolve};

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    let manifest = project::load_project(&cli.project_dir)?;
    let resolved = resolve::resolve_from_cli(cli.server_dir.as_deref(), &cli.project_dir);
    let current_archive = project::deployed_archive_name(&cli.project_dir, &manifest);

    match &cli.command {
        Commands::Deploy { dry_run } => {
            let plugins_dir = resolve::require_plugins_dir(&resolved)?;
            let archive = project::archive_path(&cli.project_dir, &manifest);
            let outcome = if *dry_run {
                deploy::inspect_archive(&archive, &plugins_dir)?
            } else {
                deploy::deploy_archive(&archive, &plugins_dir)?
            };
            let report = DeployReport {
                archive: current_archive,
                dest: outcome.dest.display().to_string(),
                bytes: outcome.bytes,
                sha256: outcome.sha256,
                overwrote: outcome.overwrote,
                dry_run: *dry_run,
            };
            if !*dry_run {
                history::record_deploy(
                    &cli.project_dir,
                    &DeployRecord {
                        ts: history::unix_now(),
                        archive: report.archive.clone(),
                        dest: report.dest.clone(),
                        bytes: report.bytes,
                        sha256: report.sha256.clone(),
                    },
                );
            }
            print_one(cli.json, report, |r| {
                if r.dry_run {
                    format!("would deploy {} to {}", r.archive, r.dest)
                } else {
                    format!("deployed {} to {} ({} bytes)", r.archive, r.dest, r.bytes)
                }
            })?;
        }
        Commands::Status => {
            let plugins_dir = resolve::require_plugins_dir(&resolved)?;
            let entries = inventory::list_jars(&plugins_dir, &manifest.name, &current_archive)?;
            print_out(cli.json, &entries, |e| {
                format!("{}\t{}\t{}", e.file, e.bytes, e.classification.as_str())
            })?;
        }
        Commands::Clean { all } => {
            let plugins_dir = resolve::require_plugins_dir(&resolved)?;
            let removed =
                inventory::clean_jars(&plugins_dir, &manifest.name, &current_archive, *all)?;
            tracing::info!(count = removed.len(), "cleaned plugin jars");
            print_one(cli.json, CleanReport { removed }, |r| {
                format!("removed {} jars", r.removed.len())
            })?;
        }
        Commands::History { limit } => {
            let records = history::read_history(&cli.project_dir, *limit)?;
            print_out(cli.json, &records, |r| {
                format!("{}\t{}\t{}", r.ts, r.archive, r.dest)
            })?;
        }
        Commands::Resolve | Commands::Render { .. } | Commands::Validate => {
            unreachable!("handled by the project command set")
        }
    }

    Ok(())
}
