use crate::cli::{Cli, Commands};
use crate::domain::models::{CheckItem, RenderReport, ResolveReport, ValidateReport};
use crate::error::LumeError;
use crate::services::output::print_one;
use crate::services::{project, resolve, template};
use std::path::PathBuf;

pub fn handle_project_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve => {
            let resolved = resolve::resolve_from_cli(cli.server_dir.as_deref(), &cli.project_dir);
            let plugins_dir = resolved.plugins_dir();
            let report = ResolveReport {
                server_dir: resolved.server_dir.display().to_string(),
                plugins_dir: plugins_dir.display().to_string(),
                source: resolved.source.as_str().to_string(),
                plugins_dir_exists: plugins_dir.is_dir(),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "{}\t{}\t{}",
                    r.server_dir,
                    r.source,
                    if r.plugins_dir_exists { "present" } else { "missing" }
                )
            })?;
        }
        Commands::Render { out } => {
            let manifest = project::load_project(&cli.project_dir)?;
            let template_file = project::template_path(&cli.project_dir, &manifest);
            if !template_file.is_file() {
                return Err(LumeError::TemplateMissing(template_file).into());
            }
            let raw = std::fs::read_to_string(&template_file)?;
            let values = template::manifest_values(&manifest);
            let (content, tokens) = template::expand(&raw, &values)?;
            let out_path = match out {
                Some(p) => p.clone(),
                None => default_render_target(cli, &template_file),
            };
            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out_path, &content)?;
            let report = RenderReport {
                template: template_file.display().to_string(),
                out: out_path.display().to_string(),
                tokens,
            };
            print_one(cli.json, report, |r| format!("rendered {} to {}", r.template, r.out))?;
        }
        Commands::Validate => {
            let report = validate_project(cli);
            print_one(cli.json, report, |r| {
                let mut lines = vec![format!("overall: {}", r.overall)];
                for c in &r.checks {
                    lines.push(format!("{}\t{}", c.name, c.status));
                }
                lines.join("\n")
            })?;
        }
        _ => unreachable!("handled by the runtime command set"),
    }

    Ok(())
}

/// Mirrors the processed-resources output location of the build tool.
fn default_render_target(cli: &Cli, template_file: &std::path::Path) -> PathBuf {
    let file_name = template_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "paper-plugin.yml".into());
    cli.project_dir.join("build/resources").join(file_name)
}

fn check(name: &str, status: impl Into<String>) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status: status.into(),
    }
}

fn validate_project(cli: &Cli) -> ValidateReport {
    let mut checks = Vec::new();

    let manifest = match project::read_manifest(&cli.project_dir) {
        Ok(m) => {
            checks.push(check("descriptor", "ok"));
            Some(m)
        }
        Err(LumeError::ManifestMissing(_)) => {
            checks.push(check("descriptor", "missing"));
            None
        }
        Err(e) => {
            checks.push(check("descriptor", format!("invalid: {}", e)));
            None
        }
    };

    if let Some(m) = &manifest {
        checks.push(check(
            "name",
            if project::valid_name(&m.name) { "ok".to_string() } else { "invalid".to_string() },
        ));
        checks.push(check(
            "version",
            if m.version.trim().is_empty() { "empty".to_string() } else { "ok".to_string() },
        ));

        let template_file = project::template_path(&cli.project_dir, m);
        let template_status = if !template_file.is_file() {
            "missing".to_string()
        } else {
            match std::fs::read_to_string(&template_file) {
                Ok(raw) => match template::expand(&raw, &template::manifest_values(m)) {
                    Ok(_) => "ok".to_string(),
                    Err(e) => format!("render failed: {}", e),
                },
                Err(e) => format!("unreadable: {}", e),
            }
        };
        checks.push(check("template", template_status));

        // The archive is a build output; its absence is worth reporting
        // but does not make the project itself invalid.
        let archive = project::archive_path(&cli.project_dir, m);
        checks.push(check(
            "archive",
            if archive.is_file() { "ok".to_string() } else { "not_built".to_string() },
        ));
    }

    let overall = if checks
        .iter()
        .all(|c| c.status == "ok" || (c.name == "archive" && c.status == "not_built"))
    {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    ValidateReport { overall, checks }
}
