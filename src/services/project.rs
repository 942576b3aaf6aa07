use crate::domain::models::ProjectManifest;
use crate::error::LumeError;
use std::path::{Path, PathBuf};

pub const PROJECT_FILE: &str = ".lume/project.json";
pub const DEFAULT_TEMPLATE: &str = "src/main/resources/paper-plugin.yml";

/// Read and parse the descriptor without field validation.
pub fn read_manifest(project_dir: &Path) -> Result<ProjectManifest, LumeError> {
    let path = project_dir.join(PROJECT_FILE);
    if !path.is_file() {
        return Err(LumeError::ManifestMissing(path));
    }
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| LumeError::ManifestInvalid(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| LumeError::ManifestInvalid(e.to_string()))
}

pub fn load_project(project_dir: &Path) -> Result<ProjectManifest, LumeError> {
    let manifest = read_manifest(project_dir)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

pub fn validate_manifest(m: &ProjectManifest) -> Result<(), LumeError> {
    if !valid_name(&m.name) {
        return Err(LumeError::ManifestInvalid(format!(
            "name must match [A-Za-z0-9_.-]+, got {:?}",
            m.name
        )));
    }
    if m.version.trim().is_empty() {
        return Err(LumeError::ManifestInvalid("version must be non-empty".to_string()));
    }
    Ok(())
}

pub fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Archive file name as the build tool would produce it.
pub fn archive_file_name(m: &ProjectManifest) -> String {
    format!("{}-{}.jar", m.name, m.version)
}

pub fn archive_path(project_dir: &Path, m: &ProjectManifest) -> PathBuf {
    match &m.archive {
        Some(rel) => project_dir.join(rel),
        None => project_dir.join("build/libs").join(archive_file_name(m)),
    }
}

/// File name the deploy writes into the plugins directory. Honors the
/// descriptor's `archive` override, so status/clean classification and
/// the deploy report stay keyed on the file actually copied.
pub fn deployed_archive_name(project_dir: &Path, m: &ProjectManifest) -> String {
    archive_path(project_dir, m)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| archive_file_name(m))
}

pub fn template_path(project_dir: &Path, m: &ProjectManifest) -> PathBuf {
    match &m.template {
        Some(rel) => project_dir.join(rel),
        None => project_dir.join(DEFAULT_TEMPLATE),
    }
}
