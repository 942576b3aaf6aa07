use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErrOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Project descriptor loaded from `.lume/project.json`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Project-relative path to the built archive.
    /// Defaults to `build/libs/<name>-<version>.jar`.
    #[serde(default)]
    pub archive: Option<String>,
    /// Project-relative path to the resource template.
    /// Defaults to `src/main/resources/paper-plugin.yml`.
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Serialize)]
pub struct ResolveReport {
    pub server_dir: String,
    pub plugins_dir: String,
    pub source: String,
    pub plugins_dir_exists: bool,
}

#[derive(Serialize)]
pub struct DeployReport {
    pub archive: String,
    pub dest: String,
    pub bytes: u64,
    pub sha256: String,
    pub overwrote: bool,
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct RenderReport {
    pub template: String,
    pub out: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JarClass {
    Current,
    Stale,
    Other,
}

impl JarClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            JarClass::Current => "current",
            JarClass::Stale => "stale",
            JarClass::Other => "other",
        }
    }
}

#[derive(Serialize)]
pub struct StatusEntry {
    pub file: String,
    pub bytes: u64,
    pub classification: JarClass,
}

#[derive(Serialize)]
pub struct CleanReport {
    pub removed: Vec<String>,
}

/// One line of `.lume/history.jsonl`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeployRecord {
    pub ts: String,
    pub archive: String,
    pub dest: String,
    pub bytes: u64,
    pub sha256: String,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
