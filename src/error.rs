use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LumeError {
    #[error("project descriptor not found: {} (expected .lume/project.json under the project root)", .0.display())]
    ManifestMissing(PathBuf),
    #[error("invalid project descriptor: {0}")]
    ManifestInvalid(String),
    #[error("plugins directory not found: {} (set --server-dir=... or ISKYWARS_SERVER_DIR)", .0.display())]
    PluginsDirMissing(PathBuf),
    #[error("plugin archive not found: {} (build the project first)", .0.display())]
    ArchiveMissing(PathBuf),
    #[error("resource template not found: {}", .0.display())]
    TemplateMissing(PathBuf),
    #[error("unknown template token: ${{{0}}}")]
    UnknownToken(String),
    #[error("unterminated template token: ${{{0}")]
    UnterminatedToken(String),
}

impl LumeError {
    /// Stable machine code carried in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            LumeError::ManifestMissing(_) => "MANIFEST_MISSING",
            LumeError::ManifestInvalid(_) => "MANIFEST_INVALID",
            LumeError::PluginsDirMissing(_) => "PLUGINS_DIR_MISSING",
            LumeError::ArchiveMissing(_) => "ARCHIVE_MISSING",
            LumeError::TemplateMissing(_) => "TEMPLATE_MISSING",
            LumeError::UnknownToken(_) | LumeError::UnterminatedToken(_) => "UNKNOWN_TOKEN",
        }
    }
}
