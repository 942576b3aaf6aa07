use crate::error::LumeError;
use std::path::{Path, PathBuf};

pub const SERVER_DIR_ENV: &str = "ISKYWARS_SERVER_DIR";
pub const DEFAULT_SERVER_DIR: &str = "ISkyWarsServer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Flag,
    Env,
    Default,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Flag => "flag",
            ResolutionSource::Env => "env",
            ResolutionSource::Default => "default",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedServer {
    pub server_dir: PathBuf,
    pub source: ResolutionSource,
}

impl ResolvedServer {
    pub fn plugins_dir(&self) -> PathBuf {
        self.server_dir.join("plugins")
    }
}

/// Resolution precedence: `--server-dir` flag, then the
/// `ISKYWARS_SERVER_DIR` environment variable, then the fixed
/// project-relative default. The flag wins verbatim even when the
/// environment variable is set. Never fails; preconditions are
/// enforced by the operations that need the directory.
pub fn resolve_server_dir(
    flag: Option<&Path>,
    env: Option<&str>,
    project_dir: &Path,
) -> ResolvedServer {
    if let Some(dir) = flag {
        return ResolvedServer {
            server_dir: dir.to_path_buf(),
            source: ResolutionSource::Flag,
        };
    }
    match env {
        Some(v) if !v.is_empty() => ResolvedServer {
            server_dir: PathBuf::from(v),
            source: ResolutionSource::Env,
        },
        _ => ResolvedServer {
            server_dir: project_dir.join(DEFAULT_SERVER_DIR),
            source: ResolutionSource::Default,
        },
    }
}

pub fn resolve_from_cli(flag: Option<&Path>, project_dir: &Path) -> ResolvedServer {
    let env = std::env::var(SERVER_DIR_ENV).ok();
    let resolved = resolve_server_dir(flag, env.as_deref(), project_dir);
    tracing::debug!(
        server_dir = %resolved.server_dir.display(),
        source = resolved.source.as_str(),
        "resolved server directory"
    );
    resolved
}

/// The deploy precondition: `<server-dir>/plugins` must exist and be a
/// directory before anything is copied.
pub fn require_plugins_dir(resolved: &ResolvedServer) -> Result<PathBuf, LumeError> {
    let dir = resolved.plugins_dir();
    if !dir.is_dir() {
        return Err(LumeError::PluginsDirMissing(dir));
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::{resolve_server_dir, ResolutionSource};
    use std::path::Path;

    #[test]
    fn flag_wins_over_env_and_default() {
        let r = resolve_server_dir(
            Some(Path::new("/srv/paper")),
            Some("/elsewhere"),
            Path::new("/proj"),
        );
        assert_eq!(r.server_dir, Path::new("/srv/paper"));
        assert_eq!(r.source, ResolutionSource::Flag);
    }

    #[test]
    fn env_wins_when_flag_absent() {
        let r = resolve_server_dir(None, Some("/elsewhere"), Path::new("/proj"));
        assert_eq!(r.server_dir, Path::new("/elsewhere"));
        assert_eq!(r.source, ResolutionSource::Env);
    }

    #[test]
    fn empty_env_falls_through_to_default() {
        let r = resolve_server_dir(None, Some(""), Path::new("/proj"));
        assert_eq!(r.server_dir, Path::new("/proj/ISkyWarsServer"));
        assert_eq!(r.source, ResolutionSource::Default);
    }

    #[test]
    fn default_is_project_relative() {
        let r = resolve_server_dir(None, None, Path::new("/proj"));
        assert_eq!(r.server_dir, Path::new("/proj/ISkyWarsServer"));
        assert_eq!(r.source, ResolutionSource::Default);
        assert_eq!(r.plugins_dir(), Path::new("/proj/ISkyWarsServer/plugins"));
    }
}
