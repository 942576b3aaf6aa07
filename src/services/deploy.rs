use crate::error::LumeError;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub struct CopyOutcome {
    pub dest: PathBuf,
    pub bytes: u64,
    pub sha256: String,
    pub overwrote: bool,
}

pub fn require_archive(archive: &Path) -> Result<(), LumeError> {
    if !archive.is_file() {
        return Err(LumeError::ArchiveMissing(archive.to_path_buf()));
    }
    Ok(())
}

/// Stat the archive without copying. Used by `--dry-run`.
pub fn inspect_archive(archive: &Path, plugins_dir: &Path) -> anyhow::Result<CopyOutcome> {
    require_archive(archive)?;
    let payload = std::fs::read(archive)?;
    let dest = plugins_dir.join(archive_name(archive)?);
    Ok(CopyOutcome {
        overwrote: dest.exists(),
        dest,
        bytes: payload.len() as u64,
        sha256: hex::encode(Sha256::digest(&payload)),
    })
}

/// Copy the built archive into the plugins directory, overwriting any
/// existing file of the same name. Single synchronous copy; no retries.
pub fn deploy_archive(archive: &Path, plugins_dir: &Path) -> anyhow::Result<CopyOutcome> {
    require_archive(archive)?;
    let payload = std::fs::read(archive)?;
    let dest = plugins_dir.join(archive_name(archive)?);
    let overwrote = dest.exists();
    std::fs::write(&dest, &payload)?;
    tracing::info!(
        dest = %dest.display(),
        bytes = payload.len(),
        overwrote,
        "deployed archive"
    );
    Ok(CopyOutcome {
        dest,
        bytes: payload.len() as u64,
        sha256: hex::encode(Sha256::digest(&payload)),
        overwrote,
    })
}

fn archive_name(archive: &Path) -> anyhow::Result<std::ffi::OsString> {
    archive
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| anyhow::anyhow!("archive path has no file name: {}", archive.display()))
}
