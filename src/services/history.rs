use crate::domain::models::DeployRecord;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = ".lume/history.jsonl";

fn history_path(project_dir: &Path) -> PathBuf {
    project_dir.join(HISTORY_FILE)
}

/// Append one deploy record. Best effort: a failed append never fails
/// the deploy it records.
pub fn record_deploy(project_dir: &Path, record: &DeployRecord) {
    let path = history_path(project_dir);
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(line) = serde_json::to_string(record) else {
        return;
    };
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, format!("{}\n", line).as_bytes()));
}

pub fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

/// Read recorded deploys, oldest first. Missing file means no history;
/// unparseable lines are skipped.
pub fn read_history(project_dir: &Path, limit: Option<usize>) -> anyhow::Result<Vec<DeployRecord>> {
    let path = history_path(project_dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = std::fs::File::open(path)?;
    let mut records: Vec<DeployRecord> = std::io::BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| serde_json::from_str(&line).ok())
        .collect();
    if let Some(n) = limit {
        let skip = records.len().saturating_sub(n);
        records.drain(..skip);
    }
    Ok(records)
}
