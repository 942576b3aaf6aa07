use crate::domain::models::{JarClass, StatusEntry};
use std::path::Path;

/// Classify a jar in the plugins directory relative to this project.
/// `current` is the exact archive name this project would deploy;
/// `stale` is any other `<name>-*.jar`; everything else is foreign.
pub fn classify_jar(file_name: &str, plugin_name: &str, current_archive: &str) -> JarClass {
    if file_name == current_archive {
        return JarClass::Current;
    }
    let prefix = format!("{}-", plugin_name);
    if file_name.starts_with(&prefix) && file_name.ends_with(".jar") {
        return JarClass::Stale;
    }
    JarClass::Other
}

pub fn list_jars(
    plugins_dir: &Path,
    plugin_name: &str,
    current_archive: &str,
) -> anyhow::Result<Vec<StatusEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(plugins_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file = entry.file_name().to_string_lossy().to_string();
        if !file.ends_with(".jar") {
            continue;
        }
        entries.push(StatusEntry {
            classification: classify_jar(&file, plugin_name, current_archive),
            bytes: entry.metadata()?.len(),
            file,
        });
    }
    entries.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(entries)
}

/// Remove this project's stale jars; with `all`, the current archive
/// goes too. Foreign jars are never touched.
pub fn clean_jars(
    plugins_dir: &Path,
    plugin_name: &str,
    current_archive: &str,
    all: bool,
) -> anyhow::Result<Vec<String>> {
    let mut removed = Vec::new();
    for entry in list_jars(plugins_dir, plugin_name, current_archive)? {
        let doomed = match entry.classification {
            JarClass::Stale => true,
            JarClass::Current => all,
            JarClass::Other => false,
        };
        if doomed {
            std::fs::remove_file(plugins_dir.join(&entry.file))?;
            removed.push(entry.file);
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::classify_jar;
    use crate::domain::models::JarClass;

    #[test]
    fn exact_archive_name_is_current() {
        assert_eq!(
            classify_jar("LumeLobby-0.1.0.jar", "LumeLobby", "LumeLobby-0.1.0.jar"),
            JarClass::Current
        );
    }

    #[test]
    fn older_version_of_same_plugin_is_stale() {
        assert_eq!(
            classify_jar("LumeLobby-0.0.9.jar", "LumeLobby", "LumeLobby-0.1.0.jar"),
            JarClass::Stale
        );
    }

    #[test]
    fn foreign_plugins_are_other() {
        assert_eq!(
            classify_jar("WorldEdit-7.3.0.jar", "LumeLobby", "LumeLobby-0.1.0.jar"),
            JarClass::Other
        );
        // A name that merely shares a prefix without the separator.
        assert_eq!(
            classify_jar("LumeLobbyExtras-1.0.jar", "LumeLobby", "LumeLobby-0.1.0.jar"),
            JarClass::Other
        );
    }
}
