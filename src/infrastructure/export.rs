//! Snapshot export.
//!
//! Writes a point-in-time JSON snapshot of the store's collections to disk.
//! This is a reporting feature, not persistence: snapshots are never read
//! back, and a fresh process always starts from the seed dataset.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::application::Store;
use crate::domain::{
    AppConfig, AppError, Application, Conversation, Donation, Event, Job, MentorshipRequest,
    Message, Result, User,
};

/// Serializable view over the store's collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    generated_at: chrono::DateTime<Utc>,
    alumni: &'a [User],
    students: &'a [User],
    jobs: &'a [Job],
    events: &'a [Event],
    mentorship_requests: &'a [MentorshipRequest],
    applications: &'a [Application],
    conversations: &'a [Conversation],
    messages: &'a [Message],
    donations: &'a [Donation],
}

/// Ensure the data and exports directories exist.
///
/// # Errors
/// Returns error if a directory cannot be created.
pub fn ensure_directories(config: &AppConfig) -> Result<()> {
    fs::create_dir_all(config.data_dir())
        .map_err(|e| AppError::io("Failed to create data directory", e))?;

    fs::create_dir_all(config.exports_dir())
        .map_err(|e| AppError::io("Failed to create exports directory", e))?;

    Ok(())
}

/// Write a JSON snapshot of the store to the given path, or to a stamped
/// file under the configured exports directory. Returns the written path.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn export_snapshot(store: &Store, config: &AppConfig, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            ensure_directories(config)?;
            let stamp = Utc::now().format("%Y%m%d-%H%M%S");
            config.exports_dir().join(format!("snapshot-{stamp}.json"))
        }
    };

    let snapshot = Snapshot {
        generated_at: Utc::now(),
        alumni: store.alumni(),
        students: store.students(),
        jobs: store.jobs(),
        events: store.events(),
        mentorship_requests: store.mentorship_requests(),
        applications: store.applications(),
        conversations: store.conversations(),
        messages: store.messages(),
        donations: store.donations(),
    };

    let content = serde_json::to_string_pretty(&snapshot).map_err(AppError::json)?;

    fs::write(&path, content)
        .map_err(|e| AppError::io(format!("Failed to write snapshot {}", path.display()), e))?;

    tracing::info!(path = %path.display(), "Snapshot exported");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::seeded_store;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.paths.data_dir = Some(dir.to_path_buf());
        config
    }

    #[test]
    fn test_export_to_explicit_path() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let store = seeded_store(&config);
        let target = dir.path().join("out.json");

        let written = export_snapshot(&store, &config, Some(&target)).unwrap();

        assert_eq!(written, target);
        let content = fs::read_to_string(&written).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["jobs"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["alumni"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_export_creates_exports_directory() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let store = seeded_store(&config);

        let written = export_snapshot(&store, &config, None).unwrap();

        assert!(written.starts_with(config.exports_dir()));
        assert!(written.exists());
    }
}
