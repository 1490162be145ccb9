//! File-based SnapshotRepository implementation.
//!
//! Stores each session as `{session_id}.json` under the base directory.
//! Saves write to a temp file first and rename into place, so readers never
//! observe a half-written snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::SessionState;

use super::{RepositoryError, Result, SnapshotRepository};

pub struct FileSnapshotRepository {
    base_dir: PathBuf,
}

impl FileSnapshotRepository {
    /// Create a new file-based snapshot repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn snapshot_path(&self, session_id: &str) -> Result<PathBuf> {
        // Session ids become file names; path separators would escape the
        // base directory.
        if session_id.is_empty()
            || session_id
                .chars()
                .any(|c| !c.is_alphanumeric() && c != '-' && c != '_')
        {
            return Err(RepositoryError::InvalidSessionId(session_id.to_string()));
        }
        Ok(self.base_dir.join(format!("{session_id}.json")))
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, session_id: &str, state: &SessionState) -> Result<()> {
        let path = self.snapshot_path(session_id)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        fs::write(&temp_path, json)?;
        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved snapshot {} to {}", session_id, path.display());

        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<Option<SessionState>> {
        let path = self.snapshot_path(session_id)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let state: SessionState =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded snapshot {} from {}", session_id, path.display());

        Ok(Some(state))
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        let path = self.snapshot_path(session_id)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted snapshot {}", session_id);
        }

        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>> {
        let mut sessions = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(name) = path.file_name().and_then(|s| s.to_str())
                && let Some(session_id) = name.strip_suffix(".json")
            {
                sessions.push(session_id.to_string());
            }
        }

        sessions.sort();
        Ok(sessions)
    }
}
