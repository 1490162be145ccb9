//! In-memory SnapshotRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::SessionState;

use super::{RepositoryError, Result, SnapshotRepository};

/// Keeps snapshots in a process-local map. The default repository for
/// tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshots: RwLock<HashMap<String, SessionState>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn save(&self, session_id: &str, state: &SessionState) -> Result<()> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        snapshots.insert(session_id.to_string(), state.clone());
        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<Option<SessionState>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshots.get(session_id).cloned())
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        snapshots.remove(session_id);
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut sessions: Vec<String> = snapshots.keys().cloned().collect();
        sessions.sort();
        Ok(sessions)
    }
}
