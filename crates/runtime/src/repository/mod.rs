//! Session snapshot persistence.

mod error;
mod file;
mod memory;

pub use error::RepositoryError;
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepository;

use game_core::SessionState;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage abstraction for complete session snapshots.
///
/// A snapshot is the whole [`SessionState`], saved after every committed
/// turn. Implementations must make `save` all-or-nothing: a crash mid-save
/// leaves the previous snapshot intact.
pub trait SnapshotRepository: Send + Sync {
    fn save(&self, session_id: &str, state: &SessionState) -> Result<()>;
    fn load(&self, session_id: &str) -> Result<Option<SessionState>>;
    fn delete(&self, session_id: &str) -> Result<()>;
    fn list_sessions(&self) -> Result<Vec<String>>;
}
