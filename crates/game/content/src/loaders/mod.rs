//! Content loaders for reading game data from files.
//!
//! Loaders convert committed RON files into game-core catalog types. The
//! built-in content in [`crate::canon`] is the fallback when no data file is
//! supplied.

pub mod techniques;

pub use techniques::TechniqueLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
