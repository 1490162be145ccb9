//! Technique catalog loader.

use std::path::Path;

use game_core::TechniqueCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for the gacha technique catalog from RON files.
pub struct TechniqueLoader;

impl TechniqueLoader {
    /// Loads a [`TechniqueCatalog`] from a RON file and validates that every
    /// rarity tier has at least one entry.
    pub fn load(path: &Path) -> LoadResult<TechniqueCatalog> {
        let content = read_file(path)?;
        let catalog: TechniqueCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse technique catalog RON: {}", e))?;
        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid technique catalog {}: {}", path.display(), e))?;
        Ok(catalog)
    }
}
