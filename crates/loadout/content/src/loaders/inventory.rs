//! Inventory snapshot loader.

use std::path::Path;

use loadout_core::{ArmorItem, Inventory};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Inventory file structure for RON files: a flat item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFile {
    pub items: Vec<ArmorItem>,
}

/// Loader for inventory snapshots from RON files.
pub struct InventoryLoader;

impl InventoryLoader {
    /// Load the flat item list from a RON file.
    pub fn load_items(path: &Path) -> LoadResult<Vec<ArmorItem>> {
        let content = read_file(path)?;
        let file: InventoryFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory RON: {}", e))?;

        Ok(file.items)
    }

    /// Load a RON item list grouped by class, slot, and identity.
    ///
    /// Class-agnostic items are listed under every playable class.
    pub fn load(path: &Path) -> LoadResult<Inventory> {
        Ok(Inventory::from_items(Self::load_items(path)?))
    }
}
