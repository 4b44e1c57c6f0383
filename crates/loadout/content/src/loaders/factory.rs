//! Content factory for loading a planning session's inputs.

use std::path::{Path, PathBuf};

use loadout_core::{BuilderConfig, Inventory, LockMap};

use crate::loaders::{ConfigLoader, InventoryLoader, LoadResult, LockMapLoader};

/// Content factory that loads all loadout content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── builder.toml     (optional)
/// ├── inventory.ron
/// └── locks.ron        (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load builder configuration from `builder.toml`, or defaults when the
    /// file is absent.
    pub fn load_config(&self) -> LoadResult<BuilderConfig> {
        let path = self.data_dir.join("builder.toml");
        if !path.exists() {
            return Ok(BuilderConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the inventory snapshot from `inventory.ron`.
    pub fn load_inventory(&self) -> LoadResult<Inventory> {
        InventoryLoader::load(&self.data_dir.join("inventory.ron"))
    }

    /// Load saved locks from `locks.ron`, or an empty map when absent.
    pub fn load_locks(&self) -> LoadResult<LockMap> {
        let path = self.data_dir.join("locks.ron");
        if !path.exists() {
            return Ok(LockMap::new());
        }
        LockMapLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
