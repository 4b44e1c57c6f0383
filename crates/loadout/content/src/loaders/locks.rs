//! Saved lock map loader.

use std::path::Path;

use loadout_core::LockMap;

use crate::loaders::{LoadResult, read_file};

/// Loader for lock maps from RON files.
///
/// File format: a map from slot to its locked entries.
///
/// ```ron
/// {
///     ClassItem: [Perk((hash: 3120000001, index: 12, name: "Heavy Ammo Finder"))],
///     Chest: [Burn(Void)],
/// }
/// ```
pub struct LockMapLoader;

impl LockMapLoader {
    /// Load a lock map from a RON file. Slots listed with no entries are dropped.
    pub fn load(path: &Path) -> LoadResult<LockMap> {
        let content = read_file(path)?;
        let map: LockMap = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse lock map RON: {}", e))?;

        Ok(LockMap::from_slots(
            map.iter().map(|(slot, entries)| (slot, entries.to_vec())),
        ))
    }

    /// Write a lock map as pretty RON.
    pub fn save(path: &Path, lock_map: &LockMap) -> LoadResult<()> {
        let content = ron::ser::to_string_pretty(lock_map, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize lock map RON: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}
