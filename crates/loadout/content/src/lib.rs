//! Data-driven loadout content and loaders.
//!
//! This crate reads the inputs a planning session starts from:
//! - Inventory snapshots (data-driven via RON)
//! - Saved lock maps (data-driven via RON)
//! - Builder configuration (data-driven via TOML)
//!
//! All loaders deserialize `loadout-core` types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, InventoryFile, InventoryLoader, LoadResult, LockMapLoader,
};
