//! Planning sessions over an armor inventory.
//!
//! This crate wires the pure algorithms of `loadout-core` into a stateful
//! session. Consumers build a [`Planner`], mutate its lock state through the
//! planner's methods, and read memoized views (generated sets, filtered sets,
//! reachable perks).
//!
//! Modules are organized by responsibility:
//! - [`planner`] hosts the session and its builder
//! - [`api`] exposes the error and item-picker types clients interact with
pub mod api;
pub mod planner;

pub use api::{ItemPicker, PickError, PickPurpose, PickRequest, PlannerError, PresetPicker, Result};
pub use planner::{FilteredPerks, Planner, PlannerBuilder};
