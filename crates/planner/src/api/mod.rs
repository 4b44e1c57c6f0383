//! Public planner API surface.
//!
//! Gathers the types exposed to consumers of the planner crate so the session
//! module can stay focused on state and caching.

pub mod errors;
pub mod picker;

pub use errors::{PickError, PlannerError, Result};
pub use picker::{ItemPicker, PickPurpose, PickRequest, PresetPicker};
