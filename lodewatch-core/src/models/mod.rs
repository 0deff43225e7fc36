//! Domain models for lodewatch.
//!
//! This module contains the data structures extracted from the Lodestone
//! world status page.
//!
//! ## Submodules
//!
//! - [`world`] - World types (WorldStatus, ServerStatus, WorldCategory)

mod world;

// Re-export everything at the models level
pub use world::{ServerStatus, WorldCategory, WorldStatus};
