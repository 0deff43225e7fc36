// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `lodewatch` Core
//!
//! Core types, models, and traits for the `lodewatch` workspace.
//!
//! This crate provides the foundational abstractions used across all other
//! `lodewatch` crates, including:
//!
//! - Domain models (worlds, server statuses, world categories)
//! - Error types
//! - Trait definitions for status sources and document trees
//!
//! ## Key Types
//!
//! ### World Types
//! - [`WorldStatus`] - One record per detected world on the status page
//! - [`ServerStatus`] - Online / maintenance state of a world
//! - [`WorldCategory`] - Classification label (Standard, Preferred, ...)
//!
//! ### Traits
//! - [`WorldStatusSource`] - Anything that can produce the current world list
//! - [`QueryNode`] - Narrow view of a parsed document tree, so extraction
//!   logic stays independent of the HTML library behind it

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{ServerStatus, WorldCategory, WorldStatus};

// Re-export traits
pub use traits::{QueryNode, WorldStatusSource};
