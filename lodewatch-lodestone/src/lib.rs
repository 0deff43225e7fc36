// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `lodewatch` Lodestone
//!
//! Client and extractor for the Lodestone world status page.
//!
//! The interesting part lives in [`parser`]: a pure traversal that walks the
//! page's fixed hierarchy of marker classes and produces one
//! [`lodewatch_core::WorldStatus`] record per world, in document order.
//! Everything else is wiring:
//!
//! - [`document`] adapts the `scraper` HTML tree to the narrow
//!   [`lodewatch_core::QueryNode`] seam the extractor depends on
//! - [`client`] owns the HTTP transport and composes fetch → parse → extract
//!
//! ## Example
//!
//! ```ignore
//! use lodewatch_core::WorldStatusSource;
//! use lodewatch_lodestone::LodestoneClient;
//!
//! let client = LodestoneClient::new()?;
//! for world in client.world_status()? {
//!     println!("{}/{}: {}", world.group, world.name, world.status);
//! }
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod parser;

pub use client::{LodestoneClient, LodestoneConfig, DEFAULT_BASE_URL, WORLD_STATUS_PATH};
pub use document::{DocNode, Document};
pub use error::{DocumentError, LodestoneError};
pub use parser::{extract_worlds, parse_world_status_page};
