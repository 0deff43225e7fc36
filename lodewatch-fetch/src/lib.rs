// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `lodewatch` Fetch
//!
//! Blocking HTTP transport for the `lodewatch` workspace.
//!
//! This crate is deliberately thin: the status page is fetched with a single
//! synchronous GET, bounded by a request timeout, with no retries. A failed
//! attempt is surfaced to the caller as-is.
//!
//! The client keeps a persistent cookie store. The Lodestone sets a session
//! cookie on first contact and expects it echoed back, so the store must
//! live as long as the client when the same instance issues repeated
//! requests.
//!
//! ## Example
//!
//! ```ignore
//! use lodewatch_fetch::HttpClient;
//!
//! let client = HttpClient::new()?;
//! let body = client.get("https://eu.finalfantasyxiv.com/lodestone/worldstatus/")?;
//! ```

pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::FetchError;
