//! Trait definitions for lodewatch.
//!
//! This module defines the seams between the extraction core and its
//! collaborators: the HTTP-backed status source on one side, and the parsed
//! document tree on the other.

use crate::error::CoreError;
use crate::models::WorldStatus;

/// Trait for anything that can produce the current world status list.
///
/// Implementors of this trait are responsible for:
/// - Retrieving the current status page contents
/// - Building a document tree from the response
/// - Extracting and returning the ordered world list
///
/// The call is synchronous and blocking; it either fully succeeds or fully
/// fails. A page with no recognizable worlds is a valid empty result, not an
/// error.
pub trait WorldStatusSource {
    /// Fetches and extracts the current world status list.
    ///
    /// The returned order matches the page's visual order: data-center
    /// groups in document order, worlds within each group in document order.
    fn world_status(&self) -> Result<Vec<WorldStatus>, CoreError>;
}

/// Narrow view of a node in a parsed document tree.
///
/// The extractor only ever needs three capabilities from the underlying HTML
/// library: find descendants by marker class, read trimmed inner text, and
/// check marker presence. Keeping that surface here lets the extraction
/// logic run against synthetic in-memory trees in tests, with no real HTML
/// parsing behind them.
pub trait QueryNode: Sized {
    /// Returns all descendant nodes carrying the given marker class, in
    /// document order.
    fn find_marked(&self, class: &str) -> Vec<Self>;

    /// Returns the trimmed inner text of this node.
    ///
    /// Only leading and trailing whitespace is removed; internal whitespace
    /// and case are preserved as-is.
    fn inner_text(&self) -> String;

    /// Returns the first descendant carrying the given marker class.
    fn first_marked(&self, class: &str) -> Option<Self> {
        self.find_marked(class).into_iter().next()
    }

    /// Returns true if any descendant carries the given marker class.
    fn has_marked(&self, class: &str) -> bool {
        !self.find_marked(class).is_empty()
    }
}
