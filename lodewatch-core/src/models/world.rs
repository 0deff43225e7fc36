//! World status types.
//!
//! This module contains the types extracted from the world status page:
//! - [`WorldStatus`] - One record per world
//! - [`ServerStatus`] - Online / maintenance state
//! - [`WorldCategory`] - Classification label

use serde::{Deserialize, Serialize};

// ============================================================================
// Server Status
// ============================================================================

/// Online / maintenance state of a world.
///
/// Derived from the status marker classes on the page. The markers are
/// checked most-severe-first, so a node carrying more than one marker
/// resolves to the most severe state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    /// No status marker recognized.
    #[default]
    Unknown,
    /// Full maintenance - world unavailable.
    Maintenance,
    /// Partial maintenance - some services unavailable.
    PartialMaintenance,
    /// World is up and accepting logins.
    Online,
}

impl ServerStatus {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Maintenance => "Maintenance",
            Self::PartialMaintenance => "Partial Maintenance",
            Self::Online => "Online",
        }
    }

    /// Returns an emoji for the status.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Unknown => "⚪",
            Self::Maintenance => "🔴",
            Self::PartialMaintenance => "🟡",
            Self::Online => "🟢",
        }
    }

    /// Returns true if the world is up.
    pub fn is_online(&self) -> bool {
        *self == Self::Online
    }

    /// Returns true if any kind of maintenance is in progress.
    pub fn is_maintenance(&self) -> bool {
        matches!(self, Self::Maintenance | Self::PartialMaintenance)
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

// ============================================================================
// World Category
// ============================================================================

/// Classification label of a world.
///
/// The page carries this as display text; the label is preserved verbatim,
/// so text outside the four known values round-trips through
/// [`WorldCategory::Other`] untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorldCategory {
    /// Regular world with no incentives or restrictions.
    Standard,
    /// Low-population world with new-character bonuses.
    Preferred,
    /// High-population world with creation restrictions.
    Congested,
    /// Recently opened world.
    New,
    /// A label this crate does not know about, kept verbatim.
    Other(String),
}

impl WorldCategory {
    /// Returns the label exactly as it appeared on the page.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::Preferred => "Preferred",
            Self::Congested => "Congested",
            Self::New => "New",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for WorldCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Standard" => Self::Standard,
            "Preferred" => Self::Preferred,
            "Congested" => Self::Congested,
            "New" => Self::New,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for WorldCategory {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<WorldCategory> for String {
    fn from(category: WorldCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for WorldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// World Status Record
// ============================================================================

/// One record per world detected on the status page.
///
/// Records are plain value objects: structural equality only, no identity,
/// no cross-record references. They are built fresh on every extraction call
/// and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldStatus {
    /// Name of the enclosing data-center group (e.g. "Chaos").
    ///
    /// Shared by all worlds nested under the same grouping; never empty when
    /// the source page is well-formed.
    pub group: String,

    /// World display name, unique within a single extraction result.
    pub name: String,

    /// Classification label found next to the world name.
    pub category: WorldCategory,

    /// Online / maintenance state.
    pub status: ServerStatus,

    /// Whether new characters can currently be created on this world.
    pub can_create_new_characters: bool,
}

// ============================================================================
// Tests
// ============================================================================
