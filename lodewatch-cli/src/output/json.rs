//! JSON output formatting.

use anyhow::Result;
use lodewatch_core::WorldStatus;
use serde::Serialize;

use super::count_groups;

/// JSON envelope for a world list.
///
/// Field names are part of the scripting interface; keep them stable.
#[derive(Debug, Serialize)]
pub struct WorldListOutput<'a> {
    pub world_count: usize,
    pub group_count: usize,
    pub worlds: &'a [WorldStatus],
}

/// Renders a world list as JSON.
pub fn render(worlds: &[WorldStatus], pretty: bool) -> Result<String> {
    let output = WorldListOutput {
        world_count: worlds.len(),
        group_count: count_groups(worlds),
        worlds,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    Ok(json)
}
