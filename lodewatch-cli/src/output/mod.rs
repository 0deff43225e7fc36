//! Output formatting for CLI.

pub mod json;
pub mod text;

use lodewatch_core::WorldStatus;

/// Counts distinct data-center groups in an extracted world list.
///
/// Worlds arrive grouped in document order, so consecutive deduplication is
/// enough.
pub fn count_groups(worlds: &[WorldStatus]) -> usize {
    let mut count = 0;
    let mut last: Option<&str> = None;

    for world in worlds {
        if last != Some(world.group.as_str()) {
            count += 1;
            last = Some(world.group.as_str());
        }
    }

    count
}
