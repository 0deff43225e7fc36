//! Live smoke test against the real Lodestone.
//!
//! Ignored by default; run with `cargo test -- --ignored` when network
//! access is acceptable.

use lodewatch_core::WorldStatusSource;
use lodewatch_lodestone::LodestoneClient;

#[test]
#[ignore = "performs a live network request"]
fn test_live_world_status_is_non_empty() {
    let client = LodestoneClient::new().expect("client should build");

    let worlds = WorldStatusSource::world_status(&client).expect("live fetch should succeed");
    assert!(!worlds.is_empty(), "live page should list at least one world");

    for world in &worlds {
        assert!(!world.group.is_empty(), "group name should never be empty");
        assert!(!world.name.is_empty(), "world name should never be empty");
    }
}
