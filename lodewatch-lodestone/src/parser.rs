//! World status page extraction.
//!
//! The page is a fixed hierarchy of marker classes: data-center groups, each
//! holding a header and a list of world items, each world item carrying its
//! name, category label, a status icon, and optionally a character-creation
//! icon. [`extract_worlds`] walks that hierarchy and nothing else; it is a
//! pure function of the tree and works on any [`QueryNode`] implementation.

use lodewatch_core::{QueryNode, ServerStatus, WorldCategory, WorldStatus};
use tracing::debug;

use crate::document::Document;
use crate::error::LodestoneError;

// ============================================================================
// Marker Classes
// ============================================================================

/// Marker class on each data-center grouping section.
pub const GROUP_MARKER: &str = "world-dcgroup__item";

/// Marker class on the element holding a group's display name.
pub const GROUP_HEADER_MARKER: &str = "world-dcgroup__header";

/// Marker class on each world entry within a group.
pub const WORLD_MARKER: &str = "world-list__item";

/// Marker class on the element holding a world's display name.
pub const WORLD_NAME_MARKER: &str = "world-list__world_name";

/// Marker class on the element holding a world's category label.
pub const WORLD_CATEGORY_MARKER: &str = "world-list__world_category";

/// Marker class present when new character creation is open.
pub const CREATION_MARKER: &str = "world-ic__available";

/// Status markers checked in order; the first one present wins.
///
/// Ordered most-severe-first. A world item carrying several status markers
/// at once resolves to the most severe one, so the tie-break is this table,
/// not control flow.
const STATUS_RULES: &[(&str, ServerStatus)] = &[
    ("world-ic__3", ServerStatus::Maintenance),
    ("world-ic__2", ServerStatus::PartialMaintenance),
    ("world-ic__1", ServerStatus::Online),
];

// ============================================================================
// Extraction
// ============================================================================

/// Classifies a world item by its status markers.
fn classify_status<N: QueryNode>(item: &N) -> ServerStatus {
    STATUS_RULES
        .iter()
        .find(|(marker, _)| item.has_marked(marker))
        .map_or(ServerStatus::Unknown, |(_, status)| *status)
}

/// Extracts the world list from a parsed status page.
///
/// One record per world item, appended groups-outer, worlds-inner, both in
/// document order — the returned order is the page's visual order. A tree
/// with no matching nodes yields an empty list, never an error.
pub fn extract_worlds<N: QueryNode>(root: &N) -> Vec<WorldStatus> {
    let mut worlds = Vec::new();

    for group in root.find_marked(GROUP_MARKER) {
        let group_name = group
            .first_marked(GROUP_HEADER_MARKER)
            .map(|header| header.inner_text())
            .unwrap_or_default();

        for item in group.find_marked(WORLD_MARKER) {
            let name = item
                .first_marked(WORLD_NAME_MARKER)
                .map(|node| node.inner_text())
                .unwrap_or_default();
            let category = item
                .first_marked(WORLD_CATEGORY_MARKER)
                .map(|node| node.inner_text())
                .unwrap_or_default();

            worlds.push(WorldStatus {
                group: group_name.clone(),
                name,
                category: WorldCategory::from(category),
                status: classify_status(&item),
                can_create_new_characters: item.has_marked(CREATION_MARKER),
            });
        }
    }

    worlds
}

/// Parses raw page bytes and extracts the world list.
///
/// Fails only if the bytes cannot be interpreted as a document at all; see
/// [`Document::parse`].
pub fn parse_world_status_page(bytes: &[u8]) -> Result<Vec<WorldStatus>, LodestoneError> {
    let document = Document::parse(bytes)?;
    let worlds = extract_worlds(&document.root());
    debug!(count = worlds.len(), "Extracted world status records");

    Ok(worlds)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic in-memory tree; no HTML parsing behind it.
    #[derive(Debug, Clone)]
    struct FakeNode {
        classes: Vec<&'static str>,
        text: &'static str,
        children: Vec<FakeNode>,
    }

    impl FakeNode {
        fn new() -> Self {
            Self {
                classes: Vec::new(),
                text: "",
                children: Vec::new(),
            }
        }

        fn marked(classes: &[&'static str]) -> Self {
            Self {
                classes: classes.to_vec(),
                text: "",
                children: Vec::new(),
            }
        }

        fn with_text(mut self, text: &'static str) -> Self {
            self.text = text;
            self
        }

        fn child(mut self, child: FakeNode) -> Self {
            self.children.push(child);
            self
        }

        fn collect_text(&self, out: &mut String) {
            out.push_str(self.text);
            for child in &self.children {
                child.collect_text(out);
            }
        }

        fn find_into(&self, class: &str, out: &mut Vec<FakeNode>) {
            for child in &self.children {
                if child.classes.contains(&class) {
                    out.push(child.clone());
                }
                child.find_into(class, out);
            }
        }
    }

    impl QueryNode for FakeNode {
        fn find_marked(&self, class: &str) -> Vec<Self> {
            let mut out = Vec::new();
            self.find_into(class, &mut out);
            out
        }

        fn inner_text(&self) -> String {
            let mut text = String::new();
            self.collect_text(&mut text);
            text.trim().to_string()
        }
    }

    fn world_item(
        name: &'static str,
        category: &'static str,
        markers: &[&'static str],
    ) -> FakeNode {
        let mut item = FakeNode::marked(&[WORLD_MARKER])
            .child(FakeNode::marked(&[WORLD_NAME_MARKER]).with_text(name))
            .child(FakeNode::marked(&[WORLD_CATEGORY_MARKER]).with_text(category));
        for &marker in markers {
            item = item.child(FakeNode::marked(&[marker]));
        }
        item
    }

    fn group(header: &'static str, items: Vec<FakeNode>) -> FakeNode {
        let mut node = FakeNode::marked(&[GROUP_MARKER])
            .child(FakeNode::marked(&[GROUP_HEADER_MARKER]).with_text(header));
        for item in items {
            node = node.child(item);
        }
        node
    }

    #[test]
    fn test_extract_single_world() {
        let root = FakeNode::new().child(group(
            "Chaos",
            vec![world_item("Cerberus", "Standard", &["world-ic__1", CREATION_MARKER])],
        ));

        let worlds = extract_worlds(&root);
        assert_eq!(
            worlds,
            [WorldStatus {
                group: "Chaos".to_string(),
                name: "Cerberus".to_string(),
                category: WorldCategory::Standard,
                status: ServerStatus::Online,
                can_create_new_characters: true,
            }]
        );
    }

    #[test]
    fn test_empty_tree_yields_empty_list() {
        let worlds = extract_worlds(&FakeNode::new());
        assert!(worlds.is_empty());
    }

    #[test]
    fn test_group_without_worlds_yields_nothing() {
        let root = FakeNode::new().child(group("Chaos", vec![]));
        assert!(extract_worlds(&root).is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let root = FakeNode::new()
            .child(group(
                "Chaos",
                vec![
                    world_item("Cerberus", "Standard", &["world-ic__1"]),
                    world_item("Omega", "Preferred", &["world-ic__1"]),
                ],
            ))
            .child(group(
                "Light",
                vec![world_item("Alpha", "Standard", &["world-ic__1"])],
            ));

        let names: Vec<(String, String)> = extract_worlds(&root)
            .into_iter()
            .map(|w| (w.group, w.name))
            .collect();
        assert_eq!(
            names,
            [
                ("Chaos".to_string(), "Cerberus".to_string()),
                ("Chaos".to_string(), "Omega".to_string()),
                ("Light".to_string(), "Alpha".to_string()),
            ]
        );
    }

    #[test]
    fn test_reordering_input_reorders_output() {
        let chaos = group("Chaos", vec![world_item("Cerberus", "Standard", &[])]);
        let light = group("Light", vec![world_item("Alpha", "Standard", &[])]);

        let forward = FakeNode::new().child(chaos.clone()).child(light.clone());
        let reversed = FakeNode::new().child(light).child(chaos);

        let forward_groups: Vec<String> =
            extract_worlds(&forward).into_iter().map(|w| w.group).collect();
        let reversed_groups: Vec<String> =
            extract_worlds(&reversed).into_iter().map(|w| w.group).collect();

        assert_eq!(forward_groups, ["Chaos", "Light"]);
        assert_eq!(reversed_groups, ["Light", "Chaos"]);
    }

    #[test]
    fn test_status_markers_map_to_statuses() {
        let cases = [
            ("world-ic__1", ServerStatus::Online),
            ("world-ic__2", ServerStatus::PartialMaintenance),
            ("world-ic__3", ServerStatus::Maintenance),
        ];

        for (marker, expected) in cases {
            let root = FakeNode::new()
                .child(group("Chaos", vec![world_item("Cerberus", "Standard", &[marker])]));
            assert_eq!(extract_worlds(&root)[0].status, expected, "marker {marker}");
        }
    }

    #[test]
    fn test_no_status_marker_is_unknown() {
        let root =
            FakeNode::new().child(group("Chaos", vec![world_item("Cerberus", "Standard", &[])]));
        assert_eq!(extract_worlds(&root)[0].status, ServerStatus::Unknown);
    }

    #[test]
    fn test_most_severe_status_marker_wins() {
        // One icon node carrying both the maintenance and online markers
        // must resolve to maintenance.
        let item = FakeNode::marked(&[WORLD_MARKER])
            .child(FakeNode::marked(&[WORLD_NAME_MARKER]).with_text("Cerberus"))
            .child(FakeNode::marked(&[WORLD_CATEGORY_MARKER]).with_text("Standard"))
            .child(FakeNode::marked(&["world-ic__3", "world-ic__1"]));
        let root = FakeNode::new().child(group("Chaos", vec![item]));
        assert_eq!(extract_worlds(&root)[0].status, ServerStatus::Maintenance);

        // Same for partial maintenance over online.
        let root = FakeNode::new().child(group(
            "Chaos",
            vec![world_item("Cerberus", "Standard", &["world-ic__1", "world-ic__2"])],
        ));
        assert_eq!(
            extract_worlds(&root)[0].status,
            ServerStatus::PartialMaintenance
        );
    }

    #[test]
    fn test_creation_closed_without_marker() {
        let root = FakeNode::new().child(group(
            "Chaos",
            vec![world_item("Cerberus", "Congested", &["world-ic__1"])],
        ));
        assert!(!extract_worlds(&root)[0].can_create_new_characters);
    }

    #[test]
    fn test_texts_are_trimmed() {
        let root = FakeNode::new().child(group(
            "  Chaos\n",
            vec![world_item("\tCerberus ", " Standard ", &[])],
        ));

        let world = &extract_worlds(&root)[0];
        assert_eq!(world.group, "Chaos");
        assert_eq!(world.name, "Cerberus");
        assert_eq!(world.category, WorldCategory::Standard);
    }

    #[test]
    fn test_unknown_category_label_kept_verbatim() {
        let root = FakeNode::new().child(group(
            "Chaos",
            vec![world_item("Cerberus", "Frontier", &["world-ic__1"])],
        ));
        assert_eq!(
            extract_worlds(&root)[0].category,
            WorldCategory::Other("Frontier".to_string())
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let root = FakeNode::new().child(group(
            "Chaos",
            vec![
                world_item("Cerberus", "Standard", &["world-ic__1", CREATION_MARKER]),
                world_item("Louisoix", "Preferred", &["world-ic__2"]),
            ],
        ));

        assert_eq!(extract_worlds(&root), extract_worlds(&root));
    }
}
