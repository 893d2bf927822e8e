//! Deterministic per-kind merge of normalized items.
//!
//! Expressed as a sequential fold over the ordered loaded files, producing a
//! fresh map snapshot: `merge(ordered_files) -> MergedContent`. Same-kind
//! repeats of an `id` are merge events (scalar last-write-wins, array set
//! union), never errors; cross-kind collisions are the validator's concern.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::Value;

use hab_core::ContentItem;
use hab_core::enums::ItemKind;
use hab_core::item::extract_id;

use crate::loader::LoadedFile;

/// The canonical merged content set: one item per unique `id` within each
/// kind, keyed maps sorted by `id` so iteration is reproducible.
#[derive(Debug, Default, PartialEq)]
pub struct MergedContent {
    pub habits: BTreeMap<String, ContentItem>,
    pub research: BTreeMap<String, ContentItem>,
}

impl MergedContent {
    #[must_use]
    pub fn habit_count(&self) -> usize {
        self.habits.len()
    }

    #[must_use]
    pub fn research_count(&self) -> usize {
        self.research.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.habits.len() + self.research.len()
    }
}

/// Fold the ordered loaded files into the canonical per-kind maps.
#[must_use]
pub fn merge(files: &[LoadedFile]) -> MergedContent {
    let mut merged = MergedContent::default();
    for file in files {
        let source = file.descriptor.file_id();
        fold_items(&mut merged.habits, ItemKind::Habit, &file.habits, source);
        fold_items(&mut merged.research, ItemKind::Research, &file.research, source);
    }
    tracing::debug!(
        habits = merged.habit_count(),
        research = merged.research_count(),
        "merge finished"
    );
    merged
}

fn fold_items(map: &mut BTreeMap<String, ContentItem>, kind: ItemKind, items: &[Value], source: &str) {
    for value in items {
        // The loader already dropped unidentified items; skip defensively
        // without re-warning.
        let Some(object) = value.as_object() else { continue };
        let Some(id) = extract_id(object.get("id")) else { continue };

        match map.entry(id) {
            Entry::Occupied(mut occupied) => occupied.get_mut().merge_from(object.clone(), source),
            Entry::Vacant(vacant) => {
                if let Some(item) = ContentItem::from_object(kind, object.clone(), source) {
                    vacant.insert(item);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hab_core::ContentFileDescriptor;
    use hab_core::enums::FileKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn loaded(filename: &str, habits: Vec<Value>, research: Vec<Value>) -> LoadedFile {
        LoadedFile {
            descriptor: ContentFileDescriptor {
                path: filename.into(),
                filename: filename.to_string(),
                category: String::from("general"),
                kind: FileKind::Custom,
                modified_at: Utc::now(),
                size_bytes: 0,
            },
            habits,
            research,
        }
    }

    #[test]
    fn later_files_overwrite_scalars_and_union_arrays() {
        let files = vec![
            loaded(
                "a.json",
                vec![json!({"id": "x", "title": "A", "tags": ["p", "q"]})],
                vec![],
            ),
            loaded(
                "b.json",
                vec![json!({"id": "x", "title": "B", "tags": ["q", "r"]})],
                vec![],
            ),
        ];

        let merged = merge(&files);
        assert_eq!(merged.habit_count(), 1);
        let item = &merged.habits["x"];
        assert_eq!(item.str_field("title"), Some("B"));
        assert_eq!(
            item.string_array("tags").unwrap(),
            vec!["p".to_string(), "q".to_string(), "r".to_string()]
        );
        assert_eq!(item.sources, vec!["a.json", "b.json"]);
    }

    #[test]
    fn kinds_merge_into_separate_maps() {
        let files = vec![loaded(
            "mixed.json",
            vec![json!({"id": "same"})],
            vec![json!({"id": "same"})],
        )];

        let merged = merge(&files);
        assert_eq!(merged.habit_count(), 1);
        assert_eq!(merged.research_count(), 1);
        assert_eq!(merged.habits["same"].kind, ItemKind::Habit);
        assert_eq!(merged.research["same"].kind, ItemKind::Research);
    }

    #[test]
    fn every_merged_item_has_nonempty_id_and_sources() {
        let files = vec![
            loaded("a.json", vec![json!({"id": "h1"}), json!({"id": "h2"})], vec![]),
            loaded("b.json", vec![json!({"id": "h2"})], vec![json!({"id": "r1"})]),
        ];

        let merged = merge(&files);
        for item in merged.habits.values().chain(merged.research.values()) {
            assert!(!item.id.is_empty());
            assert!(!item.sources.is_empty());
        }
        assert_eq!(merged.habits["h2"].sources, vec!["a.json", "b.json"]);
    }

    #[test]
    fn replay_over_the_same_files_is_identical() {
        let files = vec![
            loaded("a.json", vec![json!({"id": "h1", "tags": ["x"]})], vec![]),
            loaded("b.json", vec![json!({"id": "h1", "tags": ["y"]})], vec![]),
        ];

        let first = merge(&files);
        let second = merge(&files);
        assert_eq!(first, second);
    }
}
