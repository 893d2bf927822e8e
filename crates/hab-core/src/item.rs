//! Canonical content entity produced by the merge engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::ItemKind;

/// One canonical content record per unique `id` within a kind.
///
/// All fields other than `id` are opaque to the pipeline and kept as raw
/// JSON; individual validator checks inspect the ones they care about.
/// `sources` records, in contribution order, the file identifiers that
/// defined or amended this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ItemKind,
    #[serde(rename = "_sources")]
    pub sources: Vec<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentItem {
    /// Build an item from a raw JSON object. Returns `None` when the object
    /// carries no usable `id`; such items never reach the model.
    #[must_use]
    pub fn from_object(kind: ItemKind, mut fields: Map<String, Value>, source: &str) -> Option<Self> {
        let id = extract_id(fields.get("id"))?;
        fields.remove("id");
        Some(Self {
            id,
            kind,
            sources: vec![source.to_string()],
            fields,
        })
    }

    /// Apply a repeat occurrence of this item's `id` from another file.
    ///
    /// Scalar fields are overwritten by the incoming values (last-write-wins).
    /// Fields that are arrays in both records merge as a set union: existing
    /// order is kept and unseen incoming values are appended. The incoming
    /// file identifier is appended to `_sources`.
    pub fn merge_from(&mut self, incoming: Map<String, Value>, source: &str) {
        for (key, value) in incoming {
            if key == "id" {
                continue;
            }
            match self.fields.entry(key) {
                serde_json::map::Entry::Occupied(mut occupied) => {
                    match (occupied.get_mut(), value) {
                        (Value::Array(existing), Value::Array(new)) => {
                            for entry in new {
                                if !existing.contains(&entry) {
                                    existing.push(entry);
                                }
                            }
                        }
                        (slot, value) => *slot = value,
                    }
                }
                serde_json::map::Entry::Vacant(vacant) => {
                    vacant.insert(value);
                }
            }
        }
        self.sources.push(source.to_string());
    }

    /// Reassemble the full JSON object including `id`, for schema validation.
    #[must_use]
    pub fn as_json(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert("id".to_string(), Value::String(self.id.clone()));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }

    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn i64_field(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(Value::as_i64)
    }

    /// String elements of an array field. `None` when the field is absent or
    /// not an array; non-string elements are skipped.
    #[must_use]
    pub fn string_array(&self, key: &str) -> Option<Vec<String>> {
        let array = self.fields.get(key)?.as_array()?;
        Some(
            array
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        )
    }
}

/// Extract a usable identifier from a raw `id` value. Hand-authored files
/// occasionally carry numeric ids; those are stringified.
#[must_use]
pub fn extract_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn from_object_requires_an_id() {
        let with_id = object(json!({"id": "h1", "title": "Walk"}));
        let item = ContentItem::from_object(ItemKind::Habit, with_id, "a.json").unwrap();
        assert_eq!(item.id, "h1");
        assert_eq!(item.sources, vec!["a.json"]);
        assert_eq!(item.str_field("title"), Some("Walk"));
        assert!(!item.has_field("id"));

        assert!(ContentItem::from_object(ItemKind::Habit, object(json!({"title": "x"})), "a.json").is_none());
        assert!(ContentItem::from_object(ItemKind::Habit, object(json!({"id": ""})), "a.json").is_none());
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let item =
            ContentItem::from_object(ItemKind::Research, object(json!({"id": 42})), "r.json").unwrap();
        assert_eq!(item.id, "42");
    }

    #[test]
    fn merge_overwrites_scalars_and_unions_arrays() {
        let mut item = ContentItem::from_object(
            ItemKind::Habit,
            object(json!({"id": "x", "title": "A", "tags": ["p", "q"]})),
            "a.json",
        )
        .unwrap();

        item.merge_from(object(json!({"id": "x", "title": "B", "tags": ["q", "r"]})), "b.json");

        assert_eq!(item.str_field("title"), Some("B"));
        assert_eq!(
            item.string_array("tags").unwrap(),
            vec!["p".to_string(), "q".to_string(), "r".to_string()]
        );
        assert_eq!(item.sources, vec!["a.json", "b.json"]);
    }

    #[test]
    fn merge_replaces_array_with_scalar_on_type_change() {
        let mut item = ContentItem::from_object(
            ItemKind::Habit,
            object(json!({"id": "x", "tags": ["p"]})),
            "a.json",
        )
        .unwrap();
        item.merge_from(object(json!({"tags": "solo"})), "b.json");
        assert_eq!(item.str_field("tags"), Some("solo"));
    }

    #[test]
    fn as_json_restores_the_id() {
        let item = ContentItem::from_object(
            ItemKind::Habit,
            object(json!({"id": "h1", "priority": 3})),
            "a.json",
        )
        .unwrap();
        let json = item.as_json();
        assert_eq!(json["id"], json!("h1"));
        assert_eq!(json["priority"], json!(3));
    }
}
