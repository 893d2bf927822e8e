//! Envelope-shape normalization for hand-authored content files.
//!
//! The accepted shapes form an explicit priority list: each matcher either
//! claims the document or passes. Accepting a new envelope shape is one new
//! entry in [`MATCHERS`].

use serde_json::Value;

/// Envelope keys accepted for habit-kind files.
pub const HABIT_KEYS: &[&str] = &["habits", "data"];

/// Envelope keys accepted for research-kind files.
pub const RESEARCH_KEYS: &[&str] = &["research", "articles", "studies", "data"];

/// The recognized document shape, tagged with how it was matched.
#[derive(Debug, PartialEq)]
pub enum Shape {
    /// The whole document is the item list.
    BareArray(Vec<Value>),
    /// A recognized envelope key held the item list.
    Keyed(&'static str, Vec<Value>),
    /// A single object carrying an `id`, wrapped as a one-element list.
    Single(Value),
    /// No accepted shape matched; the document contributes zero items.
    Unrecognized,
}

impl Shape {
    /// The item list this shape yields.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::BareArray(items) | Self::Keyed(_, items) => items,
            Self::Single(item) => vec![item],
            Self::Unrecognized => Vec::new(),
        }
    }
}

type Matcher = fn(&Value, &[&'static str]) -> Option<Shape>;

/// Ordered by priority; the first matcher that claims the document wins.
const MATCHERS: &[Matcher] = &[match_bare_array, match_keyed_array, match_single_object];

/// Normalize a parsed document against the accepted envelope shapes for the
/// given key vocabulary.
#[must_use]
pub fn sniff(value: &Value, keys: &[&'static str]) -> Shape {
    for matcher in MATCHERS {
        if let Some(shape) = matcher(value, keys) {
            return shape;
        }
    }
    Shape::Unrecognized
}

fn match_bare_array(value: &Value, _keys: &[&'static str]) -> Option<Shape> {
    value.as_array().map(|items| Shape::BareArray(items.clone()))
}

fn match_keyed_array(value: &Value, keys: &[&'static str]) -> Option<Shape> {
    let object = value.as_object()?;
    for key in keys {
        if let Some(Value::Array(items)) = object.get(*key) {
            return Some(Shape::Keyed(key, items.clone()));
        }
    }
    None
}

fn match_single_object(value: &Value, _keys: &[&'static str]) -> Option<Shape> {
    let object = value.as_object()?;
    object.contains_key("id").then(|| Shape::Single(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn bare_array_wins_first() {
        let doc = json!([{"id": "h1"}, {"id": "h2"}]);
        let shape = sniff(&doc, HABIT_KEYS);
        assert_eq!(shape.into_items().len(), 2);
    }

    #[test]
    fn keyed_array_matches_kind_vocabulary() {
        let doc = json!({"habits": [{"id": "h1"}]});
        match sniff(&doc, HABIT_KEYS) {
            Shape::Keyed("habits", items) => assert_eq!(items.len(), 1),
            other => panic!("expected keyed shape, got {other:?}"),
        }

        // A research vocabulary does not claim a habits envelope.
        let shape = sniff(&doc, RESEARCH_KEYS);
        assert_eq!(shape, Shape::Unrecognized);
    }

    #[test]
    fn data_key_is_shared_across_kinds() {
        let doc = json!({"data": [{"id": "x"}]});
        assert!(matches!(sniff(&doc, HABIT_KEYS), Shape::Keyed("data", _)));
        assert!(matches!(sniff(&doc, RESEARCH_KEYS), Shape::Keyed("data", _)));
    }

    #[test]
    fn single_object_with_id_wraps_to_one_item() {
        let doc = json!({"id": "h1", "title": "Solo"});
        let items = sniff(&doc, HABIT_KEYS).into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], json!("h1"));
    }

    #[test]
    fn keyed_envelope_beats_single_object_when_both_apply() {
        // An envelope object that also happens to carry an `id` field.
        let doc = json!({"id": "envelope", "habits": [{"id": "h1"}]});
        assert!(matches!(sniff(&doc, HABIT_KEYS), Shape::Keyed("habits", _)));
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(sniff(&json!({"meta": 1}), HABIT_KEYS), Shape::Unrecognized);
        assert_eq!(sniff(&json!("just a string"), HABIT_KEYS), Shape::Unrecognized);
        assert_eq!(sniff(&json!(42), RESEARCH_KEYS), Shape::Unrecognized);
    }
}
