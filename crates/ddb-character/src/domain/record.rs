//! Character Record
//!
//! The raw `data` document returned by the D&D Beyond character service.
//! Only a handful of fields are read; everything else is carried opaquely.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for any field the record does not carry
pub const UNKNOWN: &str = "Unknown";

/// Raw character document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterRecord(Value);

impl CharacterRecord {
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    /// Extract the record from a full service payload (`{"data": {...}}`)
    pub fn from_payload(mut payload: Value) -> Option<Self> {
        match payload.get_mut("data").map(Value::take) {
            Some(data @ Value::Object(_)) => Some(Self(data)),
            _ => None,
        }
    }

    /// Character name, or `"Unknown"`
    pub fn name(&self) -> String {
        self.text(&["name"])
    }

    /// Resolve a nested field to printable text.
    ///
    /// Absent keys, non-object intermediates and `null` all resolve to
    /// [`UNKNOWN`]. Numbers and booleans are rendered as-is.
    pub fn text(&self, path: &[&str]) -> String {
        lookup(&self.0, path)
            .and_then(render)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// `"<className> <level>"` for every entry of `classes`, in source order,
    /// joined by `", "`. Empty when `classes` is absent or empty.
    pub fn class_levels(&self) -> String {
        let Some(classes) = self.0.get("classes").and_then(Value::as_array) else {
            return String::new();
        };

        classes
            .iter()
            .map(|class| {
                let name = lookup(class, &["definition", "name"])
                    .and_then(render)
                    .unwrap_or_else(|| UNKNOWN.to_string());
                let level = lookup(class, &["level"])
                    .and_then(render)
                    .unwrap_or_else(|| UNKNOWN.to_string());
                format!("{} {}", name, level)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(*key))
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_takes_data_object() {
        let record = CharacterRecord::from_payload(json!({
            "id": 1,
            "success": true,
            "data": { "name": "Aria" }
        }))
        .unwrap();
        assert_eq!(record.name(), "Aria");
    }

    #[test]
    fn test_from_payload_without_data() {
        assert!(CharacterRecord::from_payload(json!({ "id": 1 })).is_none());
        assert!(CharacterRecord::from_payload(json!({ "data": null })).is_none());
    }

    #[test]
    fn test_missing_fields_are_unknown() {
        let record = CharacterRecord::new(json!({ "race": "not an object", "faith": null }));
        assert_eq!(record.name(), UNKNOWN);
        assert_eq!(record.text(&["race", "fullName"]), UNKNOWN);
        assert_eq!(record.text(&["notes", "backstory"]), UNKNOWN);
        assert_eq!(record.text(&["faith"]), UNKNOWN);
    }

    #[test]
    fn test_numbers_render_as_text() {
        let record = CharacterRecord::new(json!({ "age": 112, "weight": 130 }));
        assert_eq!(record.text(&["age"]), "112");
        assert_eq!(record.text(&["weight"]), "130");
    }

    #[test]
    fn test_class_levels_in_source_order() {
        let record = CharacterRecord::new(json!({
            "classes": [
                { "definition": { "name": "Wizard" }, "level": 3 },
                { "definition": { "name": "Fighter" }, "level": 1 }
            ]
        }));
        assert_eq!(record.class_levels(), "Wizard 3, Fighter 1");
    }

    #[test]
    fn test_class_levels_empty() {
        assert_eq!(CharacterRecord::new(json!({})).class_levels(), "");
        assert_eq!(
            CharacterRecord::new(json!({ "classes": [] })).class_levels(),
            ""
        );
    }
}
