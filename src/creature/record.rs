//! Creature records as returned by the upstream API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One creature as reported upstream.
///
/// The record is kept as the raw JSON document so it can be handed back to
/// callers field-for-field. Accessors are read-only views over the fields
/// the proxy and its clients care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureRecord(Value);

impl CreatureRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Size attribute used by the height rule.
    ///
    /// Numeric strings and booleans are read as numbers, the way a loose
    /// numeric comparison reads them. `None` when absent or not a number.
    pub fn height(&self) -> Option<f64> {
        match self.0.get("height")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if s.trim().is_empty() => Some(0.0),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|h| h.is_finite()),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn weight(&self) -> Option<f64> {
        self.0.get("weight").and_then(Value::as_f64)
    }

    /// Names of the creature's types, in upstream order.
    pub fn type_names(&self) -> Vec<&str> {
        self.0
            .get("types")
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(|t| t.pointer("/type/name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn front_sprite(&self) -> Option<&str> {
        self.0.pointer("/sprites/front_default").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for CreatureRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu() -> CreatureRecord {
        CreatureRecord::new(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "u" } }],
            "sprites": { "front_default": "https://img/25.png", "back_default": null }
        }))
    }

    #[test]
    fn test_accessors() {
        let record = pikachu();
        assert_eq!(record.id(), Some(25));
        assert_eq!(record.name(), Some("pikachu"));
        assert_eq!(record.height(), Some(4.0));
        assert_eq!(record.weight(), Some(60.0));
        assert_eq!(record.type_names(), vec!["electric"]);
        assert_eq!(record.front_sprite(), Some("https://img/25.png"));
    }

    #[test]
    fn test_missing_fields() {
        let record = CreatureRecord::new(json!({ "name": "missingno", "height": "tall" }));
        assert_eq!(record.id(), None);
        assert_eq!(record.height(), None);
        assert!(record.type_names().is_empty());
        assert_eq!(record.front_sprite(), None);
    }

    #[test]
    fn test_height_reads_numeric_strings() {
        let height_of = |h: Value| CreatureRecord::new(json!({ "height": h })).height();
        assert_eq!(height_of(json!("20")), Some(20.0));
        assert_eq!(height_of(json!(" 7.5 ")), Some(7.5));
        assert_eq!(height_of(json!("")), Some(0.0));
        assert_eq!(height_of(json!(true)), Some(1.0));
        assert_eq!(height_of(json!("tall")), None);
        assert_eq!(height_of(json!([20])), None);
    }

    #[test]
    fn test_serializes_verbatim() {
        let raw = r#"{"name":"pikachu","id":25,"extra":{"z":1,"a":[true,null]}}"#;
        let record: CreatureRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), raw);
    }
}
