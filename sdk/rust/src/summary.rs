//! Summary card of a found creature.

use std::fmt;

use serde_json::Value;

/// The handful of fields a search result shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureSummary {
    pub id: Option<u64>,
    pub name: String,
    pub types: Vec<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub sprite: Option<String>,
}

impl CreatureSummary {
    pub fn from_record(record: &Value) -> Self {
        let types = record
            .get("types")
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(|t| t.pointer("/type/name").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: record.get("id").and_then(Value::as_u64),
            name: record
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            types,
            height: positive(record.get("height")),
            weight: positive(record.get("weight")),
            sprite: record
                .pointer("/sprites/front_default")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Types joined with `", "`, or `-` when there are none.
    pub fn types_line(&self) -> String {
        if self.types.is_empty() {
            "-".to_string()
        } else {
            self.types.join(", ")
        }
    }
}

// Zero and missing sizes are not shown.
fn positive(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|v| *v != 0.0)
}

impl fmt::Display for CreatureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "#{} {}", id, self.name)?,
            None => writeln!(f, "# {}", self.name)?,
        }
        writeln!(f, "Tipos: {}", self.types_line())?;
        if let Some(height) = self.height {
            writeln!(f, "Altura: {height}")?;
        }
        if let Some(weight) = self.weight {
            writeln!(f, "Peso: {weight}")?;
        }
        if let Some(sprite) = &self.sprite {
            writeln!(f, "Sprite: {sprite}")?;
        }
        Ok(())
    }
}
