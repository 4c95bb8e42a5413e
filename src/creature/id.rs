//! Creature identifiers taken from request bodies.

use std::fmt;

use serde_json::{Number, Value};

/// Identifier of a creature, already rendered as the text of its URL path
/// segment.
///
/// Any truthy JSON value is accepted and rendered the way a JavaScript
/// template string would render it: whole floats lose their fraction,
/// arrays join their elements with `,`, objects become `[object Object]`.
/// Falsy values (`null`, `false`, `0`, `""`) count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatureId(String);

impl CreatureId {
    /// Extract the `id` field from a request body.
    ///
    /// Returns `None` when the body is not an object, has no `id`, or the
    /// value is falsy.
    pub fn from_body(body: &Value) -> Option<Self> {
        let id = body.as_object()?.get("id")?;
        if is_falsy(id) {
            return None;
        }
        Some(Self(to_js_string(id)))
    }

    /// Text used as the upstream path segment.
    pub fn as_segment(&self) -> &str {
        &self.0
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        // Array elements that are null render as empty strings.
        Value::Array(items) => items
            .iter()
            .map(to_js_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let f = n.as_f64().unwrap_or_default();
    if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for CreatureId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CreatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
