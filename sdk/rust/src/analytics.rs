//! Analytics events published after a successful search.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{Number, Value};

pub const SEARCH_EVENT_NAME: &str = "pokemonSearch";

/// `{ "event": "pokemonSearch", "pokemonSearch": { id, name, height } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEvent {
    pub event: &'static str,
    #[serde(rename = "pokemonSearch")]
    pub details: SearchDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchDetails {
    pub id: Option<Number>,
    /// Lower-cased; empty when the record has no name.
    pub name: String,
    pub height: Option<Number>,
}

impl SearchEvent {
    pub fn from_record(record: &Value) -> Self {
        Self {
            event: SEARCH_EVENT_NAME,
            details: SearchDetails {
                id: number_field(record, "id"),
                name: record
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_lowercase(),
                height: number_field(record, "height"),
            },
        }
    }
}

fn number_field(record: &Value, key: &str) -> Option<Number> {
    match record.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Destination for analytics events.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: SearchEvent);
}

/// In-process event queue. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<SearchEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub fn events(&self) -> Vec<SearchEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for MemorySink {
    fn publish(&self, event: SearchEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

/// Writes each event to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn publish(&self, event: SearchEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => tracing::info!(event = %json, "Analytics event"),
            Err(e) => tracing::warn!(error = %e, "Failed to encode analytics event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_shape() {
        let event = SearchEvent::from_record(&json!({ "id": 25, "name": "Pikachu", "height": 4 }));
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "pokemonSearch",
                "pokemonSearch": { "id": 25, "name": "pikachu", "height": 4 }
            })
        );
    }

    #[test]
    fn test_missing_fields_become_null() {
        let event = SearchEvent::from_record(&json!({ "species": {} }));
        assert_eq!(
            serde_json::to_value(&event).unwrap()["pokemonSearch"],
            json!({ "id": null, "name": "", "height": null })
        );
    }

    #[test]
    fn test_memory_sink_clones_share_queue() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.publish(SearchEvent::from_record(&json!({ "id": 1, "name": "bulbasaur" })));
        assert_eq!(handle.events().len(), 1);
        assert_eq!(handle.events()[0].details.name, "bulbasaur");
    }
}
