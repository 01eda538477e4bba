pub mod client;
pub mod envelope;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types. The payload shape is owned by the remote API.
// ---------------------------------------------------------------------------

/// Identifier of a tournament as it appears in the URL path.
///
/// Not validated: whatever the caller hands over is embedded as a single path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(String);

impl TournamentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TournamentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TournamentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for TournamentId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for TournamentId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Tournament payload exactly as the API returned it under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentData(Value);

impl TournamentData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Look up a top-level field. `None` when the payload is not an object.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(field))
    }

    /// Display title: the `name` field when it is a non-empty string.
    pub fn title(&self) -> Option<&str> {
        self.get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Flatten the payload into `(path, value)` rows for display.
    ///
    /// Object keys join with `.`, array elements use `[i]`. Empty containers
    /// are kept as a single `{}` / `[]` row so nothing silently disappears.
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        flatten_into(&mut rows, String::new(), &self.0);
        rows
    }
}

fn flatten_into(rows: &mut Vec<(String, String)>, path: String, value: &Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten_into(rows, child_path, child);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                let base = if path.is_empty() { "value" } else { path.as_str() };
                flatten_into(rows, format!("{base}[{i}]"), child);
            }
        }
        leaf => {
            let path = if path.is_empty() { "value".to_string() } else { path };
            rows.push((path, scalar_text(leaf)));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) => "{}".to_string(),
        Value::Array(_) => "[]".to_string(),
        other => other.to_string(),
    }
}

/// The two candidate endpoints, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Screen,
    Clock,
}

impl EndpointKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            EndpointKind::Screen => "screen",
            EndpointKind::Clock => "clock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EndpointKind::Screen => "screen endpoint",
            EndpointKind::Clock => "clock endpoint",
        }
    }
}

/// Tournament payload together with the endpoint that served it.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub endpoint: EndpointKind,
    pub data: TournamentData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_number_and_text() {
        assert_eq!(TournamentId::from(2u32).as_str(), "2");
        assert_eq!(TournamentId::from("spring-open").to_string(), "spring-open");
    }

    #[test]
    fn test_title_uses_name_field() {
        let data = TournamentData::new(json!({"name": "Spring Open", "level": 3}));
        assert_eq!(data.title(), Some("Spring Open"));

        let blank = TournamentData::new(json!({"name": "  "}));
        assert_eq!(blank.title(), None);

        let scalar = TournamentData::new(json!(42));
        assert_eq!(scalar.title(), None);
    }

    #[test]
    fn test_rows_flatten_nested_payload() {
        let data = TournamentData::new(json!({
            "name": "Spring Open",
            "clock": {"level": 4, "paused": false},
            "blinds": [100, 200],
            "notes": null,
        }));
        let mut rows = data.rows();
        rows.sort();
        assert_eq!(
            rows,
            vec![
                ("blinds[0]".to_string(), "100".to_string()),
                ("blinds[1]".to_string(), "200".to_string()),
                ("clock.level".to_string(), "4".to_string()),
                ("clock.paused".to_string(), "false".to_string()),
                ("name".to_string(), "Spring Open".to_string()),
                ("notes".to_string(), "null".to_string()),
            ]
        );
    }

    #[test]
    fn test_rows_keep_empty_containers() {
        let data = TournamentData::new(json!({"players": [], "meta": {}}));
        let mut rows = data.rows();
        rows.sort();
        assert_eq!(
            rows,
            vec![
                ("meta".to_string(), "{}".to_string()),
                ("players".to_string(), "[]".to_string()),
            ]
        );

        let empty = TournamentData::new(json!({}));
        assert_eq!(empty.rows(), vec![("value".to_string(), "{}".to_string())]);
    }
}
