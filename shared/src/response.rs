//! API response envelope and shape normalization
//!
//! The backend wraps every payload as `{ data, status, message }`, but list
//! endpoints disagree on what `data` holds: an array, an object keyed by
//! index (`{"0": {..}, "1": {..}}`), another envelope, or the caller gets a
//! bare array with no envelope at all. Everything funnels through
//! [`normalize_list`] / [`normalize_item`] so that call sites only ever see
//! typed values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Envelope keys that may appear without a payload
const ENVELOPE_KEYS: &[&str] = &["status", "message", "success", "statusCode"];

/// Maximum `data.data` nesting followed before giving up
const MAX_ENVELOPE_DEPTH: usize = 3;

/// Unified API response structure
///
/// ```json
/// {
///     "data": [ ... ],
///     "status": 200,
///     "message": "Success"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Response payload
    #[serde(default)]
    pub data: Option<T>,
    /// Backend status (number or string depending on endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Create an envelope around a payload
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            status: Some(Value::from(200)),
            message: Some("Success".to_string()),
        }
    }

    /// Create an envelope without payload
    pub fn message_only(status: u16, message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: Some(Value::from(status)),
            message: Some(message.into()),
        }
    }
}

/// Response shape errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Response carries no data")]
    MissingData,

    #[error("Item {index} could not be decoded: {source}")]
    Item {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record could not be decoded: {0}")]
    Record(#[from] serde_json::Error),
}

/// Normalize any list-endpoint body into a typed `Vec`
///
/// Accepted shapes:
/// - `[ {..}, {..} ]`
/// - `{ "data": [ {..}, {..} ] }`
/// - `{ "data": { "0": {..}, "1": {..} } }` (ordered by key, numerically when possible)
/// - `{ "data": { "data": [ .. ] } }`
/// - `null`, `{ "data": null }` or an envelope without data (empty list)
pub fn normalize_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ParseError> {
    let items = unwrap_list(value, 0)?;
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| ParseError::Item { index, source })
        })
        .collect()
}

/// Normalize a single-record body (`{ "data": {..} }` or the bare record)
pub fn normalize_item<T: DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    let record = unwrap_item(value, 0)?;
    Ok(serde_json::from_value(record)?)
}

fn unwrap_list(value: Value, depth: usize) -> Result<Vec<Value>, ParseError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("data") {
                if depth >= MAX_ENVELOPE_DEPTH {
                    return Err(ParseError::UnexpectedShape(
                        "envelope nested too deeply".to_string(),
                    ));
                }
                return unwrap_list(inner, depth + 1);
            }
            if map.is_empty() {
                return Ok(Vec::new());
            }
            if map.values().all(Value::is_object) {
                tracing::debug!(count = map.len(), "list delivered as object-of-objects");
                return Ok(keyed_values(map));
            }
            if map.keys().all(|k| ENVELOPE_KEYS.contains(&k.as_str())) {
                return Ok(Vec::new());
            }
            Err(ParseError::UnexpectedShape(format!(
                "object with keys [{}] is not a list",
                map.keys().cloned().collect::<Vec<_>>().join(", ")
            )))
        }
        other => Err(ParseError::UnexpectedShape(format!(
            "expected list, got {}",
            json_kind(&other)
        ))),
    }
}

fn unwrap_item(value: Value, depth: usize) -> Result<Value, ParseError> {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Null) => Err(ParseError::MissingData),
            Some(inner @ Value::Object(_)) if depth < MAX_ENVELOPE_DEPTH => {
                unwrap_item(inner, depth + 1)
            }
            Some(inner) => {
                // `data` is a field of the record itself, put it back
                map.insert("data".to_string(), inner);
                Ok(Value::Object(map))
            }
            None => Ok(Value::Object(map)),
        },
        Value::Null => Err(ParseError::MissingData),
        other => Err(ParseError::UnexpectedShape(format!(
            "expected record, got {}",
            json_kind(&other)
        ))),
    }
}

/// Values of an object-of-objects in key order
fn keyed_values(map: Map<String, Value>) -> Vec<Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    entries.into_iter().map(|(_, v)| v).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
