use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;

use super::codes::KnownErrorCode;

/// A known request error raised by the query engine.
///
/// `meta` varies per code; see [`crate::errors::messages`] for the fields each
/// code reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnownRequestError {
    /// Engine error code (e.g. "P2002")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Engine message
    #[serde(default)]
    pub message: String,
    /// Code-specific detail fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub meta: Option<Map<String, Value>>,
    /// Version of the client that raised the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_version: Option<String>,
    /// Any other engine fields (e.g. `batchRequestIdx`), echoed back unchanged
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl KnownRequestError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attach a meta field, creating the map if needed
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = Some(version.into());
        self
    }

    /// The code if it is one of the known table entries
    pub fn known_code(&self) -> Option<KnownErrorCode> {
        self.code.as_deref().and_then(KnownErrorCode::parse)
    }

    /// Raw meta value, treating JSON `null` as absent
    pub fn meta_value(&self, key: &str) -> Option<&Value> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.get(key))
            .filter(|value| !value.is_null())
    }

    /// Meta field rendered as message text; absent fields render empty
    pub fn meta_text(&self, key: &str) -> String {
        self.meta_value(key).map(render_value).unwrap_or_default()
    }

    /// First present field among `keys`, rendered as message text
    pub fn meta_text_or(&self, keys: &[&str]) -> String {
        keys.iter()
            .find_map(|key| self.meta_value(key))
            .map(render_value)
            .unwrap_or_default()
    }
}

impl fmt::Display for KnownRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for KnownRequestError {}

/// Render a meta value for interpolation into a message.
///
/// Strings are inserted raw, arrays are joined with `,`, objects are emitted as
/// compact JSON and `null` renders empty.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
