/// Weakly-typed records as delivered by the CMS.
///
/// Field names and shapes drift between content-model revisions and between the
/// English and Japanese spellings of the same attribute, so nothing here
/// assumes a schema. Typed access goes through `crate::resolve`.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields the CMS adds to every entry. Not authored content.
pub const SYSTEM_FIELDS: [&str; 5] = ["id", "createdAt", "updatedAt", "publishedAt", "revisedAt"];

/// A single content entry: field name to untyped value, in delivery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a JSON value if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Authored fields only, system bookkeeping excluded.
    pub fn custom_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields().filter(|(k, _)| !SYSTEM_FIELDS.contains(k))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// List envelope returned by collection endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub contents: Vec<RawRecord>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Shape of a single-entry response.
///
/// The detail endpoint normally returns the entry itself, but for some ids the
/// upstream hands back a list envelope instead. Both are decoded here so the
/// client can pick the first element or report the entry as missing.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPayload {
    Record(RawRecord),
    List(Vec<Value>),
    Unrecognized(&'static str),
}

impl DetailPayload {
    pub fn decode(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                if map.contains_key("contents") && !map.contains_key("id") {
                    match map.get("contents") {
                        Some(Value::Array(items)) => DetailPayload::List(items.clone()),
                        _ => DetailPayload::Unrecognized("object without id"),
                    }
                } else {
                    DetailPayload::Record(RawRecord(map))
                }
            }
            Value::Array(items) => DetailPayload::List(items),
            Value::Null => DetailPayload::Unrecognized("null"),
            Value::Bool(_) => DetailPayload::Unrecognized("boolean"),
            Value::Number(_) => DetailPayload::Unrecognized("number"),
            Value::String(_) => DetailPayload::Unrecognized("string"),
        }
    }
}
