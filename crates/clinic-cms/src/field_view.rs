/// Generic presentation of arbitrary fields, used by the debug listing.
use serde_json::Value;

use crate::record::RawRecord;
use crate::resolve::stringify;
use crate::value::RichHtml;

const EMBED_MARKERS: [&str; 3] = ["<iframe", "<script", "embed"];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldView {
    /// Null, empty string or empty list. Not rendered.
    Empty,
    Text(String),
    /// Embed code pasted into a text field (maps, widgets).
    Embed(RichHtml),
    /// Key/value pairs of an object, values stringified.
    Object(Vec<(String, String)>),
    /// List items, each either `Text` or `Object`.
    List(Vec<FieldView>),
}

impl FieldView {
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Null => FieldView::Empty,
            Value::String(s) if s.is_empty() => FieldView::Empty,
            Value::String(s) if EMBED_MARKERS.iter().any(|m| s.contains(m)) => {
                FieldView::Embed(RichHtml::trusted(s.clone()))
            }
            Value::String(s) => FieldView::Text(s.clone()),
            Value::Array(items) if items.is_empty() => FieldView::Empty,
            Value::Array(items) => FieldView::List(items.iter().map(list_item).collect()),
            Value::Object(_) => object_pairs(value),
            other => FieldView::Text(other.to_string()),
        }
    }
}

/// Every authored field of a record with its view, empty ones skipped.
pub fn describe_fields(record: &RawRecord) -> Vec<(String, FieldView)> {
    record
        .custom_fields()
        .map(|(key, value)| (key.to_string(), FieldView::classify(value)))
        .filter(|(_, view)| *view != FieldView::Empty)
        .collect()
}

fn list_item(item: &Value) -> FieldView {
    match item {
        Value::Object(_) => object_pairs(item),
        other => FieldView::Text(stringify(other)),
    }
}

fn object_pairs(value: &Value) -> FieldView {
    let pairs = value
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(k, v)| (k.clone(), stringify(v)))
                .collect()
        })
        .unwrap_or_default();
    FieldView::Object(pairs)
}
