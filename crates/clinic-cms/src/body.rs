/// News body resolution.
///
/// The rich-text field has been stored as a plain HTML string, as an array of
/// blocks and as a single block object over the life of the content model.
/// Entries written under each of these must still render, so the field is
/// decoded into a `BodyShape` first and rendered per variant.
use serde_json::{Map, Value};

use crate::record::RawRecord;
use crate::resolve::stringify;
use crate::value::RichHtml;

#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape<'a> {
    Html(&'a str),
    Blocks(&'a [Value]),
    Block(&'a Map<String, Value>),
    Absent,
}

impl<'a> BodyShape<'a> {
    pub fn decode(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::String(html)) => BodyShape::Html(html),
            Some(Value::Array(blocks)) => BodyShape::Blocks(blocks),
            Some(Value::Object(block)) => BodyShape::Block(block),
            _ => BodyShape::Absent,
        }
    }

    /// HTML for this shape; empty when nothing usable was found.
    pub fn to_html(&self) -> String {
        match self {
            BodyShape::Html(html) => html.to_string(),
            BodyShape::Blocks(blocks) => blocks.iter().map(block_fragment).collect(),
            BodyShape::Block(block) => single_block_html(block),
            BodyShape::Absent => String::new(),
        }
    }
}

/// Resolve the displayable body of a news entry.
///
/// `content` is tried first in whichever shape it was stored, then `body`
/// verbatim, then `description` and `summary` wrapped in a paragraph.
pub fn resolve_news_body(record: &RawRecord) -> Option<RichHtml> {
    let html = BodyShape::decode(record.get("content")).to_html();
    if !html.trim().is_empty() {
        return Some(RichHtml::trusted(html));
    }

    if let Some(Value::String(body)) = record.get("body") {
        if !body.trim().is_empty() {
            return Some(RichHtml::trusted(body.clone()));
        }
    }

    ["description", "summary"]
        .iter()
        .find_map(|key| match record.get(key) {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(paragraph(text)),
            _ => None,
        })
        .map(RichHtml::trusted)
}

fn block_fragment(block: &Value) -> String {
    match block {
        Value::String(html) => html.clone(),
        Value::Object(fields) => {
            if let Some(html) = fields.get("html").filter(|v| is_truthy(v)) {
                stringify(html)
            } else if let Some(text) = fields.get("text").filter(|v| is_truthy(v)) {
                paragraph(&stringify(text))
            } else if let Some(content) = fields.get("content").filter(|v| is_truthy(v)) {
                stringify(content)
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}

/// `html` and `text` are taken untrimmed. Whitespace-only `html` leaves the
/// body blank, so resolution moves on to the other fields.
fn single_block_html(block: &Map<String, Value>) -> String {
    if let Some(html) = non_empty_str(block.get("html")) {
        return html.to_string();
    }
    if let Some(text) = non_empty_str(block.get("text")) {
        return paragraph(text);
    }
    // Last resort: show the raw block so authors can see what was stored.
    let dump = serde_json::to_string_pretty(block).unwrap_or_default();
    format!("<pre>{}</pre>", html_escape::encode_text(&dump))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn paragraph(text: &str) -> String {
    format!("<p>{text}</p>")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
