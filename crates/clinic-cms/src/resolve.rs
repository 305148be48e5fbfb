/// Field resolution over loosely-typed CMS records.
///
/// Every function here is total: wrong-typed, missing or malformed fields fall
/// back to a declared default instead of failing. Candidate key lists are
/// ordered by priority and only listed keys are ever consulted, so results do
/// not depend on how the record's keys are enumerated.
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

use crate::record::RawRecord;
use crate::value::{Excerpt, ImageRef, RichHtml};

/// Display dates are rendered in Japan Standard Time.
const DISPLAY_UTC_OFFSET_SECS: i32 = 9 * 3600;
const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// First non-blank string among `keys`, trimmed; `fallback` otherwise.
///
/// Non-string values are skipped rather than coerced.
pub fn resolve_text(record: &RawRecord, keys: &[&str], fallback: &str) -> String {
    resolve_optional_text(record, keys).unwrap_or_else(|| fallback.to_string())
}

pub fn resolve_optional_text(record: &RawRecord, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(key).and_then(non_blank))
        .map(str::to_string)
}

/// First candidate holding either a list or newline-separated text.
///
/// Lists are returned in order with non-string elements stringified. Text is
/// split on line boundaries with blank lines dropped; text with no non-blank
/// line does not count as a match.
pub fn resolve_list(record: &RawRecord, keys: &[&str], fallback: &[&str]) -> Vec<String> {
    for key in keys {
        match record.get(key) {
            Some(Value::Array(items)) => return items.iter().map(stringify).collect(),
            Some(Value::String(text)) => {
                let lines = split_lines(text);
                if !lines.is_empty() {
                    return lines;
                }
            }
            _ => {}
        }
    }
    fallback.iter().map(|s| s.to_string()).collect()
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Image URL from a bare string or an asset object carrying `url` or `src`.
pub fn resolve_image(value: Option<&Value>) -> Option<ImageRef> {
    match value? {
        Value::String(_) => value.and_then(non_blank).map(ImageRef::new),
        Value::Object(asset) => {
            let url = asset
                .get("url")
                .and_then(non_blank)
                .or_else(|| asset.get("src").and_then(non_blank))?;
            Some(ImageRef {
                url: url.to_string(),
                width: asset.get("width").and_then(as_dimension),
                height: asset.get("height").and_then(as_dimension),
            })
        }
        _ => None,
    }
}

/// First candidate that resolves to an image.
pub fn resolve_image_field(record: &RawRecord, keys: &[&str]) -> Option<ImageRef> {
    keys.iter().find_map(|key| resolve_image(record.get(key)))
}

/// Trusted HTML passthrough. Anything but a non-blank string yields none.
pub fn resolve_rich_html(value: Option<&Value>) -> Option<RichHtml> {
    match value? {
        Value::String(html) if !html.trim().is_empty() => Some(RichHtml::trusted(html.clone())),
        _ => None,
    }
}

/// `category` as a plain label, or the `name` of a referenced category object.
pub fn resolve_category_label(record: &RawRecord) -> Option<String> {
    match record.get("category")? {
        Value::String(label) => non_blank_str(label).map(str::to_string),
        Value::Object(category) => category.get("name").and_then(non_blank).map(str::to_string),
        _ => None,
    }
}

/// Calendar date for display, preferring an authored `date` over `publishedAt`.
///
/// A value that does not parse as a date is passed over like an absent one.
pub fn resolve_display_date(record: &RawRecord) -> Option<String> {
    ["date", "publishedAt"]
        .iter()
        .filter_map(|key| record.get(key).and_then(non_blank))
        .find_map(parse_calendar_date)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        let display_tz = FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS)?;
        return Some(instant.with_timezone(&display_tz).date_naive());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(local.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// First non-empty object among `keys`, e.g. a nested opening-hours group.
pub fn resolve_object(record: &RawRecord, keys: &[&str]) -> Option<RawRecord> {
    keys.iter().find_map(|key| match record.get(key) {
        Some(Value::Object(map)) if !map.is_empty() => Some(RawRecord::new(map.clone())),
        _ => None,
    })
}

/// Object elements of the first list among `keys`; other elements are dropped.
pub fn resolve_records(record: &RawRecord, keys: &[&str]) -> Vec<RawRecord> {
    keys.iter()
        .find_map(|key| match record.get(key) {
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(|item| RawRecord::from_value(item.clone()))
                    .collect(),
            ),
            _ => None,
        })
        .unwrap_or_default()
}

/// Tag-stripped preview of an HTML fragment, cut at `max_chars` characters.
pub fn excerpt(html: &str, max_chars: usize) -> Excerpt {
    let stripped = TAG_RE.replace_all(html, "");
    let text = html_escape::decode_html_entities(stripped.trim()).to_string();
    if text.chars().count() <= max_chars {
        return Excerpt {
            text,
            truncated: false,
        };
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    Excerpt {
        text: cut,
        truncated: true,
    }
}

pub(crate) fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().and_then(non_blank_str)
}

fn non_blank_str(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_dimension(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    #[test]
    fn text_prefers_earlier_candidates() {
        let r = record(json!({"name": "院長", "doctorName": "満屋 奨"}));
        assert_eq!(
            resolve_text(&r, &["doctorName", "医師名", "name"], "fallback"),
            "満屋 奨"
        );
    }

    #[test]
    fn text_skips_blank_and_wrong_typed_values() {
        let r = record(json!({"doctorName": "   ", "医師名": 42, "doctor_name": " 満屋 奨 "}));
        assert_eq!(
            resolve_text(&r, &["doctorName", "医師名", "doctor_name"], "fallback"),
            "満屋 奨"
        );
    }

    #[test]
    fn text_falls_back_when_nothing_matches() {
        let r = record(json!({"other": "value"}));
        assert_eq!(resolve_text(&r, &["doctorName"], "満屋 奨"), "満屋 奨");
        assert_eq!(resolve_text(&r, &[], "fb"), "fb");
    }

    #[test]
    fn list_splits_newline_text() {
        let r = record(json!({"q": "a\nb\n\nc"}));
        assert_eq!(resolve_list(&r, &["q"], &[]), vec!["a", "b", "c"]);
    }

    #[test]
    fn list_handles_crlf_and_whitespace_lines() {
        let r = record(json!({"q": "a\r\n  \r\nb\r\n"}));
        assert_eq!(resolve_list(&r, &["q"], &[]), vec!["a", "b"]);
    }

    #[test]
    fn list_returns_native_array_unchanged() {
        let r = record(json!({"q": ["x", "y"]}));
        assert_eq!(resolve_list(&r, &["q"], &[]), vec!["x", "y"]);
    }

    #[test]
    fn list_stringifies_non_string_elements() {
        let r = record(json!({"q": ["x", 2, true]}));
        assert_eq!(resolve_list(&r, &["q"], &[]), vec!["x", "2", "true"]);
    }

    #[test]
    fn list_moves_past_blank_text_and_scalars() {
        let r = record(json!({"qualifications": "\n  \n", "資格": 3, "career": "x"}));
        assert_eq!(
            resolve_list(&r, &["qualifications", "資格"], &["none"]),
            vec!["none"]
        );
    }

    #[test]
    fn image_accepts_url_object_and_bare_string() {
        assert_eq!(
            resolve_image(Some(&json!({"url": "https://example.test/a.png"}))),
            Some(ImageRef::new("https://example.test/a.png"))
        );
        assert_eq!(
            resolve_image(Some(&json!("https://example.test/b.png"))),
            Some(ImageRef::new("https://example.test/b.png"))
        );
    }

    #[test]
    fn image_reads_src_and_dimensions() {
        let image = resolve_image(Some(&json!({
            "src": "https://example.test/c.png",
            "width": 640,
            "height": 480
        })))
        .unwrap();
        assert_eq!(image.url, "https://example.test/c.png");
        assert_eq!(image.width, Some(640));
        assert_eq!(image.height, Some(480));
    }

    #[test]
    fn image_rejects_unusable_shapes() {
        assert_eq!(resolve_image(Some(&json!({}))), None);
        assert_eq!(resolve_image(Some(&Value::Null)), None);
        assert_eq!(resolve_image(None), None);
        assert_eq!(resolve_image(Some(&json!({"url": {"nested": true}}))), None);
        assert_eq!(resolve_image(Some(&json!(["https://example.test/a.png"]))), None);
        assert_eq!(resolve_image(Some(&json!(""))), None);
    }

    #[test]
    fn image_field_uses_first_resolvable_candidate() {
        let r = record(json!({
            "doctorPhoto": {"alt": "no url"},
            "医師写真": {"url": "https://example.test/doc.jpg"}
        }));
        assert_eq!(
            resolve_image_field(&r, &["doctorPhoto", "医師写真"]).map(|i| i.url),
            Some("https://example.test/doc.jpg".to_string())
        );
    }

    #[test]
    fn rich_html_passes_strings_through() {
        let html = r#"<iframe src="https://maps.example.test"></iframe>"#;
        assert_eq!(
            resolve_rich_html(Some(&json!(html))).map(RichHtml::into_string),
            Some(html.to_string())
        );
        assert_eq!(resolve_rich_html(Some(&json!({"html": "<p>x</p>"}))), None);
        assert_eq!(resolve_rich_html(Some(&json!("  "))), None);
        assert_eq!(resolve_rich_html(None), None);
    }

    #[test]
    fn category_label_from_string_or_object() {
        assert_eq!(
            resolve_category_label(&record(json!({"category": "休診"}))),
            Some("休診".to_string())
        );
        assert_eq!(
            resolve_category_label(&record(json!({"category": {"id": "c1", "name": "お知らせ"}}))),
            Some("お知らせ".to_string())
        );
        assert_eq!(resolve_category_label(&record(json!({"category": {"id": "c1"}}))), None);
        assert_eq!(resolve_category_label(&record(json!({"category": 3}))), None);
        assert_eq!(resolve_category_label(&record(json!({}))), None);
    }

    #[test]
    fn display_date_prefers_date_over_published_at() {
        let r = record(json!({
            "date": "2024-03-31T15:00:00.000Z",
            "publishedAt": "2024-01-10T01:00:00.000Z"
        }));
        // 15:00 UTC is the next day in JST.
        assert_eq!(resolve_display_date(&r), Some("2024/04/01".to_string()));
    }

    #[test]
    fn display_date_falls_back_to_published_at() {
        let r = record(json!({"date": "", "publishedAt": "2024-01-10T01:00:00.000Z"}));
        assert_eq!(resolve_display_date(&r), Some("2024/01/10".to_string()));

        let r = record(json!({"date": "not a date", "publishedAt": "2023-12-01"}));
        assert_eq!(resolve_display_date(&r), Some("2023/12/01".to_string()));
    }

    #[test]
    fn display_date_absent() {
        assert_eq!(resolve_display_date(&record(json!({}))), None);
        assert_eq!(resolve_display_date(&record(json!({"date": 20240101}))), None);
    }

    #[test]
    fn nested_object_and_records() {
        let r = record(json!({
            "hours": {},
            "診療時間": {"平日": "9:00-12:30"},
            "features": [{"title": "a"}, "stray", {"title": "b"}]
        }));
        let hours = resolve_object(&r, &["hours", "診療時間"]).unwrap();
        assert_eq!(hours.get("平日"), Some(&json!("9:00-12:30")));

        let features = resolve_records(&r, &["features", "特徴"]);
        assert_eq!(features.len(), 2);
        assert!(resolve_records(&r, &["missing"]).is_empty());
    }

    #[test]
    fn excerpt_strips_tags_and_truncates() {
        let short = excerpt("<p>本日は<strong>休診</strong>です。</p>", 120);
        assert_eq!(short.text, "本日は休診です。");
        assert!(!short.truncated);

        let long = excerpt(&format!("<p>{}</p>", "あ".repeat(130)), 120);
        assert!(long.truncated);
        assert_eq!(long.text.chars().count(), 121);
        assert!(long.text.ends_with('…'));
    }

    #[test]
    fn excerpt_decodes_entities() {
        assert_eq!(excerpt("<p>X線 &amp; CT</p>", 120).text, "X線 & CT");
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[ a-z\\n]{0,8}".prop_map(Value::String),
        ]
    }

    fn records() -> impl Strategy<Value = RawRecord> {
        proptest::collection::btree_map("[a-e]", scalar(), 0..6).prop_map(|fields| {
            RawRecord::new(fields.into_iter().collect())
        })
    }

    proptest! {
        #[test]
        fn text_comes_from_listed_key_or_fallback(
            r in records(),
            keys in proptest::collection::vec("[a-e]", 0..4),
        ) {
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            let resolved = resolve_text(&r, &keys, "FALLBACK");
            let from_listed = keys
                .iter()
                .any(|k| r.get(k).and_then(Value::as_str).map(str::trim) == Some(resolved.as_str()));
            prop_assert!(resolved == "FALLBACK" || from_listed);
            prop_assert!(resolved == "FALLBACK" || !resolved.trim().is_empty());
        }

        #[test]
        fn resolution_is_repeatable(
            r in records(),
            keys in proptest::collection::vec("[a-e]", 0..4),
        ) {
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            prop_assert_eq!(resolve_text(&r, &keys, ""), resolve_text(&r, &keys, ""));
            prop_assert_eq!(resolve_list(&r, &keys, &[]), resolve_list(&r, &keys, &[]));
            prop_assert_eq!(resolve_display_date(&r), resolve_display_date(&r));
        }

        #[test]
        fn text_ignores_field_order(
            fields in proptest::collection::vec(("[a-e]", scalar()), 0..6),
            keys in proptest::collection::vec("[a-e]", 0..4),
        ) {
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            let forward: serde_json::Map<String, Value> = fields.iter().cloned().collect();
            let mut reversed = serde_json::Map::new();
            for (k, _) in fields.iter().rev() {
                if !reversed.contains_key(k) {
                    reversed.insert(k.clone(), forward[k].clone());
                }
            }
            let a = RawRecord::new(forward);
            let b = RawRecord::new(reversed);
            prop_assert_eq!(resolve_text(&a, &keys, "-"), resolve_text(&b, &keys, "-"));
        }
    }
}
