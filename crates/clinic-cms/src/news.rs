/// Typed views over news entries.
use crate::body::resolve_news_body;
use crate::record::{Collection, RawRecord};
use crate::resolve::{excerpt, resolve_category_label, resolve_display_date, resolve_text};
use crate::value::{Excerpt, RichHtml};

pub const TITLE_FALLBACK: &str = "お知らせ";
/// Characters of body text shown on list cards.
pub const EXCERPT_CHARS: usize = 120;

/// A news entry as shown on its detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsEntry {
    pub id: String,
    pub title: String,
    pub display_date: Option<String>,
    pub category: Option<String>,
    pub body: Option<RichHtml>,
}

impl NewsEntry {
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            id: record.id().unwrap_or_default().to_string(),
            title: resolve_text(record, &["title"], TITLE_FALLBACK),
            display_date: resolve_display_date(record),
            category: resolve_category_label(record),
            body: resolve_news_body(record),
        }
    }
}

/// A news entry as shown on list pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSummary {
    pub id: String,
    pub title: String,
    pub display_date: Option<String>,
    pub category: Option<String>,
    pub excerpt: Excerpt,
}

impl NewsSummary {
    /// `None` for entries without an id, which cannot be linked to.
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let id = record.id().map(str::trim).filter(|id| !id.is_empty())?;
        let excerpt = resolve_news_body(record)
            .map(|body| excerpt(body.as_str(), EXCERPT_CHARS))
            .unwrap_or_default();
        Some(Self {
            id: id.to_string(),
            title: resolve_text(record, &["title"], TITLE_FALLBACK),
            display_date: resolve_display_date(record),
            category: resolve_category_label(record),
            excerpt,
        })
    }

    pub fn from_collection(collection: &Collection) -> Vec<Self> {
        collection
            .contents
            .iter()
            .filter_map(Self::from_record)
            .collect()
    }
}
