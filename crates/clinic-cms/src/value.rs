use std::fmt;

use reqwest::Url;

/// Hosts that serve CMS-managed image assets.
const CMS_ASSET_HOST: &str = "images.microcms-assets.io";
const CMS_HOST_SUFFIX: &str = ".microcms.io";

/// A resolved image asset.
///
/// `width`/`height` are only known when the CMS delivered its native asset object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
        }
    }

    /// True for https URLs on the CMS asset hosts. Other images are not rendered.
    pub fn is_cms_hosted(&self) -> bool {
        let Ok(url) = Url::parse(&self.url) else {
            return false;
        };
        if url.scheme() != "https" {
            return false;
        }
        match url.host_str() {
            Some(host) => host == CMS_ASSET_HOST || host.ends_with(CMS_HOST_SUFFIX),
            None => false,
        }
    }
}

/// HTML authored in the CMS rich-text or embed editors.
///
/// Content authors are trusted: the fragment is embedded into pages verbatim and
/// is never sanitized here. Construct one only from CMS-authored fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichHtml(String);

impl RichHtml {
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RichHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plain-text preview of an HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Excerpt {
    pub text: String,
    /// True when `text` was cut short and ends with an ellipsis.
    pub truncated: bool,
}
