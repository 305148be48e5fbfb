//! HTML rendering for site pages.
//!
//! Pages take typed views from `clinic_cms` and return complete documents.
//! CMS text always goes through `text`/`attr`; only `RichHtml` is embedded as is.

pub mod access;
pub mod admin;
pub mod doctor;
pub mod errors;
pub mod home;
pub mod news;
pub mod static_pages;

use std::borrow::Cow;

use clinic_cms::ImageRef;
use html_escape::{encode_double_quoted_attribute, encode_text};

const SITE_NAME: &str = "せき専門外来";

const NAV: [(&str, &str); 7] = [
    ("/", "ホーム"),
    ("/about", "せき専門外来について"),
    ("/examination", "検査について"),
    ("/treatment", "治療について"),
    ("/doctor", "医師紹介"),
    ("/access", "アクセス"),
    ("/news", "お知らせ"),
];

pub fn layout(title: &str, main: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {SITE_NAME}</title>
</head>
<body>
<header class="site-header"><a class="brand" href="/">{SITE_NAME}</a><nav><ul>{nav}</ul></nav></header>
<main>
{main}
</main>
<footer class="site-footer">
<p>{SITE_NAME}</p>
<p><a href="https://radio-gazo.jp/" target="_blank" rel="noopener noreferrer">ラジオロジークリニック扇町</a>併設 / 呼吸器内科専門医によるせき専門外来</p>
</footer>
</body>
</html>
"#,
        title = text(title),
    )
}

pub(crate) fn text(s: &str) -> Cow<'_, str> {
    encode_text(s)
}

pub(crate) fn attr(s: &str) -> Cow<'_, str> {
    encode_double_quoted_attribute(s)
}

pub(crate) fn bullet_list(class: &str, items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", text(item)))
        .collect();
    format!(r#"<ul class="{class}">{items}</ul>"#)
}

/// `<img>` for CMS-hosted assets, a labelled placeholder otherwise.
pub(crate) fn image(image: Option<&ImageRef>, alt: &str, field_name: &str) -> String {
    match image.filter(|i| i.is_cms_hosted()) {
        Some(image) => {
            let mut size = String::new();
            if let (Some(w), Some(h)) = (image.width, image.height) {
                size = format!(r#" width="{w}" height="{h}""#);
            }
            format!(
                r#"<img src="{}" alt="{}"{size} loading="lazy">"#,
                attr(&image.url),
                attr(alt)
            )
        }
        None => format!(
            r#"<div class="image-placeholder">{}（microCMS）に画像を設定すると表示されます。</div>"#,
            text(field_name)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_escapes_title() {
        let page = layout("<script>", "<p>body</p>");
        assert!(page.contains("<title>&lt;script&gt; | せき専門外来</title>"));
        assert!(page.contains("<p>body</p>"));
        assert!(page.contains(r#"<a href="/news">お知らせ</a>"#));
    }

    #[test]
    fn image_renders_only_cms_assets() {
        let hosted = ImageRef {
            url: "https://images.microcms-assets.io/a.jpg?w=1&h=2".into(),
            width: Some(400),
            height: Some(300),
        };
        let html = image(Some(&hosted), "院長 \"写真\"", "doctorPhoto");
        assert!(html.contains(r#"src="https://images.microcms-assets.io/a.jpg?w=1&amp;h=2""#));
        assert!(html.contains(r#"width="400" height="300""#));
        assert!(html.contains("&quot;写真&quot;"));

        let foreign = ImageRef::new("https://elsewhere.example/a.jpg");
        assert!(image(Some(&foreign), "x", "doctorPhoto").contains("doctorPhoto（microCMS）"));
        assert!(image(None, "x", "heroImage").contains("heroImage（microCMS）"));
    }

    #[test]
    fn bullet_list_escapes_items() {
        let html = bullet_list("q", &["a<b".to_string()]);
        assert_eq!(html, r#"<ul class="q"><li>a&lt;b</li></ul>"#);
    }
}
