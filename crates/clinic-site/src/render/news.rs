use clinic_cms::news::{NewsEntry, NewsSummary};

use super::{attr, layout, text};

pub fn index(news: &[NewsSummary]) -> String {
    let cards = if news.is_empty() {
        r#"<p class="empty">現在公開中のお知らせはありません。</p>"#.to_string()
    } else {
        news.iter().map(news_card).collect()
    };

    let main = format!(
        r#"<section class="news-index">
<p class="kicker">News</p>
<h1>お知らせ一覧</h1>
{cards}
<p><a href="/">ホームに戻る</a></p>
</section>"#
    );
    layout("お知らせ一覧", &main)
}

pub fn detail(entry: &NewsEntry) -> String {
    let body = match &entry.body {
        Some(html) => format!(r#"<div class="news-body">{html}</div>"#),
        None => r#"<p class="pending">本文は近日公開予定です。</p>"#.to_string(),
    };

    let main = format!(
        r#"<article class="news-detail">
<p class="kicker">News</p>
<h1>{title}</h1>
<div class="meta">{meta}</div>
{body}
</article>
<p class="links"><a href="/news">お知らせ一覧へ戻る</a> <a href="/">ホームに戻る</a></p>"#,
        title = text(&entry.title),
        meta = meta(entry.display_date.as_deref(), entry.category.as_deref()),
    );
    layout(&entry.title, &main)
}

pub(crate) fn news_card(summary: &NewsSummary) -> String {
    let href = format!("/news/{}", urlencoding::encode(&summary.id));
    let excerpt = if summary.excerpt.text.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="excerpt">{}</p>"#, text(&summary.excerpt.text))
    };
    let more = if summary.excerpt.truncated {
        format!(r#"<p class="more"><a href="{}">詳細を見る →</a></p>"#, attr(&href))
    } else {
        String::new()
    };

    format!(
        r#"<article class="news-card">
<div class="meta">{meta}</div>
<h2><a href="{href}">{title}</a></h2>
{excerpt}{more}
</article>"#,
        meta = meta(
            summary.display_date.as_deref(),
            summary.category.as_deref()
        ),
        href = attr(&href),
        title = text(&summary.title),
    )
}

fn meta(date: Option<&str>, category: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(date) = date {
        out.push_str(&format!(r#"<time class="date">{}</time>"#, text(date)));
    }
    if let Some(category) = category {
        out.push_str(&format!(r#"<span class="category">{}</span>"#, text(category)));
    }
    out
}
