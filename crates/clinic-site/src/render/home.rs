use clinic_cms::clinic::{ClinicProfile, Feature};
use clinic_cms::news::NewsSummary;

use super::{bullet_list, image, layout, text};
use crate::render::news::news_card;

/// Shown when the CMS has no feature cards.
const DEFAULT_FEATURES: [(&str, &str); 3] = [
    (
        "ラジオロジークリニック併設",
        "当院はラジオロジークリニックの一区画として併設されており、X線やCT検査をすぐに実施できます。",
    ),
    (
        "リアルタイム読影",
        "放射線科専門医がリアルタイムで読影を行うため、迅速かつ正確な診断が可能です。",
    ),
    (
        "呼吸器内科専門医",
        "呼吸器内科専門医が長引く咳（せき）の原因を丁寧に調べ、治療をご提案します。",
    ),
];

pub fn page(profile: &ClinicProfile, news: &[NewsSummary]) -> String {
    let hero_image = match &profile.hero_image {
        Some(_) => format!(
            r#"<div class="hero-image">{}</div>"#,
            image(profile.hero_image.as_ref(), &profile.name, "heroImage")
        ),
        None => String::new(),
    };

    let features: Vec<Feature> = if profile.features.is_empty() {
        DEFAULT_FEATURES
            .iter()
            .map(|(title, description)| Feature {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect()
    } else {
        profile.features.clone()
    };
    let feature_cards: String = features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature"><h3>{}</h3><p>{}</p></div>"#,
                text(&f.title),
                text(&f.description)
            )
        })
        .collect();

    let treatments = if profile.treatments.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="treatments"><h2>診療内容</h2>{}</section>"#,
            bullet_list("treatments", &profile.treatments)
        )
    };

    let news_section = if news.is_empty() {
        r#"<p class="empty">現在公開中のお知らせはありません。</p>"#.to_string()
    } else {
        news.iter().map(news_card).collect()
    };

    let main = format!(
        r#"<section class="hero">
<h1>{name}</h1>
<p class="catch-copy">{catch_copy}</p>
{hero_image}
<p class="actions"><a href="/about">せき専門外来について</a> <a href="/examination">検査について</a></p>
</section>
<section class="features"><h2>当院の特徴</h2>{feature_cards}</section>
{treatments}
<section class="latest-news"><h2>お知らせ</h2>{news_section}<p><a href="/news">お知らせ一覧へ</a></p></section>"#,
        name = text(&profile.name),
        catch_copy = text(&profile.catch_copy),
    );

    layout(&profile.name, &main)
}
