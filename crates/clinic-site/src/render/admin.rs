use clinic_cms::field_view::FieldView;

use super::{layout, text};

pub fn page(fields: &[(String, FieldView)]) -> String {
    let listing = if fields.is_empty() {
        r#"<p class="empty">表示するフィールドがありません。</p>"#.to_string()
    } else {
        fields
            .iter()
            .map(|(key, view)| {
                format!(
                    r#"<div class="field"><h3>{}</h3>{}</div>"#,
                    text(key),
                    render_view(view)
                )
            })
            .collect()
    };

    let main = format!(
        r#"<section class="admin">
<h1>MicroCMS フィールド一覧</h1>
<p class="notice"><strong>注意：</strong>このページはデバッグ用です。MicroCMSで設定したすべてのフィールドIDとその値を確認できます。</p>
{listing}
</section>"#
    );
    layout("MicroCMS フィールド一覧", &main)
}

fn render_view(view: &FieldView) -> String {
    match view {
        FieldView::Empty => String::new(),
        FieldView::Text(value) => format!("<p>{}</p>", text(value)),
        FieldView::Embed(html) => format!(r#"<div class="embed">{html}</div>"#),
        FieldView::Object(pairs) => {
            let rows: String = pairs
                .iter()
                .map(|(k, v)| format!("<div><span class=\"key\">{}: </span><span>{}</span></div>", text(k), text(v)))
                .collect();
            format!(r#"<div class="object">{rows}</div>"#)
        }
        FieldView::List(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_view(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
    }
}
