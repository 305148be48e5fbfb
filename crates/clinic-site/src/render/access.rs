use clinic_cms::clinic::AccessInfo;

use super::{layout, text};

/// Fixed weekly timetable, shown when the CMS has no hours group.
const DEFAULT_TIMETABLE: &str = r#"<table class="timetable">
<thead><tr><th>診療時間</th><th>月</th><th>火</th><th>水</th><th>木</th><th>金</th><th>土</th><th>日/祝</th></tr></thead>
<tbody>
<tr><td>09:00～12:30</td><td>●</td><td>●</td><td>●</td><td>／</td><td>●</td><td>▲</td><td>／</td></tr>
<tr><td>16:00〜19:00</td><td>●</td><td>●</td><td>●</td><td>／</td><td>●</td><td>／</td><td>／</td></tr>
</tbody>
</table>"#;

pub fn page(access: &AccessInfo) -> String {
    let hours = if access.hours.is_empty() {
        DEFAULT_TIMETABLE.to_string()
    } else {
        let rows: String = [
            ("平日", &access.hours.weekday),
            ("土曜", &access.hours.saturday),
            ("休診日", &access.hours.holiday),
        ]
        .iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(|v| format!("<tr><th>{label}</th><td>{}</td></tr>", text(v)))
        })
        .collect();
        format!(r#"<table class="hours">{rows}</table>"#)
    };

    let main = format!(
        r#"<section class="access">
<h1>アクセス</h1>
<div class="location">
<h2>所在地</h2>
<h3>住所</h3><p>{address}</p>
<h3>電話番号</h3><p class="phone">{phone}</p>
<p class="notice"><strong>ご注意</strong>：当院はラジオロジークリニックの一区画として併設されています。</p>
</div>
</section>
<section class="hours"><h2>診療時間</h2>{hours}</section>
<section class="reservation"><p>📞 お電話でのご予約：{phone}</p><p>💻 WEB予約：準備中</p></section>"#,
        address = text(&access.address),
        phone = text(&access.phone),
    );

    layout("アクセス", &main)
}
