use super::layout;

pub fn not_found() -> String {
    layout(
        "ページが見つかりません",
        r#"<section class="error"><h1>ページが見つかりません</h1>
<p>お探しのページは削除されたか、URLが変更された可能性があります。</p>
<p><a href="/">ホームに戻る</a></p></section>"#,
    )
}

pub fn failure() -> String {
    layout(
        "エラー",
        r#"<section class="error"><h1>ただいまページを表示できません</h1>
<p>時間をおいて再度お試しください。</p>
<p><a href="/">ホームに戻る</a></p></section>"#,
    )
}

pub fn unauthorized() -> String {
    layout(
        "認証が必要です",
        r#"<section class="error"><h1>認証が必要です</h1></section>"#,
    )
}
