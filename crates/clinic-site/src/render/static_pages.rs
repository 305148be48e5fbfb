//! Pages whose copy is fixed in the site rather than managed in the CMS.

use super::layout;

const SYMPTOMS: [&str; 8] = [
    "天候や気温の変化で咳（せき）が悪化する",
    "夜間から朝方にかけて咳（せき）がひどくなる",
    "冷たい空気を吸い込むと咳き込む",
    "長く話すと咳（せき）が出やすい",
    "一度咳（せき）が出始めると、なかなか止まらない",
    "タバコの煙を吸うと咳（せき）が出る",
    "緊張すると咳（せき）が出ることがある",
    "軽い運動でも咳（せき）が出る",
];

const CAUSES: [(&str, &str); 8] = [
    ("非結核性抗酸菌症", "結核菌以外の抗酸菌による感染症"),
    ("気管支喘息", "慢性的な気道の炎症による咳（せき）"),
    ("咳喘息", "喘息でも気道症状をともなわないもの"),
    ("COPD", "慢性閉塞性肺疾患（喫煙などが原因）"),
    ("アトピー性咳嗽", "アレルギー反応による咳"),
    ("感染後咳嗽", "感染症の後に残る咳"),
    ("逆流性食道炎", "胃酸の逆流による咳"),
    ("その他", "肺炎、肺がんなど"),
];

pub fn about() -> String {
    let symptoms: String = SYMPTOMS.iter().map(|s| format!("<li>{s}</li>")).collect();
    let causes: String = CAUSES
        .iter()
        .map(|(title, desc)| format!(r#"<div class="cause"><h3>{title}</h3><p>{desc}</p></div>"#))
        .collect();

    let main = format!(
        r#"<section class="about">
<p class="kicker">About</p>
<h1>せき専門外来について</h1>
<h2>長引く咳（せき）について</h2>
<p>咳（せき）は、ウイルス・細菌・ほこりなどの異物や、肺にたまった痰（たん）を排出するための、体の自然な防御反応です。</p>
<p><strong>しかし、咳（せき）が2週間以上続く場合は、かぜ以外の疾患が原因となっている可能性があります。</strong></p>
<h2>こんな症状はございませんか？</h2>
<ul class="symptoms">{symptoms}</ul>
<h2>長引く咳（せき）の原因</h2>
<div class="causes">{causes}</div>
<h2>当院の強み</h2>
<ul class="strengths">
<li>X線やCT検査をすぐに実施できる</li>
<li>放射線科専門医がリアルタイムで読影を行うため、迅速な診断が可能</li>
<li>呼吸器内科専門医と放射線科専門医の連携により、より正確な診断が可能</li>
</ul>
</section>"#
    );
    layout("せき専門外来について", &main)
}

pub fn examination() -> String {
    let main = r#"<section class="examination">
<p class="kicker">Examination</p>
<h1>検査について</h1>
<h2>治療の基本は咳（せき）が起こる原因をつきとめること</h2>
<p>当院はラジオロジークリニックに併設されており、X線・CT検査を当日中に実施できます。</p>
<ul class="checks">
<li>放射線科専門医がリアルタイムで画像を読影する</li>
<li>検査後すぐに結果をお伝えできます</li>
<li>迅速な診断により、早期治療が可能です</li>
<li>呼吸器内科専門医と放射線科専門医が連携し、より正確な診断を行います</li>
</ul>
</section>"#;
    layout("検査について", main)
}

pub fn treatment() -> String {
    let main = r#"<section class="treatment">
<p class="kicker">Treatment</p>
<h1>治療について</h1>
<h2>非結核性抗酸菌症の診断</h2>
<ul>
<li><strong>喀痰検査</strong>：まずは痰を出していただき、菌がいるか調べます。</li>
<li><strong>胃液採取・気管支鏡</strong>：痰が出せない場合は、胃液を採取したり、連携病院（北野病院など）にて気管支鏡検査を行い、検体を採取します。</li>
<li><strong>菌の同定</strong>：MAC菌、カンサシ菌など、菌の種類によって治療方針が異なるため、正確に種類を特定します。</li>
</ul>
<h2>主なお薬</h2>
<ul>
<li>リファンピシン</li>
<li>エタンブトール</li>
<li>クラリスロマイシン/アジスロマイシン</li>
</ul>
<h2>治療のスケジュール</h2>
<ul>
<li>治療開始後、<strong>3ヶ月〜半年ごと</strong>に胸部X線やCT、喀痰検査を行い、効果を判定します。</li>
<li>痰から菌が出なくなる（陰性化）を確認してから、さらに<strong>最低1年間</strong>は内服を継続します。</li>
</ul>
<h2>知っておいていただきたい副作用</h2>
<p>お薬を安全に続けていただくために、以下の症状に注意してください。</p>
<ul>
<li>尿や汗がオレンジ色になることがありますが、心配ありません。肝機能障害が出ることがあります。</li>
<li>視力低下や色が見えにくくなる（視神経炎）ことがあります。定期的な眼科受診をお勧めします。</li>
<li>胃のむかつきや下痢などの消化器症状が出ることがあります。</li>
</ul>
<p>※気になる症状が出た場合は、すぐにご相談ください。</p>
</section>"#;
    layout("治療について", main)
}
