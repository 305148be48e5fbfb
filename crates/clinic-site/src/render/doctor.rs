use clinic_cms::clinic::DoctorProfile;

use super::{bullet_list, image, layout, text};

pub fn page(doctor: &DoctorProfile) -> String {
    let photo = image(
        doctor.photo.as_ref(),
        &format!("{} {}", doctor.name, doctor.title),
        "doctorPhoto",
    );

    let message = doctor
        .message
        .as_deref()
        .map(|m| format!(r#"<div class="message"><h3>ご挨拶</h3><p>{}</p></div>"#, text(m)))
        .unwrap_or_default();

    let qualifications = if doctor.qualifications.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="qualifications"><h3>資格</h3>{}</div>"#,
            bullet_list("qualifications", &doctor.qualifications)
        )
    };

    let career = if doctor.career.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="career"><h2>経歴</h2>{}</section>"#,
            bullet_list("career", &doctor.career)
        )
    };

    let main = format!(
        r#"<section class="doctor">
<p class="kicker">Doctor</p>
<h1>医師紹介</h1>
<div class="profile">
<div class="photo">{photo}</div>
<div class="details">
<h2>{name}</h2>
<p class="title">{title} | {specialty}</p>
{message}
{qualifications}
</div>
</div>
</section>
{career}
<section class="note"><p>当院はラジオロジークリニックの一区画として併設されており、{name}はせき専門外来を担当する医師です。</p></section>"#,
        name = text(&doctor.name),
        title = text(&doctor.title),
        specialty = text(&doctor.specialty),
    );

    layout("医師紹介", &main)
}
