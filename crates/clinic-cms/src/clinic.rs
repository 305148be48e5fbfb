/// Typed views over the clinic-info singleton.
///
/// Each attribute lists the field spellings seen across content-model
/// revisions, English and Japanese, earliest winning.
use crate::record::RawRecord;
use crate::resolve::{
    resolve_image_field, resolve_list, resolve_object, resolve_optional_text, resolve_records,
    resolve_text,
};
use crate::value::ImageRef;

pub const CLINIC_NAME_KEYS: &[&str] = &["name", "clinicName", "医院名"];
pub const CATCH_COPY_KEYS: &[&str] = &["catchCopy", "キャッチコピー"];
pub const TREATMENTS_KEYS: &[&str] = &["treatments", "診療内容"];
pub const FEATURES_KEYS: &[&str] = &["features", "特徴"];
pub const HERO_IMAGE_KEYS: &[&str] = &["heroImage", "hero_image"];

pub const DOCTOR_NAME_KEYS: &[&str] = &["doctorName", "医師名", "doctor_name", "name"];
pub const DOCTOR_TITLE_KEYS: &[&str] = &["doctorTitle", "役職", "doctor_title", "title"];
pub const SPECIALTY_KEYS: &[&str] = &["specialty", "専門分野", "specialty_field"];
pub const DOCTOR_MESSAGE_KEYS: &[&str] =
    &["doctorIntroduction", "doctor_intro", "doctor_message", "message"];
pub const DOCTOR_PHOTO_KEYS: &[&str] = &["doctorPhoto", "医師写真", "doctor_photo"];
pub const QUALIFICATIONS_KEYS: &[&str] = &["qualifications", "資格"];
pub const CAREER_KEYS: &[&str] = &["career", "経歴"];

pub const ADDRESS_KEYS: &[&str] = &["address", "住所"];
pub const PHONE_KEYS: &[&str] = &["phone", "電話"];
pub const HOURS_KEYS: &[&str] = &["hours", "診療時間"];

const CLINIC_NAME_FALLBACK: &str = "せき専門外来";
const CATCH_COPY_FALLBACK: &str = "ラジオロジークリニック併設 | X線・CT検査とリアルタイム読影が可能";
const DOCTOR_NAME_FALLBACK: &str = "満屋 奨";
const DOCTOR_TITLE_FALLBACK: &str = "呼吸器内科専門医";
const SPECIALTY_FALLBACK: &str = "呼吸器内科";
const ADDRESS_FALLBACK: &str = "住所情報を設定してください";
const PHONE_FALLBACK: &str = "電話番号を設定してください";

/// A "feature" card on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicProfile {
    pub name: String,
    pub catch_copy: String,
    pub treatments: Vec<String>,
    pub features: Vec<Feature>,
    pub hero_image: Option<ImageRef>,
}

impl ClinicProfile {
    pub fn from_record(record: &RawRecord) -> Self {
        let features = resolve_records(record, FEATURES_KEYS)
            .iter()
            .filter_map(|item| {
                let title = resolve_optional_text(item, &["title", "タイトル"])?;
                let description = resolve_text(item, &["description", "説明"], "");
                Some(Feature { title, description })
            })
            .collect();

        Self {
            name: resolve_text(record, CLINIC_NAME_KEYS, CLINIC_NAME_FALLBACK),
            catch_copy: resolve_text(record, CATCH_COPY_KEYS, CATCH_COPY_FALLBACK),
            treatments: resolve_list(record, TREATMENTS_KEYS, &[]),
            features,
            hero_image: resolve_image_field(record, HERO_IMAGE_KEYS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorProfile {
    pub name: String,
    pub title: String,
    pub specialty: String,
    /// Introduction text; `None` hides the section.
    pub message: Option<String>,
    pub photo: Option<ImageRef>,
    pub qualifications: Vec<String>,
    pub career: Vec<String>,
}

impl DoctorProfile {
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            name: resolve_text(record, DOCTOR_NAME_KEYS, DOCTOR_NAME_FALLBACK),
            title: resolve_text(record, DOCTOR_TITLE_KEYS, DOCTOR_TITLE_FALLBACK),
            specialty: resolve_text(record, SPECIALTY_KEYS, SPECIALTY_FALLBACK),
            message: resolve_optional_text(record, DOCTOR_MESSAGE_KEYS),
            photo: resolve_image_field(record, DOCTOR_PHOTO_KEYS),
            qualifications: resolve_list(record, QUALIFICATIONS_KEYS, &[]),
            career: resolve_list(record, CAREER_KEYS, &[]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningHours {
    pub weekday: Option<String>,
    pub saturday: Option<String>,
    pub holiday: Option<String>,
}

impl OpeningHours {
    pub fn is_empty(&self) -> bool {
        self.weekday.is_none() && self.saturday.is_none() && self.holiday.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessInfo {
    pub address: String,
    pub phone: String,
    pub hours: OpeningHours,
}

impl AccessInfo {
    pub fn from_record(record: &RawRecord) -> Self {
        let hours = resolve_object(record, HOURS_KEYS)
            .map(|group| OpeningHours {
                weekday: resolve_optional_text(&group, &["weekday", "平日"]),
                saturday: resolve_optional_text(&group, &["saturday", "土曜"]),
                holiday: resolve_optional_text(&group, &["holiday", "休診"]),
            })
            .unwrap_or_default();

        Self {
            address: resolve_text(record, ADDRESS_KEYS, ADDRESS_FALLBACK),
            phone: resolve_text(record, PHONE_KEYS, PHONE_FALLBACK),
            hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    #[test]
    fn doctor_profile_from_authored_fields() {
        let r = record(json!({
            "doctorName": "満屋 奨",
            "qualifications": "呼吸器内科専門医\n気管支鏡専門医",
            "経歴": ["大阪大学医学部卒業", "北野病院 呼吸器内科"],
            "医師写真": {"url": "https://images.microcms-assets.io/doc.jpg", "width": 400, "height": 400}
        }));
        let doctor = DoctorProfile::from_record(&r);
        assert_eq!(doctor.name, "満屋 奨");
        assert_eq!(doctor.qualifications, vec!["呼吸器内科専門医", "気管支鏡専門医"]);
        assert_eq!(doctor.career.len(), 2);
        assert_eq!(doctor.title, "呼吸器内科専門医");
        assert_eq!(doctor.message, None);
        assert_eq!(doctor.photo.unwrap().width, Some(400));
    }

    #[test]
    fn doctor_profile_uses_japanese_aliases() {
        let r = record(json!({"医師名": "山田 太郎", "資格": ["内科専門医"]}));
        let doctor = DoctorProfile::from_record(&r);
        assert_eq!(doctor.name, "山田 太郎");
        assert_eq!(doctor.qualifications, vec!["内科専門医"]);
    }

    #[test]
    fn clinic_profile_defaults() {
        let profile = ClinicProfile::from_record(&RawRecord::default());
        assert_eq!(profile.name, "せき専門外来");
        assert!(profile.catch_copy.starts_with("ラジオロジークリニック併設"));
        assert!(profile.treatments.is_empty());
        assert!(profile.features.is_empty());
        assert!(profile.hero_image.is_none());
    }

    #[test]
    fn clinic_profile_features_need_a_title() {
        let r = record(json!({
            "特徴": [
                {"タイトル": "リアルタイム読影", "説明": "放射線科専門医が即日読影"},
                {"説明": "タイトルなし"}
            ],
            "診療内容": "非結核性抗酸菌症\n喘息\nCOPD"
        }));
        let profile = ClinicProfile::from_record(&r);
        assert_eq!(
            profile.features,
            vec![Feature {
                title: "リアルタイム読影".into(),
                description: "放射線科専門医が即日読影".into()
            }]
        );
        assert_eq!(profile.treatments, vec!["非結核性抗酸菌症", "喘息", "COPD"]);
    }

    #[test]
    fn access_info_reads_nested_hours() {
        let r = record(json!({
            "住所": "大阪市北区扇町",
            "診療時間": {"平日": "9:00-12:30 / 16:00-19:00", "休診": "日・祝"}
        }));
        let access = AccessInfo::from_record(&r);
        assert_eq!(access.address, "大阪市北区扇町");
        assert_eq!(access.phone, "電話番号を設定してください");
        assert_eq!(access.hours.weekday.as_deref(), Some("9:00-12:30 / 16:00-19:00"));
        assert_eq!(access.hours.saturday, None);
        assert!(!access.hours.is_empty());
    }
}
