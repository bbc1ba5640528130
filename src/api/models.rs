use chrono::NaiveDate;
use serde::Deserialize;

use crate::vocab::translation::TranslationSet;

/// Authenticated identity as returned by `/me`, `/signin`, and `/signup`.
/// Extra payload fields (ids, flags) are irrelevant to the client and
/// ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

/// One day's word record.
#[derive(Clone, Debug, Deserialize)]
pub struct VocabItem {
    pub id: i64,
    pub date: NaiveDate,
    pub day_no: u32,
    pub word: String,
    pub translation: TranslationSet,
}

/// Envelope of `/vocab/list` and `/vocab/random`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<VocabItem>,
}

/// Envelope of `/vocab/today/auto`.
#[derive(Clone, Debug, Deserialize)]
pub struct TodayResponse {
    pub item: VocabItem,
}

/// Practice statistics from `/stats`. Every field is defaulted; the header
/// degrades to email-only when the endpoint is missing or changes shape.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_words: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last: Option<LastScore>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LastScore {
    pub day_no: u32,
    pub accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocab_item_with_array_translation() {
        let json = r#"{
            "id": 7,
            "date": "2026-08-06",
            "day_no": 2,
            "word": "bear",
            "translation": ["หมี", "แบร์"]
        }"#;
        let item: VocabItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.day_no, 2);
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(item.translation.entries(), ["หมี", "แบร์"]);
    }

    #[test]
    fn vocab_item_with_delimited_translation() {
        let json = r#"{
            "id": 1,
            "date": "2026-08-05",
            "day_no": 1,
            "word": "apple",
            "translation": "แอปเปิ้ล||apple fruit"
        }"#;
        let item: VocabItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.translation.entries().len(), 2);
        assert_eq!(item.translation.raw(), "แอปเปิ้ล||apple fruit");
    }

    #[test]
    fn items_response_tolerates_missing_items() {
        let resp: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn stats_tolerates_sparse_payload() {
        let stats: Stats = serde_json::from_str(r#"{"streak": 4}"#).unwrap();
        assert_eq!(stats.streak, 4);
        assert_eq!(stats.total_words, 0);
        assert!(stats.last.is_none());
    }

    #[test]
    fn session_user_ignores_extra_fields() {
        let user: SessionUser =
            serde_json::from_str(r#"{"ok": true, "id": 3, "email": "a@b.c"}"#).unwrap();
        assert_eq!(user.email, "a@b.c");
    }
}
