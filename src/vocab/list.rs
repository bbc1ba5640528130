use crate::api::models::VocabItem;
use crate::vocab::translation::normalize;

/// Fixed page size of the word table.
pub const PAGE_SIZE: usize = 10;

/// Case-insensitive substring filter over the word and the raw translation
/// surface form. An empty query keeps every item; order is preserved.
pub fn filter<'a>(items: &'a [VocabItem], query: &str) -> Vec<&'a VocabItem> {
    let q = normalize(query);
    if q.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            normalize(&item.word).contains(&q)
                || normalize(item.translation.raw()).contains(&q)
        })
        .collect()
}

/// Page count for a filtered set; never below 1 so an empty result still
/// displays as "page 1/1".
pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a 1-based page number into the valid range for a filtered set.
pub fn clamp_page(page: usize, filtered_len: usize) -> usize {
    page.clamp(1, total_pages(filtered_len))
}

/// The visible slice for a (clamped) page.
pub fn page_slice<'a, 'b>(
    filtered: &'b [&'a VocabItem],
    page: usize,
) -> &'b [&'a VocabItem] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= filtered.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(filtered.len());
    &filtered[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::translation::TranslationSet;
    use chrono::NaiveDate;

    fn item(day_no: u32, word: &str, translation: &str) -> VocabItem {
        VocabItem {
            id: day_no as i64,
            date: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(day_no as u64 - 1))
                .unwrap(),
            day_no,
            word: word.to_string(),
            translation: TranslationSet::parse(translation),
        }
    }

    fn sample() -> Vec<VocabItem> {
        vec![item(1, "apple", "แอปเปิ้ล"), item(2, "bear", "หมี||แบร์")]
    }

    #[test]
    fn empty_query_keeps_everything() {
        let items = sample();
        assert_eq!(filter(&items, "").len(), 2);
        assert_eq!(filter(&items, "   ").len(), 2);
    }

    #[test]
    fn query_matches_word_case_insensitively() {
        let items = sample();
        let hits = filter(&items, "BEAR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].day_no, 2);
        assert_eq!(total_pages(hits.len()), 1);
    }

    #[test]
    fn query_matches_raw_translation() {
        let items = sample();
        assert_eq!(filter(&items, "แบร์").len(), 1);
        // Raw form search: the delimiter itself is searchable.
        assert_eq!(filter(&items, "||").len(), 1);
    }

    #[test]
    fn no_hits_yields_one_display_page() {
        let items = sample();
        let hits = filter(&items, "zebra");
        assert!(hits.is_empty());
        assert_eq!(total_pages(hits.len()), 1);
        assert_eq!(clamp_page(7, hits.len()), 1);
    }

    #[test]
    fn pagination_clamps_into_range() {
        // 25 items, page size 10 -> 3 pages.
        assert_eq!(total_pages(25), 3);
        assert_eq!(clamp_page(5, 25), 3);
        assert_eq!(clamp_page(0, 25), 1);
        assert_eq!(clamp_page(2, 25), 2);
    }

    #[test]
    fn page_slice_windows_the_filtered_set() {
        let items: Vec<VocabItem> = (1..=25)
            .map(|d| item(d, &format!("word{d}"), "x"))
            .collect();
        let filtered = filter(&items, "");
        assert_eq!(page_slice(&filtered, 1).len(), 10);
        assert_eq!(page_slice(&filtered, 3).len(), 5);
        assert_eq!(page_slice(&filtered, 3)[0].day_no, 21);
        assert!(page_slice(&filtered, 4).is_empty());
    }
}
