//! End-to-end state-machine scenarios driven against a constructed `App`,
//! with no terminal and no network attached.

use chrono::NaiveDate;
use vocadr::api::models::VocabItem;
use vocadr::app::{AnswerCheck, App, NoticeKind, Screen};
use vocadr::config::Config;
use vocadr::vocab::list;
use vocadr::vocab::translation::TranslationSet;

fn item(day_no: u32, word: &str, translation: &str) -> VocabItem {
    VocabItem {
        id: day_no as i64,
        date: NaiveDate::from_ymd_opt(2026, 8, day_no).unwrap(),
        day_no,
        word: word.to_string(),
        translation: TranslationSet::parse(translation),
    }
}

fn app_with(items: Vec<VocabItem>) -> App {
    let mut app = App::new(Config::default()).expect("app should construct");
    app.screen = Screen::Main;
    app.vocabulary = items;
    app
}

/// Two-day collection from the product walkthrough: day 1 has a single
/// translation, day 2 has two accepted alternatives delivered as an array.
fn walkthrough() -> App {
    let mut app = App::new(Config::default()).expect("app should construct");
    app.screen = Screen::Main;
    app.vocabulary = vec![
        item(1, "apple", "แอปเปิ้ล"),
        VocabItem {
            id: 2,
            date: NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
            day_no: 2,
            word: "bear".to_string(),
            translation: serde_json::from_str(r#"["หมี", "แบร์"]"#).unwrap(),
        },
    ];
    app
}

#[test]
fn answer_check_walkthrough() {
    let mut app = walkthrough();
    app.selected_day = 2;

    // A correct alternative at the newest day: stays put, celebrates.
    app.answer_input.insert_str("แบร์");
    app.check_answer();
    assert_eq!(app.last_check, Some(AnswerCheck::Correct));
    assert_eq!(app.selected_day, 2);
    assert!(app.bell);
    assert!(app.answer_input.is_empty());

    // A wrong guess: feedback carries the joined display form, the draft
    // stays put for editing.
    app.answer_input.insert_str("หมู");
    app.check_answer();
    assert_eq!(
        app.last_check,
        Some(AnswerCheck::Incorrect { expected: "หมี / แบร์".to_string() })
    );
    assert_eq!(app.selected_day, 2);
    assert_eq!(app.answer_input.value(), "หมู");
}

#[test]
fn correct_answer_advances_until_the_newest_day() {
    let mut app = walkthrough();
    app.selected_day = 1;

    app.answer_input.insert_str(" แอปเปิ้ล ");
    app.check_answer();
    assert_eq!(app.last_check, Some(AnswerCheck::Correct));
    assert_eq!(app.selected_day, 2);
    assert!(!app.bell);
}

#[test]
fn search_walkthrough() {
    let mut app = walkthrough();

    app.search_input.insert_str("bear");
    app.search_changed();

    let filtered = app.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(list::total_pages(filtered.len()), 1);

    let visible = app.visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].day_no, 2);
}

#[test]
fn day_navigation_stops_at_bounds() {
    let mut app = app_with((1..=5).map(|d| item(d, "w", "t")).collect());

    app.selected_day = 1;
    app.prev_day();
    assert_eq!(app.selected_day, 1);

    app.selected_day = 5;
    app.next_day();
    assert_eq!(app.selected_day, 5);
}

#[test]
fn pagination_walkthrough() {
    let mut app = app_with(
        (1..=25).map(|d| item(d, &format!("word{d}"), "คำ")).collect(),
    );

    assert_eq!(list::total_pages(app.filtered().len()), 3);

    app.list_page = 5;
    app.clamp_list_page();
    assert_eq!(app.list_page, 3);

    app.list_page = 0;
    app.clamp_list_page();
    assert_eq!(app.list_page, 1);

    app.next_list_page();
    app.next_list_page();
    let visible = app.visible_rows();
    assert_eq!(visible.len(), 5);
    assert_eq!(visible[0].day_no, 21);
}

#[test]
fn reveal_is_client_only_and_survives_paging() {
    let mut app = app_with(
        (1..=15).map(|d| item(d, &format!("word{d}"), "คำ")).collect(),
    );

    app.table_row = 2;
    app.toggle_reveal_selected();
    assert!(app.revealed.contains(&3));

    app.next_list_page();
    app.prev_list_page();
    assert!(app.revealed.contains(&3));
}

#[test]
fn checking_an_unassigned_day_raises_a_notice() {
    let mut app = app_with(vec![item(1, "apple", "แอปเปิ้ล")]);
    app.selected_day = 40;
    app.answer_input.insert_str("x");
    app.check_answer();

    assert!(app.last_check.is_none());
    assert_eq!(app.selected_day, 40);
    let notice = app.notice.expect("notice should be raised");
    assert_eq!(notice.kind, NoticeKind::Info);
}
