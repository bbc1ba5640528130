use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use vocadr::api::models::VocabItem;
use vocadr::vocab::list;
use vocadr::vocab::translation::{TranslationSet, matches, parse_translation_set};

fn make_collection(count: usize) -> Vec<VocabItem> {
    let words = ["apple", "bear", "cloud", "dawn", "ember", "forest", "gleam"];
    let translations = [
        "แอปเปิ้ล",
        "หมี||แบร์",
        "เมฆ|ก้อนเมฆ",
        "รุ่งอรุณ, เช้าตรู่",
        r#"["ถ่านไฟ", "เถ้า"]"#,
        "ป่า",
        "แสงวับ",
    ];
    (0..count)
        .map(|i| VocabItem {
            id: i as i64,
            date: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap(),
            day_no: i as u32 + 1,
            word: format!("{}{}", words[i % words.len()], i),
            translation: TranslationSet::parse(translations[i % translations.len()]),
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let inputs = [
        "แอปเปิ้ล",
        "cat||gato||แมว",
        "one|two|three|four",
        "red, blue, green",
        r#"["หมี", "แบร์", "bear"]"#,
    ];

    c.bench_function("parse_translation_set (5 transport shapes)", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(parse_translation_set(black_box(input)));
            }
        })
    });
}

fn bench_matches(c: &mut Criterion) {
    let set = TranslationSet::parse("หมี||แบร์||bear||der Bär");

    c.bench_function("matches (miss against 4-entry set)", |b| {
        b.iter(|| matches(black_box("  BEaR "), black_box(&set)))
    });
}

fn bench_filter(c: &mut Criterion) {
    let collection = make_collection(5000);

    c.bench_function("list::filter (5000 items, word hit)", |b| {
        b.iter(|| list::filter(black_box(&collection), black_box("bear")))
    });

    c.bench_function("list::filter (5000 items, translation hit)", |b| {
        b.iter(|| list::filter(black_box(&collection), black_box("แบร์")))
    });
}

criterion_group!(benches, bench_parse, bench_matches, bench_filter);
criterion_main!(benches);
