use chart_scroll_sync::SyncError;
use chart_scroll_sync::core::{Chapter, ChapterTable, locate};

fn sample_table() -> ChapterTable {
    ChapterTable::from_json_str(
        r#"{"relativeStart":[0.0,0.2,0.5,0.8],"title":["Intro","A","B","C"]}"#,
    )
    .expect("valid payload")
}

#[test]
fn reference_fractions_map_to_expected_chapters() {
    let table = sample_table();
    let cases = [
        (0.1, 0),
        (0.2, 1),
        (0.49, 1),
        (0.5, 2),
        (0.8, 3),
        (0.95, 3),
    ];
    for (fraction, expected) in cases {
        assert_eq!(
            locate(fraction, &table).expect("locate"),
            expected,
            "fraction {fraction}"
        );
    }
}

#[test]
fn extremes_clamp_to_first_and_last_chapter() {
    let table = sample_table();
    assert_eq!(locate(0.0, &table).expect("locate"), 0);
    assert_eq!(locate(1.0, &table).expect("locate"), 3);
    assert_eq!(locate(-0.5, &table).expect("locate"), 0);
    assert_eq!(locate(7.0, &table).expect("locate"), 3);
}

#[test]
fn fraction_before_first_start_clamps_to_first_chapter() {
    let table = ChapterTable::from_chapters(vec![
        Chapter::new(0.3, 3.0, "a"),
        Chapter::new(0.6, 6.0, "b"),
    ])
    .expect("valid table");
    assert_eq!(locate(0.1, &table).expect("locate"), 0);
}

#[test]
fn single_chapter_table_always_locates_chapter_zero() {
    let table =
        ChapterTable::from_chapters(vec![Chapter::new(0.4, 4.0, "only")]).expect("valid table");
    for fraction in [0.0, 0.4, 0.9] {
        assert_eq!(locate(fraction, &table).expect("locate"), 0);
    }
}

#[test]
fn empty_table_cannot_be_located() {
    let table = ChapterTable::from_chapters(Vec::new()).expect("empty table");
    let err = locate(0.5, &table).expect_err("empty table");
    assert!(matches!(err, SyncError::EmptyTable));
}
