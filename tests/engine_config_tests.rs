use chart_scroll_sync::SyncError;
use chart_scroll_sync::api::{ViewerEngine, ViewerEngineConfig};
use chart_scroll_sync::core::{ChapterTable, ContainerMetrics};
use chart_scroll_sync::extensions::HighlightClasses;
use chart_scroll_sync::host::{HeadlessHost, PollBudget};
use chart_scroll_sync::interaction::{ButtonFilter, InsertedNode};

fn table() -> ChapterTable {
    ChapterTable::from_json_str(r#"{"relativeStart":[0.0,0.5],"title":["a","b"]}"#)
        .expect("valid payload")
}

#[test]
fn defaults_match_viewer_page_conventions() {
    let config = ViewerEngineConfig::default();
    assert!((config.lead_in_fraction - 0.1).abs() <= 1e-12);
    assert!((config.aspect_ratio - 1.0).abs() <= 1e-12);
    assert_eq!(config.readiness, PollBudget::new(100, 50));
    assert_eq!(config.button_filter.type_value, "fig-chapter-button");
    assert_eq!(config.highlight_classes.active, "fig-chapter-highlight");
}

#[test]
fn json_round_trip_preserves_customized_fields() {
    let config = ViewerEngineConfig::new()
        .with_lead_in_fraction(0.25)
        .with_aspect_ratio(1.75)
        .with_readiness(PollBudget::new(1000, 5))
        .with_highlight_classes(HighlightClasses {
            active: "on".to_owned(),
            inactive: "off".to_owned(),
        });
    let json = config.to_json_pretty().expect("serialize");
    let restored = ViewerEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = ViewerEngineConfig::from_json_str(r#"{"aspect_ratio": 0.5}"#).expect("parse");
    assert!((config.aspect_ratio - 0.5).abs() <= 1e-12);
    assert!((config.lead_in_fraction - 0.1).abs() <= 1e-12);
    assert_eq!(config.button_filter, ButtonFilter::default());
}

#[test]
fn malformed_config_json_is_invalid_data() {
    for input in ["[1, 2]", "[0.25, 1.5, {}]", "0.1", "\"lead\"", "{ not json"] {
        let err = ViewerEngineConfig::from_json_str(input).expect_err("not a config object");
        assert!(matches!(err, SyncError::InvalidData(_)), "input {input}");
    }
}

#[test]
fn engine_rejects_invalid_config() {
    let host = || HeadlessHost::new(ContainerMetrics::new(0.0, 1000.0, 200.0));
    let cases = [
        ViewerEngineConfig::default().with_lead_in_fraction(-0.1),
        ViewerEngineConfig::default().with_aspect_ratio(0.0),
        ViewerEngineConfig::default().with_readiness(PollBudget::new(100, 0)),
        ViewerEngineConfig::default().with_button_filter(ButtonFilter {
            index_attribute: String::new(),
            ..ButtonFilter::default()
        }),
    ];
    for config in cases {
        let result = ViewerEngine::new(host(), table(), config);
        assert!(matches!(result, Err(SyncError::InvalidData(_))));
    }
}

#[test]
fn custom_button_filter_drives_attachment() {
    let host = HeadlessHost::new(ContainerMetrics::new(0.0, 1000.0, 200.0));
    let filter = ButtonFilter {
        tag: "button".to_owned(),
        type_attribute: "data-role".to_owned(),
        type_value: "chapter".to_owned(),
        index_attribute: "data-chapter".to_owned(),
        chapter_id_attribute: None,
    };
    let mut engine = ViewerEngine::new(
        host,
        table(),
        ViewerEngineConfig::default().with_button_filter(filter),
    )
    .expect("engine init");

    let node = InsertedNode::new("BUTTON")
        .with_attribute("data-role", "chapter")
        .with_attribute("data-chapter", "1");
    assert_eq!(engine.on_child_inserted(&node), Some(1));
    let button = engine.chapter_buttons().next().expect("registered");
    assert_eq!(button.chapter_id, None);
}
