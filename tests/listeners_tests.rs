use std::cell::RefCell;
use std::rc::Rc;

use chart_scroll_sync::SyncError;
use chart_scroll_sync::api::{ViewerEngine, ViewerEngineConfig};
use chart_scroll_sync::core::ContainerMetrics;
use chart_scroll_sync::extensions::{
    ChapterHighlighter, HighlightClasses, SyncContext, SyncEvent, SyncListener, TitleDisplay,
};
use chart_scroll_sync::host::HeadlessHost;
use chart_scroll_sync::interaction::InsertedNode;

const PAYLOAD: &str = r#"{
    "relativeStart": [0.0, 0.2, 0.5, 0.8],
    "title": ["Intro", "A", "B", "C"]
}"#;

#[derive(Clone)]
struct CountingListener {
    id: String,
    count: Rc<RefCell<usize>>,
}

impl CountingListener {
    fn new(id: impl Into<String>, count: Rc<RefCell<usize>>) -> Self {
        Self {
            id: id.into(),
            count,
        }
    }
}

impl SyncListener for CountingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, _event: &SyncEvent, _context: SyncContext) {
        *self.count.borrow_mut() += 1;
    }
}

fn build_engine() -> ViewerEngine<HeadlessHost> {
    let host = HeadlessHost::new(ContainerMetrics::new(0.0, 1000.0, 200.0));
    ViewerEngine::from_payload(host, PAYLOAD, ViewerEngineConfig::default()).expect("engine init")
}

fn scroll(engine: &mut ViewerEngine<HeadlessHost>, scroll_top: f64) {
    engine
        .on_scroll(ContainerMetrics::new(scroll_top, 1000.0, 200.0))
        .expect("scroll");
}

#[test]
fn duplicate_listener_ids_are_rejected() {
    let mut engine = build_engine();
    let count = Rc::new(RefCell::new(0));
    engine
        .register_listener(Box::new(CountingListener::new("dupe", count.clone())))
        .expect("first listener");
    let err = engine
        .register_listener(Box::new(CountingListener::new("dupe", count)))
        .expect_err("duplicate must fail");
    assert!(matches!(err, SyncError::DuplicateListener(ref id) if id == "dupe"));
}

#[test]
fn empty_listener_id_is_rejected() {
    let mut engine = build_engine();
    let err = engine
        .register_listener(Box::new(CountingListener::new(
            "",
            Rc::new(RefCell::new(0)),
        )))
        .expect_err("empty id");
    assert!(matches!(err, SyncError::InvalidData(_)));
}

#[test]
fn unregister_listener_stops_dispatch() {
    let mut engine = build_engine();
    let count = Rc::new(RefCell::new(0));
    engine
        .register_listener(Box::new(CountingListener::new("to-remove", count.clone())))
        .expect("register");
    assert_eq!(engine.listener_count(), 1);

    scroll(&mut engine, 100.0);
    assert_eq!(*count.borrow(), 2);

    assert!(engine.unregister_listener("to-remove"));
    assert!(!engine.unregister_listener("to-remove"));
    assert!(!engine.has_listener("to-remove"));
    scroll(&mut engine, 300.0);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn highlighter_and_title_follow_the_chapter_in_view() {
    let mut engine = build_engine();
    let classes = Rc::new(RefCell::new(vec![String::from("fig-chapter"); 4]));
    let title = Rc::new(RefCell::new(String::new()));

    let class_writes = classes.clone();
    engine
        .register_listener(Box::new(ChapterHighlighter::new(
            "highlight",
            HighlightClasses::default(),
            move |index: usize, class: &str| {
                class_writes.borrow_mut()[index] = class.to_owned();
            },
        )))
        .expect("register highlighter");
    let title_writes = title.clone();
    engine
        .register_listener(Box::new(TitleDisplay::new("title", move |text: &str| {
            *title_writes.borrow_mut() = text.to_owned();
        })))
        .expect("register title");

    scroll(&mut engine, 550.0);
    assert_eq!(
        *classes.borrow(),
        vec![
            "fig-chapter",
            "fig-chapter",
            "fig-chapter-highlight",
            "fig-chapter"
        ]
    );
    assert_eq!(*title.borrow(), "B");

    scroll(&mut engine, 950.0);
    assert_eq!(
        *classes.borrow(),
        vec![
            "fig-chapter",
            "fig-chapter",
            "fig-chapter",
            "fig-chapter-highlight"
        ]
    );
    assert_eq!(*title.borrow(), "C");
}

type ClassLog = Rc<RefCell<Vec<String>>>;

fn register_highlighter(engine: &mut ViewerEngine<HeadlessHost>) -> ClassLog {
    let classes = Rc::new(RefCell::new(vec![String::from("fig-chapter"); 4]));
    let class_writes = classes.clone();
    engine
        .register_listener(Box::new(ChapterHighlighter::new(
            "highlight",
            HighlightClasses::default(),
            move |index: usize, class: &str| {
                class_writes.borrow_mut()[index] = class.to_owned();
            },
        )))
        .expect("register highlighter");
    classes
}

fn chapter_button(index: usize) -> InsertedNode {
    InsertedNode::new("DIV")
        .with_attribute("data-type", "fig-chapter-button")
        .with_attribute("data-index", index.to_string())
}

const ACTIVE_THIRD: [&str; 4] = [
    "fig-chapter",
    "fig-chapter",
    "fig-chapter-highlight",
    "fig-chapter",
];

#[test]
fn re_rendered_buttons_pick_up_the_current_highlight() {
    let mut engine = build_engine();
    let classes = register_highlighter(&mut engine);
    scroll(&mut engine, 550.0);
    assert_eq!(*classes.borrow(), ACTIVE_THIRD);

    // Host replaces the button row with fresh, unstyled elements.
    classes.borrow_mut().fill(String::from("fig-chapter"));
    for index in 0..4 {
        assert_eq!(engine.on_child_inserted(&chapter_button(index)), Some(index));
    }
    assert_eq!(*classes.borrow(), ACTIVE_THIRD);

    scroll(&mut engine, 600.0);
    assert_eq!(engine.active_chapter(), Some(2));
    assert_eq!(*classes.borrow(), ACTIVE_THIRD);
}

#[test]
fn buttons_inserted_before_any_scroll_stay_inactive() {
    let mut engine = build_engine();
    let classes = register_highlighter(&mut engine);
    for index in 0..4 {
        engine.on_child_inserted(&chapter_button(index));
    }
    assert!(classes.borrow().iter().all(|class| class == "fig-chapter"));
}

#[test]
fn late_highlighter_catches_up_on_next_scroll() {
    let mut engine = build_engine();
    scroll(&mut engine, 550.0);

    let classes = register_highlighter(&mut engine);
    scroll(&mut engine, 600.0);
    assert_eq!(*classes.borrow(), ACTIVE_THIRD);
}
