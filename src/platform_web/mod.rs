//! Browser host adapter over `web-sys`.
//!
//! Element ids default to the ones the viewer page publishes; hosts with a
//! different layout pass their own [`WebElementIds`]. [`start_viewer`] is the
//! usual entry point: it waits for the page, then wires scroll, resize and
//! chapter-button handling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::api::{ViewerEngine, ViewerEngineConfig};
use crate::core::{ContainerMetrics, RenderSize, parse_aspect_ratio};
use crate::error::SyncError;
use crate::extensions::{ChapterHighlighter, HighlightSink, TitleDisplay, TitleSink};
use crate::host::{PollStatus, ReadinessPoll, ViewerHost};
use crate::interaction::{ButtonFilter, InsertedNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElementIds {
    pub scroll_container: String,
    pub render_target: String,
    pub chapter_payload: String,
    pub aspect_ratio: String,
    pub title: String,
}

impl Default for WebElementIds {
    fn default() -> Self {
        Self {
            scroll_container: "fig-plotly".to_owned(),
            render_target: "fig-graph".to_owned(),
            chapter_payload: "fig-chapter-locations-json".to_owned(),
            aspect_ratio: "fig-graph-aspect-ratio".to_owned(),
            title: "fig-title".to_owned(),
        }
    }
}

/// [`ViewerHost`] backed by live DOM elements.
pub struct WebHost {
    container: Element,
    render_target: HtmlElement,
}

impl WebHost {
    /// `None` until both the scroll container and render target exist.
    #[must_use]
    pub fn from_document(document: &Document, ids: &WebElementIds) -> Option<Self> {
        let container = document.get_element_by_id(&ids.scroll_container)?;
        let render_target = document
            .get_element_by_id(&ids.render_target)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self {
            container,
            render_target,
        })
    }

    #[must_use]
    pub fn container(&self) -> &Element {
        &self.container
    }
}

impl ViewerHost for WebHost {
    fn scroll_metrics(&self) -> Option<ContainerMetrics> {
        Some(ContainerMetrics::new(
            f64::from(self.container.scroll_top()),
            f64::from(self.container.scroll_height()),
            f64::from(self.container.client_height()),
        ))
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.container.set_scroll_top(scroll_top.round() as i32);
    }

    fn container_width(&self) -> Option<u32> {
        u32::try_from(self.container.client_width()).ok()
    }

    fn render_size(&self) -> RenderSize {
        let style = self.render_target.style();
        let read = |name: &str| {
            style
                .get_property_value(name)
                .ok()
                .and_then(|value| parse_px(&value))
                .unwrap_or(0)
        };
        RenderSize::new(read("width"), read("height"))
    }

    fn set_render_size(&mut self, size: RenderSize) {
        let style = self.render_target.style();
        for (name, value) in [("width", size.width), ("height", size.height)] {
            if let Err(err) = style.set_property(name, &format!("{value}px")) {
                warn!(property = name, error = ?err, "failed to write render size");
            }
        }
    }
}

fn parse_px(value: &str) -> Option<u32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Reads a text payload (chapter JSON, aspect ratio) published by the page.
#[must_use]
pub fn element_text(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}

/// Writes button classes straight into the document.
pub struct DomHighlightSink {
    document: Document,
    filter: ButtonFilter,
}

impl DomHighlightSink {
    /// Targets the same buttons the engine attaches through `filter`.
    #[must_use]
    pub fn from_filter(document: Document, filter: &ButtonFilter) -> Self {
        Self {
            document,
            filter: filter.clone(),
        }
    }
}

impl HighlightSink for DomHighlightSink {
    fn set_button_class(&mut self, chapter_index: usize, class: &str) {
        let selector = self.filter.chapter_selector(chapter_index);
        match self.document.query_selector(&selector) {
            Ok(Some(button)) => button.set_class_name(class),
            Ok(None) => {}
            Err(err) => warn!(selector = %selector, error = ?err, "invalid button selector"),
        }
    }
}

/// Writes the chapter title into a text element.
pub struct DomTitleSink {
    element: Element,
}

impl DomTitleSink {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl TitleSink for DomTitleSink {
    fn show_title(&mut self, title: &str) {
        self.element.set_text_content(Some(title));
    }
}

/// Routes container scroll events into the engine.
pub fn attach_scroll_listener(engine: &Rc<RefCell<ViewerEngine<WebHost>>>) -> Result<(), JsValue> {
    let target = engine.borrow().host().container().clone();
    let handler = Rc::clone(engine);
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Err(err) = handler.borrow_mut().sync_from_host() {
            warn!(error = %err, "scroll sync failed");
        }
    }) as Box<dyn FnMut(_)>);

    target.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Registers a newly inserted element and, when it is a chapter button,
/// attaches its click handler.
pub fn attach_chapter_button(
    engine: &Rc<RefCell<ViewerEngine<WebHost>>>,
    element: &Element,
) -> Result<Option<usize>, JsValue> {
    let mut node = InsertedNode::new(element.tag_name());
    for name in element.get_attribute_names().iter() {
        if let Some(name) = name.as_string() {
            if let Some(value) = element.get_attribute(&name) {
                node = node.with_attribute(name, value);
            }
        }
    }
    if let Some(text) = element.text_content() {
        node = node.with_text(text);
    }

    let Some(chapter_index) = engine.borrow_mut().on_child_inserted(&node) else {
        return Ok(None);
    };

    let handler = Rc::clone(engine);
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Err(err) = handler.borrow_mut().click_button(chapter_index) {
            warn!(chapter_index, error = %err, "chapter navigation failed");
        }
    }) as Box<dyn FnMut(_)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(Some(chapter_index))
}

/// Fits the render target on every window resize.
pub fn attach_resize_listener(engine: &Rc<RefCell<ViewerEngine<WebHost>>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let handler = Rc::clone(engine);
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Err(err) = handler.borrow_mut().resize() {
            warn!(error = %err, "render resize failed");
        }
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Polls the document until the viewer container is laid out and the chapter
/// payload is published, then builds and wires the engine.
///
/// Polling follows `config.readiness`; when the budget runs out the page keeps
/// working without scroll sync. Buttons present at attach time are wired
/// immediately; later ones go through [`attach_chapter_button`].
pub fn start_viewer(ids: WebElementIds, config: ViewerEngineConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let budget = config.readiness.validate().map_err(to_js)?;

    let mut poll = ReadinessPoll::new("viewer container", budget);
    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_interval = Rc::clone(&interval);
    let tick_window = window.clone();
    let tick = Closure::wrap(Box::new(move || {
        match poll.tick(|| probe_viewer(&document, &ids)) {
            PollStatus::Pending { .. } => return,
            PollStatus::Attached((host, payload)) => {
                if let Err(err) = attach_viewer(&document, &ids, config.clone(), host, &payload) {
                    warn!(error = ?err, "viewer setup failed");
                }
            }
            PollStatus::TimedOut { attempts } => {
                warn!(attempts, "viewer never appeared; scroll sync disabled");
            }
            PollStatus::Cancelled | PollStatus::Settled => {}
        }
        if let Some(handle) = tick_interval.take() {
            tick_window.clear_interval_with_handle(handle);
        }
    }) as Box<dyn FnMut()>);

    let timeout = i32::try_from(budget.interval_ms).unwrap_or(i32::MAX);
    let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        timeout,
    )?;
    interval.set(Some(handle));
    tick.forget();
    Ok(())
}

fn probe_viewer(document: &Document, ids: &WebElementIds) -> Option<(WebHost, String)> {
    let host = WebHost::from_document(document, ids)?;
    host.scroll_metrics().filter(|metrics| metrics.is_laid_out())?;
    let payload = element_text(document, &ids.chapter_payload)?;
    Some((host, payload))
}

fn attach_viewer(
    document: &Document,
    ids: &WebElementIds,
    mut config: ViewerEngineConfig,
    host: WebHost,
    payload: &str,
) -> Result<Rc<RefCell<ViewerEngine<WebHost>>>, JsValue> {
    if let Some(text) = element_text(document, &ids.aspect_ratio) {
        match parse_aspect_ratio(&text) {
            Ok(ratio) => config.aspect_ratio = ratio,
            Err(err) => warn!(error = %err, "ignoring published aspect ratio"),
        }
    }
    let filter = config.button_filter.clone();
    let classes = config.highlight_classes.clone();

    let mut engine = ViewerEngine::from_payload(host, payload, config).map_err(to_js)?;
    engine
        .register_listener(Box::new(ChapterHighlighter::new(
            "dom-highlight",
            classes,
            DomHighlightSink::from_filter(document.clone(), &filter),
        )))
        .map_err(to_js)?;
    if let Some(title) = document.get_element_by_id(&ids.title) {
        engine
            .register_listener(Box::new(TitleDisplay::new(
                "dom-title",
                DomTitleSink::new(title),
            )))
            .map_err(to_js)?;
    }
    engine.resize().map_err(to_js)?;

    let engine = Rc::new(RefCell::new(engine));
    attach_scroll_listener(&engine)?;
    attach_resize_listener(&engine)?;

    let buttons = document.query_selector_all(&filter.css_selector())?;
    for position in 0..buttons.length() {
        let Some(element) = buttons
            .item(position)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        attach_chapter_button(&engine, &element)?;
    }
    engine.borrow_mut().sync_from_host().map_err(to_js)?;
    debug!(
        chapters = engine.borrow().chapter_count(),
        buttons = engine.borrow().chapter_button_count(),
        "viewer attached"
    );
    Ok(engine)
}

fn to_js(err: SyncError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
