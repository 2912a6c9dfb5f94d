use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Element appended under the chapter index container.
///
/// Decoupled from any concrete DOM observer: hosts translate their
/// child-insertion notifications into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsertedNode {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl InsertedNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            text: None,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Predicate selecting chapter-button nodes among inserted children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonFilter {
    /// Tag name, compared case-insensitively.
    pub tag: String,
    pub type_attribute: String,
    pub type_value: String,
    pub index_attribute: String,
    #[serde(default)]
    pub chapter_id_attribute: Option<String>,
}

impl Default for ButtonFilter {
    fn default() -> Self {
        Self {
            tag: "DIV".to_owned(),
            type_attribute: "data-type".to_owned(),
            type_value: "fig-chapter-button".to_owned(),
            index_attribute: "data-index".to_owned(),
            chapter_id_attribute: Some("data-chapter-id".to_owned()),
        }
    }
}

impl ButtonFilter {
    /// Chapter button described by `node`, or `None` when the node is not a
    /// chapter button.
    #[must_use]
    pub fn match_node(&self, node: &InsertedNode) -> Option<ChapterButton> {
        if !node.tag.eq_ignore_ascii_case(&self.tag)
            || node.attribute(&self.type_attribute) != Some(self.type_value.as_str())
        {
            return None;
        }

        let raw_index = node.attribute(&self.index_attribute)?;
        let Ok(chapter_index) = raw_index.trim().parse::<usize>() else {
            warn!(
                index = raw_index,
                "ignoring chapter button with unparsable index"
            );
            return None;
        };

        Some(ChapterButton {
            chapter_index,
            chapter_id: self
                .chapter_id_attribute
                .as_deref()
                .and_then(|name| node.attribute(name))
                .map(str::to_owned),
            label: node.text.clone(),
        })
    }

    /// CSS selector matching every node this filter accepts.
    #[must_use]
    pub fn css_selector(&self) -> String {
        format!(
            "{}[{}=\"{}\"]",
            self.tag.to_ascii_lowercase(),
            self.type_attribute,
            self.type_value
        )
    }

    /// CSS selector matching the button of chapter `chapter_index`.
    #[must_use]
    pub fn chapter_selector(&self, chapter_index: usize) -> String {
        format!(
            "{}[{}=\"{chapter_index}\"]",
            self.css_selector(),
            self.index_attribute
        )
    }
}

/// Chapter button whose click handler has been attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterButton {
    pub chapter_index: usize,
    pub chapter_id: Option<String>,
    pub label: Option<String>,
}

/// Attached chapter buttons keyed by chapter index, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ChapterButtonRegistry {
    buttons: IndexMap<usize, ChapterButton>,
}

impl ChapterButtonRegistry {
    /// Registers a button. A re-inserted button replaces the earlier entry.
    pub fn register(&mut self, button: ChapterButton) {
        self.buttons.insert(button.chapter_index, button);
    }

    #[must_use]
    pub fn contains(&self, chapter_index: usize) -> bool {
        self.buttons.contains_key(&chapter_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChapterButton> {
        self.buttons.values()
    }
}
