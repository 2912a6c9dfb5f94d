use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_LEAD_IN_FRACTION;
use crate::core::sizing::validate_aspect_ratio;
use crate::error::{SyncError, SyncResult};
use crate::extensions::HighlightClasses;
use crate::host::PollBudget;
use crate::interaction::ButtonFilter;

/// Public engine bootstrap configuration.
///
/// This type is serializable so hosts can ship it next to the page instead of
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerEngineConfig {
    #[serde(default = "default_lead_in_fraction")]
    pub lead_in_fraction: f64,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    #[serde(default)]
    pub readiness: PollBudget,
    #[serde(default)]
    pub button_filter: ButtonFilter,
    #[serde(default)]
    pub highlight_classes: HighlightClasses,
}

impl Default for ViewerEngineConfig {
    fn default() -> Self {
        Self {
            lead_in_fraction: default_lead_in_fraction(),
            aspect_ratio: default_aspect_ratio(),
            readiness: PollBudget::default(),
            button_filter: ButtonFilter::default(),
            highlight_classes: HighlightClasses::default(),
        }
    }
}

impl ViewerEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the navigation lead-in share.
    #[must_use]
    pub fn with_lead_in_fraction(mut self, lead_in_fraction: f64) -> Self {
        self.lead_in_fraction = lead_in_fraction;
        self
    }

    /// Sets the height/width ratio of the render target.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    #[must_use]
    pub fn with_readiness(mut self, readiness: PollBudget) -> Self {
        self.readiness = readiness;
        self
    }

    #[must_use]
    pub fn with_button_filter(mut self, filter: ButtonFilter) -> Self {
        self.button_filter = filter;
        self
    }

    #[must_use]
    pub fn with_highlight_classes(mut self, classes: HighlightClasses) -> Self {
        self.highlight_classes = classes;
        self
    }

    pub fn validate(&self) -> SyncResult<()> {
        if !self.lead_in_fraction.is_finite() || self.lead_in_fraction < 0.0 {
            return Err(SyncError::InvalidData(
                "lead-in fraction must be finite and >= 0".to_owned(),
            ));
        }
        validate_aspect_ratio(self.aspect_ratio)?;
        self.readiness.validate()?;
        if self.button_filter.tag.is_empty() || self.button_filter.index_attribute.is_empty() {
            return Err(SyncError::InvalidData(
                "button filter needs a tag and an index attribute".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> SyncResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SyncError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses a config object. Positional (array) forms are rejected.
    pub fn from_json_str(input: &str) -> SyncResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| SyncError::InvalidData(format!("failed to parse config: {e}")))?;
        if !value.is_object() {
            return Err(SyncError::InvalidData(
                "config must be a JSON object".to_owned(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| SyncError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_lead_in_fraction() -> f64 {
    DEFAULT_LEAD_IN_FRACTION
}

fn default_aspect_ratio() -> f64 {
    1.0
}
