//! Carousel configuration parsed from the host page's options JSON.
//!
//! Every field is optional; anything missing falls back to the markup
//! conventions the widget has always used (see [`crate::consts`]). Field
//! names are camelCase so the host can pass a plain JavaScript object
//! through `JSON.stringify`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CURRENT_SELECTOR_CLASS, CURRENT_SLIDE_ID, DEFAULT_INTERVAL_MS, NEXT_BUTTON_ID, PAUSE_BUTTON_ID, PAUSE_LABEL,
    PAUSED_CLASS, PLAYING_CLASS, PREV_BUTTON_ID, RESUME_LABEL, SELECTOR_CLASS, SELECTOR_CONTAINER_CLASS, SELECTOR_TAG,
    SLIDE_CLASS,
};
use crate::error::CarouselError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds.
    pub interval_ms: u32,
    /// Browser console log level (`error` .. `trace`).
    pub log_level: String,
    pub markers: HostMarkers,
    pub pause_control: PauseControlStyle,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            markers: HostMarkers::default(),
            pause_control: PauseControlStyle::default(),
        }
    }
}

impl CarouselConfig {
    /// Parse and validate options JSON. An empty or whitespace-only string
    /// yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, CarouselError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot: the interval must be positive and the
    /// log level must name a real level.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval);
        }
        self.level().map(|_| ())
    }

    /// The configured console log level.
    pub fn level(&self) -> Result<log::Level, CarouselError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| CarouselError::Config(format!("unknown log level: {}", self.log_level)))
    }
}

/// Class names and ids the shell uses to find and mark host elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostMarkers {
    pub slide_class: String,
    pub current_slide_id: String,
    pub selector_container_class: String,
    pub selector_class: String,
    pub current_selector_class: String,
    pub selector_tag: String,
    pub prev_button_id: String,
    pub pause_button_id: String,
    pub next_button_id: String,
}

impl Default for HostMarkers {
    fn default() -> Self {
        Self {
            slide_class: SLIDE_CLASS.to_string(),
            current_slide_id: CURRENT_SLIDE_ID.to_string(),
            selector_container_class: SELECTOR_CONTAINER_CLASS.to_string(),
            selector_class: SELECTOR_CLASS.to_string(),
            current_selector_class: CURRENT_SELECTOR_CLASS.to_string(),
            selector_tag: SELECTOR_TAG.to_string(),
            prev_button_id: PREV_BUTTON_ID.to_string(),
            pause_button_id: PAUSE_BUTTON_ID.to_string(),
            next_button_id: NEXT_BUTTON_ID.to_string(),
        }
    }
}

/// Classes and labels the pause control shows for each playback state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PauseControlStyle {
    pub playing_class: String,
    pub paused_class: String,
    pub pause_label: String,
    pub resume_label: String,
}

impl Default for PauseControlStyle {
    fn default() -> Self {
        Self {
            playing_class: PLAYING_CLASS.to_string(),
            paused_class: PAUSED_CLASS.to_string(),
            pause_label: PAUSE_LABEL.to_string(),
            resume_label: RESUME_LABEL.to_string(),
        }
    }
}
