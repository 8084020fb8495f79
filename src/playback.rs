//! Autoplay state and its rendering on the pause control.
//!
//! The playback state lives here as an explicit enum. The pause control's
//! class and label are derived from it on every transition and are never
//! read back.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

use crate::config::PauseControlStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Autoplay timer is live.
    #[default]
    Playing,
    /// Autoplay timer is cancelled.
    Paused,
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// The state a pause-button press leads to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }
}

/// What the pause control should look like for a given playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseControlView {
    /// Class to add.
    pub class: String,
    /// Class to remove; always the other state's class.
    pub stale_class: String,
    pub label: String,
}

impl PauseControlView {
    /// Render `state` using the configured classes and labels.
    #[must_use]
    pub fn render(state: PlaybackState, style: &PauseControlStyle) -> Self {
        match state {
            PlaybackState::Playing => Self {
                class: style.playing_class.clone(),
                stale_class: style.paused_class.clone(),
                label: style.pause_label.clone(),
            },
            PlaybackState::Paused => Self {
                class: style.paused_class.clone(),
                stale_class: style.playing_class.clone(),
                label: style.resume_label.clone(),
            },
        }
    }
}
