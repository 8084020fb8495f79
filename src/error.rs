//! Error type shared by the carousel core and its browser shell.
//!
//! Every variant is a violated precondition: the widget assumes well-formed
//! host markup, so nothing here is retried. Core operations check all of
//! their preconditions before touching state, which means an `Err` always
//! leaves the carousel exactly as it was.

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The host page offered zero slides.
    #[error("carousel needs at least one slide")]
    NoSlides,

    /// `initialize` was called on a carousel that is already running.
    #[error("carousel is already initialized")]
    AlreadyInitialized,

    /// A playback operation arrived before `initialize`.
    #[error("carousel is not initialized")]
    NotInitialized,

    /// Navigation was requested while no element carries the current marker.
    #[error("no element is marked current; initialize the carousel first")]
    NoCurrentMarker,

    /// An index outside `[0, len)` was requested.
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// The autoplay interval must be a positive number of milliseconds.
    #[error("autoplay interval must be positive")]
    InvalidInterval,

    /// Options JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A required host element is missing from the page.
    #[error("missing host element: {0}")]
    MissingElement(String),

    /// A browser DOM call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl CarouselError {
    /// Wrap a JavaScript exception thrown by a DOM call.
    pub(crate) fn dom(err: &JsValue) -> Self {
        let message = err
            .dyn_ref::<js_sys::Error>()
            .map_or_else(|| format!("{err:?}"), |e| String::from(e.message()));
        Self::Dom(message)
    }
}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
