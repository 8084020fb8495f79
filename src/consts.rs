//! Shared constants for the carousel crate.

// ── Timing ──────────────────────────────────────────────────────

/// Default autoplay period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 2500;

// ── Host markers ────────────────────────────────────────────────

/// Class shared by every slide element, in display order.
pub const SLIDE_CLASS: &str = "carousel-images-list-member";

/// Id carried by the slide currently on display.
pub const CURRENT_SLIDE_ID: &str = "current-image";

/// Class of the container that receives the generated selectors.
pub const SELECTOR_CONTAINER_CLASS: &str = "button-slide-selection";

/// Class added to each generated selector.
pub const SELECTOR_CLASS: &str = "carousel_button_slide";

/// Class marking the selector for the slide on display.
pub const CURRENT_SELECTOR_CLASS: &str = "carousel_button_slide_current";

/// Tag name used when generating selectors.
pub const SELECTOR_TAG: &str = "button";

pub const PREV_BUTTON_ID: &str = "button-prev";
pub const PAUSE_BUTTON_ID: &str = "button-pause";
pub const NEXT_BUTTON_ID: &str = "button-next";

// ── Pause control rendering ─────────────────────────────────────

/// Pause control class while autoplay runs (pressing it pauses).
pub const PLAYING_CLASS: &str = "inactive";

/// Pause control class while autoplay is stopped (pressing it resumes).
pub const PAUSED_CLASS: &str = "active";

/// Pause control label while autoplay runs.
pub const PAUSE_LABEL: &str = "||";

/// Pause control label while autoplay is stopped.
pub const RESUME_LABEL: &str = ">>";
