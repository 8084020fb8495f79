use crate::config::{CarouselConfig, PauseControlStyle};
use crate::error::CarouselError;
use crate::playback::{PauseControlView, PlaybackState};
use crate::track::{Direction, MarkerTrack, step_index};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from carousel operations for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create `count` selectors and append them, in slide order, to the container.
    AppendSelectors { count: usize },
    /// Move the current-selector marker. `from` is `None` on first placement.
    SelectorChanged { from: Option<usize>, to: usize },
    /// Move the current-slide marker. `from` is `None` on first placement.
    SlideChanged { from: Option<usize>, to: usize },
    /// Start the repeating autoplay timer.
    StartTimer { interval_ms: u32 },
    /// Cancel the live autoplay timer.
    CancelTimer,
    /// Redraw the pause control.
    RenderPauseControl(PauseControlView),
}

/// Core carousel state — all logic that doesn't depend on the DOM.
///
/// Separated from [`crate::host::Carousel`] so it can be tested without
/// WASM/browser dependencies. Every operation validates its preconditions
/// before mutating anything, so an `Err` leaves the state untouched.
#[derive(Debug, Clone)]
pub struct CarouselCore {
    interval_ms: u32,
    pause_style: PauseControlStyle,
    slides: MarkerTrack,
    selectors: MarkerTrack,
    cursor: usize,
    playback: PlaybackState,
    initialized: bool,
}

impl Default for CarouselCore {
    fn default() -> Self {
        let config = CarouselConfig::default();
        Self::with_style(config.interval_ms, config.pause_control)
    }
}

impl CarouselCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an uninitialized core from validated configuration.
    pub fn from_config(config: &CarouselConfig) -> Result<Self, CarouselError> {
        if config.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval);
        }
        Ok(Self::with_style(config.interval_ms, config.pause_control.clone()))
    }

    fn with_style(interval_ms: u32, pause_style: PauseControlStyle) -> Self {
        Self {
            interval_ms,
            pause_style,
            slides: MarkerTrack::default(),
            selectors: MarkerTrack::default(),
            cursor: 0,
            playback: PlaybackState::Playing,
            initialized: false,
        }
    }

    // --- Lifecycle ---

    /// Generate one selector per slide, mark index 0 current on both
    /// sequences, and start autoplay.
    pub fn initialize(&mut self, slide_count: usize) -> Result<Vec<Action>, CarouselError> {
        if self.initialized {
            return Err(CarouselError::AlreadyInitialized);
        }
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }

        self.slides = MarkerTrack::new(slide_count);
        self.selectors = MarkerTrack::new(slide_count);
        self.cursor = 0;
        self.playback = PlaybackState::Playing;
        self.initialized = true;
        log::info!("carousel initialized: {slide_count} slides, autoplay every {}ms", self.interval_ms);

        Ok(vec![
            Action::AppendSelectors { count: slide_count },
            Action::SelectorChanged { from: None, to: 0 },
            Action::SlideChanged { from: None, to: 0 },
            Action::StartTimer { interval_ms: self.interval_ms },
            self.render_pause_control(),
        ])
    }

    // --- Markers ---

    /// Move the current-slide marker to `index`.
    pub fn set_current_slide(&mut self, index: usize) -> Result<Action, CarouselError> {
        let from = self.slides.set_current(index)?;
        Ok(Action::SlideChanged { from: Some(from), to: index })
    }

    /// Move the current-selector marker to `index`.
    pub fn set_current_selector(&mut self, index: usize) -> Result<Action, CarouselError> {
        let from = self.selectors.set_current(index)?;
        Ok(Action::SelectorChanged { from: Some(from), to: index })
    }

    // --- Navigation ---

    /// Advance one slide in `direction`, wrapping at both ends.
    ///
    /// Manual prev/next buttons and autoplay ticks both land here.
    pub fn step(&mut self, direction: Direction) -> Result<Vec<Action>, CarouselError> {
        if self.slides.current().is_none() || self.selectors.current().is_none() {
            return Err(CarouselError::NoCurrentMarker);
        }
        let to = step_index(self.cursor, self.slides.len(), direction);
        log::debug!("carousel step {direction:?}: {} -> {to}", self.cursor);
        self.move_to(to)
    }

    /// Jump straight to `index`. Playback and the timer phase are untouched.
    pub fn select(&mut self, index: usize) -> Result<Vec<Action>, CarouselError> {
        log::debug!("carousel select: {} -> {index}", self.cursor);
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> Result<Vec<Action>, CarouselError> {
        self.selectors.check_move(index)?;
        self.slides.check_move(index)?;
        let selector = self.set_current_selector(index)?;
        let slide = self.set_current_slide(index)?;
        self.cursor = index;
        Ok(vec![selector, slide])
    }

    // --- Autoplay ---

    /// Autoplay timer callback. Ticks that land after a pause are ignored.
    pub fn tick(&mut self) -> Result<Vec<Action>, CarouselError> {
        self.ensure_initialized()?;
        if !self.playback.is_playing() {
            log::debug!("carousel tick ignored while paused");
            return Ok(Vec::new());
        }
        self.step(Direction::Next)
    }

    /// Pause-button press: pause while playing, resume while paused.
    pub fn toggle_playback(&mut self) -> Result<Vec<Action>, CarouselError> {
        match self.playback {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
        }
    }

    /// Cancel autoplay. No-op when already paused.
    pub fn pause(&mut self) -> Result<Vec<Action>, CarouselError> {
        self.ensure_initialized()?;
        if !self.playback.is_playing() {
            return Ok(Vec::new());
        }
        self.playback = PlaybackState::Paused;
        log::info!("carousel paused at slide {}", self.cursor);
        Ok(vec![Action::CancelTimer, self.render_pause_control()])
    }

    /// Restart autoplay with the configured interval. No-op when already playing.
    pub fn resume(&mut self) -> Result<Vec<Action>, CarouselError> {
        self.ensure_initialized()?;
        if self.playback.is_playing() {
            return Ok(Vec::new());
        }
        self.playback = PlaybackState::Playing;
        log::info!("carousel resumed at slide {}", self.cursor);
        Ok(vec![Action::StartTimer { interval_ms: self.interval_ms }, self.render_pause_control()])
    }

    fn ensure_initialized(&self) -> Result<(), CarouselError> {
        if self.initialized {
            Ok(())
        } else {
            Err(CarouselError::NotInitialized)
        }
    }

    fn render_pause_control(&self) -> Action {
        Action::RenderPauseControl(PauseControlView::render(self.playback, &self.pause_style))
    }

    // --- Queries ---

    /// Index of the slide on display.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of slides; zero before initialization.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Whether an autoplay timer should currently be live.
    #[must_use]
    pub fn timer_live(&self) -> bool {
        self.initialized && self.playback.is_playing()
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[must_use]
    pub fn slides(&self) -> &MarkerTrack {
        &self.slides
    }

    #[must_use]
    pub fn selectors(&self) -> &MarkerTrack {
        &self.selectors
    }
}
