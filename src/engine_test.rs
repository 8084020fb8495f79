#![allow(clippy::cast_possible_truncation)]

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Host double that applies actions the way the browser shell does, so
/// tests can check what a page would actually show.
#[derive(Debug, Default)]
struct FakeHost {
    slides: Vec<bool>,
    selectors: Vec<bool>,
    live_timers: Vec<u32>,
    timers_started: usize,
    pause_class: Option<String>,
    pause_label: Option<String>,
}

impl FakeHost {
    fn with_slides(n: usize) -> Self {
        Self { slides: vec![false; n], ..Default::default() }
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::AppendSelectors { count } => self.selectors.extend(std::iter::repeat_n(false, count)),
                Action::SelectorChanged { from, to } => {
                    if let Some(from) = from {
                        self.selectors[from] = false;
                    }
                    self.selectors[to] = true;
                }
                Action::SlideChanged { from, to } => {
                    match from {
                        Some(from) => self.slides[from] = false,
                        None => self.slides.iter_mut().for_each(|s| *s = false),
                    }
                    self.slides[to] = true;
                }
                Action::StartTimer { interval_ms } => {
                    self.live_timers.push(interval_ms);
                    self.timers_started += 1;
                }
                Action::CancelTimer => {
                    self.live_timers.pop();
                }
                Action::RenderPauseControl(view) => {
                    self.pause_class = Some(view.class);
                    self.pause_label = Some(view.label);
                }
            }
        }
    }

    fn current_slides(&self) -> Vec<usize> {
        marked(&self.slides)
    }

    fn current_selectors(&self) -> Vec<usize> {
        marked(&self.selectors)
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags.iter().enumerate().filter(|(_, on)| **on).map(|(i, _)| i).collect()
}

fn started(n: usize) -> (CarouselCore, FakeHost) {
    let mut core = CarouselCore::new();
    let mut host = FakeHost::with_slides(n);
    host.apply(core.initialize(n).unwrap());
    (core, host)
}

fn run(core: &CarouselCore, host: &mut FakeHost, result: Result<Vec<Action>, CarouselError>) {
    let actions = result.unwrap();
    host.apply(actions);
    assert_single_current(core, host);
}

fn assert_single_current(core: &CarouselCore, host: &FakeHost) {
    assert_eq!(host.current_slides(), vec![core.cursor()]);
    assert_eq!(host.current_selectors(), vec![core.cursor()]);
    assert_eq!(core.slides().current(), Some(core.cursor()));
    assert_eq!(core.selectors().current(), Some(core.cursor()));
}

// =============================================================
// Construction and initialization
// =============================================================

#[test]
fn new_core_is_uninitialized_and_playing() {
    let core = CarouselCore::new();
    assert!(!core.is_initialized());
    assert!(core.is_empty());
    assert_eq!(core.playback(), PlaybackState::Playing);
    assert!(!core.timer_live());
    assert_eq!(core.interval_ms(), 2500);
}

#[test]
fn from_config_uses_configured_interval() {
    let config = CarouselConfig { interval_ms: 900, ..Default::default() };
    let core = CarouselCore::from_config(&config).unwrap();
    assert_eq!(core.interval_ms(), 900);
}

#[test]
fn from_config_rejects_zero_interval() {
    let config = CarouselConfig { interval_ms: 0, ..Default::default() };
    assert_eq!(CarouselCore::from_config(&config).unwrap_err(), CarouselError::InvalidInterval);
}

#[test]
fn initialize_four_slides_creates_four_selectors() {
    let (core, host) = started(4);
    assert_eq!(core.len(), 4);
    assert_eq!(host.selectors.len(), 4);
    assert_eq!(host.current_selectors(), vec![0]);
    assert_eq!(host.current_slides(), vec![0]);
    assert_eq!(core.cursor(), 0);
}

#[test]
fn initialize_emits_actions_in_order() {
    let mut core = CarouselCore::new();
    let actions = core.initialize(2).unwrap();
    assert_eq!(actions[0], Action::AppendSelectors { count: 2 });
    assert_eq!(actions[1], Action::SelectorChanged { from: None, to: 0 });
    assert_eq!(actions[2], Action::SlideChanged { from: None, to: 0 });
    assert_eq!(actions[3], Action::StartTimer { interval_ms: 2500 });
    assert!(matches!(actions[4], Action::RenderPauseControl(_)));
}

#[test]
fn initialize_starts_autoplay_and_offers_pause() {
    let (core, host) = started(3);
    assert!(core.timer_live());
    assert_eq!(host.live_timers, vec![2500]);
    assert_eq!(host.pause_class.as_deref(), Some("inactive"));
    assert_eq!(host.pause_label.as_deref(), Some("||"));
}

#[test]
fn initialize_zero_slides_fails() {
    let mut core = CarouselCore::new();
    assert_eq!(core.initialize(0).unwrap_err(), CarouselError::NoSlides);
    assert!(!core.is_initialized());
}

#[test]
fn initialize_twice_fails() {
    let (mut core, _host) = started(3);
    assert_eq!(core.initialize(3).unwrap_err(), CarouselError::AlreadyInitialized);
    assert_eq!(core.len(), 3);
}

#[test]
fn single_slide_carousel_stays_on_it() {
    let (mut core, mut host) = started(1);
    let result = core.step(Direction::Next);
    run(&core, &mut host, result);
    assert_eq!(core.cursor(), 0);
    let result = core.step(Direction::Prev);
    run(&core, &mut host, result);
    assert_eq!(core.cursor(), 0);
}

// =============================================================
// Markers
// =============================================================

#[test]
fn set_current_slide_reports_previous() {
    let (mut core, _host) = started(3);
    assert_eq!(core.set_current_slide(2).unwrap(), Action::SlideChanged { from: Some(0), to: 2 });
    assert_eq!(core.slides().current(), Some(2));
}

#[test]
fn set_current_selector_reports_previous() {
    let (mut core, _host) = started(3);
    assert_eq!(core.set_current_selector(1).unwrap(), Action::SelectorChanged { from: Some(0), to: 1 });
    assert_eq!(core.selectors().current(), Some(1));
}

#[test]
fn set_current_slide_before_initialize_fails() {
    let mut core = CarouselCore::new();
    assert_eq!(core.set_current_slide(0).unwrap_err(), CarouselError::NoCurrentMarker);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn step_next_walks_and_wraps() {
    let (mut core, mut host) = started(3);
    for expected in [1, 2, 0] {
        let result = core.step(Direction::Next);
        run(&core, &mut host, result);
        assert_eq!(core.cursor(), expected);
    }
}

#[test]
fn step_prev_wraps_backward() {
    let (mut core, mut host) = started(3);
    let result = core.step(Direction::Prev);
    run(&core, &mut host, result);
    assert_eq!(core.cursor(), 2);
}

#[test]
fn step_moves_selector_before_slide() {
    let (mut core, _host) = started(3);
    let actions = core.step(Direction::Next).unwrap();
    assert_eq!(
        actions,
        vec![
            Action::SelectorChanged { from: Some(0), to: 1 },
            Action::SlideChanged { from: Some(0), to: 1 },
        ]
    );
}

#[test]
fn k_steps_land_on_k_mod_n() {
    for n in 1..=6 {
        let (mut core, mut host) = started(n);
        for k in 1..=20 {
            let result = core.step(Direction::Next);
            run(&core, &mut host, result);
            assert_eq!(core.cursor(), k % n, "n={n} k={k}");
        }
    }
}

#[test]
fn next_then_prev_round_trips() {
    for n in 1..=5 {
        for start in 0..n {
            let (mut core, mut host) = started(n);
            let result = core.select(start);
            run(&core, &mut host, result);
            let result = core.step(Direction::Next);
            run(&core, &mut host, result);
            let result = core.step(Direction::Prev);
            run(&core, &mut host, result);
            assert_eq!(core.cursor(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn step_before_initialize_fails() {
    let mut core = CarouselCore::new();
    assert_eq!(core.step(Direction::Next).unwrap_err(), CarouselError::NoCurrentMarker);
    assert_eq!(core.cursor(), 0);
}

#[test]
fn select_jumps_to_exact_index_from_any_cursor() {
    let n = 5;
    for prior in 0..n {
        for target in 0..n {
            let (mut core, mut host) = started(n);
            let result = core.select(prior);
            run(&core, &mut host, result);
            let result = core.select(target);
            run(&core, &mut host, result);
            assert_eq!(core.cursor(), target);
        }
    }
}

#[test]
fn select_out_of_range_leaves_state() {
    let (mut core, host) = started(3);
    let err = core.select(3).unwrap_err();
    assert_eq!(err, CarouselError::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(core.cursor(), 0);
    assert_single_current(&core, &host);
}

#[test]
fn select_before_initialize_fails() {
    let mut core = CarouselCore::new();
    assert_eq!(core.select(0).unwrap_err(), CarouselError::NoCurrentMarker);
}

#[test]
fn select_while_playing_leaves_timer_alone() {
    let (mut core, _host) = started(4);
    let actions = core.select(2).unwrap();
    assert!(!actions.iter().any(|a| matches!(a, Action::StartTimer { .. } | Action::CancelTimer)));
    assert_eq!(core.playback(), PlaybackState::Playing);
}

#[test]
fn select_while_paused_stays_paused() {
    let (mut core, mut host) = started(4);
    host.apply(core.pause().unwrap());
    let result = core.select(3);
    run(&core, &mut host, result);
    assert_eq!(core.playback(), PlaybackState::Paused);
    assert!(host.live_timers.is_empty());
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn tick_advances_while_playing() {
    let (mut core, mut host) = started(3);
    let result = core.tick();
    run(&core, &mut host, result);
    assert_eq!(core.cursor(), 1);
}

#[test]
fn tick_before_initialize_fails() {
    let mut core = CarouselCore::new();
    assert_eq!(core.tick().unwrap_err(), CarouselError::NotInitialized);
}

#[test]
fn pause_cancels_timer_and_stops_ticks() {
    let (mut core, mut host) = started(3);
    host.apply(core.toggle_playback().unwrap());
    assert_eq!(core.playback(), PlaybackState::Paused);
    assert!(host.live_timers.is_empty());
    assert!(!core.timer_live());
    assert_eq!(host.pause_class.as_deref(), Some("active"));
    assert_eq!(host.pause_label.as_deref(), Some(">>"));

    for _ in 0..5 {
        assert!(core.tick().unwrap().is_empty());
    }
    assert_eq!(core.cursor(), 0);
}

#[test]
fn resume_starts_exactly_one_timer() {
    let config = CarouselConfig { interval_ms: 1200, ..Default::default() };
    let mut core = CarouselCore::from_config(&config).unwrap();
    let mut host = FakeHost::with_slides(3);
    host.apply(core.initialize(3).unwrap());
    host.apply(core.toggle_playback().unwrap());

    let actions = core.toggle_playback().unwrap();
    let starts = actions.iter().filter(|a| matches!(a, Action::StartTimer { .. })).count();
    assert_eq!(starts, 1);
    host.apply(actions);

    assert_eq!(host.live_timers, vec![1200]);
    assert_eq!(host.timers_started, 2);
    assert_eq!(host.pause_class.as_deref(), Some("inactive"));
    assert_eq!(host.pause_label.as_deref(), Some("||"));
    let result = core.tick();
    run(&core, &mut host, result);
    assert_eq!(core.cursor(), 1);
}

#[test]
fn repeated_toggles_never_leave_two_timers() {
    let (mut core, mut host) = started(3);
    for _ in 0..9 {
        host.apply(core.toggle_playback().unwrap());
        assert!(host.live_timers.len() <= 1);
        assert_eq!(host.live_timers.len() == 1, core.timer_live());
    }
    assert_eq!(core.playback(), PlaybackState::Paused);
}

#[test]
fn pause_when_paused_is_noop() {
    let (mut core, mut host) = started(2);
    host.apply(core.pause().unwrap());
    assert!(core.pause().unwrap().is_empty());
    assert_eq!(core.playback(), PlaybackState::Paused);
}

#[test]
fn resume_when_playing_is_noop() {
    let (mut core, _host) = started(2);
    assert!(core.resume().unwrap().is_empty());
    assert_eq!(core.playback(), PlaybackState::Playing);
}

#[test]
fn playback_ops_before_initialize_fail() {
    let mut core = CarouselCore::new();
    assert_eq!(core.pause().unwrap_err(), CarouselError::NotInitialized);
    assert_eq!(core.resume().unwrap_err(), CarouselError::NotInitialized);
    assert_eq!(core.toggle_playback().unwrap_err(), CarouselError::NotInitialized);
}

// =============================================================
// Invariants under mixed operations
// =============================================================

#[test]
fn mixed_operations_keep_one_current_pair() {
    let n = 7;
    let (mut core, mut host) = started(n);
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        let pick = (seed >> 33) as usize;
        let result = match pick % 5 {
            0 => core.step(Direction::Next),
            1 => core.step(Direction::Prev),
            2 => core.select(pick % n),
            3 => core.tick(),
            _ => core.toggle_playback(),
        };
        run(&core, &mut host, result);
        assert!(host.live_timers.len() <= 1);
    }
}
