//! Image carousel controller for a single host page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It cycles a
//! fixed set of slides on a repeating timer, with previous/next buttons, one
//! generated selector button per slide, and a pause/resume toggle. All state
//! and navigation lives in [`engine::CarouselCore`], which has no browser
//! dependencies; [`host::Carousel`] binds it to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::CarouselCore`] and the [`engine::Action`]s it emits |
//! | [`host`] | Browser shell: element lookup, click wiring, autoplay timer |
//! | [`track`] | Marker tracks and circular index stepping |
//! | [`playback`] | Playing/paused state and pause-control rendering |
//! | [`config`] | Options JSON parsing and defaults |
//! | [`error`] | [`error::CarouselError`] |
//! | [`consts`] | Default markers, labels, and interval |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod host;
pub mod playback;
pub mod track;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::host::{Carousel, SharedCarousel};

thread_local! {
    // Holds the page's carousel for the lifetime of the page.
    static CAROUSEL: RefCell<Option<SharedCarousel>> = const { RefCell::new(None) };
}

/// Page entry point. `options` is an optional JSON object matching
/// [`CarouselConfig`]; omitted fields take their defaults.
#[wasm_bindgen]
pub fn start(options: Option<String>) -> Result<(), JsError> {
    console_error_panic_hook::set_once();

    let config = CarouselConfig::from_json(options.as_deref().unwrap_or_default())?;
    if console_log::init_with_level(config.level()?).is_err() {
        log::debug!("console logger already installed");
    }

    if CAROUSEL.with(|slot| slot.borrow().is_some()) {
        return Err(CarouselError::AlreadyInitialized.into());
    }

    let carousel = Carousel::from_document(&config)?;
    let selector_count = carousel.borrow_mut().initialize()?.len();
    log::info!("carousel started with {selector_count} selectors");

    CAROUSEL.with(|slot| *slot.borrow_mut() = Some(carousel));
    Ok(())
}
