//! Browser shell around [`CarouselCore`].
//!
//! ARCHITECTURE
//! ============
//! The core decides; this shell only finds host elements, forwards clicks
//! and timer ticks into the core, and applies the returned [`Action`]s to
//! the DOM. Listeners and the timer callback hold a `Weak` handle so they go
//! quiet if the carousel is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, HtmlCollection};

use crate::config::{CarouselConfig, HostMarkers};
use crate::engine::{Action, CarouselCore};
use crate::error::CarouselError;
use crate::playback::PauseControlView;
use crate::track::Direction;

pub type SharedCarousel = Rc<RefCell<Carousel>>;

type ClickListener = Closure<dyn FnMut(Event)>;

/// The carousel bound to live page elements.
pub struct Carousel {
    core: CarouselCore,
    markers: HostMarkers,
    document: Document,
    slides: Vec<Element>,
    selectors: Vec<Element>,
    container: Element,
    prev_button: Element,
    pause_button: Element,
    next_button: Element,
    timer: Option<Interval>,
    listeners: Vec<ClickListener>,
    me: Weak<RefCell<Carousel>>,
}

impl Carousel {
    /// Locate the slides and controls named by `config` in the current page.
    pub fn from_document(config: &CarouselConfig) -> Result<SharedCarousel, CarouselError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CarouselError::MissingElement("document".into()))?;
        let markers = config.markers.clone();

        let slides = collect(&document.get_elements_by_class_name(&markers.slide_class));
        let container = document
            .get_elements_by_class_name(&markers.selector_container_class)
            .item(0)
            .ok_or_else(|| CarouselError::MissingElement(format!(".{}", markers.selector_container_class)))?;
        let prev_button = by_id(&document, &markers.prev_button_id)?;
        let pause_button = by_id(&document, &markers.pause_button_id)?;
        let next_button = by_id(&document, &markers.next_button_id)?;
        let core = CarouselCore::from_config(config)?;

        Ok(Rc::new_cyclic(|me| {
            RefCell::new(Self {
                core,
                markers,
                document,
                slides,
                selectors: Vec::new(),
                container,
                prev_button,
                pause_button,
                next_button,
                timer: None,
                listeners: Vec::new(),
                me: me.clone(),
            })
        }))
    }

    /// Generate the selectors, bind every control, and start autoplay.
    ///
    /// Returns the generated selectors in slide order.
    pub fn initialize(&mut self) -> Result<&[Element], CarouselError> {
        let actions = self.core.initialize(self.slides.len())?;
        self.apply(actions)?;
        self.bind_controls()?;
        Ok(&self.selectors)
    }

    #[must_use]
    pub fn core(&self) -> &CarouselCore {
        &self.core
    }

    fn bind_controls(&mut self) -> Result<(), CarouselError> {
        let mut listeners = Vec::with_capacity(self.selectors.len() + 3);

        // One listener per selector, each carrying its own index.
        for (index, selector) in self.selectors.iter().enumerate() {
            let me = self.me.clone();
            listeners.push(on_click(selector, move || dispatch(&me, |core| core.select(index)))?);
        }

        let me = self.me.clone();
        listeners.push(on_click(&self.prev_button, move || {
            dispatch(&me, |core| core.step(Direction::Prev));
        })?);
        let me = self.me.clone();
        listeners.push(on_click(&self.next_button, move || {
            dispatch(&me, |core| core.step(Direction::Next));
        })?);
        let me = self.me.clone();
        listeners.push(on_click(&self.pause_button, move || dispatch(&me, CarouselCore::toggle_playback))?);

        self.listeners.extend(listeners);
        Ok(())
    }

    // --- Applying actions ---

    fn apply(&mut self, actions: Vec<Action>) -> Result<(), CarouselError> {
        for action in actions {
            match action {
                Action::AppendSelectors { count } => self.append_selectors(count)?,
                Action::SelectorChanged { from, to } => self.move_selector_marker(from, to)?,
                Action::SlideChanged { from, to } => self.move_slide_marker(from, to)?,
                Action::StartTimer { interval_ms } => self.start_timer(interval_ms),
                Action::CancelTimer => self.cancel_timer(),
                Action::RenderPauseControl(view) => self.render_pause_control(&view)?,
            }
        }
        Ok(())
    }

    fn append_selectors(&mut self, count: usize) -> Result<(), CarouselError> {
        for _ in 0..count {
            let selector = self
                .document
                .create_element(&self.markers.selector_tag)
                .map_err(|e| CarouselError::dom(&e))?;
            selector
                .class_list()
                .add_1(&self.markers.selector_class)
                .map_err(|e| CarouselError::dom(&e))?;
            self.container
                .append_child(&selector)
                .map_err(|e| CarouselError::dom(&e))?;
            self.selectors.push(selector);
        }
        Ok(())
    }

    fn move_selector_marker(&self, from: Option<usize>, to: usize) -> Result<(), CarouselError> {
        let class = &self.markers.current_selector_class;
        if let Some(old) = from.and_then(|i| self.selectors.get(i)) {
            old.class_list().remove_1(class).map_err(|e| CarouselError::dom(&e))?;
        }
        element_at(&self.selectors, to)?
            .class_list()
            .add_1(class)
            .map_err(|e| CarouselError::dom(&e))
    }

    fn move_slide_marker(&self, from: Option<usize>, to: usize) -> Result<(), CarouselError> {
        let id = &self.markers.current_slide_id;
        // On first placement the host markup may already carry the id.
        let old = match from {
            Some(i) => self.slides.get(i).cloned(),
            None => self.document.get_element_by_id(id),
        };
        if let Some(old) = old {
            old.remove_attribute("id").map_err(|e| CarouselError::dom(&e))?;
        }
        element_at(&self.slides, to)?.set_id(id);
        Ok(())
    }

    fn start_timer(&mut self, interval_ms: u32) {
        self.cancel_timer();
        let me = self.me.clone();
        self.timer = Some(Interval::new(interval_ms, move || dispatch(&me, CarouselCore::tick)));
        log::debug!("autoplay timer started ({interval_ms}ms)");
    }

    fn cancel_timer(&mut self) {
        // Dropping the interval clears it.
        if self.timer.take().is_some() {
            log::debug!("autoplay timer cancelled");
        }
    }

    fn render_pause_control(&self, view: &PauseControlView) -> Result<(), CarouselError> {
        let classes = self.pause_button.class_list();
        classes.remove_1(&view.stale_class).map_err(|e| CarouselError::dom(&e))?;
        classes.add_1(&view.class).map_err(|e| CarouselError::dom(&e))?;
        self.pause_button.set_text_content(Some(&view.label));
        Ok(())
    }
}

/// Run `op` against the core and apply the result. Event callbacks have no
/// caller to report to, so failures are logged.
fn dispatch<F>(me: &Weak<RefCell<Carousel>>, op: F)
where
    F: FnOnce(&mut CarouselCore) -> Result<Vec<Action>, CarouselError>,
{
    let Some(shared) = me.upgrade() else {
        return;
    };
    let Ok(mut carousel) = shared.try_borrow_mut() else {
        log::warn!("carousel busy; event dropped");
        return;
    };
    let result = op(&mut carousel.core).and_then(|actions| carousel.apply(actions));
    if let Err(err) = result {
        log::error!("carousel event failed: {err}");
    }
}

fn on_click<F>(target: &Element, mut handler: F) -> Result<ClickListener, CarouselError>
where
    F: FnMut() + 'static,
{
    let listener = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|e| CarouselError::dom(&e))?;
    Ok(listener)
}

fn collect(elements: &HtmlCollection) -> Vec<Element> {
    (0..elements.length()).filter_map(|i| elements.item(i)).collect()
}

fn by_id(document: &Document, id: &str) -> Result<Element, CarouselError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| CarouselError::MissingElement(format!("#{id}")))
}

fn element_at(elements: &[Element], index: usize) -> Result<&Element, CarouselError> {
    elements
        .get(index)
        .ok_or(CarouselError::IndexOutOfRange { index, len: elements.len() })
}
