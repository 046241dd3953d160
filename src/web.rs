//! Browser backend: runs a [`Carousel`] against the live DOM.
//!
//! Slides and dots are looked up with `getElementsByClassName` on every call,
//! the marker is a CSS class toggled through `classList`, and auto-rotation
//! uses `setInterval` via `gloo-timers`.
//!
//! A page has one carousel. One is mounted with the defaults at module start;
//! calling [`mount`] replaces it, and the replaced carousel is disposed so its
//! timer never competes with the new one. Pages can keep the
//! [`CarouselHandle`] returned by [`mount`] and wire it to their controls, or
//! call the global [`current_slide`] from markup `onclick` handlers, which
//! always drives the most recently mounted carousel.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::timer::Scheduler;
use crate::tree::ElementTree;

pub type WebCarousel = Carousel<DomTree, IntervalScheduler>;

/// [`ElementTree`] over a `web_sys::Document`.
#[derive(Debug, Clone)]
pub struct DomTree {
    document: Document,
}

impl DomTree {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, class: &str, index: usize) -> Option<web_sys::Element> {
        let index = u32::try_from(index).ok()?;
        self.document.get_elements_by_class_name(class).item(index)
    }
}

impl ElementTree for DomTree {
    fn count_by_class(&self, class: &str) -> usize {
        self.document.get_elements_by_class_name(class).length() as usize
    }

    fn add_class(&mut self, class: &str, index: usize, name: &str) {
        if let Some(element) = self.element(class, index) {
            if let Err(e) = element.class_list().add_1(name) {
                log::warn!("Failed to add '{}' to {} #{}: {:?}", name, class, index, e);
            }
        }
    }

    fn remove_class(&mut self, class: &str, index: usize, name: &str) {
        if let Some(element) = self.element(class, index) {
            if let Err(e) = element.class_list().remove_1(name) {
                log::warn!("Failed to remove '{}' from {} #{}: {:?}", name, class, index, e);
            }
        }
    }
}

/// [`Scheduler`] backed by `setInterval`; every timer runs the same tick callback.
pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self { on_tick: Rc::new(on_tick) }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn start_repeating(&mut self, period: Duration) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let on_tick = Rc::clone(&self.on_tick);
        Interval::new(millis, move || on_tick())
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle);
    }
}

/// Shared handle to a carousel mounted on the page.
#[wasm_bindgen]
#[derive(Clone)]
pub struct CarouselHandle {
    inner: Rc<RefCell<WebCarousel>>,
}

impl CarouselHandle {
    fn with(&self, f: impl FnOnce(&mut WebCarousel)) {
        match self.inner.try_borrow_mut() {
            Ok(mut carousel) => f(&mut carousel),
            Err(_) => log::warn!("Carousel busy, navigation dropped"),
        }
    }
}

#[wasm_bindgen]
impl CarouselHandle {
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: i32) {
        self.with(|c| c.go_to_slide(index as isize));
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) {
        self.with(|c| c.next_slide());
    }

    #[wasm_bindgen(js_name = previousSlide)]
    pub fn previous_slide(&self) {
        self.with(|c| c.previous_slide());
    }

    #[wasm_bindgen(js_name = startAutoSlide)]
    pub fn start_auto_slide(&self) {
        self.with(|c| c.start_auto_slide());
    }

    #[wasm_bindgen(js_name = stopAutoSlide)]
    pub fn stop_auto_slide(&self) {
        self.with(|c| c.stop_auto_slide());
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.inner.borrow().current_index() as u32
    }
}

thread_local! {
    static ACTIVE_CAROUSEL: RefCell<Option<Rc<RefCell<WebCarousel>>>> = const { RefCell::new(None) };
}

// Makes `next` the page's carousel and disposes the one it replaces.
fn install<T: ElementTree, S: Scheduler>(
    slot: &mut Option<Rc<RefCell<Carousel<T, S>>>>,
    next: Rc<RefCell<Carousel<T, S>>>,
) {
    if let Some(previous) = slot.replace(next) {
        match previous.try_borrow_mut() {
            Ok(mut previous) => previous.dispose(),
            Err(_) => log::warn!("Replaced carousel is busy and was not disposed"),
        }
    }
}

/// Creates the page's carousel on the current document and arms it for page-ready.
///
/// Any carousel mounted before is disposed. Omitted options fall back to the
/// defaults (5000 ms, `.carousel-slide`, `.dot`). A delay of 0 is used as given,
/// not replaced by the default.
#[wasm_bindgen]
pub fn mount(
    auto_slide_delay_ms: Option<u32>,
    slide_selector: Option<String>,
    dot_selector: Option<String>,
) -> Result<CarouselHandle, JsValue> {
    let mut config = CarouselConfig::default();
    if let Some(ms) = auto_slide_delay_ms {
        config = config.with_delay(Duration::from_millis(ms as u64));
    }
    if let Some(selector) = slide_selector {
        config = config.with_slide_selector(selector);
    }
    if let Some(selector) = dot_selector {
        config = config.with_dot_selector(selector);
    }
    mount_with_config(config)
}

pub fn mount_with_config(config: CarouselConfig) -> Result<CarouselHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let inner = Rc::new_cyclic(|weak: &Weak<RefCell<WebCarousel>>| {
        let weak = weak.clone();
        let scheduler = IntervalScheduler::new(move || {
            if let Some(carousel) = weak.upgrade() {
                if let Ok(mut carousel) = carousel.try_borrow_mut() {
                    carousel.next_slide();
                }
            }
        });
        RefCell::new(Carousel::new(config, DomTree::new(document.clone()), scheduler))
    });

    ACTIVE_CAROUSEL.with(|slot| install(&mut *slot.borrow_mut(), Rc::clone(&inner)));

    let handle = CarouselHandle { inner };
    let ready = handle.clone();
    when_ready(&document, move || ready.with(|c| c.on_ready()))?;
    Ok(handle)
}

/// Navigates the page's carousel. Meant for markup `onclick` handlers.
#[wasm_bindgen(js_name = currentSlide)]
pub fn current_slide(index: i32) {
    match ACTIVE_CAROUSEL.with(|slot| slot.borrow().clone()) {
        Some(inner) => CarouselHandle { inner }.go_to_slide(index),
        None => log::warn!("currentSlide({}) called before the carousel was mounted", index),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    mount_with_config(CarouselConfig::default())?;
    Ok(())
}

// Runs `f` once the document has been parsed, immediately if that already happened.
fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref::<js_sys::Function>())
}
