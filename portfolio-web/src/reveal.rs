//! One-shot visibility effects driven by `IntersectionObserver`.
//!
//! Every observer here fires once per element: the element is unobserved as
//! soon as it first intersects.

use std::cell::RefCell;
use std::thread::LocalKey;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::error::WebError;

pub const ANIMATED_CLASS: &str = "animate-fadeIn";
/// Set while an element waits on an observer; cleared when it first shows.
pub const PENDING_ATTR: &str = "data-reveal-pending";
const ANIMATE_THRESHOLD: f64 = 0.1;
const ANIMATE_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const BAR_THRESHOLD: f64 = 0.3;

type VisibleCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer and the callback it holds, kept alive together.
struct OnceObserver {
    observer: IntersectionObserver,
    _callback: VisibleCallback,
}

type Slot = RefCell<Option<OnceObserver>>;

thread_local! {
    static ANIMATIONS: Slot = const { RefCell::new(None) };
    static SKILL_BARS: Slot = const { RefCell::new(None) };
    static PROGRESS_FILLS: Slot = const { RefCell::new(None) };
    static LAZY_IMAGES: Slot = const { RefCell::new(None) };
}

impl OnceObserver {
    fn new(
        threshold: f64,
        root_margin: Option<&str>,
        on_visible: impl Fn(&Element) + 'static,
    ) -> Result<Self, WebError> {
        let callback: VisibleCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        let _ = target.remove_attribute(PENDING_ATTR);
                        on_visible(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| WebError::js(&e))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Observe every target not already waiting, creating the slot's observer on first use.
///
/// Returns how many targets were newly observed.
fn observe_once<F>(
    slot: &'static LocalKey<Slot>,
    targets: Vec<Element>,
    build: F,
) -> Result<usize, WebError>
where
    F: FnOnce() -> Result<OnceObserver, WebError>,
{
    let fresh: Vec<Element> = targets
        .into_iter()
        .filter(|el| !el.has_attribute(PENDING_ATTR))
        .collect();
    if fresh.is_empty() {
        return Ok(0);
    }
    slot.with(|cell| {
        let mut cell = cell.borrow_mut();
        if cell.is_none() {
            *cell = Some(build()?);
        }
        let Some(shared) = cell.as_ref() else {
            return Ok(0);
        };
        for target in &fresh {
            let _ = target.set_attribute(PENDING_ATTR, "");
            shared.observer.observe(target);
        }
        Ok(fresh.len())
    })
}

/// Fade in `[data-animate]` elements that have not animated yet.
///
/// Safe to call again after new markup is rendered: one observer serves
/// every call and elements already waiting are skipped.
///
/// # Errors
/// Returns an error when `IntersectionObserver` cannot be constructed.
pub fn observe_animations() -> Result<usize, WebError> {
    let pending: Vec<Element> = dom::query_all("[data-animate]")
        .into_iter()
        .filter(|el| !el.class_list().contains(ANIMATED_CLASS))
        .collect();
    observe_once(&ANIMATIONS, pending, || {
        OnceObserver::new(ANIMATE_THRESHOLD, Some(ANIMATE_ROOT_MARGIN), |el| {
            let _ = el.class_list().add_1(ANIMATED_CLASS);
        })
    })
}

/// Copy each `.skill-progress` width into `--progress-width` when its category shows.
///
/// # Errors
/// Returns an error when `IntersectionObserver` cannot be constructed.
pub fn observe_skill_bars() -> Result<usize, WebError> {
    observe_once(&SKILL_BARS, dom::query_all(".skill-category"), || {
        OnceObserver::new(BAR_THRESHOLD, None, |category| {
            for bar in dom::query_all_in(category, ".skill-progress") {
                if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
                    let style = bar.style();
                    let width = style.get_property_value("width").unwrap_or_default();
                    let _ = style.set_property("--progress-width", &width);
                }
            }
        })
    })
}

/// Replay `.progress-fill` bars from zero when they scroll into view.
///
/// # Errors
/// Returns an error when `IntersectionObserver` cannot be constructed.
pub fn observe_progress_fills(delay_ms: u32) -> Result<usize, WebError> {
    observe_once(&PROGRESS_FILLS, dom::query_all(".progress-fill"), || {
        OnceObserver::new(BAR_THRESHOLD, None, move |fill| {
            let Some(fill) = fill.dyn_ref::<HtmlElement>().cloned() else {
                return;
            };
            let target = fill.style().get_property_value("width").unwrap_or_default();
            let _ = fill.style().set_property("width", "0%");
            dom::set_timeout(delay_ms, move || {
                let _ = fill.style().set_property("width", &target);
            });
        })
    })
}

/// Swap `img[data-src]` into `src` once the image is near the viewport.
///
/// # Errors
/// Returns an error when `IntersectionObserver` cannot be constructed.
pub fn observe_lazy_images() -> Result<usize, WebError> {
    observe_once(&LAZY_IMAGES, dom::query_all("img[data-src]"), || {
        OnceObserver::new(0.0, None, |img| {
            if let Some(src) = img.get_attribute("data-src") {
                let _ = img.set_attribute("src", &src);
                let _ = img.remove_attribute("data-src");
            }
        })
    })
}

/// Pick up markup rendered after page load.
///
/// Call when rendered content changes, not on every render.
pub fn refresh() {
    for result in [observe_animations(), observe_lazy_images()] {
        if let Err(err) = result {
            log::debug!("scroll reveal unavailable: {err}");
        }
    }
}
