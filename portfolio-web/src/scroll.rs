use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_core::{HeaderFrame, HeaderScroll};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::dom;
use crate::error::WebError;

fn paint(header: &HtmlElement, frame: HeaderFrame) {
    let _ = header
        .class_list()
        .toggle_with_force("header-hidden", frame.hidden);
    let shadow = if frame.shadow { "var(--shadow-md)" } else { "none" };
    let _ = header.style().set_property("box-shadow", shadow);
}

/// Hide `.header` on scroll down and show it on scroll up, at most once per frame.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when the page has no `.header`.
pub fn wire_header_scroll() -> Result<(), WebError> {
    let win = dom::window().ok_or(WebError::Unavailable("window"))?;
    let header = dom::document()
        .and_then(|doc| doc.query_selector(".header").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(WebError::MissingElement(".header"))?;

    let state = Rc::new(RefCell::new(HeaderScroll::new(win.scroll_y().unwrap_or(0.0))));
    let queued = Rc::new(Cell::new(false));

    let on_scroll = Closure::wrap(Box::new(move || {
        if queued.replace(true) {
            return;
        }
        let Some(win) = dom::window() else {
            queued.set(false);
            return;
        };
        let (state, frame_queued, header) = (state.clone(), queued.clone(), header.clone());
        let frame = Closure::once_into_js(move || {
            frame_queued.set(false);
            let y = dom::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let frame = state.borrow_mut().update(y);
            paint(&header, frame);
        });
        if win.request_animation_frame(frame.unchecked_ref()).is_err() {
            queued.set(false);
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|e| WebError::js(&e))?;
    on_scroll.forget();
    log::debug!("header scroll wired");
    Ok(())
}
