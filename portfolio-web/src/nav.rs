//! Header navigation: mobile menu, active link, smooth anchors, resize.

use std::cell::Cell;
use std::rc::Rc;

use portfolio_core::nav::is_scrollable_anchor;
use portfolio_core::{SiteConfig, is_active_link, scroll_target_offset, should_close_menu};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, Node, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::WebError;

const ACTIVE: &str = "active";

fn close_menu(toggle: &Element, menu: &Element) {
    let _ = menu.class_list().remove_1(ACTIVE);
    let _ = toggle.class_list().remove_1(ACTIVE);
    dom::set_body_scroll_locked(false);
}

/// Wire `#navToggle` / `#navMenu`.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when either element is absent.
pub fn wire_mobile_menu() -> Result<(), WebError> {
    let toggle = dom::require_id("navToggle")?;
    let menu = dom::require_id("navMenu")?;

    {
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let open = menu_el.class_list().toggle(ACTIVE).unwrap_or(false);
            let _ = toggle_el.class_list().toggle(ACTIVE);
            dom::set_body_scroll_locked(open);
        })?;
    }

    if let Some(doc) = dom::document() {
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(&doc, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .is_some_and(|node| toggle_el.contains(Some(node)) || menu_el.contains(Some(node)));
            if !inside {
                close_menu(&toggle_el, &menu_el);
            }
        })?;
    }

    for link in dom::query_all_in(&menu, ".nav-link") {
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_| close_menu(&toggle_el, &menu_el))?;
    }
    Ok(())
}

/// Mark the `.nav-link` whose path equals the current page.
pub fn highlight_active_link() {
    let Some(current) = dom::window().and_then(|win| win.location().pathname().ok()) else {
        return;
    };
    for link in dom::query_all(".nav-link") {
        let _ = link.class_list().remove_1(ACTIVE);
        let path = link
            .dyn_ref::<HtmlAnchorElement>()
            .map(HtmlAnchorElement::pathname)
            .unwrap_or_default();
        if is_active_link(&path, &current) {
            let _ = link.class_list().add_1(ACTIVE);
        }
    }
}

/// Smooth-scroll in-page anchors, leaving room for the fixed header.
pub fn wire_smooth_scroll() {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        let result = dom::listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            if !is_scrollable_anchor(&href) {
                return;
            }
            event.prevent_default();
            let Some(win) = dom::window() else {
                return;
            };
            let target = dom::document().and_then(|doc| doc.query_selector(&href).ok().flatten());
            if let Some(target) = target {
                let top = scroll_target_offset(
                    target.get_bounding_client_rect().top(),
                    win.scroll_y().unwrap_or(0.0),
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
        });
        if let Err(err) = result {
            log::debug!("smooth scroll not wired: {err}");
        }
    }
}

/// Close the mobile menu once the viewport grows past the breakpoint (debounced).
///
/// # Errors
/// Returns an error when there is no window to listen on.
pub fn wire_resize(config: &SiteConfig) -> Result<(), WebError> {
    let win = dom::window().ok_or(WebError::Unavailable("window"))?;
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let delay = config.timings.resize_debounce_ms;
    let breakpoint = config.mobile_breakpoint_px;
    dom::listen(&win, "resize", move |_| {
        if let Some(handle) = pending.take() {
            dom::clear_timeout(handle);
        }
        let handle = dom::set_timeout(delay, move || {
            let width = dom::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            if should_close_menu(width, breakpoint)
                && let (Ok(toggle), Ok(menu)) = (dom::require_id("navToggle"), dom::require_id("navMenu"))
            {
                close_menu(&toggle, &menu);
            }
        });
        pending.set(handle);
    })
}
