use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Response, Window};

use crate::error::WebError;

/// The global `window`, absent outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// Look up an element by id, reporting which one was missing.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when there is no document or no such element.
pub fn require_id(id: &'static str) -> Result<Element, WebError> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .ok_or(WebError::MissingElement(id))
}

/// First element matching `selector` within `root`.
#[must_use]
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Every element in the document matching `selector`.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Every descendant of `root` matching `selector`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .ok()
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Lock or release page scrolling behind overlays.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Attach a listener for the lifetime of the page.
///
/// # Errors
/// Returns an error when the browser rejects the listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| WebError::js(&e))?;
    closure.forget();
    Ok(())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Run `f` once after `delay_ms`, returning the timer handle.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let win = window()?;
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let closure = Closure::once(f);
    let handle = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )
        .ok()?;
    closure.forget();
    Some(handle)
}

pub fn clear_timeout(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), WebError> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve = resolve_slot.ok_or(WebError::Unavailable("Promise resolver"))?;
    set_timeout(duration_ms, move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    })
    .ok_or(WebError::Unavailable("setTimeout"))?;
    JsFuture::from(promise).await.map_err(|e| WebError::js(&e))?;
    Ok(())
}

/// Perform a GET request and return the browser `Response`.
///
/// # Errors
/// Returns an error if there is no window, the request fails, or the result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, WebError> {
    let win = window().ok_or(WebError::Unavailable("window"))?;
    let value = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(|e| WebError::js(&e))?;
    value.dyn_into::<Response>().map_err(|e| WebError::js(&e))
}

/// Read a successful response body as text.
///
/// # Errors
/// Returns [`WebError::Http`] for non-success statuses and a JS or UTF-8 error
/// when the body cannot be read.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, WebError> {
    if !response.ok() {
        return Err(WebError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    response_body(response).await
}

/// Read a response body as text regardless of its status.
///
/// # Errors
/// Returns a JS or UTF-8 error when the body cannot be read.
#[allow(clippy::future_not_send)]
pub async fn response_body(response: &Response) -> Result<String, WebError> {
    let text = JsFuture::from(response.text().map_err(|e| WebError::js(&e))?)
        .await
        .map_err(|e| WebError::js(&e))?;
    text.as_string().ok_or(WebError::Utf8)
}

/// GET `url` and return the body of a successful response.
///
/// # Errors
/// See [`fetch_response`] and [`response_text`].
#[allow(clippy::future_not_send)]
pub async fn fetch_text(url: &str) -> Result<String, WebError> {
    let response = fetch_response(url).await?;
    response_text(&response).await
}
