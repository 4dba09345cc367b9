#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod announcer;
pub mod bootstrap;
pub mod certificates;
pub mod components;
pub mod decor;
pub mod dom;
pub mod error;
pub mod form;
pub mod logging;
pub mod nav;
pub mod partials;
pub mod paths;
pub mod reveal;
pub mod rng;
pub mod scroll;
pub mod site;
pub mod storage;
pub mod theme;

pub use announcer::Announcer;
pub use error::WebError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    bootstrap::run();
}

/// Page-script hook for updating a certification card. Returns the clamped percentage.
///
/// # Errors
/// Throws when no card carries the given `data-certificate-id`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = updateCertificateProgress)]
pub fn update_certificate_progress(id: &str, pct: f64) -> Result<u8, JsValue> {
    certificates::update_certificate_progress(id, pct).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = refreshStars)]
pub fn refresh_stars() -> usize {
    decor::refresh_stars()
}
