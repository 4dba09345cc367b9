use portfolio_core::{SiteConfig, Theme, ThemePreferences, theme_message};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, KeyboardEvent, MediaQueryListEvent};

use crate::announcer::Announcer;
use crate::dom;
use crate::error::WebError;
use crate::storage::BrowserStore;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const NO_TRANSITION: &str = "no-transition";

fn root() -> Option<Element> {
    dom::document().and_then(|doc| doc.document_element())
}

fn preferences(config: &SiteConfig) -> ThemePreferences<BrowserStore> {
    ThemePreferences::new(BrowserStore::local(), config.theme_key.clone())
}

#[must_use]
pub fn os_prefers_dark() -> bool {
    dom::window()
        .and_then(|win| win.match_media(DARK_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

pub fn apply(theme: Theme) {
    if let Some(html) = root() {
        let _ = html.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme currently applied to `<html>`.
#[must_use]
pub fn current() -> Theme {
    root()
        .and_then(|html| html.get_attribute("data-theme"))
        .and_then(|value| value.parse().ok())
        .unwrap_or(Theme::Light)
}

/// Apply the effective theme without animating the switch.
pub fn init(config: &SiteConfig) {
    let Some(html) = root() else {
        return;
    };
    let _ = html.class_list().add_1(NO_TRANSITION);
    apply(preferences(config).effective(os_prefers_dark()));
    dom::set_timeout(config.timings.theme_transition_ms, move || {
        let _ = html.class_list().remove_1(NO_TRANSITION);
    });
}

/// Flip the theme, persist it and announce the result.
pub fn toggle(config: &SiteConfig, announcer: &Announcer) -> Theme {
    let current = current();
    let next = match preferences(config).toggle(current) {
        Ok(next) => next,
        Err(err) => {
            log::warn!("theme preference not saved: {err}");
            current.toggled()
        }
    };
    apply(next);
    announcer.polite(theme_message(next));
    next
}

/// Wire `#themeToggle` for click, Enter and Space.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when the header has no toggle button.
pub fn wire_toggle(config: &SiteConfig, announcer: &Announcer) -> Result<(), WebError> {
    let button = dom::require_id("themeToggle")?;

    let on_click = {
        let config = config.clone();
        let announcer = announcer.clone();
        Closure::wrap(Box::new(move || {
            toggle(&config, &announcer);
        }) as Box<dyn FnMut()>)
    };
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| WebError::js(&e))?;
    on_click.forget();

    let on_key = {
        let config = config.clone();
        let announcer = announcer.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                toggle(&config, &announcer);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    button
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .map_err(|e| WebError::js(&e))?;
    on_key.forget();
    Ok(())
}

/// Follow OS scheme changes while the visitor has no explicit choice.
///
/// # Errors
/// Returns an error when `matchMedia` is unavailable.
pub fn listen_system_changes(config: &SiteConfig) -> Result<(), WebError> {
    let mql = dom::window()
        .and_then(|win| win.match_media(DARK_QUERY).ok().flatten())
        .ok_or(WebError::Unavailable("matchMedia"))?;
    let config = config.clone();
    let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
        if let Some(theme) = preferences(&config).on_system_change(event.matches()) {
            log::debug!("following system theme: {}", theme.as_str());
            apply(theme);
        }
    }) as Box<dyn FnMut(MediaQueryListEvent)>);
    mql.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|e| WebError::js(&e))?;
    on_change.forget();
    Ok(())
}
