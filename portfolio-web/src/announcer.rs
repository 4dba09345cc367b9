//! Screen-reader announcements through a single live region.
//!
//! Each announcement clears the region, writes the message a moment later so
//! assistive technology notices the change, then clears it again. A newer
//! announcement cancels whatever the previous one still had scheduled.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{Priority, Timings};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom;

struct Inner {
    region: Option<HtmlElement>,
    timings: Timings,
    pending: RefCell<Vec<i32>>,
}

/// Handle to the live region. Cheap to clone; clones share pending timers.
#[derive(Clone)]
pub struct Announcer {
    inner: Rc<Inner>,
}

impl PartialEq for Announcer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Announcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Announcer")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Announcer {
    #[must_use]
    pub fn new(region: Option<HtmlElement>, timings: Timings) -> Self {
        Self {
            inner: Rc::new(Inner {
                region,
                timings,
                pending: RefCell::new(Vec::new()),
            }),
        }
    }

    /// An announcer with no region; every call is a no-op.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(None, Timings::default())
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.region.is_some()
    }

    pub fn polite(&self, message: impl Into<String>) {
        self.announce(message, Priority::Polite);
    }

    pub fn assertive(&self, message: impl Into<String>) {
        self.announce(message, Priority::Assertive);
    }

    pub fn announce(&self, message: impl Into<String>, priority: Priority) {
        let Some(region) = self.inner.region.clone() else {
            return;
        };
        let message = message.into();
        for handle in self.inner.pending.borrow_mut().drain(..) {
            dom::clear_timeout(handle);
        }
        let _ = region.set_attribute("aria-live", priority.as_str());
        region.set_text_content(Some(""));

        let Timings {
            announce_set_ms,
            announce_clear_ms,
            ..
        } = self.inner.timings;
        let writer = region.clone();
        let set = dom::set_timeout(announce_set_ms, move || {
            writer.set_text_content(Some(&message));
        });
        let clear = dom::set_timeout(announce_set_ms.saturating_add(announce_clear_ms), move || {
            region.set_text_content(Some(""));
        });
        self.inner
            .pending
            .borrow_mut()
            .extend(set.into_iter().chain(clear));
    }
}

/// Find the live region by id, creating a visually hidden one when the page has none.
#[must_use]
pub fn ensure_live_region(id: &str) -> Option<HtmlElement> {
    let doc = dom::document()?;
    if let Some(existing) = doc.get_element_by_id(id) {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let region = doc
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    region.set_id(id);
    region.set_class_name("sr-only");
    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", Priority::Polite.as_str());
    let _ = region.set_attribute("aria-atomic", "true");
    doc.body()?.append_child(&region).ok()?;
    log::debug!("created live region #{id}");
    Some(region)
}

/// The announcer provided by the nearest `ContextProvider`, or a detached one.
#[hook]
pub fn use_announcer() -> Announcer {
    use_context::<Announcer>().unwrap_or_else(Announcer::detached)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_announcer_is_inert() {
        let announcer = Announcer::detached();
        assert!(!announcer.is_attached());
        announcer.polite("nothing happens");
        announcer.assertive("still nothing");
    }

    #[test]
    fn clones_compare_equal() {
        let a = Announcer::detached();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Announcer::detached());
    }
}
