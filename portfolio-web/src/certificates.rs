//! Certificate preview modal and progress cards on the about page.

use std::cell::Cell;
use std::rc::Rc;

use portfolio_core::CertificateRegistry;
use portfolio_core::certificates::{clamp_progress, is_dev_host};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::dom;
use crate::error::WebError;

struct Modal {
    root: HtmlElement,
    image: HtmlImageElement,
    open: Rc<Cell<bool>>,
}

impl Modal {
    fn find() -> Result<Self, WebError> {
        let root = dom::require_id("certificateModal")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::MissingElement("certificateModal"))?;
        let image = dom::require_id("certificateImage")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| WebError::MissingElement("certificateImage"))?;
        Ok(Self {
            root,
            image,
            open: Rc::new(Cell::new(false)),
        })
    }

    fn show(&self, id: &str, path: &str) {
        let style = self.image.style();
        let _ = style.set_property("opacity", "0");
        let image = self.image.clone();
        let on_load = Closure::once_into_js(move || {
            dom::set_timeout(50, move || {
                let style = image.style();
                let _ = style.set_property("transition", "opacity 0.3s ease");
                let _ = style.set_property("opacity", "1");
            });
        });
        self.image.set_onload(Some(on_load.unchecked_ref()));
        self.image.set_src(path);
        self.image.set_alt(&CertificateRegistry::alt_text(id));
        let _ = self.root.class_list().add_1("active");
        dom::set_body_scroll_locked(true);
        self.open.set(true);
    }

    fn close(root: &HtmlElement, open: &Cell<bool>) {
        let _ = root.class_list().remove_1("active");
        dom::set_body_scroll_locked(false);
        open.set(false);
    }
}

/// Open the modal from `[data-certificate]` triggers and close it on Escape,
/// the close button, or a click on the backdrop.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when the modal markup is absent.
pub fn wire_modal() -> Result<(), WebError> {
    let modal = Rc::new(Modal::find()?);
    let registry = Rc::new(CertificateRegistry::default());

    for trigger in dom::query_all("[data-certificate]") {
        let (modal, registry, el) = (modal.clone(), registry.clone(), trigger.clone());
        dom::listen(&trigger, "click", move |event| {
            let id = el.get_attribute("data-certificate").unwrap_or_default();
            match registry.image_for(&id) {
                Some(path) => {
                    event.prevent_default();
                    modal.show(&id, path);
                }
                None => log::error!("certificate image not found for id `{id}`"),
            }
        })?;
    }

    if let Some(close) = dom::query(&modal.root, ".certificate-modal-close") {
        let (root, open) = (modal.root.clone(), modal.open.clone());
        dom::listen(&close, "click", move |_| Modal::close(&root, &open))?;
    }

    {
        let (root, open) = (modal.root.clone(), modal.open.clone());
        dom::listen(&modal.root, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                .is_some_and(|t| t == root);
            if on_backdrop {
                Modal::close(&root, &open);
            }
        })?;
    }

    if let Some(doc) = dom::document() {
        let (root, open) = (modal.root.clone(), modal.open.clone());
        let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if open.get() && event.key() == "Escape" {
                Modal::close(&root, &open);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        doc.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
            .map_err(|e| WebError::js(&e))?;
        on_key.forget();
    }
    Ok(())
}

/// Set a certificate card's progress bar and label.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when no card carries `data-certificate-id="{id}"`.
pub fn update_certificate_progress(id: &str, pct: f64) -> Result<u8, WebError> {
    let card = dom::document()
        .and_then(|doc| {
            doc.query_selector(&format!("[data-certificate-id=\"{id}\"]"))
                .ok()
                .flatten()
        })
        .ok_or(WebError::MissingElement("[data-certificate-id]"))?;
    let pct = clamp_progress(pct);
    if let Some(fill) = dom::query(&card, ".progress-fill")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = fill.style().set_property("width", &format!("{pct}%"));
    }
    if let Some(label) = dom::query(&card, ".progress-percentage") {
        label.set_text_content(Some(&format!("{pct}%")));
    }
    Ok(pct)
}

/// On a local dev server, warn about registry entries whose image is missing.
pub fn check_images_on_dev_host() {
    let host = dom::window()
        .and_then(|win| win.location().hostname().ok())
        .unwrap_or_default();
    if !is_dev_host(&host) {
        return;
    }
    wasm_bindgen_futures::spawn_local(async {
        for (id, path) in CertificateRegistry::default().entries() {
            let exists = dom::fetch_response(path)
                .await
                .is_ok_and(|resp| resp.ok());
            if !exists {
                log::warn!("certificate image missing: {path} (id: {id})");
            }
        }
    });
}
