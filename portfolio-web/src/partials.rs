//! Shared header and footer markup fetched into `#header` / `#footer`.

use portfolio_core::SiteConfig;

use crate::announcer::Announcer;
use crate::error::WebError;
use crate::{dom, nav, paths, scroll, theme};

pub const LOAD_ERROR: &str = "Unable to load site navigation. Please refresh the page.";

/// Header and footer HTML, fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partials {
    pub header: String,
    pub footer: String,
}

impl Partials {
    /// Fetch both partials. Either one failing fails the pair.
    ///
    /// # Errors
    /// Returns the first fetch error, including non-success HTTP statuses.
    #[allow(clippy::future_not_send)]
    pub async fn fetch(config: &SiteConfig) -> Result<Self, WebError> {
        let header = dom::fetch_text(&paths::site_path(&config.header_partial_url)).await?;
        let footer = dom::fetch_text(&paths::site_path(&config.footer_partial_url)).await?;
        Ok(Self { header, footer })
    }

    /// Write the markup into the page.
    ///
    /// # Errors
    /// Returns [`WebError::MissingElement`] when a placeholder is absent.
    pub fn inject(&self) -> Result<(), WebError> {
        let header = dom::require_id("header")?;
        let footer = dom::require_id("footer")?;
        header.set_inner_html(&self.header);
        footer.set_inner_html(&self.footer);
        Ok(())
    }
}

fn show_load_error() {
    if let Ok(header) = dom::require_id("header") {
        header.set_inner_html("");
        if let Some(doc) = dom::document()
            && let Ok(message) = doc.create_element("p")
        {
            message.set_class_name("partials-error");
            let _ = message.set_attribute("role", "alert");
            message.set_text_content(Some(LOAD_ERROR));
            let _ = header.append_child(&message);
        }
    }
}

fn wire_header(config: &SiteConfig, announcer: &Announcer) {
    if let Err(err) = nav::wire_mobile_menu() {
        log::debug!("mobile menu not wired: {err}");
    }
    nav::highlight_active_link();
    if let Err(err) = scroll::wire_header_scroll() {
        log::debug!("header scroll not wired: {err}");
    }
    if let Err(err) = theme::wire_toggle(config, announcer) {
        log::debug!("theme toggle not wired: {err}");
    }
}

/// Fetch and inject the partials, then wire the header controls they contain.
///
/// Pages without `#header` skip the fetch entirely.
///
/// # Errors
/// Returns [`WebError::MissingElement`] without `#header`, or the fetch error
/// after rendering [`LOAD_ERROR`] into the header.
#[allow(clippy::future_not_send)]
pub async fn load(config: &SiteConfig, announcer: &Announcer) -> Result<(), WebError> {
    dom::require_id("header")?;
    let partials = match Partials::fetch(config).await {
        Ok(partials) => partials,
        Err(err) => {
            log::error!("error loading partials: {err}");
            show_load_error();
            return Err(err);
        }
    };
    partials.inject()?;
    wire_header(config, announcer);
    log::debug!("partials loaded and header wired");
    Ok(())
}
