use portfolio_core::SiteConfig;
use portfolio_web::announcer::Announcer;
use portfolio_web::dom;
use portfolio_web::partials::{self, LOAD_ERROR, Partials};
use wasm_bindgen_test::*;

const HEADER: &str = "data:text/html,<nav class=\"navbar\">Home</nav>";
const FOOTER: &str = "data:text/html,<p class=\"copyright\">Footer</p>";
const MISSING: &str = "/no-such-partial.html";

fn config(header: &str, footer: &str) -> SiteConfig {
    SiteConfig {
        header_partial_url: header.to_string(),
        footer_partial_url: footer.to_string(),
        ..SiteConfig::default()
    }
}

fn placeholders() -> (web_sys::Element, web_sys::Element) {
    (crate::mount_point("header"), crate::mount_point("footer"))
}

#[wasm_bindgen_test]
async fn both_partials_are_injected() {
    let (header, footer) = placeholders();
    partials::load(&config(HEADER, FOOTER), &Announcer::detached())
        .await
        .expect("partials load");
    assert!(dom::query(&header, ".navbar").is_some());
    assert!(dom::query(&footer, ".copyright").is_some());
    assert!(dom::query(&header, ".partials-error").is_none());
}

#[wasm_bindgen_test]
async fn failing_footer_aborts_both_and_shows_an_error() {
    let (header, footer) = placeholders();
    let result = partials::load(&config(HEADER, MISSING), &Announcer::detached()).await;
    assert!(result.is_err());

    let error = dom::query(&header, ".partials-error").expect("error message");
    assert_eq!(error.get_attribute("role").as_deref(), Some("alert"));
    assert_eq!(error.text_content().unwrap_or_default(), LOAD_ERROR);
    assert!(dom::query(&header, ".navbar").is_none());
    assert_eq!(footer.inner_html(), "");
}

#[wasm_bindgen_test]
async fn failing_header_fails_the_pair() {
    let _ = placeholders();
    assert!(Partials::fetch(&config(MISSING, FOOTER)).await.is_err());
}
