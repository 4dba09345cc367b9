use portfolio_web::dom;
use portfolio_web::reveal::{self, PENDING_ATTR};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn refresh_observes_each_element_once() {
    let root = crate::mount_point("reveal-host");
    // Far below the fold so nothing intersects during the test.
    root.set_inner_html(
        r#"<div style="margin-top: 5000px"><p data-animate id="reveal-first">a</p></div>"#,
    );

    let first = reveal::observe_animations().expect("observer");
    assert!(first >= 1);
    let el = dom::require_id("reveal-first").expect("element");
    assert!(el.has_attribute(PENDING_ATTR));

    assert_eq!(reveal::observe_animations().expect("observer"), 0);

    let extra = dom::document()
        .and_then(|doc| doc.create_element("p").ok())
        .expect("element");
    extra.set_attribute("data-animate", "").expect("attr");
    root.append_child(&extra).expect("append");
    assert_eq!(reveal::observe_animations().expect("observer"), 1);
    assert_eq!(reveal::observe_animations().expect("observer"), 0);
}
