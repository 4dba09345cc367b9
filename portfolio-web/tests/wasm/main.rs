#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod announcer_tests;
mod detail_tests;
mod form_tests;
mod partials_tests;
mod reveal_tests;
mod slider_tests;
mod theme_tests;

pub fn mount_point(id: &str) -> web_sys::Element {
    let doc = portfolio_web::dom::document().expect("document");
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.set_inner_html("");
        return existing;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}
