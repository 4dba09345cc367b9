use portfolio_core::SlideView;
use portfolio_web::components::image_slider::{ImageSlider, ImageSliderProps};
use portfolio_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

fn slides() -> Vec<SlideView> {
    ["One", "Two", "Three"]
        .into_iter()
        .map(|title| SlideView {
            image: format!("/img/{title}.png"),
            title: title.to_string(),
            description: String::new(),
        })
        .collect()
}

fn active_title() -> String {
    dom::document()
        .and_then(|doc| doc.query_selector(".slide.active h3").ok().flatten())
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn click(selector: &str) {
    dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("clickable")
        .click();
}

#[wasm_bindgen_test]
async fn buttons_and_dots_move_the_active_slide() {
    let root = crate::mount_point("slider-host");
    Renderer::<ImageSlider>::with_root_and_props(root, ImageSliderProps { slides: slides() }).render();
    dom::sleep_ms(20).await.expect("render");
    assert_eq!(active_title(), "One");

    click(".slider-btn.prev");
    dom::sleep_ms(20).await.expect("render");
    assert_eq!(active_title(), "Three");

    click(".slider-dots .dot:nth-child(2)");
    dom::sleep_ms(20).await.expect("render");
    assert_eq!(active_title(), "Two");
    assert_eq!(dom::query_all(".dot[aria-current=\"true\"]").len(), 1);
}
