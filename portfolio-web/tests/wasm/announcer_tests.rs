use portfolio_core::Timings;
use portfolio_web::announcer::{Announcer, ensure_live_region};
use portfolio_web::dom;
use wasm_bindgen_test::*;

fn fast_timings() -> Timings {
    Timings {
        announce_set_ms: 10,
        announce_clear_ms: 60,
        ..Timings::default()
    }
}

#[wasm_bindgen_test]
fn live_region_is_created_once() {
    let first = ensure_live_region("test-announcer").expect("region");
    let second = ensure_live_region("test-announcer").expect("region");
    assert_eq!(first, second);
    assert_eq!(first.get_attribute("role").as_deref(), Some("status"));
    assert!(first.class_list().contains("sr-only"));
}

#[wasm_bindgen_test]
async fn message_is_set_then_cleared() {
    let region = ensure_live_region("test-announcer-cycle").expect("region");
    let announcer = Announcer::new(Some(region.clone()), fast_timings());
    announcer.assertive("Loaded 3 projects");
    assert_eq!(region.get_attribute("aria-live").as_deref(), Some("assertive"));
    assert_eq!(region.text_content().unwrap_or_default(), "");

    dom::sleep_ms(30).await.expect("sleep");
    assert_eq!(region.text_content().unwrap_or_default(), "Loaded 3 projects");

    dom::sleep_ms(80).await.expect("sleep");
    assert_eq!(region.text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
async fn newer_message_replaces_pending_one() {
    let region = ensure_live_region("test-announcer-replace").expect("region");
    let announcer = Announcer::new(Some(region.clone()), fast_timings());
    announcer.polite("first");
    announcer.polite("second");
    dom::sleep_ms(30).await.expect("sleep");
    assert_eq!(region.text_content().unwrap_or_default(), "second");
}
