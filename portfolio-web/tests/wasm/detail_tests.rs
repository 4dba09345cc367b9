use portfolio_core::{LookupError, SiteConfig};
use portfolio_web::components::detail_page::{DetailState, resolve};
use wasm_bindgen_test::*;

fn unreachable_catalog() -> SiteConfig {
    SiteConfig {
        data_url: "/no-such-catalog.json".to_string(),
        ..SiteConfig::default()
    }
}

#[wasm_bindgen_test]
async fn missing_slug_is_not_found_without_a_fetch() {
    let config = unreachable_catalog();
    // A fetch would fail and yield `Failed` instead.
    assert_eq!(resolve(&config, None).await, DetailState::NotFound(LookupError::NoSlug));
    assert_eq!(
        resolve(&config, Some(String::new())).await,
        DetailState::NotFound(LookupError::NoSlug)
    );
    assert_eq!(resolve(&config, Some("budget-buddy".into())).await, DetailState::Failed);
}
