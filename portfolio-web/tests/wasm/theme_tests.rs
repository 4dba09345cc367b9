use portfolio_core::{KeyValueStore, SiteConfig, Theme};
use portfolio_web::announcer::Announcer;
use portfolio_web::storage::BrowserStore;
use portfolio_web::theme;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn toggling_twice_restores_theme_and_storage() {
    let config = SiteConfig {
        theme_key: "theme-test".into(),
        ..SiteConfig::default()
    };
    let store = BrowserStore::local();
    store.remove(&config.theme_key);
    theme::apply(Theme::Light);

    let announcer = Announcer::detached();
    assert_eq!(theme::toggle(&config, &announcer), Theme::Dark);
    assert_eq!(theme::current(), Theme::Dark);
    assert_eq!(store.get(&config.theme_key).as_deref(), Some("dark"));

    assert_eq!(theme::toggle(&config, &announcer), Theme::Light);
    assert_eq!(theme::current(), Theme::Light);
    assert_eq!(store.get(&config.theme_key).as_deref(), Some("light"));
    store.remove(&config.theme_key);
}
