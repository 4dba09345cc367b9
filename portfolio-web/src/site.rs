use portfolio_core::SiteConfig;

const SITE_JSON: &str = include_str!("../static/site.json");

/// Site settings bundled at compile time, or the defaults when they do not parse.
#[must_use]
pub fn load() -> SiteConfig {
    SiteConfig::from_json(SITE_JSON).unwrap_or_else(|err| {
        log::warn!("static/site.json did not parse, using defaults: {err}");
        SiteConfig::default()
    })
}
