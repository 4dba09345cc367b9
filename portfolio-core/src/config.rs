use serde::{Deserialize, Serialize};

/// Site-wide settings. Every field has a default so a partial `site.json`
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub data_url: String,
    pub header_partial_url: String,
    pub footer_partial_url: String,
    pub listing_url: String,
    pub detail_url: String,
    pub form_endpoint: String,
    pub honeypot_field: String,
    pub theme_key: String,
    pub session_order_key: String,
    pub live_region_id: String,
    /// Whether the listing offers a Shuffle button next to the filters.
    pub shuffle_enabled: bool,
    /// Maximum characters of a card description before it is cut with an ellipsis.
    pub description_limit: usize,
    pub mobile_breakpoint_px: u32,
    pub timings: Timings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub announce_set_ms: u32,
    pub announce_clear_ms: u32,
    pub theme_transition_ms: u32,
    pub resize_debounce_ms: u32,
    pub toast_lifetime_ms: u32,
    pub toast_fade_ms: u32,
    pub progress_animate_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            announce_set_ms: 100,
            announce_clear_ms: 1000,
            theme_transition_ms: 100,
            resize_debounce_ms: 250,
            toast_lifetime_ms: 5000,
            toast_fade_ms: 300,
            progress_animate_ms: 100,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: String::from("Jerico Oliver"),
            data_url: String::from("/data/projects.json"),
            header_partial_url: String::from("/partials/header.html"),
            footer_partial_url: String::from("/partials/footer.html"),
            listing_url: String::from("/projects.html"),
            detail_url: String::from("/project.html"),
            form_endpoint: String::from("https://formspree.io/f/mrbwyden"),
            honeypot_field: String::from("honeypot"),
            theme_key: String::from("theme"),
            session_order_key: String::from("projectsOrder"),
            live_region_id: String::from("sr-announcer"),
            shuffle_enabled: true,
            description_limit: 140,
            mobile_breakpoint_px: 768,
            timings: Timings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a config document, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Case-study URL for a project slug.
    #[must_use]
    pub fn detail_href(&self, slug: &str) -> String {
        format!("{}?id={slug}", self.detail_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_keep_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "shuffle_enabled": false, "timings": { "announce_clear_ms": 2000 } }"#)
            .unwrap();
        assert!(!cfg.shuffle_enabled);
        assert_eq!(cfg.timings.announce_clear_ms, 2000);
        assert_eq!(cfg.timings.announce_set_ms, 100);
        assert_eq!(cfg.data_url, "/data/projects.json");
        assert_eq!(cfg.honeypot_field, "honeypot");
    }

    #[test]
    fn detail_href_uses_id_parameter() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.detail_href("task-flow"), "/project.html?id=task-flow");
    }

    #[test]
    fn malformed_documents_error() {
        assert!(SiteConfig::from_json("{ \"shuffle_enabled\": \"yes\" }").is_err());
    }
}
