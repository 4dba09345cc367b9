use anyhow::{Result, bail};
use portfolio_core::SiteConfig;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

use crate::util::page_url;

pub mod case_study;
pub mod contact;
pub mod projects;
pub mod smoke;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const POLL_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub site: SiteConfig,
    pub verbose: bool,
}

impl ScenarioCtx {
    pub fn url(&self, path: &str) -> String {
        page_url(&self.base_url, path)
    }

    pub fn note(&self, message: &str) {
        if self.verbose {
            println!("  {message}");
        }
    }
}

#[async_trait::async_trait]
pub trait BrowserScenario: Send + Sync {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", "Header partial injected, theme toggle round trip"),
    (
        "projects",
        "Cards render, featured filter, order stable across reload",
    ),
    ("case-study", "Missing slug, unknown slug and a valid case study"),
    ("contact", "Empty submit and short message are rejected inline"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn BrowserScenario>> {
    match name {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "projects" => Some(Box::new(projects::ProjectsScenario)),
        "case-study" => Some(Box::new(case_study::CaseStudyScenario)),
        "contact" => Some(Box::new(contact::ContactScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

pub fn scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|(key, _)| (*key).to_string()).collect()
}

/// Poll `selector` until `accept` is satisfied by the matching elements.
pub async fn wait_for_elements<F>(
    driver: &WebDriver,
    selector: &str,
    mut accept: F,
) -> Result<Vec<WebElement>>
where
    F: FnMut(&[WebElement]) -> bool + Send,
{
    let deadline = Instant::now() + POLL_TIMEOUT;
    loop {
        let found = driver.find_all(By::Css(selector)).await?;
        if accept(&found) {
            return Ok(found);
        }
        if Instant::now() >= deadline {
            bail!(
                "timed out waiting for {selector} (last saw {} elements)",
                found.len()
            );
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

pub async fn attr(element: &WebElement, name: &str) -> Result<String> {
    Ok(element.attr(name).await?.unwrap_or_default())
}

pub async fn texts(elements: &[WebElement]) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(elements.len());
    for element in elements {
        out.push(element.text().await?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, description) in list_scenarios() {
            assert!(get_scenario(key).is_some(), "{key} missing");
            assert!(!description.is_empty());
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn ctx_builds_page_urls() {
        let ctx = ScenarioCtx {
            base_url: "http://localhost:8080/".to_string(),
            site: SiteConfig::default(),
            verbose: false,
        };
        assert_eq!(
            ctx.url(&ctx.site.detail_href("budget-buddy")),
            "http://localhost:8080/project.html?id=budget-buddy"
        );
    }
}
