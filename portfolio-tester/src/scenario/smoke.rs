use anyhow::{Context, Result, ensure};
use portfolio_core::Theme;
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx, wait_for_elements};

const READ_THEME: &str = "return document.documentElement.getAttribute('data-theme');";
const READ_STORED: &str = "return window.localStorage.getItem(arguments[0]);";

pub struct SmokeScenario;

async fn current_theme(driver: &WebDriver) -> Result<Theme> {
    let ret = driver.execute(READ_THEME, vec![]).await?;
    let raw = ret.json().as_str().unwrap_or_default().to_string();
    raw.parse::<Theme>()
        .map_err(|()| anyhow::anyhow!("unexpected data-theme value {raw:?}"))
}

async fn stored_theme(driver: &WebDriver, key: &str) -> Result<Option<String>> {
    let ret = driver
        .execute(READ_STORED, vec![serde_json::Value::from(key)])
        .await?;
    Ok(ret.json().as_str().map(str::to_string))
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.url("/")).await?;

        wait_for_elements(driver, "#header .header", |found| !found.is_empty())
            .await
            .context("header partial was not injected")?;
        wait_for_elements(driver, "#footer .footer", |found| !found.is_empty())
            .await
            .context("footer partial was not injected")?;
        let links = driver.find_all(By::Css("#navMenu .nav-link")).await?;
        ensure!(!links.is_empty(), "navigation has no links");
        ctx.note(&format!("🧭 Header injected with {} nav links", links.len()));

        let before = current_theme(driver).await?;
        let toggle = driver.find(By::Id("themeToggle")).await?;

        toggle.click().await?;
        let flipped = current_theme(driver).await?;
        ensure!(
            flipped == before.toggled(),
            "theme toggle left {} in place",
            before.as_str()
        );
        let stored = stored_theme(driver, &ctx.site.theme_key).await?;
        ensure!(
            stored.as_deref() == Some(flipped.as_str()),
            "stored theme {stored:?} does not match {}",
            flipped.as_str()
        );

        toggle.click().await?;
        let restored = current_theme(driver).await?;
        ensure!(restored == before, "second toggle did not restore {}", before.as_str());
        ctx.note(&format!(
            "🌓 Theme round trip {} -> {} -> {}",
            before.as_str(),
            flipped.as_str(),
            restored.as_str()
        ));

        Ok(())
    }
}
