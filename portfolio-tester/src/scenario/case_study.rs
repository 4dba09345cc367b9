use anyhow::{Context, Result, ensure};
use portfolio_core::LookupError;
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx, attr, wait_for_elements};

const MISSING_SLUG: &str = "no-such-project-anywhere";

pub struct CaseStudyScenario;

async fn expect_not_found(driver: &WebDriver, url: &str, reason: &LookupError) -> Result<()> {
    driver.goto(url).await?;
    let heading = wait_for_elements(driver, "#projectContent h1", |found| !found.is_empty())
        .await
        .with_context(|| format!("nothing rendered for {url}"))?;
    let text = heading[0].text().await?;
    ensure!(text == "Project Not Found", "unexpected heading {text:?} for {url}");
    let body = driver.find(By::Css("#projectContent")).await?.text().await?;
    ensure!(
        body.contains(&reason.to_string()),
        "expected {reason:?} message for {url}"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for CaseStudyScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        expect_not_found(driver, &ctx.url(&ctx.site.detail_url), &LookupError::NoSlug).await?;
        ctx.note("🔎 Missing slug shows not-found");

        expect_not_found(
            driver,
            &ctx.url(&ctx.site.detail_href(MISSING_SLUG)),
            &LookupError::NotFound,
        )
        .await?;
        ctx.note("🔎 Unknown slug shows not-found");

        driver.goto(&ctx.url(&ctx.site.listing_url)).await?;
        let links = wait_for_elements(driver, ".project-card-study", |found| !found.is_empty())
            .await
            .context("listing offers no case-study links")?;
        let href = attr(&links[0], "href").await?;
        ensure!(!href.is_empty(), "case-study link has no href");

        driver.goto(&ctx.url(&href)).await?;
        let heading = wait_for_elements(driver, ".case-study-hero h1", |found| !found.is_empty())
            .await
            .with_context(|| format!("case study did not render for {href}"))?;
        let title = heading[0].text().await?;
        let page_title = driver.title().await?;
        ensure!(
            page_title.starts_with(&format!("{title} - Case Study")),
            "document title {page_title:?} not updated for {title:?}"
        );
        ctx.note(&format!("📖 Rendered case study {title:?}"));

        Ok(())
    }
}
