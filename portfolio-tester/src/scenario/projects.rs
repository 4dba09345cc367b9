use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx, attr, texts, wait_for_elements};

const CARD: &str = "#projectsContainer .project-card";
const CARD_TITLE: &str = "#projectsContainer .project-card-title";

pub struct ProjectsScenario;

async fn click_filter(driver: &WebDriver, filter: &str) -> Result<()> {
    let button = driver
        .find(By::Css(format!("#projectFilters [data-filter='{filter}']")))
        .await
        .with_context(|| format!("no {filter} filter button"))?;
    button.click().await?;
    let pressed = format!("#projectFilters [data-filter='{filter}'][aria-pressed='true']");
    wait_for_elements(driver, &pressed, |found| found.len() == 1)
        .await
        .with_context(|| format!("{filter} filter is not marked pressed"))?;
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for ProjectsScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.url(&ctx.site.listing_url)).await?;

        let cards = wait_for_elements(driver, CARD, |found| !found.is_empty())
            .await
            .context("no project cards rendered")?;
        let total = cards.len();
        let order = texts(&driver.find_all(By::Css(CARD_TITLE)).await?).await?;
        ctx.note(&format!("🗂️  {total} cards: {}", order.join(", ")));

        let mut expected = 0;
        for card in &cards {
            if attr(card, "data-featured").await? == "true" {
                expected += 1;
            }
        }

        click_filter(driver, "featured").await?;
        let featured = wait_for_elements(driver, CARD, |found| found.len() == expected)
            .await
            .with_context(|| format!("featured filter should show {expected} of {total}"))?;
        for card in &featured {
            ensure!(
                attr(card, "data-featured").await? == "true",
                "featured filter kept a non-featured card"
            );
        }
        ctx.note(&format!("⭐ Featured filter shows {}", featured.len()));

        click_filter(driver, "all").await?;
        wait_for_elements(driver, CARD, |found| found.len() == total)
            .await
            .context("all filter did not restore every card")?;

        driver.refresh().await?;
        wait_for_elements(driver, CARD, |found| found.len() == total).await?;
        let reloaded = texts(&driver.find_all(By::Css(CARD_TITLE)).await?).await?;
        ensure!(
            reloaded == order,
            "order changed across reload: {order:?} vs {reloaded:?}"
        );

        Ok(())
    }
}
