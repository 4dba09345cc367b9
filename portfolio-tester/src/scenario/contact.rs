use anyhow::{Context, Result, ensure};
use portfolio_core::form::MIN_MESSAGE_LEN;
use thirtyfour::prelude::*;

use super::{BrowserScenario, ScenarioCtx, texts, wait_for_elements};

const ERRORS: &str = "#contactForm .error-message";

pub struct ContactScenario;

async fn submit(driver: &WebDriver) -> Result<()> {
    driver
        .find(By::Css("#contactForm button[type='submit']"))
        .await
        .context("contact form has no submit button")?
        .click()
        .await?;
    Ok(())
}

async fn fill(driver: &WebDriver, id: &str, value: &str) -> Result<()> {
    let field = driver.find(By::Id(id)).await?;
    field.clear().await?;
    field.send_keys(value).await?;
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for ContactScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.url("/contact.html")).await?;
        driver.find(By::Id("contactForm")).await?;

        submit(driver).await?;
        let errors = wait_for_elements(driver, ERRORS, |found| found.len() == 3)
            .await
            .context("empty submit should flag name, email and message")?;
        ctx.note(&format!("🚫 Empty submit: {:?}", texts(&errors).await?));

        fill(driver, "name", "Ada Lovelace").await?;
        fill(driver, "email", "ada@example.com").await?;
        fill(driver, "message", "too short").await?;
        submit(driver).await?;

        let errors = wait_for_elements(driver, ERRORS, |found| found.len() == 1)
            .await
            .context("short message should leave exactly one field error")?;
        let message = errors[0].text().await?;
        ensure!(
            message.contains(&MIN_MESSAGE_LEN.to_string()),
            "short-message error does not mention the minimum: {message:?}"
        );
        ctx.note(&format!("🚫 Short message: {message:?}"));

        Ok(())
    }
}
