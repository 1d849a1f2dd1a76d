//! Browser scenarios exercising the accessibility panel on the live site.

use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use thirtyfour::prelude::*;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub verbose: bool,
}

#[async_trait]
pub trait BrowserScenario: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

#[must_use]
pub fn find_browser_scenario(name: &str) -> Option<Box<dyn BrowserScenario>> {
    match name.to_lowercase().as_str() {
        "panel-smoke" | "smoke" => Some(Box::new(PanelSmoke)),
        "font-controls" | "font-sweep" => Some(Box::new(FontControls)),
        "mode-exclusivity" | "contrast-exclusion" => Some(Box::new(ModeExclusivity)),
        "reset-all" | "reset-roundtrip" => Some(Box::new(ResetAll)),
        _ => None,
    }
}

#[must_use]
pub fn list_browser_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("panel-smoke", "Open and dismiss the accessibility panel"),
        ("font-controls", "Font stepping applies and persists"),
        ("mode-exclusivity", "Dark mode and high contrast displace each other"),
        ("reset-all", "Reset clears every preference and the stored record"),
    ]
}

async fn open_site(driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
    if ctx.verbose {
        log::info!("opening {}", ctx.base_url);
    }
    driver
        .goto(&ctx.base_url)
        .await
        .with_context(|| format!("opening {}", ctx.base_url))?;
    driver
        .execute("window.localStorage.removeItem('vitrine.a11y')", vec![])
        .await
        .context("clearing stored preferences")?;
    driver.refresh().await.context("reloading with a clean slate")?;
    Ok(())
}

async fn body_class_contains(driver: &WebDriver, class: &str) -> Result<bool> {
    let ret = driver
        .execute(
            "return document.body.classList.contains(arguments[0])",
            vec![class.into()],
        )
        .await?;
    Ok(ret.json().as_bool().unwrap_or(false))
}

async fn panel_is_open(driver: &WebDriver) -> Result<bool> {
    let ret = driver
        .execute(
            "var p = document.getElementById('accessibility-panel');\
             return !!p && p.classList.contains('active')",
            vec![],
        )
        .await?;
    Ok(ret.json().as_bool().unwrap_or(false))
}

async fn root_font_size(driver: &WebDriver) -> Result<String> {
    let ret = driver
        .execute("return document.documentElement.style.fontSize", vec![])
        .await?;
    Ok(ret.json().as_str().unwrap_or_default().to_string())
}

async fn stored_record(driver: &WebDriver) -> Result<Option<String>> {
    let ret = driver
        .execute("return window.localStorage.getItem('vitrine.a11y')", vec![])
        .await?;
    Ok(ret.json().as_str().map(ToString::to_string))
}

async fn press_escape(driver: &WebDriver) -> Result<()> {
    driver
        .execute(
            "document.dispatchEvent(new KeyboardEvent('keydown', {key: 'Escape', bubbles: true}))",
            vec![],
        )
        .await?;
    Ok(())
}

struct PanelSmoke;

#[async_trait]
impl BrowserScenario for PanelSmoke {
    fn name(&self) -> &'static str {
        "panel-smoke"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_site(driver, ctx).await?;
        ensure!(!panel_is_open(driver).await?, "panel must start closed");

        driver.find(By::Id("accessibility-btn")).await?.click().await?;
        ensure!(panel_is_open(driver).await?, "toggle should open the panel");

        driver.find(By::Id("close-accessibility")).await?.click().await?;
        ensure!(!panel_is_open(driver).await?, "close control should dismiss");

        driver.find(By::Id("accessibility-btn")).await?.click().await?;
        press_escape(driver).await?;
        ensure!(!panel_is_open(driver).await?, "Escape should dismiss");
        Ok(())
    }
}

struct FontControls;

#[async_trait]
impl BrowserScenario for FontControls {
    fn name(&self) -> &'static str {
        "font-controls"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_site(driver, ctx).await?;
        driver.find(By::Id("accessibility-btn")).await?.click().await?;

        let increase = driver.find(By::Id("increase-font")).await?;
        increase.click().await?;
        increase.click().await?;
        ensure!(
            root_font_size(driver).await? == "120%",
            "two increases should land on 120%"
        );

        let record = stored_record(driver).await?.context("record should exist")?;
        ensure!(
            record.contains("\"font_size_percent\":120"),
            "stored record should hold 120, got {record}"
        );

        driver.find(By::Id("reset-font")).await?.click().await?;
        ensure!(
            root_font_size(driver).await? == "100%",
            "font reset should land on 100%"
        );
        Ok(())
    }
}

struct ModeExclusivity;

#[async_trait]
impl BrowserScenario for ModeExclusivity {
    fn name(&self) -> &'static str {
        "mode-exclusivity"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_site(driver, ctx).await?;
        driver.find(By::Id("accessibility-btn")).await?.click().await?;

        driver.find(By::Id("dark-mode")).await?.click().await?;
        ensure!(
            body_class_contains(driver, "dark-mode").await?,
            "dark mode marker should be set"
        );

        driver.find(By::Id("high-contrast")).await?.click().await?;
        ensure!(
            body_class_contains(driver, "high-contrast").await?,
            "high contrast marker should be set"
        );
        ensure!(
            !body_class_contains(driver, "dark-mode").await?,
            "dark mode marker should be displaced"
        );

        let dark_checked = driver
            .find(By::Id("dark-mode"))
            .await?
            .prop("checked")
            .await?;
        ensure!(
            dark_checked.as_deref() != Some("true"),
            "dark mode control should be unchecked"
        );
        Ok(())
    }
}

struct ResetAll;

#[async_trait]
impl BrowserScenario for ResetAll {
    fn name(&self) -> &'static str {
        "reset-all"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_site(driver, ctx).await?;
        driver.find(By::Id("accessibility-btn")).await?.click().await?;
        driver.find(By::Id("highlight-links")).await?.click().await?;
        driver.find(By::Id("increase-font")).await?.click().await?;

        driver.find(By::Id("reset-accessibility")).await?.click().await?;
        // Reset raises a blocking confirmation.
        driver.accept_alert().await.context("accepting reset alert")?;

        ensure!(
            !body_class_contains(driver, "highlight-links").await?,
            "markers should be cleared"
        );
        ensure!(
            root_font_size(driver).await? == "100%",
            "font should return to 100%"
        );
        ensure!(
            stored_record(driver).await?.is_none(),
            "stored record should be deleted"
        );
        Ok(())
    }
}
