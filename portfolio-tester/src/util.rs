use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

const STORAGE_SNAPSHOT: &str = r"
return {
    url: window.location.href,
    theme: document.documentElement.getAttribute('data-theme'),
    local: Object.assign({}, window.localStorage),
    session: Object.assign({}, window.sessionStorage)
};";

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Dump screenshot, DOM, storage and the error chain for a failed scenario.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let state = driver
        .execute(STORAGE_SNAPSHOT, vec![])
        .await
        .ok()
        .map(|ret| ret.json().clone());
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        state.as_ref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    state: Option<&serde_json::Value>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }

    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }

    if let Some(state_json) = state {
        let payload = serde_json::to_vec_pretty(state_json).unwrap_or_default();
        let _ = fs::write(dir.join("storage.json"), payload);
    }

    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Join a site path onto the base URL without doubling the slash.
pub fn page_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,projects,  contact ");
        assert_eq!(parts, vec!["smoke", "projects", "contact"]);
    }

    #[test]
    fn artifacts_dir_includes_key_segments() {
        let dir = artifacts_dir("target/out", "chrome", "smoke");
        assert!(dir.starts_with("target/out/chrome/smoke/"));
        assert_eq!(dir.rsplit('/').next().map(str::len), Some(15));
    }

    #[test]
    fn page_url_joins_single_slash() {
        assert_eq!(
            page_url("http://localhost:8080/", "/projects.html"),
            "http://localhost:8080/projects.html"
        );
        assert_eq!(
            page_url("http://localhost:8080", "project.html?id=x"),
            "http://localhost:8080/project.html?id=x"
        );
    }

    #[test]
    fn write_artifact_files_writes_expected_payloads() {
        let base = std::env::temp_dir().join(format!(
            "portfolio-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let state = json!({ "theme": "dark", "session": { "projectsOrder": "[1,2]" } });
        write_artifact_files(
            &base,
            Some(&[1, 2, 3]),
            Some("<html />"),
            Some(&state),
            "boom",
        )
        .expect("write artifacts");

        assert!(base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert!(base.join("storage.json").exists());
        assert_eq!(
            std::fs::read_to_string(base.join("error.txt")).expect("read"),
            "boom"
        );
    }
}
