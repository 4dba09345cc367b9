use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub browser: String,
    pub passed: bool,
    #[serde(rename = "duration_ms", serialize_with = "as_millis")]
    pub duration: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<String>,
}

fn as_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u128(duration.as_millis())
}

fn pass_counts(results: &[ScenarioOutcome]) -> (usize, usize) {
    let passed = results.iter().filter(|r| r.passed).count();
    (passed, results.len() - passed)
}

pub fn generate_json_report<W: Write>(out: &mut W, results: &[ScenarioOutcome]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(out: &mut W, results: &[ScenarioOutcome]) -> Result<()> {
    let (passed, failed) = pass_counts(results);
    writeln!(out, "# Portfolio Browser Test Results\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total runs**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {failed}\n")?;
    writeln!(out, "## Runs\n")?;
    writeln!(out, "| | Browser | Scenario | Time |")?;
    writeln!(out, "|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {status} | {} | {} | {:?} |",
            result.browser, result.scenario, result.duration
        )?;
    }
    let failures: Vec<&ScenarioOutcome> = results.iter().filter(|r| !r.passed).collect();
    if !failures.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for result in failures {
            writeln!(out, "### {} on {}\n", result.scenario, result.browser)?;
            if let Some(error) = &result.error {
                writeln!(out, "```\n{error}\n```")?;
            }
            if let Some(dir) = &result.artifacts {
                writeln!(out, "Artifacts: `{dir}`")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn generate_console_report<W: Write>(
    out: &mut W,
    results: &[ScenarioOutcome],
    total_duration: Duration,
) -> Result<()> {
    let (passed, failed) = pass_counts(results);
    writeln!(out)?;
    writeln!(out, "{}", "📊 Browser Test Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;
    writeln!(out, "Total runs: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} [{}] {} ({:?})",
            result.browser,
            result.scenario.bold(),
            result.duration
        )?;
        if let Some(error) = &result.error {
            writeln!(out, "   • {}", error.red())?;
        }
        if let Some(dir) = &result.artifacts {
            writeln!(out, "   artifacts: {dir}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(passed: bool) -> ScenarioOutcome {
        ScenarioOutcome {
            scenario: "projects".to_string(),
            browser: "firefox".to_string(),
            passed,
            duration: Duration::from_millis(1250),
            error: (!passed).then(|| "featured filter kept a non-featured card".to_string()),
            artifacts: (!passed).then(|| "target/test-artifacts/firefox/projects/x".to_string()),
        }
    }

    #[test]
    fn json_report_uses_millis_and_skips_empty_fields() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[outcome(true)]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["duration_ms"], 1250);
        assert!(parsed[0].get("error").is_none());
    }

    #[test]
    fn markdown_report_lists_failures() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[outcome(true), outcome(false)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("- **Failed**: 1"));
        assert!(text.contains("### projects on firefox"));
        assert!(text.contains("non-featured card"));
    }

    #[test]
    fn console_report_counts_runs() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[outcome(false)], Duration::from_secs(2)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total runs: 1"));
        assert!(text.contains("❌ FAIL [firefox] projects"));
    }
}
