mod browser;
mod reports;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use portfolio_core::SiteConfig;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, new_session};
use reports::ScenarioOutcome;
use scenario::{ScenarioCtx, get_scenario, list_scenarios, scenario_keys};
use util::{artifacts_dir, capture_artifacts, split_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "portfolio-tester", version)]
#[command(about = "Browser smoke tests for the portfolio site over WebDriver")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Browsers to run (chrome,edge,firefox,safari)
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the site is served from
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    log::debug!("running scenarios {scenarios:?} against {}", args.base_url);

    let results = run_browser_scenarios(&args, &scenarios).await;

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🌐 Portfolio Browser Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

fn build_ctx(args: &Args) -> ScenarioCtx {
    ScenarioCtx {
        base_url: args.base_url.clone(),
        site: SiteConfig::default(),
        verbose: args.verbose,
    }
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioOutcome> {
    let mut results = Vec::new();
    let browsers = split_csv(&args.browsers);

    for browser_name in browsers {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let cfg = build_browser_config(args);

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                continue;
            }
        };

        results.extend(run_scenarios_for_driver(args, scenarios, kind, &driver).await);
        let _ = driver.quit().await;
    }

    results
}

async fn run_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioOutcome> {
    let ctx = build_ctx(args);
    let label = kind.label();
    let mut results = Vec::with_capacity(scenarios.len());

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };

        let scenario_start = Instant::now();
        let outcome = scenario.run_browser(driver, &ctx).await;
        let duration = scenario_start.elapsed();
        match outcome {
            Ok(()) => {
                println!("✅ [{}] {} - {:?}", label.green(), scenario_name, duration);
                results.push(ScenarioOutcome {
                    scenario: scenario_name.clone(),
                    browser: label.to_string(),
                    passed: true,
                    duration,
                    error: None,
                    artifacts: None,
                });
            }
            Err(e) => {
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    duration,
                    e
                );
                let dir = artifacts_dir(&args.artifacts_dir, label, scenario_name);
                let artifacts = match capture_artifacts(driver, &dir, &e).await {
                    Ok(()) => Some(dir),
                    Err(capture_err) => {
                        log::warn!("could not capture artifacts: {capture_err:#}");
                        None
                    }
                };
                results.push(ScenarioOutcome {
                    scenario: scenario_name.clone(),
                    browser: label.to_string(),
                    passed: false,
                    duration,
                    error: Some(format!("{e:#}")),
                    artifacts,
                });
            }
        }
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioOutcome], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Portfolio Browser Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No browser scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    let duration = start_time.elapsed();
    writeln!(&mut output_target)?;
    writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
