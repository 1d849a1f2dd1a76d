mod browser;
mod logic;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use browser::{BrowserConfig, BrowserKind, ScenarioCtx, new_session};
use browser::{find_browser_scenario, list_browser_scenarios};
use browser::util::{artifacts_dir, capture_artifacts, split_csv};
use logic::{Check, RunReport, ScenarioReport, find_scenario, list_scenarios, run_scenario};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TestMode {
    /// Pure controller logic testing (fast, no browser)
    Logic,
    /// Browser automation against the deployed site
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "vitrine-tester", version = "0.3.0")]
#[command(about = "Automated QA for the Vitrine portfolio site - pure logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (live site), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated), or "all"
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output (per-check detail)
    #[arg(short, long)]
    verbose: bool,

    // Browser-specific options
    /// Browser to drive - browser mode only
    #[arg(long, value_enum, default_value_t = BrowserKind::Chrome)]
    browser: BrowserKind,

    /// Base URL of the deployed site
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and DOM dumps on failure
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Run the browser with a visible window instead of headless
    #[arg(long)]
    windowed: bool,

    /// WebDriver hub URL (defaults to the local driver port)
    #[arg(long)]
    remote_hub: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        println!("{}", "Logic scenarios:".bold());
        for (name, summary) in list_scenarios() {
            println!("  {name:<24} {summary}");
        }
        println!("{}", "Browser scenarios:".bold());
        for (name, summary) in list_browser_scenarios() {
            println!("  {name:<24} {summary}");
        }
        return Ok(());
    }

    let mut failures = 0usize;
    if matches!(args.mode, TestMode::Logic | TestMode::Both) {
        let report = run_logic(&args)?;
        failures += report.failed_count();
        emit(&args, &report)?;
    }
    if matches!(args.mode, TestMode::Browser | TestMode::Both) {
        let report = run_browser(&args).await?;
        failures += report.failed_count();
        emit(&args, &report)?;
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn selected_names(args: &Args, available: &[(&'static str, &'static str)]) -> Vec<String> {
    let requested = split_csv(&args.scenarios);
    if requested.iter().any(|name| name == "all") {
        available.iter().map(|(name, _)| (*name).to_string()).collect()
    } else {
        requested
    }
}

fn run_logic(args: &Args) -> Result<RunReport> {
    let mut report = RunReport::new("logic");
    for name in selected_names(args, &list_scenarios()) {
        let Some(scenario) = find_scenario(&name) else {
            log::warn!("unknown logic scenario: {name}");
            continue;
        };
        report.scenarios.push(run_scenario(scenario));
    }
    if report.scenarios.is_empty() {
        return Err(anyhow!("no logic scenarios matched '{}'", args.scenarios));
    }
    Ok(report)
}

async fn run_browser(args: &Args) -> Result<RunReport> {
    let names = selected_names(args, &list_browser_scenarios());
    let scenarios: Vec<_> = names
        .iter()
        .filter_map(|name| {
            let found = find_browser_scenario(name);
            if found.is_none() {
                log::warn!("unknown browser scenario: {name}");
            }
            found
        })
        .collect();
    if scenarios.is_empty() {
        return Err(anyhow!("no browser scenarios matched '{}'", args.scenarios));
    }

    let cfg = BrowserConfig {
        headless: !args.windowed,
        remote_hub: args.remote_hub.clone(),
        ..BrowserConfig::default()
    };
    let driver = new_session(args.browser, &cfg)
        .await
        .context("starting WebDriver session")?;
    let ctx = ScenarioCtx {
        base_url: args.base_url.clone(),
        verbose: args.verbose,
    };
    let browser_name = format!("{:?}", args.browser).to_lowercase();

    let mut report = RunReport::new("browser");
    for scenario in scenarios {
        let start = std::time::Instant::now();
        let outcome = scenario.run(&driver, &ctx).await;
        let duration_ms = start.elapsed().as_millis();
        let check = match &outcome {
            Ok(()) => Check::new("completed", true, ""),
            Err(err) => {
                let dir = artifacts_dir(&args.artifacts_dir, &browser_name, scenario.name());
                if let Err(capture_err) = capture_artifacts(&driver, &dir, err).await {
                    log::warn!("artifact capture failed: {capture_err:#}");
                } else {
                    log::info!("artifacts written to {dir}");
                }
                Check::new("completed", false, format!("{err:#}"))
            }
        };
        report.scenarios.push(ScenarioReport::from_checks(
            scenario.name(),
            duration_ms,
            vec![check],
        ));
    }

    driver.quit().await.context("closing WebDriver session")?;
    Ok(report)
}

fn emit(args: &Args, report: &RunReport) -> Result<()> {
    let rendered = match args.report.as_str() {
        "json" => Some(report.to_json().context("serializing report")?),
        "markdown" => Some(report.to_markdown()),
        _ => None,
    };
    match (rendered, &args.output) {
        (Some(text), Some(path)) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        (Some(text), None) => println!("{text}"),
        (None, _) => report.print_console(args.verbose),
    }
    Ok(())
}
