//! Report structures and rendering for tester runs.

use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    #[must_use]
    pub fn new(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u128,
    pub checks: Vec<Check>,
}

impl ScenarioReport {
    #[must_use]
    pub fn from_checks(name: impl Into<String>, duration_ms: u128, checks: Vec<Check>) -> Self {
        let passed = checks.iter().all(|check| check.passed);
        Self {
            name: name.into(),
            passed,
            duration_ms,
            checks,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: String,
    pub started_at: String,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    #[must_use]
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            started_at: chrono::Utc::now().to_rfc3339(),
            scenarios: Vec::new(),
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(|scenario| scenario.passed)
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|scenario| !scenario.passed)
            .count()
    }

    /// # Errors
    /// Returns an error when serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "# Vitrine QA report ({} mode)\n\nStarted: {}\n\n| Scenario | Result | Duration |\n|---|---|---|\n",
            self.mode, self.started_at
        );
        for scenario in &self.scenarios {
            let result = if scenario.passed { "pass" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} ms |\n",
                scenario.name, result, scenario.duration_ms
            ));
        }
        for scenario in self.scenarios.iter().filter(|s| !s.passed) {
            out.push_str(&format!("\n## {} failures\n\n", scenario.name));
            for check in scenario.checks.iter().filter(|c| !c.passed) {
                out.push_str(&format!("- {}: {}\n", check.name, check.detail));
            }
        }
        out
    }

    /// Print a colored summary to stdout.
    pub fn print_console(&self, verbose: bool) {
        println!();
        for scenario in &self.scenarios {
            let tag = if scenario.passed {
                "PASS".green().bold()
            } else {
                "FAIL".red().bold()
            };
            println!(
                "{tag} {} ({} ms)",
                scenario.name.bold(),
                scenario.duration_ms
            );
            for check in &scenario.checks {
                if check.passed && !verbose {
                    continue;
                }
                let mark = if check.passed {
                    "ok".green()
                } else {
                    "failed".red()
                };
                if check.detail.is_empty() {
                    println!("    {mark} {}", check.name);
                } else {
                    println!("    {mark} {} - {}", check.name, check.detail);
                }
            }
        }
        let failed = self.failed_count();
        println!();
        if failed == 0 {
            println!(
                "{}",
                format!("{} scenario(s) passed", self.scenarios.len()).green()
            );
        } else {
            println!("{}", format!("{failed} scenario(s) failed").red().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunReport {
        let mut report = RunReport::new("logic");
        report.scenarios.push(ScenarioReport::from_checks(
            "font-sweep",
            3,
            vec![Check::new("ceiling holds", true, "")],
        ));
        report.scenarios.push(ScenarioReport::from_checks(
            "contrast-exclusion",
            1,
            vec![Check::new("dark cleared", false, "dark_mode still set")],
        ));
        report
    }

    #[test]
    fn failure_counts_and_flags() {
        let report = sample();
        assert!(!report.all_passed());
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn markdown_lists_failures_only() {
        let md = sample().to_markdown();
        assert!(md.contains("| font-sweep | pass |"));
        assert!(md.contains("## contrast-exclusion failures"));
        assert!(md.contains("dark_mode still set"));
        assert!(!md.contains("## font-sweep failures"));
    }

    #[test]
    fn json_is_well_formed() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "logic");
        assert_eq!(value["scenarios"].as_array().unwrap().len(), 2);
    }
}
