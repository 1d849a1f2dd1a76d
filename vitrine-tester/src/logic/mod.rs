pub mod harness;
pub mod reports;
pub mod scenarios;

pub use harness::LogicHarness;
pub use reports::{Check, RunReport, ScenarioReport};
pub use scenarios::{find_scenario, list_scenarios, run_scenario};
