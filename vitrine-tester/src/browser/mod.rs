pub mod panel;
pub mod session;
pub mod util;

pub use panel::{BrowserScenario, ScenarioCtx, find_browser_scenario, list_browser_scenarios};
pub use session::{BrowserConfig, BrowserKind, new_session};
