//! Scrollar Headless
//!
//! An in-memory host for the scrollbar engine, plus a scenario runner that
//! mounts a scrollbar on it, replays a list of steps, and reports the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use scrollar_headless::run_scenario;
//!
//! let outcome = run_scenario(include_str!("scroll_list.json"))?;
//! outcome.report().write_to_writer(&mut std::io::stdout())?;
//! ```

pub mod assert;
pub mod driver;
pub mod host;
pub mod report;
pub mod runner;
pub mod scenario;

pub use driver::{click, drag, flush, native_scroll, resize, HeadlessScrollar};
pub use host::{HeadlessContent, HeadlessHost, HeadlessHostBuilder, Size};
pub use report::{HeadlessReport, ReportStatus};
pub use runner::{run_loaded_scenario, run_scenario, RunConfig, RunOutcome};
pub use scenario::{HeadlessScenario, ScenarioStep};
