//! Scenario runner that drives a scrollbar on the in-memory host.

use anyhow::{Context, Result};
use scrollar_core::{Axis, Scrollar};
use tracing::{debug, trace};

use crate::assert::{
    evaluate_assert_edge, evaluate_assert_offset, evaluate_assert_thumb, AssertionResult,
    ScrollSnapshot,
};
use crate::driver::{self, HeadlessScrollar};
use crate::report::{AxisReport, HeadlessReport};
use crate::scenario::{HeadlessScenario, ScenarioStep};

/// Clock settings for a run.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Clock value when the scrollbar is mounted
    pub start_ms: u64,
    /// Logical milliseconds between scheduler ticks while waiting
    pub tick_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_ms: 0,
            tick_ms: 16,
        }
    }
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the default clock.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, RunConfig::default())
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(scenario: &HeadlessScenario, cfg: RunConfig) -> Result<RunOutcome> {
    let options = scenario.scrollar_options()?;
    let mut scrollar = Scrollar::new(scenario.build_host(), options, cfg.start_ms)
        .context("Failed to mount scrollbar")?;
    let mut now_ms = cfg.start_ms;
    let tick_ms = cfg.tick_ms.max(1);

    debug!(steps = scenario.steps.len(), "running headless scenario");

    for (step_index, step) in scenario.steps.iter().enumerate() {
        trace!(step_index, ?step, "scenario step");
        let elapsed_ms = now_ms - cfg.start_ms;

        let failure = match step {
            ScenarioStep::Wait { ms } => {
                let end = now_ms.saturating_add(*ms);
                while now_ms < end {
                    now_ms = now_ms.saturating_add(tick_ms).min(end);
                    scrollar.tick(now_ms);
                    driver::flush(&mut scrollar);
                }
                None
            }
            ScenarioStep::Resize { width, height } => {
                driver::resize(&mut scrollar, *width, *height);
                None
            }
            ScenarioStep::SetContent {
                html,
                width,
                height,
            } => {
                scrollar.host_mut().set_content_size(*width, *height);
                scrollar.set_content(html.clone());
                driver::flush(&mut scrollar);
                None
            }
            ScenarioStep::Scroll { edge, value } => {
                scrollar.scroll_edge(*edge, *value);
                driver::flush(&mut scrollar);
                None
            }
            ScenarioStep::NativeScroll { axis, offset } => {
                driver::native_scroll(&mut scrollar, *axis, *offset);
                None
            }
            ScenarioStep::Drag { axis, distance } => {
                if driver::drag(&mut scrollar, *axis, *distance) {
                    None
                } else {
                    Some((
                        "drag",
                        format!("{axis:?}: thumb drag did not start"),
                    ))
                }
            }
            ScenarioStep::Click { button } => {
                if driver::click(&mut scrollar, *button) {
                    None
                } else {
                    Some(("click", format!("{button:?}: button is not attached")))
                }
            }
            ScenarioStep::AssertOffset { axis, value } => failed(
                "assert_offset",
                evaluate_assert_offset(*axis, *value, &ScrollSnapshot::capture(&scrollar)),
            ),
            ScenarioStep::AssertEdge { edge, value } => failed(
                "assert_edge",
                evaluate_assert_edge(*edge, *value, &ScrollSnapshot::capture(&scrollar)),
            ),
            ScenarioStep::AssertThumb {
                axis,
                length,
                position,
            } => failed(
                "assert_thumb",
                evaluate_assert_thumb(
                    *axis,
                    *length,
                    *position,
                    &ScrollSnapshot::capture(&scrollar),
                ),
            ),
        };

        if let Some((assertion, message)) = failure {
            debug!(step_index, assertion, %message, "scenario failed");
            let report = HeadlessReport::failed(assertion, step_index, message, elapsed_ms)
                .with_axes(axis_report(&scrollar, Axis::X), axis_report(&scrollar, Axis::Y));
            return Ok(RunOutcome::Failed { report });
        }
    }

    let report = HeadlessReport::passed(scenario.steps.len(), now_ms - cfg.start_ms)
        .with_axes(axis_report(&scrollar, Axis::X), axis_report(&scrollar, Axis::Y));
    Ok(RunOutcome::Passed { report })
}

fn failed(assertion: &'static str, result: AssertionResult) -> Option<(&'static str, String)> {
    match result {
        AssertionResult::Passed => None,
        AssertionResult::Failed { message, .. } => Some((assertion, message)),
    }
}

fn axis_report(scrollar: &HeadlessScrollar, axis: Axis) -> AxisReport {
    let host = scrollar.host();
    AxisReport {
        offset: host.offset(axis),
        max_offset: scrollar.max_offset(axis),
        thumb_length: host.thumb_length(axis),
        thumb_position: host.thumb_position(axis),
    }
}
