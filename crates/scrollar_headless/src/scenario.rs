//! Scenario definition for headless scrollbar runs.

use anyhow::{Context, Result};
use scrollar_core::{Axis, Button, Edge, ScrollarOptions};
use serde::Deserialize;
use std::path::Path;

use crate::host::{HeadlessHost, Size, DEFAULT_SCROLLBAR_THICKNESS};

/// A region, the scrollbar mounted on it, and what happens next.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub viewport: Size,
    pub content: Size,
    /// Scrollbar options, in the same shape the component accepts
    pub options: serde_json::Value,
    #[serde(default)]
    pub host: HostSettings,
    pub steps: Vec<ScenarioStep>,
}

/// Optional knobs for the simulated environment
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HostSettings {
    pub track_x: Option<f32>,
    pub track_y: Option<f32>,
    pub scrollbar_thickness: f32,
    pub stale_wrapper_reads: u32,
    pub html: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            track_x: None,
            track_y: None,
            scrollbar_thickness: DEFAULT_SCROLLBAR_THICKNESS,
            stale_wrapper_reads: 0,
            html: String::new(),
        }
    }
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Normalized scrollbar options
    pub fn scrollar_options(&self) -> Result<ScrollarOptions> {
        ScrollarOptions::from_value(self.options.clone()).context("Invalid scenario options")
    }

    /// The host described by this scenario, before mounting
    pub fn build_host(&self) -> HeadlessHost {
        let mut builder = HeadlessHost::builder()
            .viewport(self.viewport.width, self.viewport.height)
            .content(self.content.width, self.content.height)
            .scrollbar_thickness(self.host.scrollbar_thickness)
            .stale_wrapper_reads(self.host.stale_wrapper_reads)
            .html(self.host.html.clone());
        if let Some(track) = self.host.track_x {
            builder = builder.track_length(Axis::X, track);
        }
        if let Some(track) = self.host.track_y {
            builder = builder.track_length(Axis::Y, track);
        }
        builder.build()
    }
}

/// One scenario step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Let time pass (settle delay, polling)
    Wait { ms: u64 },
    /// Resize the viewport
    Resize { width: f32, height: f32 },
    /// Replace the content and its natural size
    SetContent {
        #[serde(default)]
        html: String,
        width: f32,
        height: f32,
    },
    /// Directional scroll request (`scroll_top`, `scroll_bottom`, ...)
    Scroll { edge: Edge, value: f32 },
    /// User scroll straight on the viewport
    NativeScroll { axis: Axis, offset: f32 },
    /// Drag a thumb by `distance` along its track
    Drag { axis: Axis, distance: f32 },
    /// Click a step button
    Click { button: Button },
    AssertOffset { axis: Axis, value: f32 },
    /// Offset measured from an edge
    AssertEdge { edge: Edge, value: f32 },
    AssertThumb {
        axis: Axis,
        #[serde(default)]
        length: Option<f32>,
        #[serde(default)]
        position: Option<f32>,
    },
}

impl ScenarioStep {
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertOffset { .. }
                | ScenarioStep::AssertEdge { .. }
                | ScenarioStep::AssertThumb { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let scenario = HeadlessScenario::from_json(
            r##"{
                "viewport": { "width": 200, "height": 100 },
                "content": { "width": 200, "height": 300 },
                "options": { "element": "#list", "hscroll": false },
                "host": { "track_y": 80 },
                "steps": [
                    { "type": "wait", "ms": 20 },
                    { "type": "scroll", "edge": "top", "value": 50 },
                    { "type": "drag", "axis": "y", "distance": 10 },
                    { "type": "click", "button": "down" },
                    { "type": "assert_thumb", "axis": "y", "length": 30 }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(scenario.steps.len(), 5);
        assert!(scenario.steps[4].is_assertion());
        assert!(!scenario.steps[0].is_assertion());
        assert_eq!(scenario.host.track_y, Some(80.0));
        assert_eq!(scenario.host.scrollbar_thickness, DEFAULT_SCROLLBAR_THICKNESS);
        assert!(!scenario.scrollar_options().unwrap().is_enabled(Axis::X));
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let err = HeadlessScenario::from_json(
            r#"{
                "viewport": { "width": 1, "height": 1 },
                "content": { "width": 1, "height": 1 },
                "options": "e",
                "steps": [{ "type": "teleport" }]
            }"#,
        );
        assert!(err.is_err());
    }
}
