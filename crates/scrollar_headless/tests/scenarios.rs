use pretty_assertions::assert_eq;
use scrollar_headless::{run_scenario, HeadlessScenario, ReportStatus, RunConfig};

const TALL_LIST: &str = r##"{
    "viewport": { "width": 200, "height": 100 },
    "content": { "width": 200, "height": 300 },
    "options": { "element": "#list", "hscroll": false },
    "steps": [
        { "type": "wait", "ms": 20 },
        { "type": "assert_edge", "edge": "bottom", "value": 200 },
        { "type": "scroll", "edge": "top", "value": 50 },
        { "type": "assert_edge", "edge": "bottom", "value": 150 },
        { "type": "click", "button": "down" },
        { "type": "assert_offset", "axis": "y", "value": 70 },
        { "type": "native_scroll", "axis": "y", "offset": 90 },
        { "type": "assert_thumb", "axis": "y", "position": 30 }
    ]
}"##;

#[test]
fn tall_list_scenario_passes() {
    let outcome = run_scenario(TALL_LIST).unwrap();
    let report = outcome.report();

    assert!(!outcome.is_failed(), "{report:?}");
    assert_eq!(report.status, ReportStatus::Passed);
    assert_eq!(report.steps_run, 8);
    assert_eq!(report.elapsed_ms, 20);
    assert_eq!(report.y.offset, 90.0);
    assert_eq!(report.y.max_offset, 200.0);
}

#[test]
fn drag_scenario_moves_by_ratio() {
    let outcome = run_scenario(
        r#"{
            "viewport": { "width": 100, "height": 100 },
            "content": { "width": 100, "height": 200 },
            "options": { "element": "log", "hscroll": false },
            "steps": [
                { "type": "drag", "axis": "y", "distance": 40 },
                { "type": "assert_offset", "axis": "y", "value": 80 },
                { "type": "assert_thumb", "axis": "y", "length": 50, "position": 40 }
            ]
        }"#,
    )
    .unwrap();

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn failed_assertion_is_reported() {
    let outcome = run_scenario(
        r#"{
            "viewport": { "width": 100, "height": 100 },
            "content": { "width": 300, "height": 100 },
            "options": { "element": "strip", "vscroll": false },
            "steps": [
                { "type": "scroll", "edge": "right", "value": 0 },
                { "type": "scroll", "edge": "right", "value": -10 },
                { "type": "assert_offset", "axis": "x", "value": 190 }
            ]
        }"#,
    )
    .unwrap();

    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(2));
    assert_eq!(report.assertion.as_deref(), Some("assert_offset"));
    assert_eq!(report.x.offset, 200.0);
}

#[test]
fn disabled_axis_interactions_fail() {
    let outcome = run_scenario(
        r#"{
            "viewport": { "width": 100, "height": 100 },
            "content": { "width": 300, "height": 300 },
            "options": { "element": "e", "hscroll": false },
            "steps": [{ "type": "drag", "axis": "x", "distance": 10 }]
        }"#,
    )
    .unwrap();

    assert_eq!(outcome.report().assertion.as_deref(), Some("drag"));
}

#[test]
fn resize_and_content_steps() {
    let outcome = run_scenario(
        r#"{
            "viewport": { "width": 200, "height": 100 },
            "content": { "width": 200, "height": 300 },
            "options": "list",
            "host": { "track_y": 80 },
            "steps": [
                { "type": "resize", "width": 200, "height": 200 },
                { "type": "assert_edge", "edge": "bottom", "value": 100 },
                { "type": "set_content", "html": "<p>more</p>", "width": 200, "height": 600 },
                { "type": "assert_edge", "edge": "bottom", "value": 400 },
                { "type": "assert_thumb", "axis": "y", "length": 30 }
            ]
        }"#,
    )
    .unwrap();

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn polling_waits_are_ticked() {
    let scenario = HeadlessScenario::from_json(
        r#"{
            "viewport": { "width": 100, "height": 100 },
            "content": { "width": 100, "height": 100 },
            "options": { "element": "e", "autoUpdate": 100 },
            "steps": [{ "type": "wait", "ms": 250 }]
        }"#,
    )
    .unwrap();

    let cfg = RunConfig {
        start_ms: 1_000,
        tick_ms: 10,
    };
    let outcome = scrollar_headless::run_loaded_scenario(&scenario, cfg).unwrap();
    assert_eq!(outcome.report().elapsed_ms, 250);
}

#[test]
fn invalid_options_are_errors() {
    let result = run_scenario(
        r#"{
            "viewport": { "width": 100, "height": 100 },
            "content": { "width": 100, "height": 100 },
            "options": { "hscroll": false },
            "steps": []
        }"#,
    );

    assert!(result.is_err());
}
