//! Assertion helpers for headless scenarios.

use scrollar_core::{Axis, Edge, PerAxis};

use crate::driver::HeadlessScrollar;

/// Values closer than this compare equal
pub const TOLERANCE: f32 = 0.01;

/// Observable scroll state at one point of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollSnapshot {
    pub offset: PerAxis<f32>,
    pub max_offset: PerAxis<f32>,
    pub thumb_length: PerAxis<f32>,
    pub thumb_position: PerAxis<f32>,
}

impl ScrollSnapshot {
    pub fn capture(scrollar: &HeadlessScrollar) -> Self {
        let host = scrollar.host();
        let mut snapshot = Self::default();
        for axis in Axis::ALL {
            snapshot.offset[axis] = host.offset(axis);
            snapshot.max_offset[axis] = scrollar.max_offset(axis);
            snapshot.thumb_length[axis] = host.thumb_length(axis);
            snapshot.thumb_position[axis] = host.thumb_position(axis);
        }
        snapshot
    }

    /// Offset measured from an edge
    pub fn edge(&self, edge: Edge) -> f32 {
        let axis = edge.axis();
        if edge.is_far() {
            self.max_offset[axis] - self.offset[axis]
        } else {
            self.offset[axis]
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= TOLERANCE
}

pub fn evaluate_assert_offset(
    axis: Axis,
    expected: f32,
    snapshot: &ScrollSnapshot,
) -> AssertionResult {
    let actual = snapshot.offset[axis];
    if close(actual, expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "offset_mismatch".to_string(),
            message: format!("{axis:?}: expected offset {expected}, got {actual}"),
        }
    }
}

pub fn evaluate_assert_edge(edge: Edge, expected: f32, snapshot: &ScrollSnapshot) -> AssertionResult {
    let actual = snapshot.edge(edge);
    if close(actual, expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "edge_mismatch".to_string(),
            message: format!("{edge:?}: expected {expected}, got {actual}"),
        }
    }
}

pub fn evaluate_assert_thumb(
    axis: Axis,
    length: Option<f32>,
    position: Option<f32>,
    snapshot: &ScrollSnapshot,
) -> AssertionResult {
    if let Some(expected) = length {
        let actual = snapshot.thumb_length[axis];
        if !close(actual, expected) {
            return AssertionResult::Failed {
                code: "thumb_length_mismatch".to_string(),
                message: format!("{axis:?}: expected thumb length {expected}, got {actual}"),
            };
        }
    }
    if let Some(expected) = position {
        let actual = snapshot.thumb_position[axis];
        if !close(actual, expected) {
            return AssertionResult::Failed {
                code: "thumb_position_mismatch".to_string(),
                message: format!("{axis:?}: expected thumb position {expected}, got {actual}"),
            };
        }
    }
    AssertionResult::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ScrollSnapshot {
        ScrollSnapshot {
            offset: PerAxis::new(0.0, 50.0),
            max_offset: PerAxis::new(0.0, 200.0),
            thumb_length: PerAxis::new(0.0, 50.0),
            thumb_position: PerAxis::new(0.0, 25.0),
        }
    }

    #[test]
    fn test_edges() {
        let snapshot = snapshot();
        assert_eq!(evaluate_assert_edge(Edge::Top, 50.0, &snapshot), AssertionResult::Passed);
        assert_eq!(evaluate_assert_edge(Edge::Bottom, 150.0, &snapshot), AssertionResult::Passed);
        assert_eq!(evaluate_assert_edge(Edge::Right, 0.0, &snapshot), AssertionResult::Passed);
    }

    #[test]
    fn test_offset_mismatch() {
        let result = evaluate_assert_offset(Axis::Y, 60.0, &snapshot());
        let AssertionResult::Failed { code, message } = result else {
            panic!("expected failure");
        };
        assert_eq!(code, "offset_mismatch");
        assert!(message.contains("60"), "{message}");
    }

    #[test]
    fn test_thumb_checks_only_given_fields() {
        let snapshot = snapshot();
        assert_eq!(
            evaluate_assert_thumb(Axis::Y, None, Some(25.0), &snapshot),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_thumb(Axis::Y, Some(30.0), None, &snapshot),
            AssertionResult::Failed { ref code, .. } if code == "thumb_length_mismatch"
        ));
    }
}
