//! Native offset <-> thumb position synchronization
//!
//! Two directions, two handlers, never both from the same event:
//!
//! - [`follow_native_scroll`]: the native offset is authoritative and the
//!   thumb follows it (native scroll events).
//! - [`apply_drag_position`]: the thumb is authoritative and the native offset
//!   follows it (drag motion).
//!
//! The edge helpers implement the directional scroll operations
//! (`scroll_top`, `scroll_bottom`, ...) on top of [`set_native_offset`].

use crate::axis::{Axis, Edge};
use crate::geometry::{max_offset, ScrollMetrics};
use crate::host::Measure;

/// Largest native offset the host currently allows
pub fn current_max_offset<M: Measure + ?Sized>(host: &M, axis: Axis) -> f32 {
    max_offset(host.client_extent(axis), host.scroll_extent(axis))
}

/// Clamp `raw` into `[0, max_offset]` and write it as the native offset.
///
/// Returns the offset that was written.
pub fn set_native_offset<M: Measure + ?Sized>(host: &mut M, axis: Axis, raw: f32) -> f32 {
    let offset = raw.clamp(0.0, current_max_offset(host, axis));
    host.set_native_offset(axis, offset);
    offset
}

/// Current offset expressed relative to an edge
pub fn edge_offset<M: Measure + ?Sized>(host: &M, edge: Edge) -> f32 {
    let axis = edge.axis();
    let offset = host.native_offset(axis);
    if edge.is_far() {
        current_max_offset(host, axis) - offset
    } else {
        offset
    }
}

/// Resolve a near-edge request (`scroll_top` / `scroll_left`) to a raw offset.
///
/// Negative values scroll back by `|pos|`, anything else is absolute.
pub fn resolve_near(offset: f32, max: f32, pos: f32) -> f32 {
    if pos < 0.0 {
        (offset + pos).max(0.0)
    } else if max < 0.0 {
        0.0
    } else {
        pos.min(max)
    }
}

/// Resolve a far-edge request (`scroll_bottom` / `scroll_right`) to a raw offset.
///
/// Negative values move `|pos|` further from the end. Non-negative values are
/// a distance from the end; a distance larger than the whole range resets the
/// offset to the start rather than pinning it to the end.
pub fn resolve_far(offset: f32, max: f32, pos: f32) -> f32 {
    if pos < 0.0 {
        (offset - pos).min(max)
    } else if pos > max {
        0.0
    } else {
        max - pos
    }
}

/// Apply a directional scroll request and write the resulting native offset
pub fn scroll_edge<M: Measure + ?Sized>(host: &mut M, edge: Edge, pos: f32) -> f32 {
    let axis = edge.axis();
    let offset = host.native_offset(axis);
    let max = current_max_offset(host, axis);
    let raw = if edge.is_far() {
        resolve_far(offset, max, pos)
    } else {
        resolve_near(offset, max, pos)
    };
    set_native_offset(host, axis, raw)
}

/// Move the thumb to match the host's native offset
pub fn follow_native_scroll<M: Measure + ?Sized>(
    host: &mut M,
    axis: Axis,
    metrics: &mut ScrollMetrics,
) {
    metrics.sync_offset(host.native_offset(axis));
    host.set_thumb_position(axis, metrics.thumb_pos());
}

/// Place a dragged thumb at `pos` and push the matching native offset
pub fn apply_drag_position<M: Measure + ?Sized>(
    host: &mut M,
    axis: Axis,
    metrics: &mut ScrollMetrics,
    pos: f32,
) {
    let pos = metrics.clamp_position(pos);
    host.set_thumb_position(axis, pos);
    let offset = set_native_offset(host, axis, metrics.offset_for_position(pos));
    metrics.sync_position(pos, offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_negative_scrolls_back() {
        assert_eq!(resolve_near(50.0, 200.0, -20.0), 30.0);
        assert_eq!(resolve_near(10.0, 200.0, -20.0), 0.0);
    }

    #[test]
    fn test_near_absolute_is_clamped() {
        assert_eq!(resolve_near(0.0, 200.0, 50.0), 50.0);
        assert_eq!(resolve_near(0.0, 200.0, 500.0), 200.0);
        assert_eq!(resolve_near(0.0, -5.0, 50.0), 0.0);
    }

    #[test]
    fn test_far_negative_moves_away_from_end() {
        assert_eq!(resolve_far(50.0, 200.0, -20.0), 70.0);
        // Already at the end: stays there
        assert_eq!(resolve_far(200.0, 200.0, -10.0), 200.0);
    }

    #[test]
    fn test_far_distance_from_end() {
        assert_eq!(resolve_far(0.0, 200.0, 0.0), 200.0);
        assert_eq!(resolve_far(0.0, 200.0, 150.0), 50.0);
        assert_eq!(resolve_far(0.0, 200.0, 200.0), 0.0);
    }

    #[test]
    fn test_far_out_of_range_resets_to_start() {
        assert_eq!(resolve_far(120.0, 200.0, 201.0), 0.0);
        assert_eq!(resolve_far(120.0, 200.0, 10_000.0), 0.0);
    }
}
