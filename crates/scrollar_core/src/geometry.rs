//! Track and thumb geometry
//!
//! Pure functions that turn measured sizes into thumb length, scroll ratio,
//! and position bounds, plus [`recompute`], which runs the wrapper remeasure
//! cycle against a [`Measure`] host and writes the result to the thumb.
//!
//! The thumb length is proportional to the visible fraction of the content:
//!
//! ```text
//! thumb = clamp(track * client / scroll, MIN_THUMB_LENGTH, track)
//! ratio = max(1, (scroll - client) / max(1, track - thumb))
//! ```
//!
//! One track unit of thumb travel moves the native offset by `ratio` units.

use tracing::{trace, warn};

use crate::axis::Axis;
use crate::host::Measure;

/// Minimum thumb length so the thumb stays grabbable
pub const MIN_THUMB_LENGTH: f32 = 30.0;

/// Upper bound on oversize-then-reset cycles per axis and recompute
pub const MAX_REMEASURE_PASSES: u32 = 8;

/// How far the wrapper is over-expanded to force a fresh scrollable extent
const OVERSIZE_EXTENT: f32 = 1000.0;

/// Wrapper extents within this distance of the content are considered collapsed
const COLLAPSE_TOLERANCE: f32 = 1.0;

/// Measured inputs for one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMeasurements {
    pub track_length: f32,
    pub client_extent: f32,
    pub scroll_extent: f32,
    pub native_offset: f32,
}

/// Derived scroll state for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    track_length: f32,
    thumb_length: f32,
    ratio: f32,
    max_pos: f32,
    max_offset: f32,
    thumb_pos: f32,
    native_offset: f32,
}

impl ScrollMetrics {
    /// Derive the full state from one set of measurements
    pub fn from_measurements(m: AxisMeasurements) -> Self {
        let thumb_length = thumb_length(m.track_length, m.client_extent, m.scroll_extent);
        let ratio = scroll_ratio(
            m.track_length,
            thumb_length,
            m.client_extent,
            m.scroll_extent,
        );
        let mut metrics = Self {
            track_length: m.track_length,
            thumb_length,
            ratio,
            max_pos: (m.track_length - thumb_length).max(0.0),
            max_offset: max_offset(m.client_extent, m.scroll_extent),
            thumb_pos: 0.0,
            native_offset: 0.0,
        };
        metrics.sync_offset(m.native_offset);
        metrics
    }

    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    pub fn thumb_length(&self) -> f32 {
        self.thumb_length
    }

    /// Native offset units per track unit, never below 1
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn min_pos(&self) -> f32 {
        0.0
    }

    pub fn max_pos(&self) -> f32 {
        self.max_pos
    }

    /// Largest native offset at the time of the last recompute
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn thumb_pos(&self) -> f32 {
        self.thumb_pos
    }

    pub fn native_offset(&self) -> f32 {
        self.native_offset
    }

    /// Clamp a thumb position into `[min_pos, max_pos]`
    pub fn clamp_position(&self, pos: f32) -> f32 {
        pos.clamp(self.min_pos(), self.max_pos)
    }

    /// Thumb position for a native offset
    pub fn position_for_offset(&self, offset: f32) -> f32 {
        self.clamp_position(offset / self.ratio)
    }

    /// Native offset for a thumb position
    pub fn offset_for_position(&self, pos: f32) -> f32 {
        pos * self.ratio
    }

    /// Follow a native offset (offset is authoritative)
    pub(crate) fn sync_offset(&mut self, offset: f32) {
        self.native_offset = offset;
        self.thumb_pos = self.position_for_offset(offset);
    }

    /// Follow a dragged thumb (position is authoritative)
    pub(crate) fn sync_position(&mut self, pos: f32, offset: f32) {
        self.thumb_pos = pos;
        self.native_offset = offset;
    }
}

/// Thumb length for a track showing `client` of `scroll` units.
///
/// Tracks shorter than [`MIN_THUMB_LENGTH`] get a thumb filling the whole
/// track so the position range never goes negative.
pub fn thumb_length(track: f32, client: f32, scroll: f32) -> f32 {
    let track = track.max(0.0);
    let proportional = if scroll > 0.0 {
        track * client / scroll
    } else {
        track
    };
    proportional.max(MIN_THUMB_LENGTH).min(track)
}

/// Native offset units per unit of thumb travel
pub fn scroll_ratio(track: f32, thumb: f32, client: f32, scroll: f32) -> f32 {
    let free = (track - thumb).max(1.0);
    ((scroll - client) / free).max(1.0)
}

/// Largest valid native offset
pub fn max_offset(client: f32, scroll: f32) -> f32 {
    (scroll - client).max(0.0)
}

/// Size the content wrapper so the scrollable extent matches the content.
///
/// The wrapper is oversized by the axis correction. Some environments report
/// a collapsed wrapper extent right after the resize; in that case the
/// wrapper is over-expanded and reset until the reported extent settles.
/// Returns `false` if it never settled within [`MAX_REMEASURE_PASSES`].
pub fn fit_wrapper<M: Measure + ?Sized>(host: &mut M, axis: Axis) -> bool {
    let correction = host.scrollbar_correction(axis);
    let content = host.content_extent(axis);
    host.set_wrapper_extent(axis, content + correction);

    let mut passes = 0;
    while (host.wrapper_scroll_extent(axis) - host.content_extent(axis)).abs() <= COLLAPSE_TOLERANCE
    {
        if passes == MAX_REMEASURE_PASSES {
            warn!(
                ?axis,
                passes, "wrapper extent did not settle, keeping last measurement"
            );
            return false;
        }
        passes += 1;
        let content = host.content_extent(axis);
        host.set_wrapper_extent(axis, content + OVERSIZE_EXTENT);
        host.set_wrapper_extent(axis, content + correction);
    }

    if passes > 0 {
        trace!(?axis, passes, "wrapper extent settled after remeasure");
    }
    true
}

/// Recompute one axis: fit the wrapper, measure, derive, and write the thumb
pub fn recompute<M: Measure + ?Sized>(host: &mut M, axis: Axis) -> ScrollMetrics {
    let client_extent = host.client_extent(axis);
    fit_wrapper(host, axis);

    let measurements = AxisMeasurements {
        track_length: host.track_length(axis),
        client_extent,
        scroll_extent: host.scroll_extent(axis),
        native_offset: host.native_offset(axis),
    };
    let metrics = ScrollMetrics::from_measurements(measurements);

    host.set_thumb_length(axis, metrics.thumb_length());
    host.set_thumb_position(axis, metrics.thumb_pos());

    trace!(
        ?axis,
        thumb = metrics.thumb_length(),
        ratio = metrics.ratio(),
        pos = metrics.thumb_pos(),
        "recomputed axis"
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::PerAxis;

    fn measure(track: f32, client: f32, scroll: f32, offset: f32) -> ScrollMetrics {
        ScrollMetrics::from_measurements(AxisMeasurements {
            track_length: track,
            client_extent: client,
            scroll_extent: scroll,
            native_offset: offset,
        })
    }

    /// Minimal measurement host: the viewport scrolls `wrapper - correction`
    struct FakeLayout {
        client: PerAxis<f32>,
        content: PerAxis<f32>,
        wrapper: PerAxis<f32>,
        offset: PerAxis<f32>,
        track: PerAxis<f32>,
        correction: f32,
        thumb_length: PerAxis<f32>,
        thumb_pos: PerAxis<f32>,
    }

    impl FakeLayout {
        fn new(client: (f32, f32), content: (f32, f32)) -> Self {
            Self {
                client: PerAxis::new(client.0, client.1),
                content: PerAxis::new(content.0, content.1),
                wrapper: PerAxis::default(),
                offset: PerAxis::default(),
                track: PerAxis::new(client.0, client.1),
                correction: 17.0,
                thumb_length: PerAxis::default(),
                thumb_pos: PerAxis::default(),
            }
        }
    }

    impl Measure for FakeLayout {
        fn client_extent(&self, axis: Axis) -> f32 {
            self.client[axis]
        }

        fn scroll_extent(&self, axis: Axis) -> f32 {
            (self.wrapper[axis] - self.correction).max(self.client[axis])
        }

        fn native_offset(&self, axis: Axis) -> f32 {
            self.offset[axis]
        }

        fn set_native_offset(&mut self, axis: Axis, offset: f32) {
            self.offset[axis] = offset;
        }

        fn content_extent(&self, axis: Axis) -> f32 {
            self.content[axis]
        }

        fn set_wrapper_extent(&mut self, axis: Axis, extent: f32) {
            self.wrapper[axis] = extent;
        }

        fn wrapper_scroll_extent(&self, axis: Axis) -> f32 {
            self.wrapper[axis]
        }

        fn scrollbar_correction(&self, _axis: Axis) -> f32 {
            self.correction
        }

        fn track_length(&self, axis: Axis) -> f32 {
            self.track[axis]
        }

        fn set_thumb_length(&mut self, axis: Axis, length: f32) {
            self.thumb_length[axis] = length;
        }

        fn set_thumb_position(&mut self, axis: Axis, position: f32) {
            self.thumb_pos[axis] = position;
        }
    }

    #[test]
    fn test_thumb_length_is_proportional() {
        // Half the content visible: half the track
        assert_eq!(thumb_length(200.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn test_thumb_length_minimum() {
        assert_eq!(thumb_length(100.0, 100.0, 10_000.0), MIN_THUMB_LENGTH);
    }

    #[test]
    fn test_thumb_length_never_exceeds_track() {
        // Content smaller than viewport
        assert_eq!(thumb_length(100.0, 100.0, 50.0), 100.0);
        // Track shorter than the minimum thumb
        assert_eq!(thumb_length(20.0, 100.0, 1000.0), 20.0);
        // Nothing measured yet
        assert_eq!(thumb_length(80.0, 0.0, 0.0), 80.0);
    }

    #[test]
    fn test_ratio_floor() {
        // Content fits: nothing to scroll, ratio stays at 1
        assert_eq!(scroll_ratio(100.0, 100.0, 100.0, 100.0), 1.0);
        assert_eq!(scroll_ratio(100.0, 100.0, 100.0, 20.0), 1.0);
        // Small overflow on a long track
        assert_eq!(scroll_ratio(100.0, 90.0, 100.0, 105.0), 1.0);
    }

    #[test]
    fn test_ratio_maps_thumb_travel_to_offset() {
        let metrics = measure(100.0, 100.0, 200.0, 0.0);
        assert_eq!(metrics.thumb_length(), 50.0);
        assert_eq!(metrics.ratio(), 2.0);
        assert_eq!(metrics.max_pos(), 50.0);
        assert_eq!(metrics.max_offset(), 100.0);
        assert_eq!(
            metrics.offset_for_position(metrics.max_pos()),
            metrics.max_offset()
        );
    }

    #[test]
    fn test_position_bounds_hold_for_many_sizes() {
        for track in [0.0, 10.0, 30.0, 64.0, 100.0, 480.0] {
            for client in [0.0, 50.0, 100.0, 300.0] {
                for scroll in [0.0, 40.0, 100.0, 301.0, 5000.0] {
                    for offset in [0.0, 25.0, 10_000.0] {
                        let m = measure(track, client, scroll, offset);
                        assert!(m.ratio() >= 1.0, "ratio {m:?}");
                        assert_eq!(m.min_pos(), 0.0);
                        assert!(m.thumb_pos() >= m.min_pos(), "{m:?}");
                        assert!(m.thumb_pos() <= m.max_pos(), "{m:?}");
                        assert_eq!(m.max_pos(), (track - m.thumb_length()).max(0.0));
                        if track >= MIN_THUMB_LENGTH {
                            assert!(m.thumb_length() >= MIN_THUMB_LENGTH);
                            assert!(m.thumb_length() <= track);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_offset_reconciles_with_position() {
        let m = measure(100.0, 100.0, 200.0, 60.0);
        assert_eq!(m.thumb_pos(), 30.0);
        assert_eq!(m.offset_for_position(m.thumb_pos()), m.native_offset());
    }

    #[test]
    fn test_recompute_writes_thumb() {
        let mut layout = FakeLayout::new((200.0, 100.0), (200.0, 300.0));
        layout.offset[Axis::Y] = 60.0;

        let metrics = recompute(&mut layout, Axis::Y);

        assert_eq!(layout.wrapper[Axis::Y], 317.0);
        assert_eq!(metrics.max_offset(), 200.0);
        assert_eq!(layout.thumb_length[Axis::Y], metrics.thumb_length());
        assert_eq!(layout.thumb_pos[Axis::Y], metrics.thumb_pos());
        assert!((metrics.ratio() - 3.0).abs() < 1e-4);
        assert!((metrics.thumb_pos() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut layout = FakeLayout::new((200.0, 100.0), (640.0, 300.0));
        layout.offset[Axis::X] = 123.0;

        let first = recompute(&mut layout, Axis::X);
        let second = recompute(&mut layout, Axis::X);
        assert_eq!(first, second);
    }

    #[test]
    fn test_remeasure_gives_up() {
        let mut layout = FakeLayout::new((200.0, 100.0), (200.0, 300.0));
        layout.correction = 0.0;

        // With no correction the wrapper always matches the content and the
        // loop has to give up instead of spinning
        assert!(!fit_wrapper(&mut layout, Axis::Y));
        assert_eq!(layout.wrapper[Axis::Y], 300.0);
    }

    #[test]
    fn test_fit_wrapper_settles_without_quirk() {
        let mut layout = FakeLayout::new((200.0, 100.0), (200.0, 300.0));
        assert!(fit_wrapper(&mut layout, Axis::Y));
        assert_eq!(layout.wrapper[Axis::Y], 317.0);
    }
}
