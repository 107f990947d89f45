//! Host environment interface
//!
//! The engine never touches a real document. Everything it reads or writes
//! goes through these two traits:
//!
//! - [`Measure`]: sizes, offsets, and the visual thumb. This is all the
//!   geometry model needs, including the wrapper remeasure cycle.
//! - [`ScrollHost`]: chrome construction, listener registration, page
//!   origins, and content mutation.

use crate::axis::{Axis, AxisSet};
use crate::content::ContentMutation;
use crate::error::Result;
use crate::events::Listener;
use crate::options::Target;

/// Measurement and layout primitives for one scroll region
pub trait Measure {
    /// Visible extent of the scrolling viewport (clientWidth / clientHeight)
    fn client_extent(&self, axis: Axis) -> f32;

    /// Total scrollable extent of the viewport (scrollWidth / scrollHeight)
    fn scroll_extent(&self, axis: Axis) -> f32;

    /// Current native scroll offset (scrollLeft / scrollTop)
    fn native_offset(&self, axis: Axis) -> f32;

    /// Write the native scroll offset. The host may clamp it further.
    fn set_native_offset(&mut self, axis: Axis, offset: f32);

    /// Natural extent of the content itself
    fn content_extent(&self, axis: Axis) -> f32;

    /// Size the content wrapper along the axis
    fn set_wrapper_extent(&mut self, axis: Axis, extent: f32);

    /// Scrollable extent the wrapper reports after its last resize
    fn wrapper_scroll_extent(&self, axis: Axis) -> f32;

    /// Thickness of the hidden system scrollbar the wrapper must make room for
    fn scrollbar_correction(&self, axis: Axis) -> f32;

    /// Rendered length of the track
    fn track_length(&self, axis: Axis) -> f32;

    /// Write the thumb's length along the track
    fn set_thumb_length(&mut self, axis: Axis, length: f32);

    /// Write the thumb's position along the track
    fn set_thumb_position(&mut self, axis: Axis, position: f32);
}

/// Full host binding for a mounted scrollbar
pub trait ScrollHost: Measure {
    /// Handle to the content node, returned by `Scrollar::content`
    type Node;

    /// Build the scrollbar chrome around (or inside) the target and move the
    /// existing children into the content slot
    fn mount(&mut self, target: &Target, axes: &AxisSet) -> Result<()>;

    /// Remove a disabled axis's chrome and offset the content by `correction`
    fn hide_axis(&mut self, axis: Axis, correction: f32);

    /// Toggle the active marker on an axis's scrollbar while it is dragged
    fn set_scroll_active(&mut self, axis: Axis, active: bool);

    fn attach(&mut self, listener: Listener);

    fn detach(&mut self, listener: Listener);

    /// Page coordinate of the track's origin along the axis
    fn track_origin(&self, axis: Axis) -> f32;

    /// Page coordinate of the thumb's origin along the axis
    fn thumb_origin(&self, axis: Axis) -> f32;

    /// Apply a content mutation
    fn mutate_content(&mut self, mutation: &ContentMutation);

    fn content_node(&self) -> &Self::Node;
}
