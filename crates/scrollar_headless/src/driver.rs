//! Input helpers for a scrollbar mounted on a [`HeadlessHost`]
//!
//! A browser fires a native scroll event after every offset change. The
//! headless host only records that one is pending; [`flush`] delivers it.
//! The other helpers run a full gesture and flush afterwards, so the thumb is
//! always up to date when they return.

use scrollar_core::{Axis, Button, DragState, Point, ScrollHost, Scrollar, ScrollarEvent};

use crate::host::HeadlessHost;

/// A scrollbar mounted on the in-memory host
pub type HeadlessScrollar = Scrollar<HeadlessHost>;

/// Grab point inside the thumb, measured from its start
const GRAB_OFFSET: f32 = 1.0;

/// Deliver a pending native scroll event, if any.
///
/// Returns whether the scrollbar handled one.
pub fn flush(scrollar: &mut HeadlessScrollar) -> bool {
    if scrollar.host_mut().take_scroll_event() {
        scrollar.handle_event(ScrollarEvent::NativeScroll)
    } else {
        false
    }
}

/// Scroll the viewport directly (wheel, keyboard)
pub fn native_scroll(scrollar: &mut HeadlessScrollar, axis: Axis, offset: f32) {
    scrollar.host_mut().user_scroll(axis, offset);
    flush(scrollar);
}

/// Press on the thumb, move the pointer `distance` along `axis`, release.
///
/// Returns whether the drag started.
pub fn drag(scrollar: &mut HeadlessScrollar, axis: Axis, distance: f32) -> bool {
    let grab = scrollar.host().thumb_origin(axis) + GRAB_OFFSET;
    let start = point_along(axis, grab);
    let end = point_along(axis, grab + distance);

    scrollar.handle_event(ScrollarEvent::ThumbPointerDown {
        axis,
        pointer: start,
    });
    if !matches!(scrollar.drag_state(), DragState::Dragging(_)) {
        return false;
    }
    scrollar.handle_event(ScrollarEvent::PointerMove { pointer: end });
    flush(scrollar);
    scrollar.handle_event(ScrollarEvent::PointerUp);
    flush(scrollar);
    true
}

/// Click a step button
pub fn click(scrollar: &mut HeadlessScrollar, button: Button) -> bool {
    let handled = scrollar.handle_event(ScrollarEvent::ButtonClick(button));
    flush(scrollar);
    handled
}

/// Resize the viewport and deliver the resize event
pub fn resize(scrollar: &mut HeadlessScrollar, width: f32, height: f32) {
    scrollar.host_mut().set_viewport(width, height);
    scrollar.handle_event(ScrollarEvent::Resize);
    flush(scrollar);
}

fn point_along(axis: Axis, value: f32) -> Point {
    match axis {
        Axis::X => Point::new(value, 0.0),
        Axis::Y => Point::new(0.0, value),
    }
}
