//! Host events and listener registrations
//!
//! The host delivers [`ScrollarEvent`]s to `Scrollar::handle_event`. Which of
//! them the component reacts to is decided by the set of attached
//! [`Listener`]s, so attaching and detaching listeners is how interaction
//! modes are switched on and off.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, Edge, Point};

/// Step distance for the scrollbar buttons
pub const BUTTON_STEP: f32 = 20.0;

/// A scrollbar step button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub fn axis(self) -> Axis {
        self.edge().axis()
    }

    /// The edge the button scrolls towards
    pub fn edge(self) -> Edge {
        match self {
            Button::Up => Edge::Top,
            Button::Down => Edge::Bottom,
            Button::Left => Edge::Left,
            Button::Right => Edge::Right,
        }
    }

    /// Buttons belonging to an axis
    pub fn for_axis(axis: Axis) -> [Button; 2] {
        match axis {
            Axis::X => [Button::Left, Button::Right],
            Axis::Y => [Button::Up, Button::Down],
        }
    }
}

/// A listener registration on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Native scroll events on the viewport
    NativeScroll,
    /// Pointer-down on an axis's thumb
    ThumbPointerDown(Axis),
    /// Document-wide pointer movement (drag only)
    DocumentPointerMove,
    /// Document-wide pointer release (drag only)
    DocumentPointerUp,
    /// Environment resize
    WindowResize,
    /// Click on a step button
    ButtonClick(Button),
}

impl Listener {
    /// Listeners that only exist while a drag is in progress
    pub fn is_drag_only(self) -> bool {
        matches!(
            self,
            Listener::DocumentPointerMove | Listener::DocumentPointerUp
        )
    }
}

/// An event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollarEvent {
    /// The viewport's native offset changed (wheel, keyboard, programmatic)
    NativeScroll,
    /// Pointer pressed on a thumb
    ThumbPointerDown { axis: Axis, pointer: Point },
    /// Pointer moved anywhere in the document
    PointerMove { pointer: Point },
    /// Pointer released anywhere in the document
    PointerUp,
    /// Environment was resized
    Resize,
    /// A step button was clicked
    ButtonClick(Button),
}

impl ScrollarEvent {
    /// The listener that must be attached for this event to be handled
    pub fn listener(&self) -> Listener {
        match *self {
            ScrollarEvent::NativeScroll => Listener::NativeScroll,
            ScrollarEvent::ThumbPointerDown { axis, .. } => Listener::ThumbPointerDown(axis),
            ScrollarEvent::PointerMove { .. } => Listener::DocumentPointerMove,
            ScrollarEvent::PointerUp => Listener::DocumentPointerUp,
            ScrollarEvent::Resize => Listener::WindowResize,
            ScrollarEvent::ButtonClick(button) => Listener::ButtonClick(button),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_match_axis() {
        for axis in Axis::ALL {
            for button in Button::for_axis(axis) {
                assert_eq!(button.axis(), axis);
            }
        }
        assert!(Button::Down.edge().is_far());
        assert!(!Button::Left.edge().is_far());
    }

    #[test]
    fn test_event_listener_mapping() {
        let down = ScrollarEvent::ThumbPointerDown {
            axis: Axis::Y,
            pointer: Point::default(),
        };
        assert_eq!(down.listener(), Listener::ThumbPointerDown(Axis::Y));
        assert!(ScrollarEvent::PointerUp.listener().is_drag_only());
        assert!(!ScrollarEvent::Resize.listener().is_drag_only());
    }
}
