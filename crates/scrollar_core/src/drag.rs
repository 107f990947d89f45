//! Thumb drag state machine
//!
//! Two states:
//!
//! ```text
//!            pointer-down on thumb(axis)
//!   Idle  ------------------------------>  Dragging(axis)
//!         <------------------------------
//!            pointer-up anywhere
//! ```
//!
//! Transitions don't touch the host directly. Each one returns the listener
//! changes it implies as a list of [`DragEffect`]s, which the component
//! applies. While Idle the native scroll listener and every thumb's
//! pointer-down listener are attached; while Dragging only the document-level
//! move/up pair is, so a second drag can't start until the first one ends.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::axis::{Axis, AxisSet};
use crate::events::Listener;

/// A side effect of a drag transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Attach(Listener),
    Detach(Listener),
    /// Mark the axis's scrollbar as active (or not)
    SetActive(Axis, bool),
}

/// Effects produced by one transition
pub type DragEffects = SmallVec<[DragEffect; 6]>;

/// An in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    axis: Axis,
    delta: f32,
}

impl DragSession {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Pointer coordinate minus this gives the thumb position
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Unclamped thumb position for a pointer coordinate along the drag axis
    pub fn position_for(&self, pointer: f32) -> f32 {
        pointer - self.delta
    }
}

/// Drag controller state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Gesture state machine for the thumbs of the enabled axes
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    axes: AxisSet,
}

impl DragController {
    pub fn new(axes: AxisSet) -> Self {
        Self {
            state: DragState::Idle,
            axes,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Listeners that are attached while Idle
    pub fn idle_listeners(&self) -> impl Iterator<Item = Listener> + '_ {
        std::iter::once(Listener::NativeScroll)
            .chain(self.axes.iter().map(|&axis| Listener::ThumbPointerDown(axis)))
    }

    /// Idle -> Dragging(axis).
    ///
    /// `pointer`, `track_origin`, and `thumb_origin` are page coordinates along
    /// `axis`. Returns `None` (and stays put) if a drag is already running or
    /// the axis isn't enabled.
    pub fn begin(
        &mut self,
        axis: Axis,
        pointer: f32,
        track_origin: f32,
        thumb_origin: f32,
    ) -> Option<DragEffects> {
        if let DragState::Dragging(session) = &self.state {
            trace!(?axis, active = ?session.axis, "ignoring pointer-down during drag");
            return None;
        }
        if !self.axes.contains(&axis) {
            return None;
        }

        let delta = track_origin + pointer - thumb_origin;
        self.state = DragState::Dragging(DragSession { axis, delta });
        debug!(?axis, delta, "thumb drag started");

        let mut effects = DragEffects::new();
        effects.push(DragEffect::SetActive(axis, true));
        effects.extend(self.idle_listeners().map(DragEffect::Detach));
        effects.push(DragEffect::Attach(Listener::DocumentPointerMove));
        effects.push(DragEffect::Attach(Listener::DocumentPointerUp));
        Some(effects)
    }

    /// Dragging(axis) -> Idle. Returns `None` if no drag was running.
    pub fn end(&mut self) -> Option<DragEffects> {
        let DragState::Dragging(session) = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        debug!(axis = ?session.axis, "thumb drag ended");

        let mut effects = DragEffects::new();
        effects.push(DragEffect::SetActive(session.axis, false));
        effects.push(DragEffect::Detach(Listener::DocumentPointerMove));
        effects.push(DragEffect::Detach(Listener::DocumentPointerUp));
        effects.extend(self.idle_listeners().map(DragEffect::Attach));
        Some(effects)
    }
}
