//! The scrollbar component
//!
//! [`Scrollar`] owns the host binding, one [`ScrollMetrics`] per enabled axis,
//! the drag controller, and the update scheduler. The host drives it with
//! [`Scrollar::handle_event`] for discrete events and [`Scrollar::tick`] for
//! the passage of time; application code uses `update`, the content methods,
//! and the directional scroll methods.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::axis::{Axis, AxisSet, Edge, PerAxis, Point};
use crate::content::ContentMutation;
use crate::drag::{DragController, DragEffect, DragEffects, DragState};
use crate::error::Result;
use crate::events::{Button, Listener, ScrollarEvent, BUTTON_STEP};
use crate::geometry::{self, ScrollMetrics};
use crate::host::ScrollHost;
use crate::options::ScrollarOptions;
use crate::scheduler::{TimerId, UpdateReason, UpdateScheduler, SETTLE_DELAY_MS};
use crate::sync;

/// A custom scrollbar bound to one content region
pub struct Scrollar<H: ScrollHost> {
    host: H,
    options: ScrollarOptions,
    axes: AxisSet,
    metrics: PerAxis<Option<ScrollMetrics>>,
    drag: DragController,
    scheduler: UpdateScheduler,
    poll_timer: Option<TimerId>,
    listeners: FxHashSet<Listener>,
}

impl<H: ScrollHost> Scrollar<H> {
    /// Mount the scrollbar on `host` at time `now_ms`.
    ///
    /// Builds the chrome, hides disabled axes, attaches the idle listeners,
    /// measures once, and schedules the settle recompute (plus polling if
    /// configured).
    pub fn new(mut host: H, options: ScrollarOptions, now_ms: u64) -> Result<Self> {
        let axes = options.axes();
        host.mount(options.target(), &axes)?;

        for axis in Axis::ALL {
            if !options.is_enabled(axis) {
                let correction = host.scrollbar_correction(axis);
                host.hide_axis(axis, correction);
            }
        }

        let mut scheduler = UpdateScheduler::new(now_ms);
        scheduler.schedule_once(UpdateReason::Settle, SETTLE_DELAY_MS);
        let poll_timer = options
            .auto_update_mode()
            .interval_ms()
            .map(|ms| scheduler.schedule_every(UpdateReason::Poll, ms));

        let mut scrollar = Self {
            host,
            drag: DragController::new(axes.clone()),
            axes,
            options,
            metrics: PerAxis::default(),
            scheduler,
            poll_timer,
            listeners: FxHashSet::default(),
        };

        let idle: Vec<Listener> = scrollar.drag.idle_listeners().collect();
        for listener in idle {
            scrollar.attach(listener);
        }
        scrollar.attach(Listener::WindowResize);
        for axis in scrollar.axes.clone() {
            for button in Button::for_axis(axis) {
                scrollar.attach(Listener::ButtonClick(button));
            }
        }

        scrollar.recompute_all(UpdateReason::Manual);

        debug!(
            handle = scrollar.options.target().handle(),
            axes = ?scrollar.axes,
            poll_ms = ?scrollar.options.auto_update_mode().interval_ms(),
            "scrollar mounted"
        );
        Ok(scrollar)
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Handle an event from the host.
    ///
    /// Events whose listener is not currently attached are ignored; returns
    /// whether the event was handled.
    pub fn handle_event(&mut self, event: ScrollarEvent) -> bool {
        if !self.listeners.contains(&event.listener()) {
            trace!(?event, "no listener attached, ignoring");
            return false;
        }

        match event {
            ScrollarEvent::NativeScroll => self.on_native_scroll(),
            ScrollarEvent::ThumbPointerDown { axis, pointer } => {
                self.on_thumb_pointer_down(axis, pointer.along(axis))
            }
            ScrollarEvent::PointerMove { pointer } => self.on_drag_move(pointer),
            ScrollarEvent::PointerUp => self.on_pointer_up(),
            ScrollarEvent::Resize => self.recompute_all(UpdateReason::Resize),
            ScrollarEvent::ButtonClick(button) => {
                self.scroll_edge(button.edge(), -BUTTON_STEP);
            }
        }
        true
    }

    /// Advance the scheduler to `now_ms`, recomputing if any timer fired.
    ///
    /// Returns the number of timers that fired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let fired = self.scheduler.tick(now_ms);
        if let Some(&reason) = fired.first() {
            self.recompute_all(reason);
        }
        fired.len()
    }

    /// Offset -> thumb, for every enabled axis
    fn on_native_scroll(&mut self) {
        for &axis in &self.axes {
            if let Some(metrics) = self.metrics[axis].as_mut() {
                sync::follow_native_scroll(&mut self.host, axis, metrics);
            }
        }
    }

    fn on_thumb_pointer_down(&mut self, axis: Axis, pointer: f32) {
        let track_origin = self.host.track_origin(axis);
        let thumb_origin = self.host.thumb_origin(axis);
        if let Some(effects) = self.drag.begin(axis, pointer, track_origin, thumb_origin) {
            self.apply(effects);
        }
    }

    /// Thumb -> offset, for the dragged axis only
    fn on_drag_move(&mut self, pointer: Point) {
        let Some(session) = self.drag.session().copied() else {
            return;
        };
        let axis = session.axis();
        let pos = session.position_for(pointer.along(axis));
        if let Some(metrics) = self.metrics[axis].as_mut() {
            sync::apply_drag_position(&mut self.host, axis, metrics, pos);
        }
    }

    fn on_pointer_up(&mut self) {
        if let Some(effects) = self.drag.end() {
            self.apply(effects);
        }
    }

    fn apply(&mut self, effects: DragEffects) {
        for effect in effects {
            match effect {
                DragEffect::Attach(listener) => self.attach(listener),
                DragEffect::Detach(listener) => self.detach(listener),
                DragEffect::SetActive(axis, active) => self.host.set_scroll_active(axis, active),
            }
        }
    }

    fn attach(&mut self, listener: Listener) {
        if self.listeners.insert(listener) {
            self.host.attach(listener);
        }
    }

    fn detach(&mut self, listener: Listener) {
        if self.listeners.remove(&listener) {
            self.host.detach(listener);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Recompute geometry for every enabled axis now
    pub fn update(&mut self) {
        self.recompute_all(UpdateReason::Manual);
    }

    fn recompute_all(&mut self, reason: UpdateReason) {
        for &axis in &self.axes {
            self.metrics[axis] = Some(geometry::recompute(&mut self.host, axis));
        }
        trace!(?reason, "geometry updated");
    }

    /// Derived state of an enabled axis
    pub fn metrics(&self, axis: Axis) -> Option<&ScrollMetrics> {
        self.metrics[axis].as_ref()
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub fn content(&self) -> &H::Node {
        self.host.content_node()
    }

    /// Replace the inner markup and update
    pub fn set_content(&mut self, html: impl Into<String>) {
        self.mutate_content(ContentMutation::html(html));
    }

    /// Apply a content mutation and update
    pub fn mutate_content(&mut self, mutation: ContentMutation) {
        self.host.mutate_content(&mutation);
        self.recompute_all(UpdateReason::Content);
    }

    /// Apply a mutation given by verb name (`html`, `text`, `append`, `prepend`)
    pub fn mutate_content_verb(&mut self, verb: &str, payload: impl Into<String>) -> Result<()> {
        let mutation = ContentMutation::from_verb(verb, payload)?;
        self.mutate_content(mutation);
        Ok(())
    }

    // =========================================================================
    // Scroll position
    // =========================================================================

    /// Clamp and write a native offset, returning the value written
    pub fn set_native_offset(&mut self, axis: Axis, offset: f32) -> f32 {
        sync::set_native_offset(&mut self.host, axis, offset)
    }

    /// Largest native offset along `axis`
    pub fn max_offset(&self, axis: Axis) -> f32 {
        sync::current_max_offset(&self.host, axis)
    }

    /// Offset relative to an edge
    pub fn edge_offset(&self, edge: Edge) -> f32 {
        sync::edge_offset(&self.host, edge)
    }

    /// Apply a directional scroll request relative to an edge
    pub fn scroll_edge(&mut self, edge: Edge, pos: f32) -> f32 {
        sync::scroll_edge(&mut self.host, edge, pos)
    }

    pub fn scroll_top(&self) -> f32 {
        self.edge_offset(Edge::Top)
    }

    /// Negative values scroll up by `|pos|`, others set the offset from the top
    pub fn set_scroll_top(&mut self, pos: f32) {
        self.scroll_edge(Edge::Top, pos);
    }

    /// Distance from the bottom
    pub fn scroll_bottom(&self) -> f32 {
        self.edge_offset(Edge::Bottom)
    }

    /// Negative values scroll down by `|pos|`, others set the distance from
    /// the bottom. A distance past the top resets to the top.
    pub fn set_scroll_bottom(&mut self, pos: f32) {
        self.scroll_edge(Edge::Bottom, pos);
    }

    pub fn scroll_left(&self) -> f32 {
        self.edge_offset(Edge::Left)
    }

    pub fn set_scroll_left(&mut self, pos: f32) {
        self.scroll_edge(Edge::Left, pos);
    }

    /// Distance from the right end
    pub fn scroll_right(&self) -> f32 {
        self.edge_offset(Edge::Right)
    }

    pub fn set_scroll_right(&mut self, pos: f32) {
        self.scroll_edge(Edge::Right, pos);
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn options(&self) -> &ScrollarOptions {
        &self.options
    }

    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// Active polling interval, if any
    pub fn poll_interval(&self) -> Option<u64> {
        self.poll_timer.and_then(|id| self.scheduler.period(id))
    }

    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Release every timer and listener and hand the host back
    pub fn destroy(mut self) -> H {
        self.scheduler.cancel_all();
        self.poll_timer = None;

        if let Some(session) = self.drag.session().copied() {
            self.host.set_scroll_active(session.axis(), false);
        }
        for listener in self.listeners.drain() {
            self.host.detach(listener);
        }

        debug!(handle = self.options.target().handle(), "scrollar destroyed");
        self.host
    }
}
