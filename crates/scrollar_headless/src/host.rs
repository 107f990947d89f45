//! In-memory scroll host
//!
//! [`HeadlessHost`] simulates the pieces of a document a scrollbar touches: a
//! viewport with a hidden system scrollbar, a content wrapper that is sized
//! on every recompute, native offsets with browser-style clamping, and the
//! drawn track and thumb. Listener registrations are recorded so tests can
//! see exactly what is attached at any point.
//!
//! The viewport scrolls the wrapper, which is made wider (taller) than the
//! content by the scrollbar thickness so the system scrollbar lands outside
//! the visible area:
//!
//! ```text
//! scroll_extent = max(client, wrapper - thickness)
//! ```

use std::cell::Cell;

use rustc_hash::FxHashSet;
use scrollar_core::{
    Axis, AxisSet, ContentMutation, Listener, Measure, MutationVerb, PerAxis, Result, ScrollHost,
    ScrollarError, Target,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Width of a classic desktop system scrollbar
pub const DEFAULT_SCROLLBAR_THICKNESS: f32 = 17.0;

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    fn per_axis(self) -> PerAxis<f32> {
        PerAxis::new(self.width, self.height)
    }
}

/// The content node's markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessContent {
    html: String,
}

impl HeadlessContent {
    pub fn html(&self) -> &str {
        &self.html
    }

    fn apply(&mut self, mutation: &ContentMutation) {
        match mutation.verb {
            MutationVerb::Html => self.html = mutation.payload.clone(),
            MutationVerb::Text => self.html = escape_text(&mutation.payload),
            MutationVerb::Append => self.html.push_str(&mutation.payload),
            MutationVerb::Prepend => self.html.insert_str(0, &mutation.payload),
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builder for [`HeadlessHost`]
#[derive(Debug, Clone)]
pub struct HeadlessHostBuilder {
    viewport: Size,
    content: Size,
    track: PerAxis<Option<f32>>,
    track_origin: PerAxis<f32>,
    thickness: f32,
    stale_wrapper_reads: u32,
    targets: Option<FxHashSet<String>>,
    html: String,
}

impl Default for HeadlessHostBuilder {
    fn default() -> Self {
        Self {
            viewport: Size::new(200.0, 200.0),
            content: Size::new(200.0, 200.0),
            track: PerAxis::default(),
            track_origin: PerAxis::default(),
            thickness: DEFAULT_SCROLLBAR_THICKNESS,
            stale_wrapper_reads: 0,
            targets: None,
            html: String::new(),
        }
    }
}

impl HeadlessHostBuilder {
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn content(mut self, width: f32, height: f32) -> Self {
        self.content = Size::new(width, height);
        self
    }

    /// Fixed track length for an axis (defaults to the viewport extent)
    pub fn track_length(mut self, axis: Axis, length: f32) -> Self {
        self.track[axis] = Some(length);
        self
    }

    /// Page coordinate where an axis's track starts
    pub fn track_origin(mut self, axis: Axis, origin: f32) -> Self {
        self.track_origin[axis] = origin;
        self
    }

    pub fn scrollbar_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Report a collapsed wrapper for the next `reads` wrapper measurements
    pub fn stale_wrapper_reads(mut self, reads: u32) -> Self {
        self.stale_wrapper_reads = reads;
        self
    }

    /// Restrict mountable targets to these handles
    pub fn targets<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn build(self) -> HeadlessHost {
        HeadlessHost {
            viewport: self.viewport.per_axis(),
            content: self.content.per_axis(),
            wrapper: PerAxis::default(),
            offset: PerAxis::default(),
            track: self.track,
            track_origin: self.track_origin,
            thickness: self.thickness,
            stale_wrapper_reads: Cell::new(self.stale_wrapper_reads),
            targets: self.targets,
            mounted: None,
            chrome: PerAxis::default(),
            content_inset: PerAxis::default(),
            active: PerAxis::default(),
            listeners: FxHashSet::default(),
            thumb_length: PerAxis::default(),
            thumb_pos: PerAxis::default(),
            content_node: HeadlessContent { html: self.html },
            scroll_pending: false,
        }
    }
}

/// Simulated document region
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: PerAxis<f32>,
    content: PerAxis<f32>,
    wrapper: PerAxis<f32>,
    offset: PerAxis<f32>,
    track: PerAxis<Option<f32>>,
    track_origin: PerAxis<f32>,
    thickness: f32,
    stale_wrapper_reads: Cell<u32>,
    targets: Option<FxHashSet<String>>,
    mounted: Option<Target>,
    chrome: PerAxis<bool>,
    content_inset: PerAxis<f32>,
    active: PerAxis<bool>,
    listeners: FxHashSet<Listener>,
    thumb_length: PerAxis<f32>,
    thumb_pos: PerAxis<f32>,
    content_node: HeadlessContent,
    scroll_pending: bool,
}

impl HeadlessHost {
    pub fn builder() -> HeadlessHostBuilder {
        HeadlessHostBuilder::default()
    }

    // =========================================================================
    // Environment changes
    // =========================================================================

    /// Resize the viewport. Offsets past the new end are pulled back.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = PerAxis::new(width, height);
        self.reclamp();
    }

    /// Change the content's natural size. The wrapper keeps its old extent
    /// until the next recompute.
    pub fn set_content_size(&mut self, width: f32, height: f32) {
        self.content = PerAxis::new(width, height);
    }

    /// Scroll as the user would (wheel, keyboard), clamped to the valid range
    pub fn user_scroll(&mut self, axis: Axis, offset: f32) {
        self.write_offset(axis, offset);
    }

    /// Whether the native offset changed since the last call; clears the flag
    pub fn take_scroll_event(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    fn max_native_offset(&self, axis: Axis) -> f32 {
        (self.scroll_extent(axis) - self.client_extent(axis)).max(0.0)
    }

    fn write_offset(&mut self, axis: Axis, offset: f32) {
        let offset = offset.clamp(0.0, self.max_native_offset(axis));
        if offset != self.offset[axis] {
            self.offset[axis] = offset;
            self.scroll_pending = true;
        }
    }

    fn reclamp(&mut self) {
        for axis in Axis::ALL {
            let offset = self.offset[axis];
            self.write_offset(axis, offset);
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn offset(&self, axis: Axis) -> f32 {
        self.offset[axis]
    }

    pub fn thumb_length(&self, axis: Axis) -> f32 {
        self.thumb_length[axis]
    }

    pub fn thumb_position(&self, axis: Axis) -> f32 {
        self.thumb_pos[axis]
    }

    pub fn is_active(&self, axis: Axis) -> bool {
        self.active[axis]
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the axis's scrollbar chrome is shown
    pub fn has_chrome(&self, axis: Axis) -> bool {
        self.chrome[axis]
    }

    /// Content offset applied when the axis was hidden
    pub fn content_inset(&self, axis: Axis) -> f32 {
        self.content_inset[axis]
    }

    pub fn mounted_target(&self) -> Option<&Target> {
        self.mounted.as_ref()
    }
}

impl Measure for HeadlessHost {
    fn client_extent(&self, axis: Axis) -> f32 {
        self.viewport[axis]
    }

    fn scroll_extent(&self, axis: Axis) -> f32 {
        (self.wrapper[axis] - self.thickness).max(self.client_extent(axis))
    }

    fn native_offset(&self, axis: Axis) -> f32 {
        self.offset[axis]
    }

    fn set_native_offset(&mut self, axis: Axis, offset: f32) {
        self.write_offset(axis, offset);
    }

    fn content_extent(&self, axis: Axis) -> f32 {
        self.content[axis]
    }

    fn set_wrapper_extent(&mut self, axis: Axis, extent: f32) {
        self.wrapper[axis] = extent;
        let offset = self.offset[axis];
        self.write_offset(axis, offset);
    }

    fn wrapper_scroll_extent(&self, axis: Axis) -> f32 {
        let stale = self.stale_wrapper_reads.get();
        if stale > 0 {
            self.stale_wrapper_reads.set(stale - 1);
            return self.content[axis];
        }
        self.wrapper[axis]
    }

    fn scrollbar_correction(&self, _axis: Axis) -> f32 {
        self.thickness
    }

    fn track_length(&self, axis: Axis) -> f32 {
        self.track[axis].unwrap_or(self.viewport[axis])
    }

    fn set_thumb_length(&mut self, axis: Axis, length: f32) {
        self.thumb_length[axis] = length;
    }

    fn set_thumb_position(&mut self, axis: Axis, position: f32) {
        self.thumb_pos[axis] = position;
    }
}

impl ScrollHost for HeadlessHost {
    type Node = HeadlessContent;

    fn mount(&mut self, target: &Target, axes: &AxisSet) -> Result<()> {
        if let Some(targets) = &self.targets {
            if !targets.contains(target.handle()) {
                return Err(ScrollarError::HostUnavailable(format!(
                    "no node matches '{}'",
                    target.handle()
                )));
            }
        }
        for &axis in axes {
            self.chrome[axis] = true;
        }
        self.mounted = Some(target.clone());
        trace!(handle = target.handle(), "headless chrome mounted");
        Ok(())
    }

    fn hide_axis(&mut self, axis: Axis, correction: f32) {
        self.chrome[axis] = false;
        self.content_inset[axis] = correction;
    }

    fn set_scroll_active(&mut self, axis: Axis, active: bool) {
        self.active[axis] = active;
    }

    fn attach(&mut self, listener: Listener) {
        self.listeners.insert(listener);
    }

    fn detach(&mut self, listener: Listener) {
        self.listeners.remove(&listener);
    }

    fn track_origin(&self, axis: Axis) -> f32 {
        self.track_origin[axis]
    }

    fn thumb_origin(&self, axis: Axis) -> f32 {
        self.track_origin[axis] + self.thumb_pos[axis]
    }

    fn mutate_content(&mut self, mutation: &ContentMutation) {
        self.content_node.apply(mutation);
    }

    fn content_node(&self) -> &HeadlessContent {
        &self.content_node
    }
}
