//! Scrollar Core
//!
//! A custom scrollbar engine: it keeps a drawn track and thumb in sync with a
//! region's native scroll position, and lets the user drag the thumb to
//! scroll.
//!
//! # Features
//!
//! - **Geometry**: thumb length and travel derived from measured sizes
//! - **Sync**: native offset and thumb position follow each other, one
//!   direction per event
//! - **Drag**: an explicit Idle/Dragging state machine that swaps listeners
//! - **Scheduling**: settle delay and interval polling on a host-driven clock
//!
//! The engine talks to its environment only through [`Measure`] and
//! [`ScrollHost`], so it runs the same against a browser binding or an
//! in-memory host.
//!
//! # Example
//!
//! ```rust,ignore
//! use scrollar_core::{Scrollar, ScrollarEvent, ScrollarOptions};
//!
//! let options = ScrollarOptions::element("#log").hscroll(false).auto_update(500);
//! let mut scrollar = Scrollar::new(host, options, now_ms)?;
//!
//! scrollar.set_scroll_top(50.0);
//! scrollar.handle_event(ScrollarEvent::NativeScroll);
//! scrollar.tick(now_ms + 20);
//! ```

pub mod axis;
pub mod content;
pub mod drag;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod options;
pub mod scheduler;
pub mod scrollar;
pub mod sync;

pub use axis::{Axis, AxisSet, Edge, PerAxis, Point};
pub use content::{ContentMutation, MutationVerb};
pub use drag::{DragEffect, DragSession, DragState};
pub use error::{Result, ScrollarError};
pub use events::{Button, Listener, ScrollarEvent, BUTTON_STEP};
pub use geometry::{ScrollMetrics, MIN_THUMB_LENGTH};
pub use host::{Measure, ScrollHost};
pub use options::{AutoUpdate, ScrollarOptions, Target};
pub use scheduler::{TimerId, UpdateReason, UpdateScheduler};
pub use scrollar::Scrollar;
