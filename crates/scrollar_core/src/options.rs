//! Construction options
//!
//! Options come either from the builder methods on [`ScrollarOptions`] or from
//! JSON / TOML text. Both paths end in the same normalization:
//!
//! - exactly one of `element` / `container` must name the target
//! - `hscroll` and `vscroll` default to `true`
//! - `autoUpdate` is `false` or an interval in milliseconds; intervals below
//!   [`MIN_POLL_INTERVAL_MS`] (and `true`) mean polling is disabled
//!
//! A bare JSON string is shorthand for `{ "element": <string> }`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::axis::{Axis, AxisSet};
use crate::error::{Result, ScrollarError};
use crate::scheduler::MIN_POLL_INTERVAL_MS;

/// Where the scrollbar is mounted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Wrap the node in place: it becomes the scrollbar root
    Element(String),
    /// Build the scrollbar inside the node and move its children into it
    Container(String),
}

impl Target {
    /// The host-specific handle (selector, id, ...) of the target node
    pub fn handle(&self) -> &str {
        match self {
            Target::Element(handle) | Target::Container(handle) => handle,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Target::Container(_))
    }
}

/// Interval polling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoUpdate {
    #[default]
    Disabled,
    /// Recompute every N milliseconds
    Every(u64),
}

impl AutoUpdate {
    /// Polling every `ms`, or disabled if `ms` is below the minimum interval
    pub fn from_millis(ms: u64) -> Self {
        if ms < MIN_POLL_INTERVAL_MS {
            AutoUpdate::Disabled
        } else {
            AutoUpdate::Every(ms)
        }
    }

    pub fn interval_ms(&self) -> Option<u64> {
        match *self {
            AutoUpdate::Every(ms) => Some(ms),
            AutoUpdate::Disabled => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAutoUpdate {
    Flag(bool),
    Millis(f64),
}

impl<'de> Deserialize<'de> for AutoUpdate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawAutoUpdate::deserialize(deserializer)? {
            RawAutoUpdate::Flag(_) => AutoUpdate::Disabled,
            RawAutoUpdate::Millis(ms) if ms.is_finite() && ms >= 0.0 => {
                AutoUpdate::from_millis(ms as u64)
            }
            RawAutoUpdate::Millis(_) => AutoUpdate::Disabled,
        })
    }
}

impl Serialize for AutoUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            AutoUpdate::Disabled => serializer.serialize_bool(false),
            AutoUpdate::Every(ms) => serializer.serialize_u64(ms),
        }
    }
}

/// Options as written by the user, before normalization
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hscroll: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vscroll: Option<bool>,
    #[serde(default)]
    auto_update: AutoUpdate,
}

impl RawOptions {
    fn normalize(self) -> Result<ScrollarOptions> {
        let target = match (self.element, self.container) {
            (Some(_), Some(_)) => return Err(ScrollarError::ConflictingTargets),
            (Some(element), None) => Target::Element(element),
            (None, Some(container)) => Target::Container(container),
            (None, None) => return Err(ScrollarError::MissingTarget),
        };
        Ok(ScrollarOptions {
            target,
            hscroll: self.hscroll.unwrap_or(true),
            vscroll: self.vscroll.unwrap_or(true),
            auto_update: self.auto_update,
        })
    }
}

/// Normalized scrollbar options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollarOptions {
    target: Target,
    hscroll: bool,
    vscroll: bool,
    auto_update: AutoUpdate,
}

impl ScrollarOptions {
    /// Wrap `handle` in place
    pub fn element(handle: impl Into<String>) -> Self {
        Self::with_target(Target::Element(handle.into()))
    }

    /// Mount inside `handle`, moving its children into the content slot
    pub fn container(handle: impl Into<String>) -> Self {
        Self::with_target(Target::Container(handle.into()))
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            hscroll: true,
            vscroll: true,
            auto_update: AutoUpdate::Disabled,
        }
    }

    pub fn hscroll(mut self, enabled: bool) -> Self {
        self.hscroll = enabled;
        self
    }

    pub fn vscroll(mut self, enabled: bool) -> Self {
        self.vscroll = enabled;
        self
    }

    /// Poll for size changes every `ms` milliseconds (coerced per [`AutoUpdate::from_millis`])
    pub fn auto_update(mut self, ms: u64) -> Self {
        self.auto_update = AutoUpdate::from_millis(ms);
        self
    }

    pub fn no_auto_update(mut self) -> Self {
        self.auto_update = AutoUpdate::Disabled;
        self
    }

    /// Parse options from a JSON value: an object, or a string naming the element
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(element) => Ok(Self::element(element)),
            serde_json::Value::Object(_) => {
                serde_json::from_value::<RawOptions>(value)?.normalize()
            }
            other => Err(ScrollarError::InvalidOptions(json_kind(&other).to_string())),
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(input)?)
    }

    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str::<RawOptions>(input)?.normalize()
    }

    /// Serialize the normalized options back to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        let (element, container) = match &self.target {
            Target::Element(handle) => (Some(handle.clone()), None),
            Target::Container(handle) => (None, Some(handle.clone())),
        };
        let raw = RawOptions {
            element,
            container,
            hscroll: Some(self.hscroll),
            vscroll: Some(self.vscroll),
            auto_update: self.auto_update,
        };
        toml::to_string_pretty(&raw)
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn auto_update_mode(&self) -> AutoUpdate {
        self.auto_update
    }

    pub fn is_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.hscroll,
            Axis::Y => self.vscroll,
        }
    }

    /// Enabled axes, horizontal first
    pub fn axes(&self) -> AxisSet {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.is_enabled(axis))
            .collect::<SmallVec<_>>()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
