//! Scrollar error types

use thiserror::Error;

/// Errors raised while configuring or mounting a scrollbar
#[derive(Error, Debug)]
pub enum ScrollarError {
    /// Neither `element` nor `container` was given
    #[error("Scrollar options must contain 'element' or 'container'")]
    MissingTarget,

    /// Both `element` and `container` were given
    #[error("Scrollar options must not contain both 'element' and 'container'")]
    ConflictingTargets,

    /// Options value is neither an object nor a string
    #[error("Scrollar options isn't object or string: {0}")]
    InvalidOptions(String),

    /// Options JSON could not be parsed
    #[error("Failed to parse options JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Options TOML could not be parsed
    #[error("Failed to parse options TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Content mutation verb is not supported
    #[error("Unknown content mutation: {0}")]
    UnknownMutation(String),

    /// Host environment cannot provide the scrollbar chrome
    #[error("Host environment unavailable: {0}")]
    HostUnavailable(String),
}

/// Result type for scrollar operations
pub type Result<T> = std::result::Result<T, ScrollarError>;
