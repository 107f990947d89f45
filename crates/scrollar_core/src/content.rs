//! Content mutations
//!
//! Replacing or extending the content through these verbs always triggers a
//! geometry update afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrollarError;

/// A supported mutation verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationVerb {
    /// Replace inner markup (default)
    #[default]
    Html,
    /// Replace inner text
    Text,
    /// Insert after the last child
    Append,
    /// Insert before the first child
    Prepend,
}

impl MutationVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            MutationVerb::Html => "html",
            MutationVerb::Text => "text",
            MutationVerb::Append => "append",
            MutationVerb::Prepend => "prepend",
        }
    }
}

impl FromStr for MutationVerb {
    type Err = ScrollarError;

    fn from_str(verb: &str) -> Result<Self, Self::Err> {
        match verb {
            "html" => Ok(MutationVerb::Html),
            "text" => Ok(MutationVerb::Text),
            "append" => Ok(MutationVerb::Append),
            "prepend" => Ok(MutationVerb::Prepend),
            other => Err(ScrollarError::UnknownMutation(other.to_string())),
        }
    }
}

impl fmt::Display for MutationVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb together with its payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMutation {
    pub verb: MutationVerb,
    pub payload: String,
}

impl ContentMutation {
    pub fn new(verb: MutationVerb, payload: impl Into<String>) -> Self {
        Self {
            verb,
            payload: payload.into(),
        }
    }

    /// Replace inner markup
    pub fn html(payload: impl Into<String>) -> Self {
        Self::new(MutationVerb::Html, payload)
    }

    pub fn text(payload: impl Into<String>) -> Self {
        Self::new(MutationVerb::Text, payload)
    }

    pub fn append(payload: impl Into<String>) -> Self {
        Self::new(MutationVerb::Append, payload)
    }

    pub fn prepend(payload: impl Into<String>) -> Self {
        Self::new(MutationVerb::Prepend, payload)
    }

    /// Parse a verb name and pair it with the payload
    pub fn from_verb(verb: &str, payload: impl Into<String>) -> Result<Self, ScrollarError> {
        Ok(Self::new(verb.parse()?, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbs_parse() {
        for verb in [
            MutationVerb::Html,
            MutationVerb::Text,
            MutationVerb::Append,
            MutationVerb::Prepend,
        ] {
            assert_eq!(verb.as_str().parse::<MutationVerb>().unwrap(), verb);
        }
    }

    #[test]
    fn test_unknown_verb_is_rejected() {
        let err = ContentMutation::from_verb("replaceWith", "<p>x</p>").unwrap_err();
        assert!(matches!(err, ScrollarError::UnknownMutation(ref v) if v == "replaceWith"));
    }

    #[test]
    fn test_default_verb_is_html() {
        assert_eq!(MutationVerb::default(), MutationVerb::Html);
        assert_eq!(
            ContentMutation::html("<b>hi</b>"),
            ContentMutation::from_verb("html", "<b>hi</b>").unwrap()
        );
    }
}
