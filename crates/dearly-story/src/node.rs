//! A single screen of the narrative.
//!
//! Wire fields are kept optional so that a malformed document still parses;
//! [`crate::validate`] reports the missing pieces with the offending node id
//! instead of the parser rejecting the whole file. Accessors flatten the
//! optionality for code that works with validated graphs.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an `Option<Option<T>>` so that an explicit JSON `null`
/// becomes `Some(None)` while an absent key stays `None` (via
/// `#[serde(default)]`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// One screen of the narrative: an image, a witty line, a question, and the
/// yes/no branch targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    /// Primary image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<String>,

    /// Fallback image URI, tried when the primary fails to load.
    #[serde(
        rename = "imageFallback",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) image_fallback: Option<String>,

    /// A single witty line.
    #[serde(rename = "wittyLine", default, skip_serializing_if = "Option::is_none")]
    pub(crate) witty_line: Option<String>,

    /// Several witty lines; one is picked at random per render.
    #[serde(
        rename = "wittyLines",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) witty_lines: Option<Vec<String>>,

    /// The question shown under the image. May be empty on terminal nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) question: Option<String>,

    /// Target node for the affirmative choice. The outer `Option` tracks
    /// whether the key was present at all; the inner one holds the id or
    /// an explicit null.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) yes_target: Option<Option<String>>,

    /// Target node for the negative choice. Same shape as `yes_target`.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) no_target: Option<Option<String>>,

    /// Whether this node ends the narrative.
    #[serde(rename = "isTerminal", default, skip_serializing_if = "Option::is_none")]
    pub(crate) is_terminal: Option<bool>,

    /// When true, only the affirmative choice is offered.
    #[serde(rename = "yesOnly", default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) yes_only: bool,
}

impl Node {
    /// Create a non-terminal node with the given image URI and question,
    /// both branch targets explicitly null.
    pub fn new(image: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            image_fallback: None,
            witty_line: None,
            witty_lines: None,
            question: Some(question.into()),
            yes_target: Some(None),
            no_target: Some(None),
            is_terminal: Some(false),
            yes_only: false,
        }
    }

    /// Set the fallback image URI.
    pub fn with_fallback(mut self, uri: impl Into<String>) -> Self {
        self.image_fallback = Some(uri.into());
        self
    }

    /// Set a single witty line.
    pub fn with_witty_line(mut self, line: impl Into<String>) -> Self {
        self.witty_line = Some(line.into());
        self
    }

    /// Set several witty lines; one is picked at random per render.
    pub fn with_witty_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.witty_lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Set the affirmative branch target.
    pub fn with_yes_target(mut self, id: impl Into<String>) -> Self {
        self.yes_target = Some(Some(id.into()));
        self
    }

    /// Set the negative branch target.
    pub fn with_no_target(mut self, id: impl Into<String>) -> Self {
        self.no_target = Some(Some(id.into()));
        self
    }

    /// Mark this node as terminal.
    pub fn terminal(mut self) -> Self {
        self.is_terminal = Some(true);
        self
    }

    /// Offer only the affirmative choice on this node.
    pub fn yes_only(mut self) -> Self {
        self.yes_only = true;
        self
    }

    /// Primary image URI, if present.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Fallback image URI, if any.
    pub fn image_fallback(&self) -> Option<&str> {
        self.image_fallback.as_deref()
    }

    /// The question text, if present.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// The affirmative branch target, flattening "key absent" and
    /// "explicit null" into `None`.
    pub fn yes_target(&self) -> Option<&str> {
        self.yes_target.as_ref().and_then(|t| t.as_deref())
    }

    /// The negative branch target, flattened like [`Node::yes_target`].
    pub fn no_target(&self) -> Option<&str> {
        self.no_target.as_ref().and_then(|t| t.as_deref())
    }

    /// Whether this node ends the narrative. Absent flag reads as false.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal.unwrap_or(false)
    }

    /// Whether only the affirmative choice is offered.
    pub fn is_yes_only(&self) -> bool {
        self.yes_only
    }

    /// Pick a witty line for rendering.
    ///
    /// When the node carries several lines one is chosen uniformly at
    /// random; the choice is never cached, so re-entering the node
    /// reselects. A single line is returned as-is.
    pub fn pick_witty_line(&self, rng: &mut StdRng) -> Option<&str> {
        match &self.witty_lines {
            Some(lines) if !lines.is_empty() => {
                Some(lines[rng.random_range(0..lines.len())].as_str())
            }
            _ => self.witty_line.as_deref(),
        }
    }
}
