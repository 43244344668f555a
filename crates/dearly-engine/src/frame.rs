//! Render descriptions handed to the presentation layer.

/// A binary choice on an interactive node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The affirmative choice.
    Yes,
    /// The negative choice.
    No,
}

/// How a node is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// No choices; the completion collaborator is invoked.
    Terminal,
    /// Only the affirmative choice is exposed.
    YesOnly,
    /// Both choices are exposed.
    Standard,
}

/// Everything the presentation layer needs to draw one screen.
///
/// Emitted by the session on every transition. The witty line has already
/// been picked (uniformly at random when the node carries several), so the
/// presentation layer renders it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// Id of the node this frame describes. Deferred callbacks (confetti
    /// after the fade) re-check it against the session before acting.
    pub node_id: String,
    /// Primary image URI.
    pub image: String,
    /// Fallback image URI, if the node has one.
    pub image_fallback: Option<String>,
    /// The witty line chosen for this render.
    pub witty_line: String,
    /// The question text. Empty on purely terminal nodes.
    pub question: String,
    /// How the node is presented.
    pub mode: InteractionMode,
    /// Whether the negative control should dodge the pointer on this screen.
    pub evasive_armed: bool,
}
