//! Traversal engine for dearly stories.
//!
//! A [`StorySession`] walks a validated [`dearly_story::StoryGraph`] one
//! yes/no choice at a time, emitting a [`RenderFrame`] for the presentation
//! layer on every transition. Nodes whose affirmative choice leads straight
//! to a terminal node arm the evasive button behavior in [`evade`].

/// Error types for the engine.
pub mod error;
/// Evasive button placement: proximity detection and constrained random
/// relocation.
pub mod evade;
/// Render descriptions handed to the presentation layer.
pub mod frame;
/// Session state and the transition function.
pub mod session;

pub use error::{EngineError, EngineResult};
pub use evade::{EvadeConfig, EvadeLayout, EvasiveButton, Placement, Point, Size};
pub use frame::{Choice, InteractionMode, RenderFrame};
pub use session::{Advance, SessionConfig, StorySession};
