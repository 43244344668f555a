//! Core types for dearly: story graphs, nodes, and structural validation.
//!
//! This crate defines the declarative story document that the engine
//! traverses. A [`StoryGraph`] is loaded once from JSON (or built
//! programmatically) and is immutable afterwards; [`validate`] checks its
//! structural integrity before any traversal is allowed to begin.

/// Error types used throughout the crate.
pub mod error;
/// The story graph: a mapping of node ids to nodes plus a start node.
pub mod graph;
/// A single screen of the narrative.
pub mod node;
/// The built-in sample story.
pub mod sample;
/// Structural validation of story graphs.
pub mod validate;

pub use error::{StoryError, StoryResult};
pub use graph::StoryGraph;
pub use node::Node;
pub use validate::{ValidationResult, validate};
