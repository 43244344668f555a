//! The story graph: a mapping of node ids to nodes plus a start node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoryResult;
use crate::node::Node;

/// A declarative branching narrative.
///
/// The graph is constructed once, either from a JSON document or
/// programmatically with [`StoryGraph::with_node`], and never mutated during
/// traversal. Cycles are legitimate; the sample story's retry screen targets
/// itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryGraph {
    /// Id of the node the narrative starts at.
    #[serde(default)]
    pub(crate) start_node: String,

    /// All nodes, keyed by id. A sorted map keeps validation output stable.
    #[serde(default)]
    pub(crate) nodes: BTreeMap<String, Node>,
}

impl StoryGraph {
    /// Create an empty graph with the given start node id.
    pub fn new(start_node: impl Into<String>) -> Self {
        Self {
            start_node: start_node.into(),
            nodes: BTreeMap::new(),
        }
    }

    /// Add a node, replacing any existing node with the same id.
    pub fn with_node(mut self, id: impl Into<String>, node: Node) -> Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Parse a story graph from its JSON wire format.
    pub fn from_json(json: &str) -> StoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the graph back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The start node id.
    pub fn start_node(&self) -> &str {
        &self.start_node
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all node ids in sorted order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Iterate over all `(id, node)` pairs in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }
}
