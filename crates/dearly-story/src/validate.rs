//! Structural validation of story graphs.
//!
//! Validation runs once, before any traversal. Errors block the engine from
//! starting; warnings flag design issues (unreachable content, terminal
//! nodes with dangling targets) without stopping anything.

use std::collections::HashSet;

use crate::graph::StoryGraph;
use crate::node::Node;

/// Outcome of validating a story graph.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// True when no hard errors were found. Warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Hard errors that must block traversal.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Non-fatal findings worth surfacing to the story author.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            write!(f, "valid ({} warnings)", self.warnings.len())
        } else {
            write!(f, "{}", self.errors.join("; "))
        }
    }
}

/// Validate the structural integrity of a story graph.
///
/// Pure and deterministic: the same graph always yields the same result,
/// and the graph is never mutated.
pub fn validate(graph: &StoryGraph) -> ValidationResult {
    let mut result = ValidationResult::default();

    check_start_node(graph, &mut result);

    for (id, node) in graph.nodes() {
        check_required_fields(id, node, &mut result);
        check_witty_text(id, node, &mut result);
        check_targets_resolve(graph, id, node, &mut result);
        check_yes_only(id, node, &mut result);
        check_terminal_targets(id, node, &mut result);
    }

    check_reachability(graph, &mut result);

    result
}

fn check_start_node(graph: &StoryGraph, result: &mut ValidationResult) {
    if graph.start_node.is_empty() {
        result.error("missing start_node in story document".to_string());
    } else if !graph.contains(&graph.start_node) {
        result.error(format!(
            "start_node \"{}\" does not exist in nodes",
            graph.start_node
        ));
    }
}

fn check_required_fields(id: &str, node: &Node, result: &mut ValidationResult) {
    if node.image.is_none() {
        result.error(format!("node \"{id}\" missing required field: image"));
    }
    if node.question.is_none() {
        result.error(format!("node \"{id}\" missing required field: question"));
    }
    if node.yes_target.is_none() {
        result.error(format!("node \"{id}\" missing required field: yes_target"));
    }
    if node.no_target.is_none() {
        result.error(format!("node \"{id}\" missing required field: no_target"));
    }
    if node.is_terminal.is_none() {
        result.error(format!("node \"{id}\" missing required field: isTerminal"));
    }
}

fn check_witty_text(id: &str, node: &Node, result: &mut ValidationResult) {
    let has_line = node.witty_line.as_ref().is_some_and(|l| !l.is_empty());
    let has_lines = node.witty_lines.as_ref().is_some_and(|l| !l.is_empty());
    if !has_line && !has_lines {
        result.error(format!(
            "node \"{id}\" must have wittyLine (string) or wittyLines (non-empty array)"
        ));
    }
    if node
        .witty_lines
        .as_ref()
        .is_some_and(|lines| lines.iter().any(String::is_empty))
    {
        result.error(format!("node \"{id}\" wittyLines must not contain empty strings"));
    }
}

fn check_targets_resolve(graph: &StoryGraph, id: &str, node: &Node, result: &mut ValidationResult) {
    match node.yes_target() {
        Some(target) if !graph.contains(target) => {
            result.error(format!("node \"{id}\" yes_target \"{target}\" does not exist"));
        }
        _ => {}
    }
    match node.no_target() {
        Some(target) if !graph.contains(target) => {
            result.error(format!("node \"{id}\" no_target \"{target}\" does not exist"));
        }
        _ => {}
    }
}

fn check_yes_only(id: &str, node: &Node, result: &mut ValidationResult) {
    if node.is_yes_only() && node.no_target().is_some() {
        result.error(format!("node \"{id}\" with yesOnly must have no_target: null"));
    }
}

fn check_terminal_targets(id: &str, node: &Node, result: &mut ValidationResult) {
    if node.is_terminal() && (node.yes_target().is_some() || node.no_target().is_some()) {
        result.warning(format!("terminal node \"{id}\" has non-null targets"));
    }
}

/// Depth-first reachability from the start node over both edges.
/// The visited set keeps the walk cycle-safe; self-loops are expected.
fn check_reachability(graph: &StoryGraph, result: &mut ValidationResult) {
    if !graph.contains(&graph.start_node) {
        return;
    }

    let mut reachable: HashSet<&str> = HashSet::new();
    let mut stack = vec![graph.start_node.as_str()];

    while let Some(id) = stack.pop() {
        if !reachable.insert(id) {
            continue;
        }
        if let Some(node) = graph.get(id) {
            for target in [node.yes_target(), node.no_target()].into_iter().flatten() {
                if graph.contains(target) {
                    stack.push(target);
                }
            }
        }
    }

    for id in graph.node_ids() {
        if !reachable.contains(id) {
            result.warning(format!("node \"{id}\" is unreachable from start_node"));
        }
    }
}
