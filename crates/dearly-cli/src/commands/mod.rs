pub mod check;
pub mod init;
pub mod play;

use std::path::Path;

use colored::Colorize;

use dearly_story::{StoryGraph, ValidationResult};

/// Read and parse a story document.
fn load_graph(path: &Path) -> Result<StoryGraph, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    StoryGraph::from_json(&json).map_err(|e| e.to_string())
}

/// Print validation findings to stderr, warnings yellow and errors red.
fn print_findings(report: &ValidationResult) {
    for warning in report.warnings() {
        eprintln!("  {} {warning}", "warning:".yellow());
    }
    for error in report.errors() {
        eprintln!("  {} {error}", "error:".red());
    }
}
