use std::path::Path;

use dearly_story::validate;

pub fn run(file: &Path) -> Result<(), String> {
    let graph = super::load_graph(file)?;
    let report = validate(&graph);
    super::print_findings(&report);

    if !report.is_valid() {
        let errors = report.errors().len();
        return Err(format!(
            "{} error{} found",
            errors,
            if errors == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} nodes, starting at \"{}\"",
        graph.node_count(),
        graph.start_node()
    );

    Ok(())
}
