use std::fs;
use std::path::Path;

use dearly_story::sample;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    let story = sample::valentine()
        .to_json_pretty()
        .map_err(|e| e.to_string())?;
    fs::write(dir.join("story.json"), story)
        .map_err(|e| format!("cannot write story.json: {e}"))?;

    println!("Created story '{name}' in {name}/");
    println!("  story.json  — the sample valentine story, ready to edit");
    println!();
    println!("Get started:");
    println!("  dearly check {name}/story.json   # Validate the graph");
    println!("  dearly play {name}/story.json    # Play it in the terminal");

    Ok(())
}
