use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use dearly_engine::{
    Advance, Choice, EvadeLayout, InteractionMode, Point, RenderFrame, SessionConfig, Size,
    StorySession,
};
use dearly_story::validate;

/// Nominal screen geometry standing in for the browser layout; the dodge
/// simulation needs a region to place the button in.
fn stage_layout() -> EvadeLayout {
    EvadeLayout {
        region: Size::new(640.0, 480.0),
        button: Size::new(120.0, 48.0),
        origin: Point::new(380.0, 400.0),
    }
}

enum Input {
    Yes,
    No,
    Quit,
}

pub fn run(file: &Path, seed: u64, choices: Option<&str>) -> Result<(), String> {
    let graph = super::load_graph(file)?;
    let report = validate(&graph);
    super::print_findings(&report);
    if !report.is_valid() {
        return Err("story failed validation".into());
    }

    let mut session = StorySession::new_unchecked(graph, SessionConfig::default().with_seed(seed));
    let mut script = choices.map(|s| {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect::<VecDeque<char>>()
    });

    let mut frame = session.start().map_err(|e| e.to_string())?;

    'screen: loop {
        println!();
        println!("  {}", frame.witty_line.italic());
        if !frame.question.is_empty() {
            println!("  {}", frame.question.bold());
        }
        println!("  {}", format!("[image: {}]", frame.image).dimmed());

        if frame.mode == InteractionMode::Terminal {
            // The celebration fires after the entry transition settles; the
            // guard keeps a late callback from celebrating the wrong screen.
            if session.completion_still_applies(&frame.node_id) {
                celebrate();
            }
            break;
        }

        if frame.evasive_armed {
            session.arm_evasive(stage_layout());
        }

        loop {
            let Some(input) = next_input(&mut script, &frame)? else {
                println!("  (to be continued...)");
                break 'screen;
            };

            let choice = match input {
                Input::Quit => break 'screen,
                Input::Yes => Choice::Yes,
                Input::No => {
                    // The armed button dodges the first grab.
                    if session.evasion_attempts() == 0 {
                        if let Some(p) = session.touch_started() {
                            let dodge =
                                format!("(the no button darts away to ({:.0}, {:.0}))", p.x, p.y);
                            println!("  {}", dodge.dimmed());
                            continue;
                        }
                    }
                    Choice::No
                }
            };

            match session.advance(choice).map_err(|e| e.to_string())? {
                Advance::Moved(next) => {
                    frame = next;
                    continue 'screen;
                }
                Advance::Ignored => {
                    println!("  (that button does nothing here)");
                }
            }
        }
    }

    Ok(())
}

/// Pull the next choice from the script, or prompt on stdin.
///
/// `None` means the session should end quietly: script exhausted or EOF.
fn next_input(
    script: &mut Option<VecDeque<char>>,
    frame: &RenderFrame,
) -> Result<Option<Input>, String> {
    if let Some(queue) = script {
        return Ok(queue.pop_front().and_then(parse_choice_char));
    }

    let prompt = if frame.mode == InteractionMode::YesOnly {
        "[y] > "
    } else {
        "[y/n] > "
    };

    let stdin = io::stdin();
    loop {
        print!("  {prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return Ok(None), // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(Input::Yes)),
            "n" | "no" => return Ok(Some(Input::No)),
            "q" | "quit" => return Ok(Some(Input::Quit)),
            "" => continue,
            other => println!("  (didn't catch '{other}', try y, n, or q)"),
        }
    }
}

fn parse_choice_char(c: char) -> Option<Input> {
    match c.to_ascii_lowercase() {
        'y' => Some(Input::Yes),
        'n' => Some(Input::No),
        'q' => Some(Input::Quit),
        _ => None,
    }
}

fn celebrate() {
    println!();
    println!("  {}", "<3 <3 <3   confetti!   <3 <3 <3".magenta().bold());
}
