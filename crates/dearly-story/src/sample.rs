//! The built-in sample story.
//!
//! A valentine ask in eleven screens: an opening, two flavors of second
//! stage, a bridge, a five-step "no" gauntlet, and two endings. The happy
//! ending is terminal; the other ending is a soft retry loop that targets
//! itself, which also arms the evasive button there. Every node is reachable
//! and the graph validates with no findings.

use crate::graph::StoryGraph;
use crate::node::Node;

/// Build the sample valentine story.
pub fn valentine() -> StoryGraph {
    StoryGraph::new("stage1")
        .with_node(
            "stage1",
            Node::new("images/stage1.gif", "Shall we begin our journey together?")
                .with_fallback("https://example.com/fallback/stage1.gif")
                .with_witty_lines([
                    "Are you ready for an adventure?",
                    "Ready to begin something special?",
                    "Let's start our journey together.",
                ])
                .with_yes_target("stage2_romantic")
                .with_no_target("stage2_playful"),
        )
        .with_node(
            "stage2_romantic",
            Node::new("images/stage2_romantic.jpeg", "Do you feel it too?")
                .with_fallback("https://example.com/fallback/stage2_romantic.gif")
                .with_witty_line("You chose the scenic route. Good call.")
                .with_yes_target("stage_yes_bridge")
                .with_no_target("no_stage_1"),
        )
        .with_node(
            "stage2_playful",
            Node::new("images/stage2_playful.jpeg", "Okay but seriously, say yes?")
                .with_witty_lines([
                    "Playing hard to get? I like it.",
                    "So you want to play? Let's see.",
                    "Alright, I see how it is.",
                ])
                .with_yes_target("stage_yes_bridge")
                .with_no_target("no_stage_1"),
        )
        .with_node(
            "stage_yes_bridge",
            Node::new("images/stage_yes_bridge.gif", "Will you be my valentine?")
                .with_witty_lines([
                    "You chose yes. How perfect.",
                    "I knew you had good taste.",
                ])
                .with_yes_target("ending_yes")
                .with_no_target("no_stage_1"),
        )
        .with_node(
            "no_stage_1",
            Node::new("images/no_stage_1.jpeg", "How about now?")
                .with_witty_lines(["Hmm, really?", "You sure about that?"])
                .with_yes_target("ending_yes")
                .with_no_target("no_stage_2"),
        )
        .with_node(
            "no_stage_2",
            Node::new("images/no_stage_2.jpeg", "Here is the free snacks button.")
                .with_witty_lines(["Two nos? You're teasing me.", "Still playing hard to get?"])
                .with_yes_target("ending_yes")
                .with_no_target("no_stage_3"),
        )
        .with_node(
            "no_stage_3",
            Node::new("images/no_stage_3.jpeg", "Third time's the charm?")
                .with_witty_line("I have all day.")
                .with_yes_target("ending_yes")
                .with_no_target("no_stage_4"),
        )
        .with_node(
            "no_stage_4",
            Node::new("images/no_stage_4.jpeg", "Last chance before the finale...")
                .with_witty_lines([
                    "Fourth no? You're committed.",
                    "Okay okay, one more try.",
                    "I'm not going anywhere.",
                ])
                .with_yes_target("ending_yes")
                .with_no_target("no_stage_5"),
        )
        .with_node(
            "no_stage_5",
            Node::new("images/no_stage_5.gif", "Final question. Yes or no?")
                .with_witty_lines(["Fifth no! You're relentless.", "One. More. Try."])
                .with_yes_target("ending_yes")
                .with_no_target("ending_no"),
        )
        .with_node(
            "ending_yes",
            Node::new("images/ending_yes.jpeg", "")
                .with_fallback("https://example.com/fallback/ending_yes.gif")
                .with_witty_line("You said yes! Happy Valentine's Day!")
                .terminal(),
        )
        .with_node(
            "ending_no",
            Node::new(
                "images/ending_no.jpeg",
                "The no button must be broken. Try yes instead?",
            )
            .with_witty_line("Wait, you actually clicked no?")
            .with_yes_target("ending_yes")
            .with_no_target("ending_no"),
        )
}
