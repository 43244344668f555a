//! Session state and the transition function.

use rand::SeedableRng;
use rand::rngs::StdRng;

use dearly_story::{Node, StoryGraph, validate};

use crate::error::{EngineError, EngineResult};
use crate::evade::{EvadeLayout, EvasiveButton, Point};
use crate::frame::{Choice, InteractionMode, RenderFrame};

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible witty-line picks and button placement.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of an [`StorySession::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The transition happened; here is the new screen.
    Moved(RenderFrame),
    /// The chosen branch has no target. Stray activations (a hidden or
    /// disabled control firing anyway) are silently ignored.
    Ignored,
}

/// A traversal through one story graph.
///
/// The only mutable traversal state is the current node id plus the
/// transient evasive activation; both are owned here, so independent
/// sessions never interfere.
#[derive(Debug)]
pub struct StorySession {
    graph: StoryGraph,
    current: String,
    halted: bool,
    evade: Option<EvasiveButton>,
    rng: StdRng,
}

impl StorySession {
    /// Validate the graph and create a session positioned at the start node.
    ///
    /// A graph with validation errors is rejected outright; no partial
    /// traversal is permitted.
    pub fn new(graph: StoryGraph, config: SessionConfig) -> EngineResult<Self> {
        let result = validate(&graph);
        if !result.is_valid() {
            return Err(EngineError::RejectedStory(result));
        }
        Ok(Self::new_unchecked(graph, config))
    }

    /// Create a session without re-validating the graph.
    ///
    /// For callers that already ran [`validate`] and surfaced the result
    /// themselves. Traversal still checks node resolution defensively and
    /// halts on a miss.
    pub fn new_unchecked(graph: StoryGraph, config: SessionConfig) -> Self {
        let current = graph.start_node().to_string();
        Self {
            graph,
            current,
            halted: false,
            evade: None,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The graph being traversed.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// Id of the current node.
    pub fn current_node_id(&self) -> &str {
        &self.current
    }

    /// Whether a fatal error has stopped the session.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// (Re-)enter the start node and emit its frame.
    pub fn start(&mut self) -> EngineResult<RenderFrame> {
        self.current = self.graph.start_node().to_string();
        self.evade = None;
        self.frame_for_current()
    }

    /// Apply one choice.
    ///
    /// A null branch target is a no-op ([`Advance::Ignored`]). Otherwise the
    /// current node moves, the evasive activation is torn down
    /// unconditionally, and the new node's frame is emitted. A node id that
    /// fails to resolve halts the session; every later call returns
    /// [`EngineError::Halted`].
    pub fn advance(&mut self, choice: Choice) -> EngineResult<Advance> {
        if self.halted {
            return Err(EngineError::Halted);
        }

        let target = match self.graph.get(&self.current) {
            Some(node) => match choice {
                Choice::Yes => node.yes_target().map(str::to_string),
                Choice::No => node.no_target().map(str::to_string),
            },
            None => {
                self.halted = true;
                return Err(EngineError::NodeNotFound(self.current.clone()));
            }
        };

        let Some(target) = target else {
            return Ok(Advance::Ignored);
        };

        // Deactivation is unconditional on every transition; re-arming is
        // the presentation layer's call after it sees the new frame.
        self.evade = None;
        self.current = target;
        self.frame_for_current().map(Advance::Moved)
    }

    /// Arm the evasive button for the current node.
    ///
    /// Only takes effect when the node is classified evasive; returns
    /// whether it did. The attempt counter always starts at zero.
    pub fn arm_evasive(&mut self, layout: EvadeLayout) -> bool {
        let armed = self
            .graph
            .get(&self.current)
            .is_some_and(|node| self.is_evasive(node));
        if armed {
            self.evade = Some(EvasiveButton::new(layout));
        }
        armed
    }

    /// The active evasive state, if armed.
    pub fn evasion(&self) -> Option<&EvasiveButton> {
        self.evade.as_ref()
    }

    /// Relocations performed in the current activation; zero when not armed.
    pub fn evasion_attempts(&self) -> u32 {
        self.evade.as_ref().map_or(0, EvasiveButton::attempts)
    }

    /// Forward a pointer-move event to the active evasive button.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<Point> {
        self.evade
            .as_mut()
            .and_then(|button| button.pointer_moved(pointer, &mut self.rng))
    }

    /// Forward a touch-start on the button to the active evasive button.
    pub fn touch_started(&mut self) -> Option<Point> {
        self.evade
            .as_mut()
            .map(|button| button.touch_started(&mut self.rng))
    }

    /// Guard for deferred completion callbacks.
    ///
    /// Timers scheduled around an earlier node are not cancellable; when one
    /// fires late, the callback must check here that the node it was
    /// scheduled for is still current (and terminal) before celebrating.
    pub fn completion_still_applies(&self, node_id: &str) -> bool {
        !self.halted
            && self.current == node_id
            && self.graph.get(node_id).is_some_and(Node::is_terminal)
    }

    /// The evasive predicate: interactive with both choices, and saying yes
    /// would end the story. Applies uniformly wherever the graph places such
    /// a node.
    fn is_evasive(&self, node: &Node) -> bool {
        !node.is_terminal()
            && !node.is_yes_only()
            && node.no_target().is_some()
            && node
                .yes_target()
                .and_then(|t| self.graph.get(t))
                .is_some_and(Node::is_terminal)
    }

    fn classify(node: &Node) -> InteractionMode {
        if node.is_terminal() {
            InteractionMode::Terminal
        } else if node.is_yes_only() {
            InteractionMode::YesOnly
        } else {
            InteractionMode::Standard
        }
    }

    fn frame_for_current(&mut self) -> EngineResult<RenderFrame> {
        let Some(node) = self.graph.get(&self.current) else {
            self.halted = true;
            return Err(EngineError::NodeNotFound(self.current.clone()));
        };

        let witty_line = node
            .pick_witty_line(&mut self.rng)
            .unwrap_or_default()
            .to_string();

        Ok(RenderFrame {
            node_id: self.current.clone(),
            image: node.image().unwrap_or_default().to_string(),
            image_fallback: node.image_fallback().map(str::to_string),
            witty_line,
            question: node.question().unwrap_or_default().to_string(),
            mode: Self::classify(node),
            evasive_armed: self.is_evasive(node),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evade::Size;
    use dearly_story::{Node, sample};

    fn session() -> StorySession {
        StorySession::new(sample::valentine(), SessionConfig::default()).unwrap()
    }

    fn layout() -> EvadeLayout {
        EvadeLayout {
            region: Size::new(640.0, 480.0),
            button: Size::new(120.0, 48.0),
            origin: Point::new(380.0, 400.0),
        }
    }

    #[test]
    fn starts_at_the_start_node() {
        let mut session = session();
        let frame = session.start().unwrap();
        assert_eq!(frame.node_id, "stage1");
        assert_eq!(frame.mode, InteractionMode::Standard);
        assert!(!frame.evasive_armed);
        assert_eq!(session.current_node_id(), "stage1");
    }

    #[test]
    fn no_then_yes_reaches_the_bridge() {
        let mut session = session();
        session.start().unwrap();

        session.advance(Choice::No).unwrap();
        assert_eq!(session.current_node_id(), "stage2_playful");

        session.advance(Choice::Yes).unwrap();
        assert_eq!(session.current_node_id(), "stage_yes_bridge");
    }

    #[test]
    fn three_yeses_reach_the_happy_ending() {
        let mut session = session();
        session.start().unwrap();

        session.advance(Choice::Yes).unwrap();
        session.advance(Choice::Yes).unwrap();
        let outcome = session.advance(Choice::Yes).unwrap();

        assert_eq!(session.current_node_id(), "ending_yes");
        match outcome {
            Advance::Moved(frame) => {
                assert_eq!(frame.mode, InteractionMode::Terminal);
                assert!(!frame.evasive_armed);
            }
            Advance::Ignored => panic!("expected a transition"),
        }
    }

    #[test]
    fn null_target_is_a_silent_no_op() {
        let mut session = session();
        session.start().unwrap();
        for _ in 0..3 {
            session.advance(Choice::Yes).unwrap();
        }
        assert_eq!(session.current_node_id(), "ending_yes");

        // Terminal node: both targets null.
        assert_eq!(session.advance(Choice::No).unwrap(), Advance::Ignored);
        assert_eq!(session.advance(Choice::Yes).unwrap(), Advance::Ignored);
        assert_eq!(session.current_node_id(), "ending_yes");
        assert!(!session.is_halted());
    }

    #[test]
    fn yes_only_node_ignores_no() {
        let graph = StoryGraph::new("ask")
            .with_node(
                "ask",
                Node::new("ask.gif", "Ready?")
                    .with_witty_line("Here we go.")
                    .yes_only()
                    .with_yes_target("done"),
            )
            .with_node(
                "done",
                Node::new("done.gif", "").with_witty_line("Done.").terminal(),
            );
        let mut session = StorySession::new(graph, SessionConfig::default()).unwrap();
        let frame = session.start().unwrap();
        assert_eq!(frame.mode, InteractionMode::YesOnly);

        assert_eq!(session.advance(Choice::No).unwrap(), Advance::Ignored);
        assert_eq!(session.current_node_id(), "ask");

        session.advance(Choice::Yes).unwrap();
        assert_eq!(session.current_node_id(), "done");
    }

    #[test]
    fn evasive_when_yes_leads_to_a_terminal_node() {
        let mut session = session();
        session.start().unwrap();
        session.advance(Choice::Yes).unwrap();

        let outcome = session.advance(Choice::Yes).unwrap();
        let Advance::Moved(frame) = outcome else {
            panic!("expected a transition");
        };
        assert_eq!(frame.node_id, "stage_yes_bridge");
        assert!(frame.evasive_armed);
    }

    #[test]
    fn not_evasive_when_yes_leads_to_a_non_terminal_node() {
        // stage1 is structurally identical to an evasive node except that
        // its yes branch continues the story.
        let mut session = session();
        let frame = session.start().unwrap();
        assert!(!frame.evasive_armed);
    }

    #[test]
    fn retry_ending_is_evasive() {
        let mut session = session();
        session.start().unwrap();
        session.advance(Choice::Yes).unwrap();
        // Walk the "no" gauntlet to the retry ending.
        for _ in 0..6 {
            session.advance(Choice::No).unwrap();
        }
        assert_eq!(session.current_node_id(), "ending_no");

        assert!(session.arm_evasive(layout()));
        assert!(session.evasion().is_some());
    }

    #[test]
    fn arming_fails_on_non_evasive_nodes() {
        let mut session = session();
        session.start().unwrap();
        assert!(!session.arm_evasive(layout()));
        assert!(session.evasion().is_none());
        assert!(session.touch_started().is_none());
        assert!(session.pointer_moved(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn transition_deactivates_evasion_and_resets_the_counter() {
        let mut session = session();
        session.start().unwrap();
        session.advance(Choice::Yes).unwrap();
        session.advance(Choice::Yes).unwrap();

        assert!(session.arm_evasive(layout()));
        session.touch_started().unwrap();
        session.touch_started().unwrap();
        assert_eq!(session.evasion_attempts(), 2);

        session.advance(Choice::No).unwrap();
        assert!(session.evasion().is_none());
        assert_eq!(session.evasion_attempts(), 0);

        // Re-activation on the next evasive node starts from scratch.
        assert_eq!(session.current_node_id(), "no_stage_1");
        assert!(session.arm_evasive(layout()));
        assert_eq!(session.evasion_attempts(), 0);
    }

    #[test]
    fn rejects_an_invalid_story() {
        let graph = StoryGraph::new("a").with_node(
            "a",
            Node::new("a.gif", "q")
                .with_witty_line("w")
                .with_yes_target("nowhere"),
        );
        let err = StorySession::new(graph, SessionConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::RejectedStory(_)));
    }

    #[test]
    fn dangling_target_halts_an_unchecked_session() {
        let graph = StoryGraph::new("a").with_node(
            "a",
            Node::new("a.gif", "q")
                .with_witty_line("w")
                .with_yes_target("nowhere"),
        );
        let mut session = StorySession::new_unchecked(graph, SessionConfig::default());
        session.start().unwrap();

        let err = session.advance(Choice::Yes).unwrap_err();
        assert!(matches!(err, EngineError::NodeNotFound(id) if id == "nowhere"));
        assert!(session.is_halted());

        // Halted sessions accept no further transitions.
        let err = session.advance(Choice::No).unwrap_err();
        assert!(matches!(err, EngineError::Halted));
    }

    #[test]
    fn completion_guard_checks_node_and_terminality() {
        let mut session = session();
        session.start().unwrap();
        assert!(!session.completion_still_applies("stage1"));
        assert!(!session.completion_still_applies("ending_yes"));

        for _ in 0..3 {
            session.advance(Choice::Yes).unwrap();
        }
        assert!(session.completion_still_applies("ending_yes"));
        assert!(!session.completion_still_applies("stage1"));
    }

    #[test]
    fn witty_line_comes_from_the_node_text() {
        let mut session = session();
        let frame = session.start().unwrap();
        let expected = [
            "Are you ready for an adventure?",
            "Ready to begin something special?",
            "Let's start our journey together.",
        ];
        assert!(expected.contains(&frame.witty_line.as_str()));
    }

    #[test]
    fn same_seed_same_walk() {
        let mut a = StorySession::new(sample::valentine(), SessionConfig::default().with_seed(7))
            .unwrap();
        let mut b = StorySession::new(sample::valentine(), SessionConfig::default().with_seed(7))
            .unwrap();

        assert_eq!(a.start().unwrap(), b.start().unwrap());
        assert_eq!(
            a.advance(Choice::No).unwrap(),
            b.advance(Choice::No).unwrap()
        );
    }
}
