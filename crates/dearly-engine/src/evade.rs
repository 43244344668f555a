//! Evasive button placement: proximity detection and constrained random
//! relocation.
//!
//! Armed only while the current node's affirmative choice leads straight to
//! a terminal node. A pointer coming within the proximity threshold of the
//! button's center (or any touch landing on it) relocates the button to a
//! uniform random position inside the containing region, keeping a margin
//! from every edge. After enough dodges the button shrinks.

use rand::Rng;
use rand::rngs::StdRng;

/// A position in region coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset from the region origin.
    pub x: f64,
    /// Vertical offset from the region origin.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A width/height pair in region coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// On-screen measurements the presentation layer supplies at activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvadeLayout {
    /// The containing region the button must stay inside.
    pub region: Size,
    /// The button's own size.
    pub button: Size,
    /// The button's natural in-flow position before any relocation.
    pub origin: Point,
}

/// Tuning knobs for the evasive behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvadeConfig {
    /// Pointer distance below which the button relocates.
    pub proximity_threshold: f64,
    /// Minimum distance kept from every region edge.
    pub margin: f64,
    /// Number of dodges after which the button shrinks.
    pub shrink_after: u32,
    /// Scale applied once the shrink threshold is crossed.
    pub shrink_scale: f64,
}

impl Default for EvadeConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 100.0,
            margin: 20.0,
            shrink_after: 5,
            shrink_scale: 0.8,
        }
    }
}

/// Where the button currently sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Natural in-flow position; no relocation has happened yet.
    Natural,
    /// Absolute offset from the region origin after a relocation.
    Moved(Point),
}

/// State of one evasive activation.
///
/// Created when an evasive node becomes current and dropped on the next
/// transition, so the attempt counter and placement always start fresh.
#[derive(Debug)]
pub struct EvasiveButton {
    layout: EvadeLayout,
    config: EvadeConfig,
    attempts: u32,
    placement: Placement,
}

impl EvasiveButton {
    /// Arm the behavior with the default configuration.
    pub fn new(layout: EvadeLayout) -> Self {
        Self::with_config(layout, EvadeConfig::default())
    }

    /// Arm the behavior with a custom configuration.
    pub fn with_config(layout: EvadeLayout, config: EvadeConfig) -> Self {
        Self {
            layout,
            config,
            attempts: 0,
            placement: Placement::Natural,
        }
    }

    /// Number of relocations so far in this activation.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Current placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Whether the shrink threshold has been crossed. Persists for the rest
    /// of the activation once true.
    pub fn is_shrunk(&self) -> bool {
        self.attempts > self.config.shrink_after
    }

    /// Scale the presentation layer should apply to the button.
    pub fn scale(&self) -> f64 {
        if self.is_shrunk() {
            self.config.shrink_scale
        } else {
            1.0
        }
    }

    /// Center of the button's current bounding box.
    pub fn center(&self) -> Point {
        let top_left = match self.placement {
            Placement::Natural => self.layout.origin,
            Placement::Moved(p) => p,
        };
        Point::new(
            top_left.x + self.layout.button.width / 2.0,
            top_left.y + self.layout.button.height / 2.0,
        )
    }

    /// React to a pointer-move event.
    ///
    /// Relocates when the pointer is strictly closer than the proximity
    /// threshold to the button center; returns the new offset, or `None`
    /// when the pointer is still far enough away.
    pub fn pointer_moved(&mut self, pointer: Point, rng: &mut StdRng) -> Option<Point> {
        if pointer.distance_to(self.center()) < self.config.proximity_threshold {
            Some(self.relocate(rng))
        } else {
            None
        }
    }

    /// React to a touch landing on the button. Touch contact already implies
    /// proximity, so this always relocates.
    pub fn touch_started(&mut self, rng: &mut StdRng) -> Point {
        self.relocate(rng)
    }

    /// Restore the natural placement and zero the attempt counter. Safe to
    /// call any number of times, including before any relocation.
    pub fn reset(&mut self) {
        self.attempts = 0;
        self.placement = Placement::Natural;
    }

    /// Pick and apply a new position. Each call is synchronous and
    /// independent; rapid triggers never queue.
    fn relocate(&mut self, rng: &mut StdRng) -> Point {
        self.attempts += 1;

        let margin = self.config.margin;
        let position = Point::new(
            sample_axis(self.layout.region.width, self.layout.button.width, margin, rng),
            sample_axis(self.layout.region.height, self.layout.button.height, margin, rng),
        );
        self.placement = Placement::Moved(position);
        position
    }
}

/// Uniform draw from `[margin, container - element - margin)` on one axis.
/// Degenerate ranges (region too small) collapse to the margin itself.
fn sample_axis(container: f64, element: f64, margin: f64, rng: &mut StdRng) -> f64 {
    let max = container - element - margin;
    if max <= margin {
        margin
    } else {
        rng.random_range(margin..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn layout() -> EvadeLayout {
        EvadeLayout {
            region: Size::new(640.0, 480.0),
            button: Size::new(120.0, 48.0),
            origin: Point::new(380.0, 400.0),
        }
    }

    #[test]
    fn relocations_stay_in_bounds() {
        let mut button = EvasiveButton::new(layout());
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..10_000 {
            let p = button.touch_started(&mut rng);
            assert!(p.x >= 20.0 && p.x <= 640.0 - 120.0 - 20.0, "x out of bounds: {}", p.x);
            assert!(p.y >= 20.0 && p.y <= 480.0 - 48.0 - 20.0, "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn degenerate_region_collapses_to_margin() {
        let tight = EvadeLayout {
            region: Size::new(100.0, 60.0),
            button: Size::new(120.0, 48.0),
            origin: Point::new(0.0, 0.0),
        };
        let mut button = EvasiveButton::new(tight);
        let mut rng = StdRng::seed_from_u64(3);

        let p = button.touch_started(&mut rng);
        assert_eq!(p, Point::new(20.0, 20.0));
    }

    #[test]
    fn shrinks_after_the_sixth_relocation_and_not_before() {
        let mut button = EvasiveButton::new(layout());
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..5 {
            button.touch_started(&mut rng);
            assert!(!button.is_shrunk());
            assert_eq!(button.scale(), 1.0);
        }
        button.touch_started(&mut rng);
        assert_eq!(button.attempts(), 6);
        assert!(button.is_shrunk());
        assert_eq!(button.scale(), 0.8);

        // Crossing is one-way within an activation.
        button.touch_started(&mut rng);
        assert!(button.is_shrunk());
    }

    #[test]
    fn pointer_outside_threshold_does_not_relocate() {
        let mut button = EvasiveButton::new(layout());
        let mut rng = StdRng::seed_from_u64(8);
        let center = button.center();

        let far = Point::new(center.x - 200.0, center.y);
        assert!(button.pointer_moved(far, &mut rng).is_none());
        assert_eq!(button.attempts(), 0);
        assert_eq!(button.placement(), Placement::Natural);

        // Exactly at the threshold is still "far enough".
        let at_threshold = Point::new(center.x - 100.0, center.y);
        assert!(button.pointer_moved(at_threshold, &mut rng).is_none());
    }

    #[test]
    fn pointer_inside_threshold_relocates() {
        let mut button = EvasiveButton::new(layout());
        let mut rng = StdRng::seed_from_u64(8);
        let center = button.center();

        let near = Point::new(center.x - 99.0, center.y);
        let moved = button.pointer_moved(near, &mut rng);
        assert!(moved.is_some());
        assert_eq!(button.attempts(), 1);
        assert_eq!(button.placement(), Placement::Moved(moved.unwrap()));
    }

    #[test]
    fn proximity_tracks_the_relocated_center() {
        let mut button = EvasiveButton::new(layout());
        let mut rng = StdRng::seed_from_u64(11);

        let moved = button.touch_started(&mut rng);
        let new_center = Point::new(moved.x + 60.0, moved.y + 24.0);
        assert_eq!(button.center(), new_center);
    }

    #[test]
    fn reset_is_idempotent_and_restores_natural_placement() {
        let mut button = EvasiveButton::new(layout());
        let mut rng = StdRng::seed_from_u64(2);

        // Reset before any activation is a no-op.
        button.reset();
        assert_eq!(button.placement(), Placement::Natural);

        for _ in 0..7 {
            button.touch_started(&mut rng);
        }
        assert!(button.is_shrunk());

        button.reset();
        button.reset();
        assert_eq!(button.attempts(), 0);
        assert!(!button.is_shrunk());
        assert_eq!(button.placement(), Placement::Natural);
    }

    proptest! {
        #[test]
        fn relocation_in_bounds_for_any_roomy_region(
            width in 200.0f64..2000.0,
            height in 120.0f64..2000.0,
            seed in 0u64..1000,
        ) {
            let layout = EvadeLayout {
                region: Size::new(width, height),
                button: Size::new(120.0, 48.0),
                origin: Point::new(0.0, 0.0),
            };
            let mut button = EvasiveButton::new(layout);
            let mut rng = StdRng::seed_from_u64(seed);

            for _ in 0..20 {
                let p = button.touch_started(&mut rng);
                prop_assert!(p.x >= 20.0 && p.x <= width - 120.0 - 20.0);
                prop_assert!(p.y >= 20.0 && p.y <= height - 48.0 - 20.0);
            }
        }
    }
}
