//! The LOD focus point and the patrol that moves it each frame.

use glam::{Vec2, Vec3};

use crate::{LodError, TerrainConfig};

/// Where detail is wanted this frame.
///
/// Only `x` and `y` drive subdivision; `z` stays zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FocusState {
    position: Vec3,
}

impl FocusState {
    /// Focus at `(x, y)` on the terrain plane.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec3::new(x, y, 0.0),
        }
    }

    /// Focus placed on the first corner of the patrol path.
    pub fn at_patrol_start(config: &TerrainConfig) -> Self {
        let start = config.patrol_start();
        Self::new(start.x, start.y)
    }

    /// Full position, `z` always zero.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The point subdivision measures distances from.
    pub fn xy(&self) -> Vec2 {
        self.position.truncate()
    }

    /// Move the focus to `xy`, keeping `z` at zero.
    pub fn set_xy(&mut self, xy: Vec2) {
        self.position = xy.extend(0.0);
    }

    /// Reject a focus with a NaN or infinite coordinate.
    pub fn validate(&self) -> Result<(), LodError> {
        let xy = self.xy();
        if xy.is_finite() {
            Ok(())
        } else {
            Err(LodError::InvalidFocus { x: xy.x, y: xy.y })
        }
    }

    /// Move the focus by hand, independent of the patrol.
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        self.set_xy(self.xy() + Vec2::new(dx, dy));
    }
}

/// One side of the patrol rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatrolLeg {
    /// +x until the right edge.
    East,
    /// -y until the bottom edge.
    South,
    /// -x until the left edge.
    West,
    /// +y until the top edge.
    North,
}

impl PatrolLeg {
    /// The leg after a clockwise turn.
    pub fn next(self) -> PatrolLeg {
        match self {
            PatrolLeg::East => PatrolLeg::South,
            PatrolLeg::South => PatrolLeg::West,
            PatrolLeg::West => PatrolLeg::North,
            PatrolLeg::North => PatrolLeg::East,
        }
    }

    /// Unit direction of travel.
    pub fn direction(self) -> Vec2 {
        match self {
            PatrolLeg::East => Vec2::X,
            PatrolLeg::South => Vec2::NEG_Y,
            PatrolLeg::West => Vec2::NEG_X,
            PatrolLeg::North => Vec2::Y,
        }
    }

    /// Distance still to travel along this leg before its edge. Negative once
    /// the focus is past the edge.
    fn remaining(self, pos: Vec2, bounds: &PatrolBounds) -> f32 {
        match self {
            PatrolLeg::East => bounds.right - pos.x,
            PatrolLeg::South => pos.y - bounds.bottom,
            PatrolLeg::West => pos.x - bounds.left,
            PatrolLeg::North => bounds.top - pos.y,
        }
    }

    fn snap(self, pos: Vec2, bounds: &PatrolBounds) -> Vec2 {
        match self {
            PatrolLeg::East => Vec2::new(bounds.right, pos.y),
            PatrolLeg::South => Vec2::new(pos.x, bounds.bottom),
            PatrolLeg::West => Vec2::new(bounds.left, pos.y),
            PatrolLeg::North => Vec2::new(pos.x, bounds.top),
        }
    }
}

/// Edges of the patrol rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatrolBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PatrolBounds {
    /// Rectangle spanned from the patrol start by the patrol extent.
    pub fn from_config(config: &TerrainConfig) -> Self {
        let start = config.patrol_start();
        let extent = config.patrol_extent();
        Self {
            left: start.x,
            right: start.x + extent.x,
            top: start.y,
            bottom: start.y - extent.y,
        }
    }

    /// Whether `point` lies inside the rectangle grown by `tolerance`.
    pub fn contains(&self, point: Vec2, tolerance: f32) -> bool {
        point.x >= self.left - tolerance
            && point.x <= self.right + tolerance
            && point.y >= self.bottom - tolerance
            && point.y <= self.top + tolerance
    }
}

/// Drives the focus clockwise around the patrol rectangle, one step per tick.
///
/// A leg ends once the focus is within half a step of its edge, or past it.
/// A focus within half a step is snapped onto the edge so rounding error does
/// not build up from lap to lap, and the next leg's step is taken in the same
/// tick. A focus farther past the edge is never moved more than one step per
/// tick, so it rejoins the path gradually.
#[derive(Clone, Debug)]
pub struct FocusTracker {
    leg: PatrolLeg,
    enabled: bool,
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTracker {
    /// A tracker heading east from the patrol start.
    pub fn new() -> Self {
        Self {
            leg: PatrolLeg::East,
            enabled: true,
        }
    }

    /// The leg the next tick moves along.
    pub fn leg(&self) -> PatrolLeg {
        self.leg
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pause or resume the patrol. A paused tracker leaves the focus alone.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Advance the focus by one patrol step.
    pub fn tick(&mut self, config: &TerrainConfig, focus: &mut FocusState) {
        if !self.enabled {
            return;
        }

        let step = config.patrol_step();
        let tolerance = step * 0.5;
        let bounds = PatrolBounds::from_config(config);
        let mut pos = focus.xy();

        // On the path at most one turn happens per tick. A focus placed off
        // the path may be past several edges; it turns without snapping and
        // walks back one step at a time.
        for _ in 0..4 {
            let remaining = self.leg.remaining(pos, &bounds);
            if remaining > tolerance {
                break;
            }
            if remaining >= -tolerance {
                pos = self.leg.snap(pos, &bounds);
            }
            let next = self.leg.next();
            tracing::trace!(from = ?self.leg, to = ?next, x = pos.x, y = pos.y, "patrol turn");
            self.leg = next;
        }

        focus.set_xy(pos + self.leg.direction() * step);
    }

    /// Ticks needed to travel once around the patrol rectangle.
    pub fn ticks_per_cycle(config: &TerrainConfig) -> usize {
        let legs = config.patrol_extent() / config.patrol_step();
        2 * (legs.x.round() as usize + legs.y.round() as usize)
    }
}
