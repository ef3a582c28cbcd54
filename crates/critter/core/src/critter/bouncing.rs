use crate::config::SimConfig;
use crate::direction::Direction;
use crate::rng::RandomSource;
use crate::view::View;

use super::{Action, Critter};

/// Keeps moving in one direction until blocked, then bounces off toward a
/// random free neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BouncingCritter {
    facing: Direction,
}

impl BouncingCritter {
    /// Facing used when boxed in with no free neighbor.
    pub const FALLBACK: Direction = Direction::South;

    pub const fn new(facing: Direction) -> Self {
        Self { facing }
    }

    /// Creates a critter facing a uniformly random direction.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let index = rng.pick_index(Direction::ALL.len()).unwrap_or_default();
        Self::new(Direction::ALL[index])
    }
}

impl Critter for BouncingCritter {
    fn facing(&self) -> Direction {
        self.facing
    }

    fn decide(&mut self, view: &View<'_>, rng: &mut dyn RandomSource) -> Option<Action> {
        if view.look(self.facing) != SimConfig::EMPTY_GLYPH {
            self.facing = view
                .find(SimConfig::EMPTY_GLYPH, rng)
                .unwrap_or(Self::FALLBACK);
        }
        // Always tries to move, even when every neighbor is taken.
        Some(Action::Move(self.facing))
    }
}
