use crate::config::SimConfig;
use crate::direction::Direction;
use crate::rng::RandomSource;
use crate::view::View;

use super::{Action, Critter};

/// Hugs walls by scanning clockwise from its facing for the first free cell.
///
/// Before scanning it looks three steps counter-clockwise from its facing; if
/// that cell is blocked it has just passed a wall corner and turns two steps
/// counter-clockwise to stay against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallFollower {
    facing: Direction,
}

impl WallFollower {
    pub const INITIAL_FACING: Direction = Direction::South;

    pub const fn new() -> Self {
        Self::with_facing(Self::INITIAL_FACING)
    }

    pub const fn with_facing(facing: Direction) -> Self {
        Self { facing }
    }
}

impl Default for WallFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl Critter for WallFollower {
    fn facing(&self) -> Direction {
        self.facing
    }

    fn decide(&mut self, view: &View<'_>, _rng: &mut dyn RandomSource) -> Option<Action> {
        let mut start = self.facing;
        if view.look(self.facing.rotate(-3)) != SimConfig::EMPTY_GLYPH {
            self.facing = self.facing.rotate(-2);
            start = self.facing;
        }

        while view.look(self.facing) != SimConfig::EMPTY_GLYPH {
            self.facing = self.facing.rotate(1);
            if self.facing == start {
                // Enclosed on all sides: keep the direction the scan began with.
                break;
            }
        }

        Some(Action::Move(self.facing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::testing::grid_from_rows;
    use crate::vector::Vector;

    fn decide(rows: &[&str], origin: Vector, critter: &mut WallFollower) -> Option<Action> {
        let grid = grid_from_rows(rows);
        let view = View::new(&grid, origin);
        critter.decide(&view, &mut SequenceRng::default())
    }

    #[test]
    fn walks_straight_in_open_space() {
        let mut critter = WallFollower::new();
        let action = decide(&["   ", "   ", "   "], Vector::new(1, 1), &mut critter);
        assert_eq!(action, Some(Action::Move(Direction::South)));
        assert_eq!(critter.facing(), Direction::South);
    }

    #[test]
    fn turns_around_wall_corner_then_scans_clockwise() {
        // Wall along the east column: look back at ne is blocked, so the
        // facing swings to e, which is blocked too, then se, then s is free.
        let mut critter = WallFollower::new();
        let action = decide(&["  #", "  #", "  #"], Vector::new(1, 1), &mut critter);
        assert_eq!(action, Some(Action::Move(Direction::South)));
    }

    #[test]
    fn scans_clockwise_to_first_free_cell() {
        // Facing north with the north side walled: ne and e are blocked too,
        // se is the first free cell clockwise.
        let mut critter = WallFollower::with_facing(Direction::North);
        let action = decide(&["###", "  #", "   "], Vector::new(1, 1), &mut critter);
        assert_eq!(action, Some(Action::Move(Direction::SouthEast)));
        assert_eq!(critter.facing(), Direction::SouthEast);
    }

    #[test]
    fn enclosed_follower_returns_to_scan_start() {
        // sw is blocked (look-back from s), so the scan starts at e and the
        // full loop lands back on it.
        let mut critter = WallFollower::new();
        let action = decide(&["###", "# #", "###"], Vector::new(1, 1), &mut critter);
        assert_eq!(action, Some(Action::Move(Direction::East)));
    }

    #[test]
    fn scan_wraps_past_north() {
        let mut critter = WallFollower::with_facing(Direction::West);
        // Look-back from w is se, which is free, so the scan starts at w and
        // runs w, nw, n, ne, e before reaching se.
        let action = decide(&["###", "# #", "## "], Vector::new(1, 1), &mut critter);
        assert_eq!(action, Some(Action::Move(Direction::SouthEast)));
    }
}
