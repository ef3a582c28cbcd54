//! Occupant variants and the decision contract shared by critters.
//!
//! Occupants form a closed set ([`Behavior`]). Only some of them act: those
//! expose a [`Critter`] through [`Behavior::as_critter_mut`], and the turn
//! resolver never asks anything else for a decision.
mod bouncing;
mod wall_follower;

pub use bouncing::BouncingCritter;
pub use wall_follower::WallFollower;

use std::fmt;

use strum::{Display, EnumIter};

use crate::direction::Direction;
use crate::rng::RandomSource;
use crate::view::View;

/// Stable handle of an occupant inside a world's arena.
///
/// The handle survives moves, which makes it the identity used to guarantee
/// that nothing acts twice in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OccupantId(pub u32);

impl OccupantId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a critter wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Step one cell in the given direction.
    Move(Direction),
}

/// Per-turn decision contract of actable occupants.
pub trait Critter {
    /// Direction the critter currently prefers; persists across turns.
    fn facing(&self) -> Direction;

    /// Looks around through `view` and returns the action to attempt, if any.
    fn decide(&mut self, view: &View<'_>, rng: &mut dyn RandomSource) -> Option<Action>;
}

/// Kind of occupant a legend character stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OccupantKind {
    Wall,
    BouncingCritter,
    WallFollower,
}

impl OccupantKind {
    /// Builds a fresh occupant of this kind in its initial state.
    pub fn spawn(self, rng: &mut dyn RandomSource) -> Behavior {
        match self {
            OccupantKind::Wall => Behavior::Wall,
            OccupantKind::BouncingCritter => Behavior::Bouncing(BouncingCritter::random(rng)),
            OccupantKind::WallFollower => Behavior::WallFollower(WallFollower::new()),
        }
    }

    pub const fn is_actable(self) -> bool {
        !matches!(self, OccupantKind::Wall)
    }
}

/// State of one occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Inert obstacle.
    Wall,
    Bouncing(BouncingCritter),
    WallFollower(WallFollower),
}

impl Behavior {
    pub const fn kind(&self) -> OccupantKind {
        match self {
            Behavior::Wall => OccupantKind::Wall,
            Behavior::Bouncing(_) => OccupantKind::BouncingCritter,
            Behavior::WallFollower(_) => OccupantKind::WallFollower,
        }
    }

    pub const fn is_actable(&self) -> bool {
        self.kind().is_actable()
    }

    pub fn as_critter(&self) -> Option<&dyn Critter> {
        match self {
            Behavior::Wall => None,
            Behavior::Bouncing(critter) => Some(critter),
            Behavior::WallFollower(critter) => Some(critter),
        }
    }

    pub fn as_critter_mut(&mut self) -> Option<&mut dyn Critter> {
        match self {
            Behavior::Wall => None,
            Behavior::Bouncing(critter) => Some(critter),
            Behavior::WallFollower(critter) => Some(critter),
        }
    }

    /// Current facing of actable occupants.
    pub fn facing(&self) -> Option<Direction> {
        self.as_critter().map(|critter| critter.facing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use strum::IntoEnumIterator;

    #[test]
    fn only_walls_are_inert() {
        let mut rng = SequenceRng::default();
        for kind in OccupantKind::iter() {
            let behavior = kind.spawn(&mut rng);
            assert_eq!(behavior.kind(), kind);
            assert_eq!(behavior.is_actable(), kind != OccupantKind::Wall);
            assert_eq!(behavior.facing().is_some(), behavior.is_actable());
        }
    }

    #[test]
    fn wall_has_no_decision() {
        let mut wall = Behavior::Wall;
        assert!(wall.as_critter_mut().is_none());
    }

    #[test]
    fn spawned_critters_start_in_initial_state() {
        let mut rng = SequenceRng::new(&[2]);
        let bouncing = OccupantKind::BouncingCritter.spawn(&mut rng);
        assert_eq!(bouncing.facing(), Some(Direction::East));

        let follower = OccupantKind::WallFollower.spawn(&mut rng);
        assert_eq!(follower.facing(), Some(Direction::South));
    }
}
