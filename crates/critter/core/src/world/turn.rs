//! Turn resolution.
//!
//! A turn snapshots every actable occupant in row-major order before anything
//! moves, then lets each one decide and resolves its move against the grid as
//! it stands at that moment. Occupants resolved later see the moves made
//! earlier in the same turn; ties always go to whoever comes first in scan
//! order.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::critter::{Action, OccupantId};
use crate::direction::Direction;
use crate::error::{ErrorSeverity, SimError};
use crate::rng::RandomSource;
use crate::vector::Vector;
use crate::view::View;

use super::{Tile, World};

/// Why a requested move was not carried out. The occupant simply stays put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("destination {destination} is outside the grid")]
    OutOfBounds { destination: Vector },

    #[error("destination {destination} is occupied by {occupant}")]
    Occupied {
        destination: Vector,
        occupant: OccupantId,
    },
}

impl SimError for MoveRejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Occupied { .. } => "MOVE_OCCUPIED",
        }
    }
}

/// Tally of one resolved turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn number, starting at 1 for the first turn.
    pub turn: u64,
    /// Occupants that were asked for a decision.
    pub acted: usize,
    /// Moves carried out.
    pub moved: usize,
    /// Moves requested but rejected.
    pub rejected: usize,
    /// Decisions that requested nothing.
    pub idle: usize,
}

impl<R: RandomSource> World<R> {
    /// Resolves one turn: every actable occupant decides exactly once.
    pub fn turn(&mut self) -> TurnReport {
        self.turns += 1;
        let mut report = TurnReport {
            turn: self.turns,
            ..TurnReport::default()
        };

        // Collected up front so moves made during the turn cannot make an
        // occupant act twice or be skipped.
        let schedule: Vec<(Vector, Tile)> = self
            .grid
            .occupants()
            .filter(|(_, tile)| self.is_actable(tile.id))
            .collect();
        let mut acted = HashSet::with_capacity(schedule.len());

        for (origin, tile) in schedule {
            if !acted.insert(tile.id) {
                continue;
            }

            let Some(critter) = self
                .occupants
                .get_mut(tile.id.index())
                .and_then(|occupant| occupant.behavior.as_critter_mut())
            else {
                continue;
            };
            let view = View::new(&self.grid, origin);
            let action = critter.decide(&view, &mut self.rng);
            report.acted += 1;

            match action {
                Some(Action::Move(direction)) => {
                    match self.apply_move(tile, origin, direction) {
                        Ok(destination) => {
                            report.moved += 1;
                            trace!(occupant = %tile.id, from = %origin, to = %destination, "moved");
                        }
                        Err(rejection) => {
                            report.rejected += 1;
                            debug!(
                                occupant = %tile.id,
                                %direction,
                                code = rejection.error_code(),
                                "move rejected: {rejection}"
                            );
                        }
                    }
                }
                None => report.idle += 1,
            }
        }

        debug!(
            turn = report.turn,
            acted = report.acted,
            moved = report.moved,
            rejected = report.rejected,
            "turn resolved"
        );
        report
    }

    /// Moves `tile` one step from `origin`, or leaves everything untouched.
    fn apply_move(
        &mut self,
        tile: Tile,
        origin: Vector,
        direction: Direction,
    ) -> Result<Vector, MoveRejection> {
        let destination = origin.plus(direction.offset());
        match self.grid.get(destination) {
            Err(_) => return Err(MoveRejection::OutOfBounds { destination }),
            Ok(Some(other)) => {
                return Err(MoveRejection::Occupied {
                    destination,
                    occupant: other.id,
                });
            }
            Ok(None) => {}
        }

        // Both positions are inside the grid at this point.
        let moving = self
            .grid
            .take(origin)
            .ok()
            .flatten()
            .unwrap_or(tile);
        self.grid
            .set(destination, Some(moving))
            .map_err(|_| MoveRejection::OutOfBounds { destination })?;
        Ok(destination)
    }
}
