//! The simulated world: one grid, its legend and the occupants living on it.
//!
//! A [`World`] is built once from a textual map and then advanced with
//! [`World::turn`]. Occupant state lives in an arena indexed by
//! [`OccupantId`]; the grid itself only stores small [`Tile`] handles, which
//! lets a critter mutate its own state while its [`View`](crate::View)
//! borrows the grid.
mod turn;

pub use turn::{MoveRejection, TurnReport};

use std::fmt;

use tracing::debug;

use crate::config::SimConfig;
use crate::critter::{Behavior, OccupantId, OccupantKind};
use crate::direction::Direction;
use crate::error::{ErrorSeverity, SimError};
use crate::grid::{Grid, GridError};
use crate::legend::{Legend, LegendError};
use crate::rng::{PcgRng, RandomSource};
use crate::vector::Vector;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("map has no rows or an empty first row")]
    EmptyMap,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("character {glyph:?} at {position} has no legend entry")]
    UnknownLegendChar { glyph: char, position: Vector },

    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Vector,
        occupant: OccupantId,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Legend(#[from] LegendError),
}

impl SimError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyMap | Self::RaggedRow { .. } | Self::UnknownLegendChar { .. } => {
                ErrorSeverity::Fatal
            }
            Self::Occupied { .. } => ErrorSeverity::Validation,
            Self::Grid(err) => err.severity(),
            Self::Legend(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMap => "WORLD_EMPTY_MAP",
            Self::RaggedRow { .. } => "WORLD_RAGGED_ROW",
            Self::UnknownLegendChar { .. } => "WORLD_UNKNOWN_LEGEND_CHAR",
            Self::Occupied { .. } => "WORLD_OCCUPIED",
            Self::Grid(err) => err.error_code(),
            Self::Legend(err) => err.error_code(),
        }
    }
}

/// Grid slot content: which occupant sits here and how it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: OccupantId,
    pub glyph: char,
}

/// Arena entry for one occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    id: OccupantId,
    glyph: char,
    behavior: Behavior,
}

impl Occupant {
    pub fn id(&self) -> OccupantId {
        self.id
    }

    /// Character the occupant was built from; also what it renders as.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn kind(&self) -> OccupantKind {
        self.behavior.kind()
    }

    pub fn is_actable(&self) -> bool {
        self.behavior.is_actable()
    }

    pub fn facing(&self) -> Option<Direction> {
        self.behavior.facing()
    }

    fn tile(&self) -> Tile {
        Tile {
            id: self.id,
            glyph: self.glyph,
        }
    }
}

/// Owns the grid, the legend and every occupant of one simulation.
#[derive(Clone, Debug)]
pub struct World<R = PcgRng> {
    grid: Grid<Tile>,
    legend: Legend,
    occupants: Vec<Occupant>,
    rng: R,
    turns: u64,
}

impl<R: RandomSource> World<R> {
    /// Builds a world from equal-length map rows.
    ///
    /// Spaces become empty cells; every other character must have a legend
    /// entry and spawns a fresh occupant tagged with that character.
    pub fn new<S: AsRef<str>>(rows: &[S], legend: Legend, mut rng: R) -> Result<Self, WorldError> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .filter(|&width| width > 0)
            .ok_or(WorldError::EmptyMap)?;

        for (index, row) in rows.iter().enumerate() {
            let found = row.as_ref().chars().count();
            if found != width {
                return Err(WorldError::RaggedRow {
                    row: index,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Grid::new(dimension(width)?, dimension(rows.len())?)?;
        let mut occupants = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate() {
                if glyph == SimConfig::EMPTY_GLYPH {
                    continue;
                }
                let position = Vector::new(x as i32, y as i32);
                let kind = legend
                    .get(glyph)
                    .ok_or(WorldError::UnknownLegendChar { glyph, position })?;

                let occupant = Occupant {
                    id: OccupantId(occupants.len() as u32),
                    glyph,
                    behavior: kind.spawn(&mut rng),
                };
                grid.set(position, Some(occupant.tile()))?;
                occupants.push(occupant);
            }
        }

        debug!(
            width = grid.width(),
            height = grid.height(),
            occupants = occupants.len(),
            "world constructed"
        );

        Ok(Self {
            grid,
            legend,
            occupants,
            rng,
            turns: 0,
        })
    }

    /// Puts a new occupant with the given state on an empty cell.
    pub fn place(
        &mut self,
        position: Vector,
        glyph: char,
        behavior: Behavior,
    ) -> Result<OccupantId, WorldError> {
        if glyph == SimConfig::EMPTY_GLYPH {
            return Err(LegendError::ReservedGlyph(glyph).into());
        }
        if let Some(tile) = self.grid.get(position)? {
            return Err(WorldError::Occupied {
                position,
                occupant: tile.id,
            });
        }

        let occupant = Occupant {
            id: OccupantId(self.occupants.len() as u32),
            glyph,
            behavior,
        };
        self.grid.set(position, Some(occupant.tile()))?;
        self.occupants.push(occupant);

        debug!(occupant = %occupant.id, %position, kind = %occupant.kind(), "occupant placed");
        Ok(occupant.id)
    }

    /// Places a freshly spawned occupant for a legend character.
    pub fn spawn(&mut self, position: Vector, glyph: char) -> Result<OccupantId, WorldError> {
        let kind = self
            .legend
            .get(glyph)
            .ok_or(WorldError::UnknownLegendChar { glyph, position })?;
        let behavior = kind.spawn(&mut self.rng);
        self.place(position, glyph, behavior)
    }
}

impl<R> World<R> {
    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of turns resolved so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn occupant(&self, id: OccupantId) -> Option<&Occupant> {
        self.occupants.get(id.index())
    }

    /// Occupant at `position`, or `None` for empty or outside cells.
    pub fn occupant_at(&self, position: Vector) -> Option<&Occupant> {
        let tile = self.grid.get(position).ok().flatten()?;
        self.occupant(tile.id)
    }

    /// Current position of an occupant (linear scan).
    pub fn position_of(&self, id: OccupantId) -> Option<Vector> {
        self.grid
            .occupants()
            .find(|(_, tile)| tile.id == id)
            .map(|(position, _)| position)
    }

    /// Number of occupants currently on the grid.
    pub fn occupant_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Number of occupants on the grid that take turns.
    pub fn actable_count(&self) -> usize {
        self.grid
            .occupants()
            .filter(|(_, tile)| self.is_actable(tile.id))
            .count()
    }

    /// Text form of the grid: one line per row, glyphs for occupants and
    /// spaces for empty cells.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    fn is_actable(&self, id: OccupantId) -> bool {
        self.occupant(id).is_some_and(Occupant::is_actable)
    }
}

impl<R> fmt::Display for World<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for y in 0..self.grid.height() as i32 {
            if y > 0 {
                f.write_char(SimConfig::ROW_SEPARATOR)?;
            }
            for x in 0..self.grid.width() as i32 {
                let glyph = match self.grid.get(Vector::new(x, y)) {
                    Ok(Some(tile)) => tile.glyph,
                    _ => SimConfig::EMPTY_GLYPH,
                };
                f.write_char(glyph)?;
            }
        }
        Ok(())
    }
}

fn dimension(len: usize) -> Result<u32, WorldError> {
    u32::try_from(len).map_err(|_| WorldError::EmptyMap)
}
