//! Deterministic turn engine for critters living on a 2D grid.
//!
//! `critter-core` owns the simulation rules: the [`Grid`] that stores
//! occupants, the [`View`] critters use to look around, the decision
//! contract in [`critter`] and the [`World`] that resolves one turn at a time.
//! Loading maps from files and driving the clock live in other crates; they
//! only talk to the engine through the types re-exported here.
pub mod config;
pub mod critter;
pub mod direction;
pub mod error;
pub mod grid;
pub mod legend;
pub mod rng;
pub mod vector;
pub mod view;
pub mod world;

pub use config::SimConfig;
pub use critter::{
    Action, Behavior, BouncingCritter, Critter, OccupantId, OccupantKind, WallFollower,
};
pub use direction::{Direction, DirectionError};
pub use error::{ErrorSeverity, SimError};
pub use grid::{Grid, GridError, Occupants};
pub use legend::{Legend, LegendError};
pub use rng::{PcgRng, RandomSource, SequenceRng};
pub use vector::Vector;
pub use view::{DirectionSet, View};
pub use world::{MoveRejection, Occupant, Tile, TurnReport, World, WorldError};
