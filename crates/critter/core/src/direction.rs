//! The eight compass directions and the rotation table critters scan with.

use std::str::FromStr;

use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::config::SimConfig;
use crate::error::{ErrorSeverity, SimError};
use crate::vector::Vector;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    #[error("unrecognized direction '{0}'")]
    UnrecognizedDirection(String),
}

impl SimError for DirectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedDirection(_) => "DIRECTION_UNRECOGNIZED",
        }
    }
}

/// Compass direction, declared clockwise starting from north.
///
/// The declaration order is the rotation order: `rotate(1)` always yields the
/// next variant, wrapping from `NorthWest` back to `North`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[strum(to_string = "n")]
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    North,
    #[strum(to_string = "ne")]
    #[cfg_attr(feature = "serde", serde(rename = "ne"))]
    NorthEast,
    #[strum(to_string = "e")]
    #[cfg_attr(feature = "serde", serde(rename = "e"))]
    East,
    #[strum(to_string = "se")]
    #[cfg_attr(feature = "serde", serde(rename = "se"))]
    SouthEast,
    #[strum(to_string = "s")]
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    South,
    #[strum(to_string = "sw")]
    #[cfg_attr(feature = "serde", serde(rename = "sw"))]
    SouthWest,
    #[strum(to_string = "w")]
    #[cfg_attr(feature = "serde", serde(rename = "w"))]
    West,
    #[strum(to_string = "nw")]
    #[cfg_attr(feature = "serde", serde(rename = "nw"))]
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; SimConfig::DIRECTION_COUNT] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset of one step in this direction (`y` grows downward).
    pub const fn offset(self) -> Vector {
        match self {
            Direction::North => Vector::new(0, -1),
            Direction::NorthEast => Vector::new(1, -1),
            Direction::East => Vector::new(1, 0),
            Direction::SouthEast => Vector::new(1, 1),
            Direction::South => Vector::new(0, 1),
            Direction::SouthWest => Vector::new(-1, 1),
            Direction::West => Vector::new(-1, 0),
            Direction::NorthWest => Vector::new(-1, -1),
        }
    }

    /// Position in the clockwise table, `North` being 0.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the direction `steps` positions clockwise from `self`.
    ///
    /// Negative steps turn counter-clockwise. Any magnitude is accepted; the
    /// result always stays on the 8-cycle.
    #[must_use]
    pub const fn rotate(self, steps: i32) -> Direction {
        let count = SimConfig::DIRECTION_COUNT as i32;
        let index = (self.index() as i32 + steps % count + count) % count;
        Self::ALL[index as usize]
    }

    /// Short compass name (`"n"`, `"ne"`, ...).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Looks a direction up by its short compass name.
    pub fn from_name(name: &str) -> Result<Direction, DirectionError> {
        Direction::iter()
            .find(|direction| direction.name() == name)
            .ok_or_else(|| DirectionError::UnrecognizedDirection(name.to_owned()))
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_is_identity() {
        for direction in Direction::ALL {
            assert_eq!(direction.rotate(8), direction);
            assert_eq!(direction.rotate(-8), direction);
            assert_eq!(direction.rotate(0), direction);
        }
    }

    #[test]
    fn rotation_wraps_both_ways() {
        assert_eq!(Direction::NorthWest.rotate(1), Direction::North);
        assert_eq!(Direction::North.rotate(-1), Direction::NorthWest);
        assert_eq!(Direction::South.rotate(-3), Direction::NorthEast);
        assert_eq!(Direction::South.rotate(-2), Direction::East);
        assert_eq!(Direction::East.rotate(-11), Direction::NorthWest);
        assert_eq!(Direction::East.rotate(19), Direction::SouthWest);
    }

    #[test]
    fn table_is_clockwise_from_north() {
        for (index, direction) in Direction::iter().enumerate() {
            assert_eq!(direction.index(), index);
            assert_eq!(Direction::ALL[index], direction);
        }
        assert_eq!(Direction::North.offset(), Vector::new(0, -1));
        assert_eq!(Direction::SouthWest.offset(), Vector::new(-1, 1));
    }

    #[test]
    fn offsets_are_distinct_unit_steps() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let offset = a.offset();
            assert!(offset.x.abs() <= 1 && offset.y.abs() <= 1);
            assert_ne!(offset, Vector::ORIGIN);
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(offset, b.offset());
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_name(direction.name()), Ok(direction));
            assert_eq!(direction.to_string(), direction.name());
        }
        assert_eq!("se".parse::<Direction>(), Ok(Direction::SouthEast));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Direction::from_name("up").unwrap_err();
        assert_eq!(err, DirectionError::UnrecognizedDirection("up".into()));
        assert_eq!(err.error_code(), "DIRECTION_UNRECOGNIZED");
    }
}
