//! Mapping from map characters to the occupant kinds they spawn.

use std::collections::BTreeMap;

use crate::config::SimConfig;
use crate::critter::OccupantKind;
use crate::error::{ErrorSeverity, SimError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LegendError {
    #[error("glyph {0:?} is reserved for empty cells")]
    ReservedGlyph(char),
}

impl SimError for LegendError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ReservedGlyph(_) => "LEGEND_RESERVED_GLYPH",
        }
    }
}

/// Character-to-occupant table used when building a world from text.
///
/// The empty glyph (space) always means "no occupant" and cannot be mapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BTreeMap<char, OccupantKind>"))]
#[cfg_attr(feature = "serde", serde(into = "BTreeMap<char, OccupantKind>"))]
pub struct Legend {
    entries: BTreeMap<char, OccupantKind>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// `#` walls, `~` wall followers and `o` bouncing critters.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert('#', OccupantKind::Wall);
        entries.insert('~', OccupantKind::WallFollower);
        entries.insert('o', OccupantKind::BouncingCritter);
        Self { entries }
    }

    /// Maps `glyph` to `kind`, replacing any earlier entry for it.
    pub fn insert(&mut self, glyph: char, kind: OccupantKind) -> Result<(), LegendError> {
        if glyph == SimConfig::EMPTY_GLYPH {
            return Err(LegendError::ReservedGlyph(glyph));
        }
        self.entries.insert(glyph, kind);
        Ok(())
    }

    /// Builder form of [`Legend::insert`].
    pub fn with(mut self, glyph: char, kind: OccupantKind) -> Result<Self, LegendError> {
        self.insert(glyph, kind)?;
        Ok(self)
    }

    pub fn get(&self, glyph: char) -> Option<OccupantKind> {
        self.entries.get(&glyph).copied()
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.entries.contains_key(&glyph)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, OccupantKind)> + '_ {
        self.entries.iter().map(|(&glyph, &kind)| (glyph, kind))
    }
}

impl TryFrom<BTreeMap<char, OccupantKind>> for Legend {
    type Error = LegendError;

    fn try_from(entries: BTreeMap<char, OccupantKind>) -> Result<Self, Self::Error> {
        if entries.contains_key(&SimConfig::EMPTY_GLYPH) {
            return Err(LegendError::ReservedGlyph(SimConfig::EMPTY_GLYPH));
        }
        Ok(Self { entries })
    }
}

impl From<Legend> for BTreeMap<char, OccupantKind> {
    fn from(legend: Legend) -> Self {
        legend.entries
    }
}
