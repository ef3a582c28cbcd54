//! Map file loader.
//!
//! Maps are RON documents holding the plan rows and, optionally, the legend
//! used to read them:
//!
//! ```ron
//! (
//!     rows: [
//!         "#####",
//!         "# o #",
//!         "#####",
//!     ],
//!     legend: { '#': Wall, 'o': BouncingCritter, '~': WallFollower },
//! )
//! ```
//!
//! Without a `legend` entry the standard legend applies.

use std::path::Path;

use anyhow::Context;
use critter_core::{Legend, RandomSource, World};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    rows: Vec<String>,
    #[serde(default)]
    legend: Option<Legend>,
}

/// A plan together with the legend needed to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSpec {
    pub rows: Vec<String>,
    pub legend: Legend,
}

impl MapSpec {
    /// Wraps in-memory rows read with the standard legend.
    pub fn from_plan(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|row| (*row).to_owned()).collect(),
            legend: Legend::standard(),
        }
    }

    /// Builds a world from this spec.
    pub fn build_world<R: RandomSource>(&self, rng: R) -> LoadResult<World<R>> {
        World::new(self.rows.as_slice(), self.legend.clone(), rng)
            .context("Failed to build world from map")
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map spec from a RON file.
    pub fn load(path: &Path) -> LoadResult<MapSpec> {
        let content = read_file(path)?;
        let spec = Self::parse(&content)
            .with_context(|| format!("Invalid map file {}", path.display()))?;
        debug!(path = %path.display(), rows = spec.rows.len(), "map loaded");
        Ok(spec)
    }

    /// Parse a map spec from RON text.
    pub fn parse(content: &str) -> LoadResult<MapSpec> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        if data.rows.is_empty() {
            anyhow::bail!("Map has no rows");
        }

        Ok(MapSpec {
            rows: data.rows,
            legend: data.legend.unwrap_or_else(Legend::standard),
        })
    }

    /// Serialize a map spec back to RON text.
    pub fn to_ron(spec: &MapSpec) -> LoadResult<String> {
        let data = MapDataRon {
            rows: spec.rows.clone(),
            legend: Some(spec.legend.clone()),
        };
        ron::ser::to_string_pretty(&data, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize map RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use critter_core::{OccupantKind, PcgRng};

    #[test]
    fn parses_rows_with_default_legend() {
        let spec = MapLoader::parse(r####"(rows: ["###", "#o#", "###"])"####).unwrap();
        assert_eq!(spec.rows, vec!["###", "#o#", "###"]);
        assert_eq!(spec.legend, Legend::standard());
    }

    #[test]
    fn parses_custom_legend() {
        let spec = MapLoader::parse(
            r#"(
                rows: ["%%%", "%*%", "%%%"],
                legend: { '%': Wall, '*': WallFollower },
            )"#,
        )
        .unwrap();
        assert_eq!(spec.legend.get('%'), Some(OccupantKind::Wall));
        assert_eq!(spec.legend.get('*'), Some(OccupantKind::WallFollower));

        let world = spec.build_world(PcgRng::new(3)).unwrap();
        assert_eq!(world.render(), "%%%\n%*%\n%%%");
    }

    #[test]
    fn rejects_space_in_legend() {
        let result = MapLoader::parse(r##"(rows: ["#"], legend: { ' ': Wall })"##);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_rows() {
        assert!(MapLoader::parse("(rows: [])").is_err());
    }

    #[test]
    fn build_reports_unknown_characters() {
        let spec = MapSpec::from_plan(&["#?#"]);
        let err = spec.build_world(PcgRng::new(0)).unwrap_err();
        assert!(format!("{err:#}").contains("no legend entry"));
    }

    #[test]
    fn ron_output_parses_back() {
        let spec = MapSpec::from_plan(&["#~ #", "# o#"]);
        let text = MapLoader::to_ron(&spec).unwrap();
        assert_eq!(MapLoader::parse(&text).unwrap(), spec);
    }
}
