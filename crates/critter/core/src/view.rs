//! Read-only perception window a critter gets while deciding.

use arrayvec::ArrayVec;

use crate::config::SimConfig;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::vector::Vector;
use crate::world::Tile;

/// Directions matched by [`View::find_all`], at most one per compass point.
pub type DirectionSet = ArrayVec<Direction, { SimConfig::DIRECTION_COUNT }>;

/// A critter's surroundings, seen from `origin`.
///
/// Built fresh for every decision and dropped right after; it only borrows
/// the grid.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    grid: &'a Grid<Tile>,
    origin: Vector,
}

impl<'a> View<'a> {
    pub fn new(grid: &'a Grid<Tile>, origin: Vector) -> Self {
        Self { grid, origin }
    }

    pub fn origin(&self) -> Vector {
        self.origin
    }

    /// Glyph of the neighboring cell in `direction`.
    ///
    /// Cells beyond the grid edge read as walls.
    pub fn look(&self, direction: Direction) -> char {
        let target = self.origin.plus(direction.offset());
        match self.grid.get(target) {
            Ok(Some(tile)) => tile.glyph,
            Ok(None) => SimConfig::EMPTY_GLYPH,
            Err(_) => SimConfig::WALL_GLYPH,
        }
    }

    /// Every direction whose neighbor shows `glyph`, in clockwise order from
    /// north.
    pub fn find_all(&self, glyph: char) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.look(direction) == glyph)
            .collect()
    }

    /// One direction showing `glyph`, chosen uniformly at random.
    pub fn find(&self, glyph: char, rng: &mut dyn RandomSource) -> Option<Direction> {
        let found = self.find_all(glyph);
        rng.pick_index(found.len()).map(|index| found[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::testing::grid_from_rows;

    #[test]
    fn look_reads_neighbor_glyphs() {
        let grid = grid_from_rows(&["#o ", " ~ ", "  #"]);
        let view = View::new(&grid, Vector::new(1, 1));
        assert_eq!(view.look(Direction::NorthWest), '#');
        assert_eq!(view.look(Direction::North), 'o');
        assert_eq!(view.look(Direction::NorthEast), ' ');
        assert_eq!(view.look(Direction::SouthEast), '#');
        assert_eq!(view.origin(), Vector::new(1, 1));
    }

    #[test]
    fn edges_look_like_walls() {
        let grid = grid_from_rows(&[" "]);
        let view = View::new(&grid, Vector::ORIGIN);
        for direction in Direction::ALL {
            assert_eq!(view.look(direction), SimConfig::WALL_GLYPH);
        }
        assert!(view.find_all(SimConfig::EMPTY_GLYPH).is_empty());
    }

    #[test]
    fn find_all_is_clockwise() {
        let grid = grid_from_rows(&["o o", "   ", "o o"]);
        let view = View::new(&grid, Vector::new(1, 1));
        let found = view.find_all('o');
        assert_eq!(
            found.as_slice(),
            &[
                Direction::NorthEast,
                Direction::SouthEast,
                Direction::SouthWest,
                Direction::NorthWest,
            ]
        );
        assert_eq!(view.find_all(' ').len(), 4);
    }

    #[test]
    fn find_picks_with_the_random_source() {
        let grid = grid_from_rows(&["o o", "   ", "o o"]);
        let view = View::new(&grid, Vector::new(1, 1));
        let mut rng = SequenceRng::new(&[2, 5]);
        assert_eq!(view.find('o', &mut rng), Some(Direction::SouthWest));
        assert_eq!(view.find('o', &mut rng), Some(Direction::SouthEast));
        assert_eq!(view.find('x', &mut rng), None);
    }
}
