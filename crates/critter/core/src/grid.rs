//! Flat, fixed-size storage mapping coordinates to optional occupants.

use crate::error::{ErrorSeverity, SimError};
use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} must both be positive")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Vector,
        width: u32,
        height: u32,
    },
}

impl SimError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyDimensions { .. } => ErrorSeverity::Fatal,
            Self::OutOfBounds { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDimensions { .. } => "GRID_EMPTY_DIMENSIONS",
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
        }
    }
}

/// Row-major grid of `width * height` slots.
///
/// The grid stores whatever handle type the caller chooses; the world keeps
/// small `Copy` tiles here and the occupant state in its own arena. Each slot
/// holds at most one value, but the grid does not check that a value appears
/// in only one slot: that is up to whoever moves things around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    space: Vec<Option<T>>,
}

impl<T: Copy> Grid<T> {
    /// Creates an empty grid. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            space: vec![None; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_inside(&self, position: Vector) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Returns the content of the slot at `position`.
    ///
    /// Coordinates outside the grid are an error rather than being clamped;
    /// check with [`Grid::is_inside`] first when that is expected.
    pub fn get(&self, position: Vector) -> Result<Option<T>, GridError> {
        let index = self.index_of(position)?;
        Ok(self.space[index])
    }

    /// Overwrites the slot at `position`, returning what was there before.
    pub fn set(&mut self, position: Vector, value: Option<T>) -> Result<Option<T>, GridError> {
        let index = self.index_of(position)?;
        Ok(std::mem::replace(&mut self.space[index], value))
    }

    /// Moves the content out of the slot at `position`, leaving it empty.
    pub fn take(&mut self, position: Vector) -> Result<Option<T>, GridError> {
        let index = self.index_of(position)?;
        Ok(self.space[index].take())
    }

    /// Lazy row-major scan over every non-empty slot.
    ///
    /// Each call starts a fresh scan. The iterator borrows the grid, so code
    /// that needs to mutate while walking it collects first.
    pub fn occupants(&self) -> Occupants<'_, T> {
        Occupants {
            grid: self,
            cursor: 0,
        }
    }

    /// Calls `visit` for every non-empty slot in row-major order.
    pub fn for_each_occupant<F>(&self, mut visit: F)
    where
        F: FnMut(T, Vector),
    {
        for (position, value) in self.occupants() {
            visit(value, position);
        }
    }

    /// Number of non-empty slots.
    pub fn occupied_count(&self) -> usize {
        self.space.iter().filter(|slot| slot.is_some()).count()
    }

    fn index_of(&self, position: Vector) -> Result<usize, GridError> {
        if !self.is_inside(position) {
            return Err(GridError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.x as usize + self.width as usize * position.y as usize)
    }

    fn position_of(&self, index: usize) -> Vector {
        let width = self.width as usize;
        Vector::new((index % width) as i32, (index / width) as i32)
    }
}

/// Iterator returned by [`Grid::occupants`].
pub struct Occupants<'a, T> {
    grid: &'a Grid<T>,
    cursor: usize,
}

impl<T: Copy> Iterator for Occupants<'_, T> {
    type Item = (Vector, T);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.grid.space.len() {
            let index = self.cursor;
            self.cursor += 1;
            if let Some(value) = self.grid.space[index] {
                return Some((self.grid.position_of(index), value));
            }
        }
        None
    }
}
