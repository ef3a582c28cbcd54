/// Simulation constants shared by the grid, views and renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SimConfig;

impl SimConfig {
    // ===== glyphs =====
    /// Glyph reported for cells beyond the grid edge. The boundary behaves
    /// like an endless wall.
    pub const WALL_GLYPH: char = '#';
    /// Glyph of an empty cell, both when looking and when rendering.
    pub const EMPTY_GLYPH: char = ' ';

    // ===== geometry =====
    /// Number of compass directions a critter can look or move in.
    pub const DIRECTION_COUNT: usize = 8;
    /// Separator written between rendered rows.
    pub const ROW_SEPARATOR: char = '\n';
}
