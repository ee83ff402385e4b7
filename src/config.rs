/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub const fn total_cells(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: i32 = 640;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: i32 = 480;

/// Edge length of one tile in pixels.
pub const TILE_SIZE: i32 = 10;

/// Fixed arena dimensions in tiles.
pub const GRID: GridSize = GridSize {
    width: (SCREEN_WIDTH / TILE_SIZE) as u16,
    height: (SCREEN_HEIGHT / TILE_SIZE) as u16,
};

/// Rows `0..HUD_ROWS` are reserved for the score and never hold entities.
pub const HUD_ROWS: i32 = 2;

/// Speed used at the start of every round.
pub const INITIAL_SPEED: u32 = 5;

/// Lowest selectable speed.
pub const MIN_SPEED: u32 = 1;

/// Highest selectable speed.
pub const MAX_SPEED: u32 = 50;

/// Length of the snake at the start of every round.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Default host tick rate.
pub const DEFAULT_TPS: u32 = 60;

/// Upper bound accepted for `--tps`.
pub const MAX_TPS: u32 = 240;

/// Window title reported to the host.
pub const WINDOW_TITLE: &str = "Snake Game";

/// Resolution used when rasterising glyph faces.
pub const FONT_DPI: f64 = 80.0;
