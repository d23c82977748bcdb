// Scene geometry constants

/// Window width in pixels (portrait)
pub const WINDOW_WIDTH: usize = 400;

/// Window height in pixels
pub const WINDOW_HEIGHT: usize = 640;

/// Tile size in pixels (8x8)
pub const TILE_SIZE: usize = 8;

/// Room grid width in tiles (50 tiles)
pub const GRID_WIDTH: usize = WINDOW_WIDTH / TILE_SIZE;

/// Room grid height in tiles (80 tiles)
pub const GRID_HEIGHT: usize = WINDOW_HEIGHT / TILE_SIZE;

/// Total number of tiles in a room grid
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;
