// Tile canvas - Tile-local drawing primitives over a surface
//
// Sprite routines address pixels relative to the tile origin (0..8 on each
// axis). Writes outside the 8×8 block are dropped so a routine can never
// touch a neighbouring tile.

use super::surface::Surface;
use crate::constants::TILE_SIZE;
use crate::display::Shade;

/// Last pixel index inside a tile
pub(crate) const EDGE: usize = TILE_SIZE - 1;

/// Drawing context for a single 8×8 tile
pub struct TileCanvas<'a> {
    surface: &'a mut dyn Surface,
    px: usize,
    py: usize,
}

impl<'a> TileCanvas<'a> {
    /// Create a canvas whose origin is the absolute pixel (px, py)
    pub fn new(surface: &'a mut dyn Surface, px: usize, py: usize) -> Self {
        Self { surface, px, py }
    }

    /// Fill the whole tile
    #[inline]
    pub fn fill(&mut self, shade: Shade) {
        self.surface
            .fill_rect(self.px, self.py, TILE_SIZE, TILE_SIZE, shade);
    }

    /// Set one pixel
    #[inline]
    pub fn dot(&mut self, x: usize, y: usize, shade: Shade) {
        if x < TILE_SIZE && y < TILE_SIZE {
            self.surface.set_pixel(self.px + x, self.py + y, shade);
        }
    }

    /// Set several pixels to the same shade
    pub fn dots(&mut self, points: &[(usize, usize)], shade: Shade) {
        for &(x, y) in points {
            self.dot(x, y, shade);
        }
    }

    /// Fill a rectangle, clipped to the tile
    pub fn rect(&mut self, x: usize, y: usize, width: usize, height: usize, shade: Shade) {
        if x >= TILE_SIZE || y >= TILE_SIZE {
            return;
        }
        let width = width.min(TILE_SIZE - x);
        let height = height.min(TILE_SIZE - y);
        if width == 0 || height == 0 {
            return;
        }
        self.surface
            .fill_rect(self.px + x, self.py + y, width, height, shade);
    }

    /// Full-width horizontal line at row `y`
    #[inline]
    pub fn hline(&mut self, y: usize, shade: Shade) {
        self.rect(0, y, TILE_SIZE, 1, shade);
    }

    /// Horizontal span from `x0` to `x1` inclusive at row `y`
    #[inline]
    pub fn hspan(&mut self, x0: usize, x1: usize, y: usize, shade: Shade) {
        if x1 >= x0 {
            self.rect(x0, y, x1 - x0 + 1, 1, shade);
        }
    }

    /// Full-height vertical line at column `x`
    #[inline]
    pub fn vline(&mut self, x: usize, shade: Shade) {
        self.rect(x, 0, 1, TILE_SIZE, shade);
    }

    /// Vertical span from `y0` to `y1` inclusive at column `x`
    #[inline]
    pub fn vspan(&mut self, x: usize, y0: usize, y1: usize, shade: Shade) {
        if y1 >= y0 {
            self.rect(x, y0, 1, y1 - y0 + 1, shade);
        }
    }
}
