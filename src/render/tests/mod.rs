//! Renderer unit tests
//!
//! Organised by concern:
//! - sprites: per-kind pixel patterns
//! - compositor: frame clearing, ordering and presenting

use super::*;
use crate::display::FrameBuffer;


/// Surface that records every write instead of storing pixels
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub pixels: Vec<(usize, usize, Shade)>,
    pub rects: Vec<(usize, usize, usize, usize, Shade)>,
    pub clears: usize,
    pub presents: usize,
}

impl Surface for RecordingSurface {
    fn size(&self) -> (usize, usize) {
        (400, 640)
    }

    fn set_pixel(&mut self, x: usize, y: usize, shade: Shade) {
        self.pixels.push((x, y, shade));
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, shade: Shade) {
        self.rects.push((x, y, width, height, shade));
    }

    fn clear(&mut self, _shade: Shade) {
        self.clears += 1;
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

/// Render a single tile at grid (1, 1) and return its 8×8 block of shades
pub(crate) fn render_block(tile: Tile) -> [[Shade; 8]; 8] {
    let mut fb = FrameBuffer::new();
    render_tile(&mut fb, 1, 1, tile);

    let mut block = [[Shade::Dark; 8]; 8];
    for (y, row) in block.iter_mut().enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = fb.get_pixel(8 + x, 8 + y);
        }
    }
    block
}
