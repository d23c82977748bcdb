// Common test utilities for renderer integration tests
//
// Provides a surface that records every write so tests can check where
// sprites draw and in which order.

#![allow(dead_code)]

use pixel_home::constants::{TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use pixel_home::display::Shade;
use pixel_home::render::Surface;

/// One recorded write, normalised to a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub shade: Shade,
}

/// Surface that keeps a log of writes instead of pixels
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub writes: Vec<Write>,
    pub clears: Vec<Shade>,
    pub presents: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every write stays inside the 8×8 block of grid cell (tile_x, tile_y)
    pub fn all_inside_tile(&self, tile_x: usize, tile_y: usize) -> bool {
        let x0 = tile_x * TILE_SIZE;
        let y0 = tile_y * TILE_SIZE;
        self.writes.iter().all(|w| {
            w.x >= x0
                && w.y >= y0
                && w.x + w.width <= x0 + TILE_SIZE
                && w.y + w.height <= y0 + TILE_SIZE
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (usize, usize) {
        (WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    fn set_pixel(&mut self, x: usize, y: usize, shade: Shade) {
        self.writes.push(Write {
            x,
            y,
            width: 1,
            height: 1,
            shade,
        });
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, shade: Shade) {
        self.writes.push(Write {
            x,
            y,
            width,
            height,
            shade,
        });
    }

    fn clear(&mut self, shade: Shade) {
        self.clears.push(shade);
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

/// Unique path under the system temp directory
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("pixel_home_{}_{}", std::process::id(), name))
}
