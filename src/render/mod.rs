// Render module - Turns a room into pixels
//
// This module provides:
// - The Surface trait the host implements
// - Tile-local drawing helpers
// - One sprite routine per tile kind
// - The per-frame compositor

mod canvas;
mod sprites;
mod surface;

#[cfg(test)]
mod tests;

pub use canvas::TileCanvas;
pub use surface::Surface;

use crate::constants::TILE_SIZE;
use crate::display::Shade;
use crate::room::{Room, Tile};

/// Background shade the frame is cleared to
pub const CLEAR_SHADE: Shade = Shade::Dark;

/// Draw one tile at grid coordinate (tile_x, tile_y)
///
/// Touches exactly the 8×8 pixel block of that cell.
pub fn render_tile(surface: &mut dyn Surface, tile_x: usize, tile_y: usize, tile: Tile) {
    let mut canvas = TileCanvas::new(surface, tile_x * TILE_SIZE, tile_y * TILE_SIZE);
    sprites::draw_sprite(&mut canvas, tile);
}

/// Draw every tile of a room in row-major order (y outer, x inner)
pub fn render_room(surface: &mut dyn Surface, room: &Room) {
    for (x, y, tile) in room.iter() {
        render_tile(surface, x, y, tile);
    }
}

/// Render one complete frame
///
/// Clears the surface, draws the active room if there is one, then
/// presents. With no active room the frame is just the clear color.
pub fn render_frame(surface: &mut dyn Surface, active_room: Option<&Room>) {
    surface.clear(CLEAR_SHADE);

    match active_room {
        Some(room) => render_room(surface, room),
        None => log::trace!("No active room, presenting clear frame"),
    }

    surface.present();
}
