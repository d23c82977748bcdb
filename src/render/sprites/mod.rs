// Tile sprites - Hand-authored 8×8 pixel patterns for every tile kind
//
// Each routine receives the tile's variant and draws one cell. Routines
// for multi-tile objects split the variant into (row, col) through the
// kind's footprint and draw the matching fragment, so adjacent cells line
// up into one seamless sprite.

mod kitchen;
mod living;
mod structure;
mod workspace;

use super::canvas::TileCanvas;
use crate::room::{Footprint, Tile, TileKind};

/// Footprint used to decode a kind's variants
#[inline]
fn footprint_of(kind: TileKind) -> Footprint {
    kind.footprint().unwrap_or(Footprint::SINGLE)
}

/// Draw one tile onto the canvas
pub(crate) fn draw_sprite(c: &mut TileCanvas, tile: Tile) {
    let v = tile.variant;
    match tile.kind {
        TileKind::Floor => structure::draw_floor(c, v),
        TileKind::Wall => structure::draw_wall(c, v),
        TileKind::InteriorWall => structure::draw_interior_wall(c, v),
        TileKind::Door => structure::draw_door(c, v),
        TileKind::Rug => structure::draw_rug(c, v),
        TileKind::Couch => living::draw_couch(c, v),
        TileKind::Tv => living::draw_tv(c, v),
        TileKind::CoffeeTable => living::draw_coffee_table(c, v),
        TileKind::Plant => living::draw_plant(c, v),
        TileKind::Bed => living::draw_bed(c, v),
        TileKind::Nightstand => living::draw_nightstand(c, v),
        TileKind::Counter => kitchen::draw_counter(c, v),
        TileKind::Fridge => kitchen::draw_fridge(c, v),
        TileKind::CatBed => kitchen::draw_catbed(c, v),
        TileKind::Desk => workspace::draw_desk(c, v),
        TileKind::Laptop => workspace::draw_laptop(c, v),
        TileKind::Bookshelf => workspace::draw_bookshelf(c, v),
    }
}
