// Home room layout
//
// Apartment floor plan with three zones:
// - Living room (y=2..39): TV, plants, rug, coffee table, couch, bed, nightstand
// - Kitchenette (x=2..15, y=41..77): counter, fridge, cat bed
// - Workspace (x=17..47, y=41..77): bookshelf, desk with laptop, rug, exit door
//
// Interior walls divide the zones with 3-tile doorway openings.

use super::builder::{Placement, RoomBuilder, WallRun};
use super::{Room, TileKind};

/// Display name of the home room
pub const HOME_NAME: &str = "Home";

/// Thickness of the outer wall ring in tiles
pub const HOME_BORDER_THICKNESS: usize = 2;

/// Interior walls, stamped before any furniture
pub const HOME_WALLS: [WallRun; 2] = [
    WallRun::Horizontal {
        y: 40,
        x_start: 2,
        x_end: 47,
        door_start: 20,
        door_end: 22,
    },
    WallRun::Vertical {
        x: 16,
        y_start: 41,
        y_end: 77,
        door_start: 73,
        door_end: 75,
    },
];

/// Furniture in stamping order; the laptop is meant to sit on the desk
pub const HOME_FURNITURE: [Placement; 16] = [
    // Living room
    Placement::new(TileKind::Tv, 20, 3),
    Placement::new(TileKind::Plant, 5, 3),
    Placement::new(TileKind::Plant, 44, 3),
    Placement::rug(15, 12, 14, 12),
    Placement::new(TileKind::CoffeeTable, 20, 24),
    Placement::new(TileKind::Couch, 5, 26),
    Placement::new(TileKind::Bed, 36, 26),
    Placement::new(TileKind::Nightstand, 34, 28),
    // Kitchenette
    Placement::new(TileKind::Counter, 2, 44),
    Placement::new(TileKind::Fridge, 2, 48),
    Placement::new(TileKind::CatBed, 7, 58),
    // Workspace
    Placement::new(TileKind::Bookshelf, 22, 43),
    Placement::new(TileKind::Desk, 30, 50),
    Placement::new(TileKind::Laptop, 32, 50),
    Placement::rug(28, 60, 10, 6),
    Placement::new(TileKind::Door, 24, 75),
];

/// Build the home room
///
/// Pure and deterministic: every call returns an identical grid.
pub fn build_home_room() -> Room {
    let builder = RoomBuilder::new(HOME_NAME)
        .fill_floor()
        .border_walls(HOME_BORDER_THICKNESS);

    HOME_WALLS
        .iter()
        .fold(builder, |builder, &run| builder.interior_wall(run))
        .place_all(&HOME_FURNITURE)
        .build()
}
