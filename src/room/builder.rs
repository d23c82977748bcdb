// Room builder - Stamps floors, walls and furniture into a room grid
//
// Every stamp overwrites whatever is already in the affected cells, so the
// order of calls decides the final picture where placements overlap.

use super::footprint::{Footprint, RugEdges};
use super::{Room, Tile, TileKind};
use crate::constants::{GRID_HEIGHT, GRID_WIDTH};

/// A straight interior wall with a doorway gap
///
/// Both the run and the doorway are inclusive coordinate ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallRun {
    /// Wall along row `y` from `x_start` to `x_end`
    Horizontal {
        y: usize,
        x_start: usize,
        x_end: usize,
        door_start: usize,
        door_end: usize,
    },
    /// Wall along column `x` from `y_start` to `y_end`
    Vertical {
        x: usize,
        y_start: usize,
        y_end: usize,
        door_start: usize,
        door_end: usize,
    },
}

impl WallRun {
    /// Whether the given position along the run falls inside the doorway
    pub fn is_doorway(&self, along: usize) -> bool {
        let (start, end) = match *self {
            WallRun::Horizontal {
                door_start,
                door_end,
                ..
            }
            | WallRun::Vertical {
                door_start,
                door_end,
                ..
            } => (door_start, door_end),
        };
        (start..=end).contains(&along)
    }

    /// Grid cells of the run as (x, y, is_doorway)
    pub fn cells(&self) -> Vec<(usize, usize, bool)> {
        match *self {
            WallRun::Horizontal {
                y, x_start, x_end, ..
            } => (x_start..=x_end)
                .map(|x| (x, y, self.is_doorway(x)))
                .collect(),
            WallRun::Vertical {
                x, y_start, y_end, ..
            } => (y_start..=y_end)
                .map(|y| (x, y, self.is_doorway(y)))
                .collect(),
        }
    }
}

/// One object stamped at a fixed anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: TileKind,
    /// Anchor column (top-left cell)
    pub x: usize,
    /// Anchor row (top-left cell)
    pub y: usize,
    pub size: Footprint,
}

impl Placement {
    /// Place a fixed-footprint kind at (x, y)
    ///
    /// Rugs have no fixed footprint; use [`Placement::rug`] for them.
    pub const fn new(kind: TileKind, x: usize, y: usize) -> Self {
        let size = match kind.footprint() {
            Some(fp) => fp,
            None => Footprint::SINGLE,
        };
        Self { kind, x, y, size }
    }

    /// Place a `width`×`height` rug at (x, y)
    pub const fn rug(x: usize, y: usize, width: u8, height: u8) -> Self {
        Self {
            kind: TileKind::Rug,
            x,
            y,
            size: Footprint::new(width, height),
        }
    }

    /// Footprint covered by the placement
    pub fn footprint(&self) -> Footprint {
        self.size
    }

    /// Whether the whole footprint lies inside the room grid
    pub fn fits_grid(&self) -> bool {
        self.x + self.size.width as usize <= GRID_WIDTH
            && self.y + self.size.height as usize <= GRID_HEIGHT
    }

    /// Whether the grid cell (x, y) is covered by the placement
    pub fn covers(&self, x: usize, y: usize) -> bool {
        (self.x..self.x + self.size.width as usize).contains(&x)
            && (self.y..self.y + self.size.height as usize).contains(&y)
    }

    /// Variant written into the cell at (row, col) of the footprint
    pub fn variant_at(&self, row: u8, col: u8) -> u8 {
        match self.kind {
            TileKind::Rug => RugEdges::for_cell(
                row as usize,
                col as usize,
                self.size.width as usize,
                self.size.height as usize,
            )
            .bits(),
            _ => self.size.variant_at(row, col),
        }
    }
}

/// Builds a [`Room`] step by step
pub struct RoomBuilder {
    room: Room,
}

impl RoomBuilder {
    /// Start a new room; all cells begin as floor variant 0
    pub fn new(name: &'static str) -> Self {
        Self {
            room: Room::new(name),
        }
    }

    /// Fill every cell with a checkerboard of floor tiles
    pub fn fill_floor(mut self) -> Self {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                self.room
                    .set(x, y, Tile::new(TileKind::Floor, ((x + y) % 2) as u8));
            }
        }
        self
    }

    /// Stamp a ring of wall tiles `thickness` cells thick along all edges
    pub fn border_walls(mut self, thickness: usize) -> Self {
        let thickness = thickness.min(GRID_WIDTH / 2).min(GRID_HEIGHT / 2);

        for t in 0..thickness {
            for x in 0..GRID_WIDTH {
                self.room.set_kind(x, t, TileKind::Wall);
                self.room.set_kind(x, GRID_HEIGHT - 1 - t, TileKind::Wall);
            }
            for y in 0..GRID_HEIGHT {
                self.room.set_kind(t, y, TileKind::Wall);
                self.room.set_kind(GRID_WIDTH - 1 - t, y, TileKind::Wall);
            }
        }
        self
    }

    /// Stamp an interior wall run, leaving its doorway untouched
    ///
    /// Cells of the run that fall outside the grid are skipped.
    pub fn interior_wall(mut self, run: WallRun) -> Self {
        for (x, y, doorway) in run.cells() {
            if doorway || x >= GRID_WIDTH || y >= GRID_HEIGHT {
                continue;
            }
            self.room.set(x, y, Tile::new(TileKind::InteriorWall, 0));
        }
        self
    }

    /// Stamp one object over its whole footprint
    pub fn place(mut self, placement: Placement) -> Self {
        debug_assert!(
            placement.fits_grid(),
            "{} at ({}, {}) does not fit the grid",
            placement.kind.name(),
            placement.x,
            placement.y
        );

        let size = placement.footprint();
        for row in 0..size.height {
            for col in 0..size.width {
                let x = placement.x + col as usize;
                let y = placement.y + row as usize;
                if x >= GRID_WIDTH || y >= GRID_HEIGHT {
                    continue;
                }
                self.room
                    .set(x, y, Tile::new(placement.kind, placement.variant_at(row, col)));
            }
        }
        self
    }

    /// Stamp a list of placements in order
    pub fn place_all(self, placements: &[Placement]) -> Self {
        placements.iter().fold(self, |builder, &p| builder.place(p))
    }

    /// Finish building
    pub fn build(self) -> Room {
        self.room
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_floor_checkerboard() {
        let room = RoomBuilder::new("Test").fill_floor().build();
        assert_eq!(room.tile(0, 0), Tile::new(TileKind::Floor, 0));
        assert_eq!(room.tile(1, 0), Tile::new(TileKind::Floor, 1));
        assert_eq!(room.tile(1, 1), Tile::new(TileKind::Floor, 0));
    }

    #[test]
    fn test_border_walls_thickness() {
        let room = RoomBuilder::new("Test").fill_floor().border_walls(2).build();
        assert_eq!(room.tile(0, 10).kind, TileKind::Wall);
        assert_eq!(room.tile(1, 10).kind, TileKind::Wall);
        assert_eq!(room.tile(2, 10).kind, TileKind::Floor);
        assert_eq!(room.tile(10, 78).kind, TileKind::Wall);
        assert_eq!(room.tile(10, 77).kind, TileKind::Floor);
        assert_eq!(room.tile(48, 40).kind, TileKind::Wall);
        assert_eq!(room.tile(47, 40).kind, TileKind::Floor);
    }

    #[test]
    fn test_interior_wall_doorway() {
        let room = RoomBuilder::new("Test")
            .interior_wall(WallRun::Horizontal {
                y: 5,
                x_start: 2,
                x_end: 10,
                door_start: 4,
                door_end: 6,
            })
            .build();

        assert_eq!(room.tile(2, 5).kind, TileKind::InteriorWall);
        assert_eq!(room.tile(3, 5).kind, TileKind::InteriorWall);
        for x in 4..=6 {
            assert_eq!(room.tile(x, 5).kind, TileKind::Floor);
        }
        assert_eq!(room.tile(7, 5).kind, TileKind::InteriorWall);
        assert_eq!(room.tile(10, 5).kind, TileKind::InteriorWall);
        assert_eq!(room.tile(11, 5).kind, TileKind::Floor);
    }

    #[test]
    fn test_interior_wall_clipped_at_grid_edge() {
        let room = RoomBuilder::new("Test")
            .interior_wall(WallRun::Horizontal {
                y: 10,
                x_start: 45,
                x_end: 55,
                door_start: 60,
                door_end: 60,
            })
            .interior_wall(WallRun::Vertical {
                x: 3,
                y_start: 75,
                y_end: 90,
                door_start: 0,
                door_end: 0,
            })
            .build();

        for x in 45..GRID_WIDTH {
            assert_eq!(room.tile(x, 10).kind, TileKind::InteriorWall);
        }
        for y in 75..GRID_HEIGHT {
            assert_eq!(room.tile(3, y).kind, TileKind::InteriorWall);
        }
        assert_eq!(room.tile(44, 10).kind, TileKind::Floor);
    }

    #[test]
    fn test_vertical_wall_run_cells() {
        let run = WallRun::Vertical {
            x: 3,
            y_start: 0,
            y_end: 4,
            door_start: 2,
            door_end: 2,
        };
        let cells = run.cells();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[2], (3, 2, true));
        assert_eq!(cells[4], (3, 4, false));
    }

    #[test]
    fn test_place_writes_variants() {
        let room = RoomBuilder::new("Test")
            .place(Placement::new(TileKind::Laptop, 4, 6))
            .build();

        assert_eq!(room.tile(4, 6), Tile::new(TileKind::Laptop, 0));
        assert_eq!(room.tile(5, 6), Tile::new(TileKind::Laptop, 1));
        assert_eq!(room.tile(4, 7), Tile::new(TileKind::Laptop, 2));
        assert_eq!(room.tile(5, 7), Tile::new(TileKind::Laptop, 3));
        assert_eq!(room.tile(6, 6).kind, TileKind::Floor);
    }

    #[test]
    fn test_later_placement_wins() {
        let room = RoomBuilder::new("Test")
            .place(Placement::new(TileKind::Desk, 0, 0))
            .place(Placement::new(TileKind::Laptop, 2, 0))
            .build();

        assert_eq!(room.tile(2, 0), Tile::new(TileKind::Laptop, 0));
        assert_eq!(room.tile(1, 0), Tile::new(TileKind::Desk, 1));
        assert_eq!(room.tile(4, 0), Tile::new(TileKind::Desk, 4));
    }

    #[test]
    fn test_rug_variants() {
        let rug = Placement::rug(0, 0, 3, 2);
        assert_eq!(rug.variant_at(0, 0), 0b0101);
        assert_eq!(rug.variant_at(0, 1), 0b0001);
        assert_eq!(rug.variant_at(0, 2), 0b1001);
        assert_eq!(rug.variant_at(1, 0), 0b0110);
        assert_eq!(rug.variant_at(1, 2), 0b1010);
    }

    #[test]
    fn test_placement_fits_and_covers() {
        let bed = Placement::new(TileKind::Bed, 42, 72);
        assert!(bed.fits_grid());
        assert!(bed.covers(49, 79));
        assert!(!bed.covers(41, 72));

        let too_far = Placement::new(TileKind::Bed, 43, 0);
        assert!(!too_far.fits_grid());
    }
}
