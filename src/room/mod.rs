// Room module - Tile grid model and layout construction
//
// This module provides:
// - The closed set of tile kinds and their footprints
// - The Room grid (50×80 tiles) with a display name
// - A builder for stamping floors, walls and furniture
// - The home room layout

pub mod builder;
pub mod footprint;
pub mod home;

pub use builder::{Placement, RoomBuilder, WallRun};
pub use footprint::{CellPos, Footprint, RugEdges};
pub use home::{build_home_room, HOME_BORDER_THICKNESS, HOME_FURNITURE, HOME_NAME, HOME_WALLS};

use crate::constants::{GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};

/// Kind of a tile: structure or one furniture piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    /// Walkable floor
    #[default]
    Floor,
    /// Outer wall
    Wall,
    /// Room exit
    Door,
    Couch,
    Desk,
    /// Laptop sitting on the desk
    Laptop,
    Bookshelf,
    /// Rug (variant is an edge mask)
    Rug,
    Tv,
    CoffeeTable,
    /// Kitchen counter
    Counter,
    Fridge,
    CatBed,
    /// Potted plant
    Plant,
    Bed,
    /// Nightstand with lamp
    Nightstand,
    /// Divider between zones
    InteriorWall,
}

impl TileKind {
    /// Every tile kind, in declaration order
    pub const ALL: [TileKind; 17] = [
        TileKind::Floor,
        TileKind::Wall,
        TileKind::Door,
        TileKind::Couch,
        TileKind::Desk,
        TileKind::Laptop,
        TileKind::Bookshelf,
        TileKind::Rug,
        TileKind::Tv,
        TileKind::CoffeeTable,
        TileKind::Counter,
        TileKind::Fridge,
        TileKind::CatBed,
        TileKind::Plant,
        TileKind::Bed,
        TileKind::Nightstand,
        TileKind::InteriorWall,
    ];

    /// Fixed footprint of the kind
    ///
    /// Rugs are sized per placement and return `None`.
    pub const fn footprint(self) -> Option<Footprint> {
        let fp = match self {
            TileKind::Floor | TileKind::Wall | TileKind::InteriorWall => Footprint::SINGLE,
            TileKind::Door => Footprint::new(2, 3),
            TileKind::Couch => Footprint::new(8, 4),
            TileKind::Desk => Footprint::new(6, 3),
            TileKind::Laptop => Footprint::new(2, 2),
            TileKind::Bookshelf => Footprint::new(12, 2),
            TileKind::Rug => return None,
            TileKind::Tv => Footprint::new(6, 2),
            TileKind::CoffeeTable => Footprint::new(4, 2),
            TileKind::Counter => Footprint::new(12, 2),
            TileKind::Fridge => Footprint::new(2, 3),
            TileKind::CatBed => Footprint::new(3, 3),
            TileKind::Plant => Footprint::new(2, 3),
            TileKind::Bed => Footprint::new(8, 8),
            TileKind::Nightstand => Footprint::new(2, 2),
        };
        Some(fp)
    }

    /// Number of distinct variants the renderer draws for this kind
    pub const fn variant_count(self) -> usize {
        match self {
            TileKind::Floor => 2,
            TileKind::Rug => 16,
            other => match other.footprint() {
                Some(fp) => fp.cells(),
                None => 1,
            },
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Floor => "floor",
            TileKind::Wall => "wall",
            TileKind::Door => "door",
            TileKind::Couch => "couch",
            TileKind::Desk => "desk",
            TileKind::Laptop => "laptop",
            TileKind::Bookshelf => "bookshelf",
            TileKind::Rug => "rug",
            TileKind::Tv => "tv",
            TileKind::CoffeeTable => "coffee table",
            TileKind::Counter => "counter",
            TileKind::Fridge => "fridge",
            TileKind::CatBed => "cat bed",
            TileKind::Plant => "plant",
            TileKind::Bed => "bed",
            TileKind::Nightstand => "nightstand",
            TileKind::InteriorWall => "interior wall",
        }
    }
}

/// A single grid cell: kind plus a kind-specific variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub kind: TileKind,
    pub variant: u8,
}

impl Tile {
    pub const fn new(kind: TileKind, variant: u8) -> Self {
        Self { kind, variant }
    }
}

/// A fixed-size grid of tiles with a display name
///
/// Tiles are stored row-major. Unset cells are floor with variant 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: &'static str,
    tiles: [Tile; GRID_SIZE],
}

impl Room {
    /// Create a room with every cell set to floor variant 0
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tiles: [Tile::default(); GRID_SIZE],
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the tile at grid coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        assert!(x < GRID_WIDTH, "Tile X {} out of bounds", x);
        assert!(y < GRID_HEIGHT, "Tile Y {} out of bounds", y);

        self.tiles[y * GRID_WIDTH + x]
    }

    /// Get the tile at grid coordinates, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        (x < GRID_WIDTH && y < GRID_HEIGHT).then(|| self.tiles[y * GRID_WIDTH + x])
    }

    /// Set the tile at grid coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        assert!(x < GRID_WIDTH, "Tile X {} out of bounds", x);
        assert!(y < GRID_HEIGHT, "Tile Y {} out of bounds", y);

        self.tiles[y * GRID_WIDTH + x] = tile;
    }

    /// Change only the kind of a tile, keeping its variant
    #[inline]
    pub(crate) fn set_kind(&mut self, x: usize, y: usize, kind: TileKind) {
        let tile = self.tile(x, y);
        self.set(x, y, Tile::new(kind, tile.variant));
    }

    /// Iterate over all tiles in row-major order as (x, y, tile)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| (i % GRID_WIDTH, i / GRID_WIDTH, tile))
    }

    /// Number of cells holding the given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }
}
