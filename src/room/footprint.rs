// Footprints and variant encodings shared by the layout builder and renderer
//
// Multi-tile objects store `row * width + col` in each cell's variant.
// Rugs store an edge mask instead, so their border can be drawn for any
// rug size.

use bitflags::bitflags;

/// Size of a multi-tile object in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: u8,
    pub height: u8,
}

impl Footprint {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Single-tile footprint
    pub const SINGLE: Footprint = Footprint::new(1, 1);

    /// Number of cells covered by the footprint
    pub const fn cells(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Variant for the cell at (row, col) within the footprint
    #[inline]
    pub const fn variant_at(self, row: u8, col: u8) -> u8 {
        row * self.width + col
    }

    /// Decompose a variant into its cell position
    #[inline]
    pub fn cell(self, variant: u8) -> CellPos {
        CellPos::from_variant(variant, self.width)
    }

    /// Whether the cell is in the first or last column
    #[inline]
    pub fn is_side(self, pos: CellPos) -> bool {
        pos.col == 0 || pos.col + 1 == self.width
    }

    /// Whether the cell is in the last row
    #[inline]
    pub fn is_bottom(self, pos: CellPos) -> bool {
        pos.row + 1 == self.height
    }

    /// Whether the cell is in the last column
    #[inline]
    pub fn is_right(self, pos: CellPos) -> bool {
        pos.col + 1 == self.width
    }
}

/// Position of one cell inside a multi-tile object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: u8,
    pub col: u8,
}

impl CellPos {
    /// Split a flat `row * width + col` variant
    ///
    /// A zero width is treated as one so the arithmetic never divides by zero.
    #[inline]
    pub fn from_variant(variant: u8, width: u8) -> Self {
        let width = width.max(1);
        Self {
            row: variant / width,
            col: variant % width,
        }
    }
}

bitflags! {
    /// Edges of a rug present on a given cell
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RugEdges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl RugEdges {
    /// Edge flags for the cell at (row, col) of a `width`×`height` rug
    pub fn for_cell(row: usize, col: usize, width: usize, height: usize) -> Self {
        let mut edges = RugEdges::empty();
        edges.set(RugEdges::TOP, row == 0);
        edges.set(RugEdges::BOTTOM, row + 1 == height);
        edges.set(RugEdges::LEFT, col == 0);
        edges.set(RugEdges::RIGHT, col + 1 == width);
        edges
    }

    /// Decode a rug tile variant, ignoring the unused high bits
    #[inline]
    pub fn from_variant(variant: u8) -> Self {
        RugEdges::from_bits_truncate(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_variant() {
        let fp = Footprint::new(8, 4);
        assert_eq!(fp.cell(0), CellPos { row: 0, col: 0 });
        assert_eq!(fp.cell(7), CellPos { row: 0, col: 7 });
        assert_eq!(fp.cell(9), CellPos { row: 1, col: 1 });
        assert_eq!(fp.cell(31), CellPos { row: 3, col: 7 });
    }

    #[test]
    fn test_variant_at_inverts_cell() {
        let fp = Footprint::new(6, 3);
        for row in 0..3 {
            for col in 0..6 {
                let variant = fp.variant_at(row, col);
                assert_eq!(fp.cell(variant), CellPos { row, col });
            }
        }
    }

    #[test]
    fn test_zero_width_does_not_panic() {
        assert_eq!(CellPos::from_variant(3, 0), CellPos { row: 3, col: 0 });
    }

    #[test]
    fn test_side_and_bottom() {
        let fp = Footprint::new(4, 2);
        assert!(fp.is_side(fp.cell(0)));
        assert!(fp.is_side(fp.cell(3)));
        assert!(!fp.is_side(fp.cell(1)));
        assert!(fp.is_bottom(fp.cell(5)));
        assert!(!fp.is_bottom(fp.cell(2)));
    }

    #[test]
    fn test_rug_edges_for_corners() {
        assert_eq!(
            RugEdges::for_cell(0, 0, 4, 3),
            RugEdges::TOP | RugEdges::LEFT
        );
        assert_eq!(
            RugEdges::for_cell(2, 3, 4, 3),
            RugEdges::BOTTOM | RugEdges::RIGHT
        );
        assert_eq!(RugEdges::for_cell(1, 1, 4, 3), RugEdges::empty());
    }

    #[test]
    fn test_rug_edges_single_row() {
        let edges = RugEdges::for_cell(0, 1, 3, 1);
        assert_eq!(edges, RugEdges::TOP | RugEdges::BOTTOM);
    }

    #[test]
    fn test_rug_edges_bits() {
        assert_eq!(RugEdges::TOP.bits(), 1);
        assert_eq!(RugEdges::BOTTOM.bits(), 2);
        assert_eq!(RugEdges::LEFT.bits(), 4);
        assert_eq!(RugEdges::RIGHT.bits(), 8);
        assert_eq!(RugEdges::from_variant(0xF5), RugEdges::TOP | RugEdges::LEFT);
    }
}
