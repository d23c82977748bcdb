// Workspace furniture: desk, laptop, bookshelf

use super::super::canvas::{TileCanvas, EDGE};
use super::footprint_of;
use crate::display::Shade;
use crate::room::TileKind;

/// Desk - 6 tiles wide, 3 tiles tall
///
/// Top-down view: back edge, wood surface, then the front edge with legs
/// on the corner columns.
pub(super) fn draw_desk(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Desk);
    let pos = fp.cell(variant);

    let surface = Shade::Mid;
    let edge = Shade::Light;
    let shadow = Shade::Dark;
    let left = pos.col == 0;
    let right = fp.is_right(pos);

    c.fill(surface);

    if fp.is_bottom(pos) {
        // Front edge (thicker)
        c.hline(4, edge);
        c.hline(5, edge);
        c.hline(6, shadow);
        c.hline(7, shadow);

        // Legs at the corners
        if left {
            c.vline(0, edge);
            c.vspan(1, 5, 7, shadow);
        }
        if right {
            c.vline(EDGE, edge);
            c.vspan(6, 5, 7, shadow);
        }
        return;
    }

    if pos.row == 0 {
        c.hline(0, edge);
    }

    // Wood grain
    if !fp.is_side(pos) {
        if pos.row == 0 {
            c.dots(&[(2, 3), (3, 4), (5, 5)], edge);
        } else {
            c.dots(&[(5, 1), (6, 2), (1, 6)], edge);
        }
    }

    // Side edges
    if left {
        c.vline(0, edge);
    }
    if right {
        c.vline(EDGE, edge);
    }
}

/// Laptop - 2×2: screen tilted back on top, keyboard in front
pub(super) fn draw_laptop(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Laptop);
    let pos = fp.cell(variant);

    let body = Shade::Light;
    let dark = Shade::Dark;
    let frame = Shade::Mid;

    c.fill(body);

    if pos.row == 0 {
        // Screen inside the bezel
        c.rect(1, 1, 6, 6, dark);
        // Glare
        c.dots(&[(2, 2), (3, 2)], Shade::Bright);
        // Code lines
        c.dots(&[(2, 4), (3, 4), (4, 4), (2, 5), (3, 5)], frame);
    } else {
        // Keyboard
        c.rect(1, 1, 6, 4, dark);
        // Key rows
        c.hspan(1, 6, 1, frame);
        c.hspan(1, 6, 3, frame);
        // Trackpad
        c.rect(3, 5, 2, 2, frame);
    }
}

/// Spine shades cycled across the shelves
const SPINES: [Shade; 5] = [
    Shade::Bright,
    Shade::Light,
    Shade::Mid,
    Shade::Bright,
    Shade::Light,
];

/// Spine heights (top pixel row) within one shelf, indexed by column
const SPINE_TOPS: [usize; 7] = [1, 2, 1, 3, 1, 2, 2];

/// Bookshelf - 12 tiles wide, 2 tiles tall; two shelves of book spines
pub(super) fn draw_bookshelf(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Bookshelf);
    let pos = fp.cell(variant);

    let frame = Shade::Mid;
    let board = Shade::Light;
    let back = Shade::Dark;
    let left = pos.col == 0;

    if fp.is_side(pos) {
        // Side panel
        c.fill(frame);
        let inner = if left { EDGE } else { 0 };
        c.vline(inner, back);
        let outer = if left { 0 } else { EDGE };
        c.vline(outer, board);
        if pos.row == 0 {
            c.hline(0, board);
        } else {
            c.hline(6, back);
            c.hline(7, back);
        }
        return;
    }

    c.fill(back);

    // Books: 1-px spines with 1-px gaps, shade and height varying per column
    let (shelf_bottom, board_row) = if pos.row == 0 { (6, 7) } else { (4, 5) };
    for i in 0..4 {
        let x = i * 2;
        let seed = pos.col as usize * 3 + pos.row as usize * 5 + i;
        let top = SPINE_TOPS[seed % SPINE_TOPS.len()] + usize::from(pos.row);
        c.vspan(x, top, shelf_bottom, SPINES[seed % SPINES.len()]);
    }
    // Leaning book every few columns
    if pos.col % 5 == 3 {
        c.dots(&[(7, 3), (6, 4), (7, 4), (6, 5)], Shade::Bright);
    }

    c.hline(board_row, board);
    if pos.row == 0 {
        c.hline(0, frame);
    } else {
        // Plinth
        c.hline(6, frame);
        c.hline(7, back);
    }
}
