// Living room furniture: couch, TV, coffee table, plant, bed, nightstand
//
// Top-down 3/4 view. Each routine picks its fragment from the cell
// position inside the object's footprint.

use super::super::canvas::{TileCanvas, EDGE};
use super::footprint_of;
use crate::display::Shade;
use crate::room::TileKind;

/// Couch - 8 tiles wide, 4 tiles tall
///
/// Row 0 is the backrest, the middle rows are seat cushions and the last
/// row is the front skirt. Edge columns are armrests.
pub(super) fn draw_couch(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Couch);
    let pos = fp.cell(variant);

    let frame = Shade::Light;
    let cushion = Shade::Mid;
    let shadow = Shade::Dark;
    let highlight = Shade::Bright;

    let left = pos.col == 0;
    let right = fp.is_right(pos);

    if pos.row == 0 {
        c.fill(frame);
        c.hline(0, highlight);
        if left {
            c.dots(&[(7, 4), (7, 5)], shadow);
        } else if right {
            c.dots(&[(0, 4), (0, 5)], shadow);
        } else {
            // Cushion tops peeking over the backrest
            c.rect(1, 6, 6, 2, cushion);
        }
    } else if fp.is_bottom(pos) {
        c.fill(frame);
        // Front shadow
        c.hline(6, shadow);
        c.hline(7, shadow);
        if left || right {
            // Armrest fronts
            c.rect(3, 0, 2, 6, highlight);
        } else {
            // Cushion overhang
            c.hline(0, cushion);
            c.hline(1, cushion);
        }
    } else if left {
        c.fill(frame);
        c.dots(&[(7, 0), (7, 1), (7, 6), (7, 7)], shadow);
    } else if right {
        c.fill(frame);
        c.dots(&[(0, 0), (0, 1), (0, 6), (0, 7)], shadow);
    } else {
        c.fill(cushion);
        // Divider between cushions
        if pos.col % 2 == 0 {
            c.vspan(7, 2, 5, shadow);
        }
        if pos.row == 1 {
            c.dots(&[(3, 3), (4, 3)], highlight);
        }
    }
}

/// TV - 6 tiles wide, 2 tiles tall; dark screen inside a mid bezel
pub(super) fn draw_tv(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Tv);
    let pos = fp.cell(variant);

    let bezel = Shade::Mid;
    let screen = Shade::Dark;
    let left = pos.col == 0;
    let right = fp.is_right(pos);

    c.fill(screen);

    if left {
        c.vline(0, bezel);
        c.vline(1, bezel);
    }
    if right {
        c.vline(6, bezel);
        c.vline(7, bezel);
    }

    if pos.row == 0 {
        c.hline(0, Shade::Light);
        c.hline(1, bezel);
        // Glare in the upper left of the screen
        if pos.col == 1 {
            c.dots(&[(2, 3), (3, 3), (2, 4)], Shade::Bright);
        }
        // Scan lines
        if !left && !right {
            c.hspan(0, EDGE, 6, Shade::Mid);
        }
    } else {
        c.hline(5, bezel);
        c.hline(6, bezel);
        c.hline(7, Shade::Dark);
        if left || right {
            // Feet
            let x = if left { 2 } else { 4 };
            c.rect(x, 7, 2, 1, Shade::Light);
        }
        // Power light on the centre column
        if pos.col == fp.width / 2 {
            c.dot(0, 5, Shade::Bright);
        }
    }
}

/// Coffee table - 4 tiles wide, 2 tiles tall
pub(super) fn draw_coffee_table(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::CoffeeTable);
    let pos = fp.cell(variant);

    let surface = Shade::Light;
    let edge = Shade::Mid;
    let shadow = Shade::Dark;
    let left = pos.col == 0;
    let right = fp.is_right(pos);

    c.fill(surface);

    if pos.row == 0 {
        c.hline(0, Shade::Bright);
        if left {
            c.vline(0, edge);
        }
        if right {
            c.vline(EDGE, edge);
        }
        // Mug on the second tile
        if pos.col == 1 {
            c.rect(3, 3, 2, 2, shadow);
            c.dot(5, 3, shadow);
            c.dot(3, 3, Shade::Bright);
        }
        // Magazine on the third
        if pos.col == 2 {
            c.rect(1, 2, 4, 3, edge);
            c.hspan(2, 3, 3, Shade::Bright);
        }
    } else {
        c.hline(4, edge);
        c.hline(5, edge);
        c.hline(6, shadow);
        c.hline(7, shadow);
        if left {
            c.vline(0, edge);
            c.vspan(1, 4, 7, edge);
        }
        if right {
            c.vline(EDGE, edge);
            c.vspan(6, 4, 7, edge);
        }
    }
}

/// Horizontal span drawn in the left plant column's coordinates
fn mirrored_span(c: &mut TileCanvas, mirror: bool, x0: usize, x1: usize, y: usize, shade: Shade) {
    if mirror {
        c.hspan(EDGE - x1, EDGE - x0, y, shade);
    } else {
        c.hspan(x0, x1, y, shade);
    }
}

/// Potted plant - 2 tiles wide, 3 tiles tall; the right column mirrors the left
pub(super) fn draw_plant(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Plant);
    let pos = fp.cell(variant);
    let mirror = fp.is_right(pos);
    let mx = |x: usize| if mirror { EDGE - x } else { x };

    let leaf = Shade::Light;
    let leaf_hi = Shade::Bright;
    let stem = Shade::Mid;

    c.fill(Shade::Dark);

    match pos.row {
        0 => {
            // Leaf crown
            mirrored_span(c, mirror, 5, 7, 1, leaf);
            mirrored_span(c, mirror, 3, 7, 2, leaf);
            for y in 3..8 {
                mirrored_span(c, mirror, 2, 7, y, leaf);
            }
            c.dot(mx(1), 6, leaf);
            c.dots(&[(mx(5), 3), (mx(4), 5), (mx(6), 6)], leaf_hi);
        }
        1 => {
            for y in 0..4 {
                mirrored_span(c, mirror, 1, 7, y, leaf);
            }
            mirrored_span(c, mirror, 3, 7, 4, leaf);
            c.dots(&[(mx(3), 1), (mx(6), 2)], leaf_hi);
            // Stem
            c.vspan(mx(7), 5, 7, stem);
            c.dot(mx(6), 6, stem);
        }
        _ => {
            // Pot rim
            mirrored_span(c, mirror, 1, 7, 0, Shade::Bright);
            mirrored_span(c, mirror, 1, 7, 1, leaf);
            // Pot body tapers towards the base
            for y in 2..6 {
                mirrored_span(c, mirror, 1 + (y - 2) / 2, 7, y, stem);
            }
            c.dot(mx(3), 3, leaf);
            c.hline(6, Shade::Dark);
            c.hline(7, Shade::Dark);
        }
    }
}

/// Bed - 8 tiles square: headboard, pillows, blanket and footboard
pub(super) fn draw_bed(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Bed);
    let pos = fp.cell(variant);

    let frame = Shade::Mid;
    let sheet = Shade::Light;
    let pillow = Shade::Bright;
    let blanket = Shade::Mid;
    let shadow = Shade::Dark;

    let left = pos.col == 0;
    let right = fp.is_right(pos);
    let last = fp.height - 1;

    match pos.row {
        0 => {
            // Headboard
            c.fill(frame);
            c.hline(0, Shade::Bright);
            c.hline(EDGE, shadow);
            if !left && !right {
                c.dots(&[(3, 3), (4, 3)], shadow);
            }
        }
        1 | 2 => {
            c.fill(sheet);
            if !left && !right {
                // Two pillows spanning columns 1..=3 and 4..=6
                let first = pos.col == 1 || pos.col == 4;
                let end = pos.col == 3 || pos.col == 6;
                let (y0, y1) = if pos.row == 1 { (2, 7) } else { (0, 3) };
                let x0 = if first { 1 } else { 0 };
                let x1 = if end { 6 } else { 7 };
                c.rect(x0, y0, x1 - x0 + 1, y1 - y0 + 1, pillow);
                if pos.row == 2 {
                    c.hspan(x0, x1, 4, shadow);
                }
            }
        }
        row if row == last => {
            // Footboard
            c.fill(frame);
            c.hline(0, Shade::Bright);
            c.hline(6, shadow);
            c.hline(7, shadow);
        }
        row => {
            c.fill(blanket);
            if row == 3 {
                // Folded-over sheet
                c.hline(0, sheet);
                c.hline(1, sheet);
                c.hline(2, shadow);
            }
            // Quilt stitching
            if (pos.col + row) % 2 == 0 {
                c.dots(&[(2, 4), (5, 6)], Shade::Light);
            } else {
                c.dots(&[(5, 4), (2, 6)], Shade::Light);
            }
        }
    }

    // Side rails
    if left {
        c.vline(0, Shade::Light);
        c.vline(1, shadow);
    }
    if right {
        c.vline(6, shadow);
        c.vline(EDGE, Shade::Light);
    }
}

/// Nightstand - 2×2 with a lamp on top and a drawer in front
pub(super) fn draw_nightstand(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Nightstand);
    let pos = fp.cell(variant);
    let right = fp.is_right(pos);

    let wood = Shade::Mid;
    let top = Shade::Light;
    let shadow = Shade::Dark;

    if pos.row == 0 {
        c.fill(top);
        c.hline(0, Shade::Bright);
        if right {
            c.vline(EDGE, wood);
            // Alarm clock
            c.rect(1, 3, 3, 3, shadow);
            c.dot(2, 4, Shade::Bright);
        } else {
            c.vline(0, wood);
            // Lamp: shade over a thin base
            c.hspan(3, 6, 1, Shade::Bright);
            c.hspan(2, 7, 2, Shade::Bright);
            c.hspan(2, 7, 3, Shade::Bright);
            c.vspan(5, 4, 5, shadow);
            c.hspan(3, 7, 6, shadow);
        }
    } else {
        c.fill(wood);
        c.hline(0, top);
        // Drawer
        c.hline(3, shadow);
        let knob = if right { 0 } else { EDGE };
        c.dot(knob, 2, Shade::Bright);
        // Leg and floor shadow
        c.hline(7, shadow);
        let leg = if right { 6 } else { 1 };
        c.vspan(leg, 5, 7, wood);
    }
}
