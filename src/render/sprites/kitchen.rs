// Kitchenette furniture: counter, fridge, cat bed

use super::super::canvas::{TileCanvas, EDGE};
use super::footprint_of;
use crate::display::Shade;
use crate::room::TileKind;

/// Counter - 12 tiles wide, 2 tiles tall
///
/// Top row is the worktop with a sink and a two-burner hob; the bottom row
/// is a run of cabinet doors.
pub(super) fn draw_counter(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Counter);
    let pos = fp.cell(variant);

    let top = Shade::Light;
    let cabinet = Shade::Mid;
    let shadow = Shade::Dark;
    let left = pos.col == 0;
    let right = fp.is_right(pos);

    if pos.row == 0 {
        c.fill(top);
        c.hline(0, Shade::Bright);
        c.hline(EDGE, cabinet);

        match pos.col {
            // Sink basin across columns 3 and 4
            3 | 4 => {
                let (x0, x1) = if pos.col == 3 { (2, 7) } else { (0, 5) };
                c.rect(x0, 2, x1 - x0 + 1, 4, cabinet);
                c.rect(x0 + 1, 3, x1 - x0 - 1, 2, shadow);
                if pos.col == 3 {
                    // Tap
                    c.vspan(6, 1, 2, Shade::Bright);
                }
            }
            // Hob burners
            8 | 9 => {
                c.rect(1, 1, 6, 6, shadow);
                c.dots(&[(3, 2), (4, 2), (2, 3), (5, 3), (2, 4), (5, 4), (3, 5), (4, 5)], cabinet);
            }
            _ => {}
        }

        if left {
            c.vline(0, cabinet);
        }
        if right {
            c.vline(EDGE, cabinet);
        }
    } else {
        c.fill(cabinet);
        // Worktop lip
        c.hline(0, top);
        // Toe kick
        c.hline(6, shadow);
        c.hline(7, shadow);

        if left || right {
            // End panels
            let x = if left { 0 } else { EDGE };
            c.vspan(x, 1, 5, top);
        } else {
            // Door seams every two columns, handles beside the seam
            if pos.col % 2 == 0 {
                c.vspan(EDGE, 1, 5, shadow);
                c.dot(5, 2, Shade::Bright);
            } else {
                c.dot(2, 2, Shade::Bright);
            }
        }
    }
}

/// Fridge - 2 tiles wide, 3 tiles tall; freezer on top, handles on the left column
pub(super) fn draw_fridge(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::Fridge);
    let pos = fp.cell(variant);
    let right = fp.is_right(pos);

    let body = Shade::Bright;
    let trim = Shade::Light;
    let shadow = Shade::Dark;

    c.fill(body);

    // Outer sides
    if right {
        c.vline(EDGE, trim);
        c.vline(6, Shade::Mid);
    } else {
        c.vline(0, trim);
    }

    match pos.row {
        0 => {
            c.hline(0, trim);
            // Freezer / fridge split
            c.hline(EDGE, shadow);
            if !right {
                c.vspan(6, 3, 5, shadow);
            }
        }
        1 => {
            if !right {
                c.vspan(6, 1, 6, shadow);
            } else {
                // Magnet
                c.rect(2, 2, 2, 2, Shade::Mid);
            }
        }
        _ => {
            c.hline(5, trim);
            c.hline(6, shadow);
            c.hline(7, shadow);
            // Feet
            let foot = if right { 5 } else { 1 };
            c.rect(foot, 6, 2, 2, Shade::Mid);
        }
    }
}

/// Cat bed - 3×3 round cushion with a sleeping cat in the middle
pub(super) fn draw_catbed(c: &mut TileCanvas, variant: u8) {
    let fp = footprint_of(TileKind::CatBed);
    let pos = fp.cell(variant);

    let rim = Shade::Mid;
    let cushion = Shade::Light;
    let cat = Shade::Bright;
    let shadow = Shade::Dark;

    let left = pos.col == 0;
    let right = fp.is_right(pos);
    let top = pos.row == 0;
    let bottom = fp.is_bottom(pos);

    c.fill(cushion);

    if top {
        c.hline(0, rim);
        c.hline(1, rim);
    }
    if bottom {
        c.hline(5, rim);
        c.hline(6, rim);
        c.hline(7, shadow);
    }
    if left {
        c.vline(0, rim);
        c.vline(1, rim);
    }
    if right {
        c.vline(6, rim);
        c.vline(7, rim);
    }

    // Rounded outer corners
    match (top, bottom, left, right) {
        (true, _, true, _) => c.rect(0, 0, 2, 1, shadow),
        (true, _, _, true) => c.rect(6, 0, 2, 1, shadow),
        (_, true, true, _) => c.dot(0, 6, shadow),
        (_, true, _, true) => c.dot(7, 6, shadow),
        _ => {}
    }

    if !left && !right && !top && !bottom {
        // Curled-up cat
        c.rect(1, 2, 6, 4, cat);
        c.dots(&[(1, 2), (6, 5)], cushion);
        // Ears and closed eye
        c.dots(&[(5, 1), (7, 1)], cat);
        c.dot(6, 3, shadow);
        // Tail
        c.hspan(1, 4, 6, Shade::Mid);
    }
}
