// Structural tiles: floor, walls, door and rugs

use super::super::canvas::{TileCanvas, EDGE};
use crate::display::Shade;
use crate::room::{Footprint, RugEdges, TileKind};

const DOOR: Footprint = match TileKind::Door.footprint() {
    Some(fp) => fp,
    None => Footprint::SINGLE,
};

/// Flat floor; odd checkerboard cells use the dark palette color
pub(super) fn draw_floor(c: &mut TileCanvas, variant: u8) {
    let base = if variant != 0 {
        Shade::Dark
    } else {
        Shade::FloorAlt
    };
    c.fill(base);
}

/// Outer wall - brick pattern, identical for every variant
pub(super) fn draw_wall(c: &mut TileCanvas, _variant: u8) {
    c.fill(Shade::Light);

    // Mortar rows
    c.hline(2, Shade::Dark);
    c.hline(5, Shade::Dark);

    // Vertical mortar, offset per brick row
    c.dots(&[(3, 0), (3, 1), (7, 3), (7, 4), (3, 6), (3, 7)], Shade::Dark);
}

/// Interior divider - plaster with a trim line on top and a base line
pub(super) fn draw_interior_wall(c: &mut TileCanvas, _variant: u8) {
    c.fill(Shade::Mid);
    c.hline(0, Shade::Light);
    c.hline(1, Shade::Light);
    c.hline(EDGE, Shade::Dark);
    c.dots(&[(2, 4), (6, 3)], Shade::Dark);
}

/// Door - 2 tiles wide, 3 tiles tall
///
/// Variants: 0=top-left, 1=top-right, 2=mid-left, 3=mid-right,
/// 4=bottom-left, 5=bottom-right. Only mid-right carries the knob.
pub(super) fn draw_door(c: &mut TileCanvas, variant: u8) {
    let frame = Shade::Mid;
    let dark = Shade::Dark;

    c.fill(Shade::Light);

    let pos = DOOR.cell(variant);
    let right = DOOR.is_right(pos);

    // Side frame
    if right {
        c.vline(6, frame);
        c.vline(7, frame);
    } else {
        c.vline(0, frame);
        c.vline(1, frame);
    }

    match pos.row {
        0 => {
            c.hline(0, frame);
            c.hline(1, frame);
        }
        1 => {
            if right {
                // Knob
                c.dots(&[(1, 3), (2, 3), (2, 4)], Shade::Bright);
                c.dot(1, 4, dark);
            }
            // Panel detail
            c.dots(&[(4, 2), (5, 2), (4, 5), (5, 5)], dark);
        }
        _ => {
            c.hline(6, frame);
            c.hline(7, frame);
        }
    }
}

/// Rug - variant is an edge mask, so any rug size gets a proper border
pub(super) fn draw_rug(c: &mut TileCanvas, variant: u8) {
    let edges = RugEdges::from_variant(variant);
    let band = Shade::Light;
    let accent = Shade::Bright;

    c.fill(Shade::Mid);

    if edges.is_empty() {
        // Centre medallion
        c.dots(&[(3, 1), (4, 1), (1, 3), (6, 3), (1, 4), (6, 4), (3, 6), (4, 6)], band);
        c.dots(&[(2, 2), (5, 2), (2, 5), (5, 5)], band);
        c.rect(3, 3, 2, 2, accent);
        c.dots(&[(0, 0), (7, 7)], Shade::Dark);
    } else {
        c.dots(&[(3, 4), (4, 3)], band);
    }

    if edges.contains(RugEdges::TOP) {
        c.hline(0, band);
        c.hline(1, band);
    }
    if edges.contains(RugEdges::BOTTOM) {
        c.hline(6, band);
        c.hline(7, band);
    }
    if edges.contains(RugEdges::LEFT) {
        c.vline(0, band);
        c.vline(1, band);
    }
    if edges.contains(RugEdges::RIGHT) {
        c.vline(6, band);
        c.vline(7, band);
    }

    // Corner accents where two borders meet
    let corners = [
        (RugEdges::TOP | RugEdges::LEFT, (1, 1)),
        (RugEdges::TOP | RugEdges::RIGHT, (6, 1)),
        (RugEdges::BOTTOM | RugEdges::LEFT, (1, 6)),
        (RugEdges::BOTTOM | RugEdges::RIGHT, (6, 6)),
    ];
    for (pair, (x, y)) in corners {
        if edges.contains(pair) {
            c.dot(x, y, accent);
        }
    }
}
