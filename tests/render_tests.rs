// Renderer integration tests
//
// Drives the public render API with a recording surface and the real
// frame buffer.

mod common;

use common::{temp_path, RecordingSurface};
use pixel_home::display::{FrameBuffer, Shade, FLOOR_ALT, PALETTE};
use pixel_home::render::{render_frame, render_tile, CLEAR_SHADE};
use pixel_home::room::{build_home_room, Tile, TileKind};
use pixel_home::scene::Scene;
use pixel_home::screenshot::save_png;

#[test]
fn test_every_kind_and_variant_draws() {
    for kind in TileKind::ALL {
        for variant in 0..kind.variant_count() {
            let mut surface = RecordingSurface::new();
            render_tile(&mut surface, 3, 4, Tile::new(kind, variant as u8));

            assert!(
                !surface.writes.is_empty(),
                "{} variant {} drew nothing",
                kind.name(),
                variant
            );
            assert!(
                surface.all_inside_tile(3, 4),
                "{} variant {} drew outside its tile",
                kind.name(),
                variant
            );
        }
    }
}

#[test]
fn test_out_of_range_variants_stay_in_tile() {
    for kind in TileKind::ALL {
        for variant in kind.variant_count()..=255 {
            let mut surface = RecordingSurface::new();
            render_tile(&mut surface, 49, 79, Tile::new(kind, variant as u8));
            assert!(surface.all_inside_tile(49, 79));
        }
    }
}

#[test]
fn test_null_room_frame() {
    let mut surface = RecordingSurface::new();
    render_frame(&mut surface, None);

    assert_eq!(surface.clears, vec![CLEAR_SHADE]);
    assert!(surface.writes.is_empty());
    assert_eq!(surface.presents, 1);
}

#[test]
fn test_home_frame_covers_whole_surface() {
    let room = build_home_room();
    let mut surface = RecordingSurface::new();
    render_frame(&mut surface, Some(&room));

    // 50×80 tiles, each opening with a full-tile fill
    let tile_fills = surface
        .writes
        .iter()
        .filter(|w| w.width == 8 && w.height == 8)
        .count();
    assert!(tile_fills >= 50 * 80);
    assert_eq!(surface.clears.len(), 1);
    assert_eq!(surface.presents, 1);
}

#[test]
fn test_floor_colors() {
    let mut fb = FrameBuffer::new();
    render_tile(&mut fb, 0, 0, Tile::new(TileKind::Floor, 0));
    render_tile(&mut fb, 1, 0, Tile::new(TileKind::Floor, 1));

    assert_eq!(fb.get_pixel(3, 3), Shade::FloorAlt);
    assert_eq!(fb.get_pixel(11, 3), Shade::Dark);
    assert_eq!(Shade::FloorAlt.color(), FLOOR_ALT);
}

#[test]
fn test_headless_screenshot() {
    let mut scene = Scene::new();
    let mut frame = FrameBuffer::new();
    scene.step(&mut frame);

    // Top-left pixel is outer wall brick
    let rgb = frame.to_rgb();
    assert_eq!(&rgb[0..3], &PALETTE[2].to_rgb());

    let path = temp_path("headless.png");
    save_png(&frame, &path).expect("Failed to save PNG");
    let bytes = std::fs::read(&path).expect("Failed to read PNG");
    let _ = std::fs::remove_file(&path);

    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
