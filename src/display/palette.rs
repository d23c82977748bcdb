// Four-color palette - the only source of color for every tile sprite
//
// Colors are ordered dark -> mid -> light -> bright. One extra shade,
// the alternate floor tone, lives outside the palette array and is only
// ever produced by the floor checkerboard.

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to the [R, G, B, A] layout expected by the pixels crate
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }

    /// Convert to packed RGB bytes (used for PNG export)
    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// The four palette colors, indexed 0..3
pub const PALETTE: [Color; 4] = [
    Color::new(0x0F, 0x38, 0x0F), // 0: dark (background)
    Color::new(0x30, 0x62, 0x30), // 1: mid (shadows/secondary)
    Color::new(0x8B, 0xAC, 0x0F), // 2: light (highlights)
    Color::new(0x9B, 0xBC, 0x0F), // 3: bright (primary)
];

/// Alternate floor tone for the even checkerboard cells
pub const FLOOR_ALT: Color = Color::new(0x12, 0x40, 0x12);

/// A drawable shade: one of the palette entries or the reserved floor tone
///
/// Surfaces store shades rather than raw colors, so anything drawn
/// through them is a palette color by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Shade {
    #[default]
    Dark = 0,
    Mid = 1,
    Light = 2,
    Bright = 3,
    FloorAlt = 4,
}

impl Shade {
    /// Resolve the shade to its RGB color
    #[inline]
    pub fn color(self) -> Color {
        match self {
            Shade::FloorAlt => FLOOR_ALT,
            palette => PALETTE[palette as usize],
        }
    }
}
