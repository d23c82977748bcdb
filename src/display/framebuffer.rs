// Frame Buffer - In-memory drawing surface for one 400×640 frame
//
// Each pixel is stored as a palette shade and is only resolved to RGB
// when the frame is uploaded to the window or exported as a PNG.

use super::palette::Shade;
use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::render::Surface;

/// Frame width in pixels
pub const SCREEN_WIDTH: usize = WINDOW_WIDTH;

/// Frame height in pixels
pub const SCREEN_HEIGHT: usize = WINDOW_HEIGHT;

/// Total number of pixels in the frame buffer
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Frame buffer for storing pixel data
///
/// Stores one shade per pixel (400×640 = 256,000 pixels) and counts how
/// many frames have been presented through it.
#[derive(Clone)]
pub struct FrameBuffer {
    /// Pixel data stored as shades
    pixels: Vec<Shade>,
    /// Number of completed frames
    presented: u64,
}

impl FrameBuffer {
    /// Create a new frame buffer initialized to the dark palette color
    pub fn new() -> Self {
        Self {
            pixels: vec![Shade::Dark; SCREEN_SIZE],
            presented: 0,
        }
    }

    /// Get a pixel at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Shade {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        self.pixels[y * SCREEN_WIDTH + x]
    }

    /// Get the raw pixel data
    pub fn as_slice(&self) -> &[Shade] {
        &self.pixels
    }

    /// Number of frames presented so far
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Convert the frame buffer to RGBA format for display
    ///
    /// # Arguments
    /// * `output` - Output buffer to write RGBA data (must be at least SCREEN_SIZE * 4 bytes)
    ///
    /// # Panics
    /// Panics if output buffer is too small
    pub fn to_rgba(&self, output: &mut [u8]) {
        assert!(
            output.len() >= SCREEN_SIZE * 4,
            "Output buffer too small for RGBA conversion"
        );

        for (shade, out) in self.pixels.iter().zip(output.chunks_exact_mut(4)) {
            out.copy_from_slice(&shade.color().to_rgba());
        }
    }

    /// Convert the frame buffer to packed RGB bytes
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(SCREEN_SIZE * 3);
        for shade in &self.pixels {
            rgb.extend_from_slice(&shade.color().to_rgb());
        }
        rgb
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (usize, usize) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, shade: Shade) {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        self.pixels[y * SCREEN_WIDTH + x] = shade;
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, shade: Shade) {
        let x_end = (x + width).min(SCREEN_WIDTH);
        let y_end = (y + height).min(SCREEN_HEIGHT);
        if x >= x_end {
            return;
        }

        for row in y..y_end {
            let start = row * SCREEN_WIDTH;
            self.pixels[start + x..start + x_end].fill(shade);
        }
    }

    fn clear(&mut self, shade: Shade) {
        self.pixels.fill(shade);
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.as_slice().len(), SCREEN_SIZE);
        assert_eq!(fb.presented_frames(), 0);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(100, 100, Shade::Bright);
        assert_eq!(fb.get_pixel(100, 100), Shade::Bright);
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, Shade::Light);
        fb.clear(Shade::Mid);
        assert_eq!(fb.get_pixel(0, 0), Shade::Mid);
        assert_eq!(fb.get_pixel(399, 639), Shade::Mid);
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(8, 16, 8, 8, Shade::Light);

        assert_eq!(fb.get_pixel(8, 16), Shade::Light);
        assert_eq!(fb.get_pixel(15, 23), Shade::Light);
        assert_eq!(fb.get_pixel(7, 16), Shade::Dark);
        assert_eq!(fb.get_pixel(16, 16), Shade::Dark);
        assert_eq!(fb.get_pixel(8, 24), Shade::Dark);
    }

    #[test]
    fn test_fill_rect_clips_to_screen() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(396, 636, 8, 8, Shade::Bright);
        assert_eq!(fb.get_pixel(399, 639), Shade::Bright);
        assert_eq!(fb.get_pixel(395, 639), Shade::Dark);
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = FrameBuffer::new();
        fb.present();
        fb.present();
        assert_eq!(fb.presented_frames(), 2);
    }

    #[test]
    fn test_to_rgba() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(1, 0, Shade::FloorAlt);

        let mut rgba = vec![0u8; SCREEN_SIZE * 4];
        fb.to_rgba(&mut rgba);

        assert_eq!(&rgba[0..4], &[0x0F, 0x38, 0x0F, 0xFF]);
        assert_eq!(&rgba[4..8], &[0x12, 0x40, 0x12, 0xFF]);
    }

    #[test]
    fn test_to_rgb_length() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.to_rgb().len(), SCREEN_SIZE * 3);
    }

    #[test]
    #[should_panic]
    fn test_set_pixel_out_of_bounds_x() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(400, 0, Shade::Dark);
    }

    #[test]
    #[should_panic]
    fn test_set_pixel_out_of_bounds_y() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 640, Shade::Dark);
    }

    #[test]
    #[should_panic(expected = "Output buffer too small")]
    fn test_to_rgba_small_output() {
        let fb = FrameBuffer::new();
        let mut rgba = vec![0u8; 16];
        fb.to_rgba(&mut rgba);
    }
}
