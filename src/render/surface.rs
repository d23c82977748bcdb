// Drawing surface abstraction consumed by the renderer

use crate::display::Shade;

/// A pixel surface the renderer can draw onto
///
/// The host provides one of these each frame. Coordinates are absolute
/// pixel positions with the origin at the top-left corner.
pub trait Surface {
    /// Surface dimensions as (width, height) in pixels
    fn size(&self) -> (usize, usize);

    /// Set a single pixel
    fn set_pixel(&mut self, x: usize, y: usize, shade: Shade);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, shade: Shade);

    /// Fill the whole surface with one shade
    fn clear(&mut self, shade: Shade) {
        let (width, height) = self.size();
        self.fill_rect(0, 0, width, height, shade);
    }

    /// Hand the completed frame over to the display
    fn present(&mut self);
}
