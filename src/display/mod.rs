// Display module - Pixel storage and the windowed host
//
// This module provides:
// - The four-shade palette plus the floor literal
// - Frame buffer (400×640 pixels) implementing the render surface
// - Window creation with scaling support (2x, 3x, 4x)
// - Frame upload using winit + pixels

pub mod framebuffer;
pub mod palette;
pub mod window;

pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
pub use palette::{Color, Shade, FLOOR_ALT, PALETTE};
pub use window::{run_scene, DisplayError, SceneWindow, WindowConfig};
