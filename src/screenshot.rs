// Screenshot functionality
//
// Saves a rendered frame as a PNG file.

use crate::display::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during screenshot operations
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save a screenshot of the frame into `directory`
///
/// The file is named after the room, with a timestamp when requested.
///
/// # Returns
///
/// The path of the written PNG
pub fn save_screenshot(
    frame: &FrameBuffer,
    directory: &Path,
    room_name: &str,
    include_timestamp: bool,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(directory)?;

    let file_path = directory.join(screenshot_file_name(room_name, include_timestamp));
    save_png(frame, &file_path)?;

    log::info!("Screenshot saved to {}", file_path.display());
    Ok(file_path)
}

/// Build a screenshot file name such as `home_20260101_120000.png`
fn screenshot_file_name(room_name: &str, include_timestamp: bool) -> String {
    let stem: String = room_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "frame".to_string() } else { stem };

    if include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("{}_{}.png", stem, timestamp)
    } else {
        format!("{}.png", stem)
    }
}

/// Write the frame as an 8-bit RGB PNG at `path`
pub fn save_png(frame: &FrameBuffer, path: &Path) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.to_rgb())?;

    Ok(())
}
