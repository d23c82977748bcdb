// Window module - Host shell that shows the scene in a window
//
// Creates the window, pumps input, paces frames and uploads each rendered
// frame through the pixels crate. The scene itself is passed in, so the
// window holds no global state.

use super::framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::config::{ScreenshotConfig, VideoConfig};
use crate::scene::Scene;
use crate::screenshot::save_screenshot;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Errors raised while setting up or driving the window
#[derive(Debug)]
pub enum DisplayError {
    /// Event loop creation or run failure
    EventLoop(winit::error::EventLoopError),

    /// Window creation failure
    Os(winit::error::OsError),

    /// Pixel surface failure
    Pixels(pixels::Error),
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            DisplayError::Os(e) => write!(f, "Window creation error: {}", e),
            DisplayError::Pixels(e) => write!(f, "Pixel surface error: {}", e),
        }
    }
}

impl std::error::Error for DisplayError {}

impl From<winit::error::EventLoopError> for DisplayError {
    fn from(e: winit::error::EventLoopError) -> Self {
        DisplayError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for DisplayError {
    fn from(e: winit::error::OsError) -> Self {
        DisplayError::Os(e)
    }
}

impl From<pixels::Error> for DisplayError {
    fn from(e: pixels::Error) -> Self {
        DisplayError::Pixels(e)
    }
}

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Scale factor (1x-4x)
    pub scale: u32,
    /// Target frame rate in Hz
    pub target_fps: u32,
    /// Whether to enable VSync
    pub vsync: bool,
    /// Window title
    pub title: String,
}

impl WindowConfig {
    /// Create a new window configuration with default values
    ///
    /// Default: 1x scale, 60 FPS, VSync enabled
    pub fn new() -> Self {
        Self {
            scale: 1,
            target_fps: 60,
            vsync: true,
            title: "Home".to_string(),
        }
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 4);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Get the window width in pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Get the window height in pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }

    /// Get the frame duration for the target FPS
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&VideoConfig> for WindowConfig {
    fn from(video: &VideoConfig) -> Self {
        WindowConfig::new()
            .with_scale(video.scale)
            .with_fps(video.fps)
            .with_vsync(video.vsync)
            .with_title(video.title.clone())
    }
}

/// Window that renders a scene every frame
pub struct SceneWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    screenshots: ScreenshotConfig,
    frame_buffer: FrameBuffer,
    last_frame_time: Instant,
    scene: Scene,
    error: Option<DisplayError>,
}

impl SceneWindow {
    /// Create a new scene window (the OS window is created when the event loop starts)
    pub fn new(config: WindowConfig, screenshots: ScreenshotConfig, scene: Scene) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            screenshots,
            frame_buffer: FrameBuffer::new(),
            last_frame_time: Instant::now(),
            scene,
            error: None,
        }
    }

    /// Create the OS window and its pixel surface
    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DisplayError> {
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        // Wrap window in Arc for shared ownership
        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let window_size = window.inner_size();

        // Surface texture holds an Arc<Window> for a 'static lifetime
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels = PixelsBuilder::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture)
            .enable_vsync(self.config.vsync)
            .build()?;

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    /// Advance the scene, render it and upload the frame
    fn render(&mut self) -> Result<(), pixels::Error> {
        self.scene.step(&mut self.frame_buffer);

        if let Some(pixels) = &mut self.pixels {
            self.frame_buffer.to_rgba(pixels.frame_mut());
            pixels.render()?;
        }
        Ok(())
    }

    /// Check if enough time has passed for the next frame
    fn should_render_frame(&mut self) -> bool {
        let elapsed = self.last_frame_time.elapsed();
        let frame_duration = self.config.frame_duration();

        if elapsed >= frame_duration {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }

    /// Save the last rendered frame to the screenshot directory
    fn take_screenshot(&self) {
        let name = self.scene.active_room().map_or("frame", |room| room.name());
        if let Err(e) = save_screenshot(
            &self.frame_buffer,
            &self.screenshots.directory,
            name,
            self.screenshots.include_timestamp,
        ) {
            log::error!("Screenshot failed: {}", e);
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: PhysicalKey) {
        match key {
            PhysicalKey::Code(KeyCode::Escape) => {
                log::info!("Escape pressed, exiting...");
                self.scene.request_quit();
                event_loop.exit();
            }
            PhysicalKey::Code(KeyCode::F9) => self.take_screenshot(),
            _ => {}
        }
    }
}

impl ApplicationHandler for SceneWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_surface(event_loop) {
            log::error!("{}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                self.scene.request_quit();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, physical_key),
            WindowEvent::RedrawRequested => {
                if self.should_render_frame() {
                    if let Err(err) = self.render() {
                        log::error!("Render error: {}", err);
                        self.error = Some(err.into());
                        event_loop.exit();
                        return;
                    }
                    log::trace!("Frame {}", self.scene.frame());
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.scene.is_running() {
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the window and run the scene until the user quits
///
/// # Returns
/// The scene after the loop ends, or the error that stopped it
pub fn run_scene(
    config: WindowConfig,
    screenshots: ScreenshotConfig,
    scene: Scene,
) -> Result<Scene, DisplayError> {
    let event_loop = EventLoop::new()?;

    // Set control flow based on VSync setting
    if config.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    log::info!(
        "Window {}x{} (scale {}x), target {} FPS, vsync {}",
        config.window_width(),
        config.window_height(),
        config.scale,
        config.target_fps,
        config.vsync
    );

    let mut display = SceneWindow::new(config, screenshots, scene);
    event_loop.run_app(&mut display)?;

    match display.error.take() {
        Some(e) => Err(e),
        None => Ok(display.scene),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 1);
        assert_eq!(config.target_fps, 60);
        assert!(config.vsync);
        assert_eq!(config.title, "Home");
    }

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new()
            .with_scale(2)
            .with_fps(30)
            .with_vsync(false)
            .with_title("Test");

        assert_eq!(config.scale, 2);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
        assert_eq!(config.title, "Test");
    }

    #[test]
    fn test_window_dimensions() {
        let config = WindowConfig::new().with_scale(2);
        assert_eq!(config.window_width(), 800);
        assert_eq!(config.window_height(), 1280);
    }

    #[test]
    fn test_frame_duration() {
        let config = WindowConfig::new().with_fps(60);
        let duration = config.frame_duration();
        assert_eq!(duration.as_micros(), 16666); // ~16.67ms for 60 FPS
    }

    #[test]
    fn test_scale_and_fps_clamping() {
        let config = WindowConfig::new().with_scale(100);
        assert_eq!(config.scale, 4);

        let config = WindowConfig::new().with_scale(0).with_fps(0);
        assert_eq!(config.scale, 1);
        assert_eq!(config.target_fps, 1);
    }

    #[test]
    fn test_from_video_config() {
        let video = VideoConfig {
            scale: 9,
            fps: 30,
            vsync: false,
            title: "Den".to_string(),
        };
        let config = WindowConfig::from(&video);
        assert_eq!(config.scale, 4);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
        assert_eq!(config.title, "Den");
    }
}
