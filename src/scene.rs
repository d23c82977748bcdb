// Scene - Process-level state passed explicitly to the host loop
//
// Owns every constructed room and remembers which one is active. The
// active room is an index into the scene's own rooms, so it can never
// dangle.

use crate::render::{render_frame, Surface};
use crate::room::{build_home_room, Room};

/// Rooms, the active-room handle and the frame counter
pub struct Scene {
    rooms: Vec<Room>,
    active: Option<usize>,
    frame: u64,
    running: bool,
}

impl Scene {
    /// Create a scene with no rooms and nothing active
    pub fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            active: None,
            frame: 0,
            running: true,
        }
    }

    /// Create a scene holding the home room, already active
    pub fn new() -> Self {
        let mut scene = Self::empty();
        let home = scene.add_room(build_home_room());
        scene.set_active(home);
        scene
    }

    /// Add a room and return its handle
    pub fn add_room(&mut self, room: Room) -> usize {
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    /// Make the room with the given handle active
    ///
    /// Returns false and leaves the active room unchanged if the handle is
    /// unknown.
    pub fn set_active(&mut self, handle: usize) -> bool {
        if handle < self.rooms.len() {
            self.active = Some(handle);
            true
        } else {
            log::warn!("Ignoring unknown room handle {}", handle);
            false
        }
    }

    /// The active room, if any
    pub fn active_room(&self) -> Option<&Room> {
        self.active.and_then(|i| self.rooms.get(i))
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether the host loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the host loop to stop
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Advance per-frame state
    pub fn update(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Advance one frame and draw it onto the surface
    pub fn step(&mut self, surface: &mut dyn Surface) {
        self.update();
        render_frame(surface, self.active_room());
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{FrameBuffer, Shade};

    #[test]
    fn test_new_scene_has_home_active() {
        let mut scene = Scene::new();
        assert_eq!(scene.active_room().map(|r| r.name()), Some("Home"));
        assert!(scene.is_running());
        assert_eq!(scene.frame(), 0);

        // Home took handle 0
        assert_eq!(scene.add_room(build_home_room()), 1);
    }

    #[test]
    fn test_empty_scene_renders_clear_frame() {
        let mut scene = Scene::empty();
        let mut fb = FrameBuffer::new();
        fb.fill_rect(0, 0, 8, 8, Shade::Bright);

        scene.step(&mut fb);

        assert!(scene.active_room().is_none());
        assert_eq!(fb.get_pixel(0, 0), Shade::Dark);
        assert_eq!(fb.presented_frames(), 1);
        assert_eq!(scene.frame(), 1);
    }

    #[test]
    fn test_set_active_rejects_unknown_handle() {
        let mut scene = Scene::new();
        assert!(!scene.set_active(5));
        assert!(scene.active_room().is_some());
    }

    #[test]
    fn test_request_quit() {
        let mut scene = Scene::new();
        scene.request_quit();
        assert!(!scene.is_running());
    }

    #[test]
    fn test_independent_scenes() {
        let mut a = Scene::new();
        let b = Scene::new();
        a.update();
        a.update();
        assert_eq!(a.frame(), 2);
        assert_eq!(b.frame(), 0);
        assert_eq!(a.active_room(), b.active_room());
    }
}
