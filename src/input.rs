//! Held movement keys and pointer state
//!
//! Browser events are folded into an `InputState`; the simulation only ever
//! sees the `TickInput` snapshot taken from it.

use glam::Vec2;

use crate::sim::TickInput;

/// Movement direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    /// Map a (lowercased) key name to a movement direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "arrowup" => Some(MoveKey::Up),
            "s" | "arrowdown" => Some(MoveKey::Down),
            "a" | "arrowleft" => Some(MoveKey::Left),
            "d" | "arrowright" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

/// Command a key press triggers besides movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Restart,
    DismissPanel,
}

/// Currently held keys and the latest pointer sample
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// Pointer position in surface coordinates
    pub pointer: Vec2,
    /// Primary button held
    pub button_down: bool,
}

impl InputState {
    /// Start with the pointer at the given position (usually surface center)
    pub fn with_pointer(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    fn set_held(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    /// Record a key press. Returns the command the key triggers, if any.
    pub fn key_down(&mut self, key: &str) -> Option<KeyCommand> {
        // Escape is matched before lowercasing, like the browser reports it
        if key == "Escape" {
            return Some(KeyCommand::DismissPanel);
        }
        let key = key.to_lowercase();
        if let Some(dir) = MoveKey::from_key(&key) {
            self.set_held(dir, true);
        }
        (key == "r").then_some(KeyCommand::Restart)
    }

    /// Record a key release
    pub fn key_up(&mut self, key: &str) {
        if let Some(dir) = MoveKey::from_key(&key.to_lowercase()) {
            self.set_held(dir, false);
        }
    }

    /// Release every held key (window blur)
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
        self.button_down = false;
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Raw movement direction from held keys (components in {-1, 0, 1})
    pub fn move_dir(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }

    /// Snapshot for one simulation step
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_dir: self.move_dir(),
            pointer: self.pointer,
        }
    }
}

/// Map a client-space pointer position into surface coordinates.
///
/// `rect_origin`/`rect_size` describe the canvas as displayed; the surface may
/// be scaled by CSS so the ratio `surface_size / rect_size` is applied.
pub fn client_to_surface(client: Vec2, rect_origin: Vec2, rect_size: Vec2, surface_size: Vec2) -> Vec2 {
    let scale = Vec2::new(
        if rect_size.x > 0.0 { surface_size.x / rect_size.x } else { 1.0 },
        if rect_size.y > 0.0 { surface_size.y / rect_size.y } else { 1.0 },
    );
    (client - rect_origin) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut input = InputState::default();
        input.key_down("W");
        input.key_down("d");
        assert_eq!(input.move_dir(), Vec2::new(1.0, -1.0));
        input.key_up("w");
        input.key_up("D");
        assert_eq!(input.move_dir(), Vec2::ZERO);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.key_down("a");
        input.key_down("ArrowRight");
        assert_eq!(input.move_dir(), Vec2::ZERO);
    }

    #[test]
    fn test_commands() {
        let mut input = InputState::default();
        assert_eq!(input.key_down("R"), Some(KeyCommand::Restart));
        assert_eq!(input.key_down("r"), Some(KeyCommand::Restart));
        assert_eq!(input.key_down("Escape"), Some(KeyCommand::DismissPanel));
        assert_eq!(input.key_down("w"), None);
        assert_eq!(input.key_down("q"), None);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.key_down("s");
        input.button_down = true;
        input.release_all();
        assert_eq!(input.move_dir(), Vec2::ZERO);
        assert!(!input.button_down);
    }

    #[test]
    fn test_client_to_surface_scales() {
        // Canvas is 1200x650 but displayed at 600x325, offset by (10, 20)
        let p = client_to_surface(
            Vec2::new(310.0, 182.5),
            Vec2::new(10.0, 20.0),
            Vec2::new(600.0, 325.0),
            Vec2::new(1200.0, 650.0),
        );
        assert!((p - Vec2::new(600.0, 325.0)).length() < 1e-4);
    }

    #[test]
    fn test_client_to_surface_zero_rect() {
        let p = client_to_surface(Vec2::new(5.0, 6.0), Vec2::ZERO, Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert_eq!(p, Vec2::new(5.0, 6.0));
    }
}
