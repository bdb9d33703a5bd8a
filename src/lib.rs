//! Holo Range - a portfolio shooting range
//!
//! Core modules:
//! - `audio`: Procedural sound cues (Web Audio)
//! - `sim`: Deterministic simulation (movement, bullets, collisions, mode)
//! - `content`: Experience panels keyed by billboard id
//! - `input`: Held keys and pointer state
//! - `renderer`: Frame display list built from read-only state
//! - `platform`: Frame scheduling capability
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod content;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use content::{ContentPanel, PanelCatalog};
pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default logical surface size (matches the canvas width/height attributes)
    pub const SURFACE_WIDTH: f32 = 1200.0;
    pub const SURFACE_HEIGHT: f32 = 650.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_SPEED: f32 = 3.2;
    pub const PLAYER_MAX_HP: u32 = 100;
    /// Spawn point as a fraction of the surface size
    pub const PLAYER_SPAWN_FRAC: (f32, f32) = (0.15, 0.55);

    /// Playfield clamp margins. Top is larger to leave room for the banner.
    pub const PLAYFIELD_SIDE_MARGIN: f32 = 30.0;
    pub const PLAYFIELD_TOP_MARGIN: f32 = 80.0;
    pub const PLAYFIELD_BOTTOM_MARGIN: f32 = 30.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 8.8;
    pub const BULLET_LIFETIME: u32 = 80;
    /// Spawn distance beyond the player's radius
    pub const MUZZLE_OFFSET: f32 = 6.0;
    /// Bullets are dropped once this far outside the surface
    pub const DESPAWN_MARGIN: f32 = 50.0;

    /// Particle burst
    pub const BURST_COUNT: usize = 18;
    pub const BURST_MIN_SPEED: f32 = 1.2;
    pub const BURST_SPEED_RANGE: f32 = 3.8;
    pub const BURST_MIN_LIFE: u32 = 35;
    pub const BURST_LIFE_RANGE: u32 = 20;
    /// Lifetime that maps to full particle opacity
    pub const PARTICLE_FADE_LIFE: f32 = 55.0;
    pub const PARTICLE_DAMPING: f32 = 0.98;

    /// Points per destroyed billboard
    pub const SCORE_PER_TARGET: u64 = 250;
}

/// Clamp `v` into `[lo, hi]`
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Euclidean distance between two points
#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle (radians) of the ray from `from` toward `to`
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
