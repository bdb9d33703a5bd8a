//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Fixed per-call step, no delta-time
//! - Seeded RNG only
//! - No rendering, audio or DOM dependencies (hosts react to `GameEvent`s)

pub mod collision;
pub mod mode;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit};
pub use mode::Mode;
pub use state::{
    BURST_COLOR, Bullet, GameEvent, GameState, Hud, Particle, Player, Playfield, Target,
    make_targets,
};
pub use tick::{TickInput, burst, shoot, tick};
