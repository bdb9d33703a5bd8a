//! Fixed-increment simulation step
//!
//! One call advances everything by one frame's worth; there is no delta-time
//! scaling.

use glam::Vec2;
use rand::Rng;

use super::collision::first_hit;
use super::state::{BURST_COLOR, Bullet, GameEvent, GameState, Particle};
use crate::consts::*;
use crate::content::PanelCatalog;
use crate::{aim_angle, polar_to_cartesian};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw direction from held movement keys (normalized by the step)
    pub move_dir: Vec2,
    /// Pointer position in surface coordinates
    pub pointer: Vec2,
}

/// Advance the game state by one step. Does nothing unless playing.
pub fn tick(state: &mut GameState, input: &TickInput, panels: &PanelCatalog) {
    if !state.mode.is_playing() {
        return;
    }
    state.time_ticks += 1;

    // Movement
    let dir = input.move_dir.normalize_or_zero();
    let moved = state.player.pos + dir * state.player.speed;
    state.player.pos = state.playfield.clamp_player(moved);

    // Aim
    state.player.angle = aim_angle(state.player.pos, input.pointer);

    // Bullets
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
        bullet.life = bullet.life.saturating_sub(1);
    }
    let bounds = state.playfield.despawn_bounds();
    state
        .bullets
        .retain(|b| b.life > 0 && bounds.contains_strict(b.pos));

    // Collisions
    for i in 0..state.bullets.len() {
        let pos = state.bullets[i].pos;
        if let Some(t) = first_hit(pos, &state.targets) {
            state.bullets[i].life = 0;
            destroy_target(state, t, pos, panels);
        }
    }
    state.bullets.retain(|b| b.life > 0);

    // Particles
    for p in &mut state.particles {
        p.pos += p.vel;
        p.vel *= PARTICLE_DAMPING;
        p.life = p.life.saturating_sub(1);
    }
    state.particles.retain(|p| p.life > 0);

    state.refresh_hud();

    // Win check. A panel opened this step defers the ending to the first
    // step after it closes.
    if state.hud.targets_left == 0 && state.mode.is_playing() && !state.won {
        state.won = true;
        state.open_ending();
    }
}

fn destroy_target(state: &mut GameState, index: usize, at: Vec2, panels: &PanelCatalog) {
    let id = state.targets[index].id.clone();
    state.targets[index].alive = false;
    state.score += SCORE_PER_TARGET;
    log::info!("Billboard {} destroyed, score {}", id, state.score);

    state.events.push(GameEvent::TargetDestroyed { id: id.clone(), at });
    burst(state, at, BURST_COLOR);
    state.open_panel(&id, panels);
}

/// Spawn a ring of decorative particles at `at`
pub fn burst(state: &mut GameState, at: Vec2, color: [f32; 4]) {
    for _ in 0..BURST_COUNT {
        let angle = state.rng.random::<f32>() * std::f32::consts::TAU;
        let speed = BURST_MIN_SPEED + state.rng.random::<f32>() * BURST_SPEED_RANGE;
        let life = BURST_MIN_LIFE + state.rng.random_range(0..BURST_LIFE_RANGE);
        state.particles.push(Particle {
            pos: at,
            vel: polar_to_cartesian(speed, angle),
            life,
            color,
        });
    }
}

/// Fire one bullet from the player's rim toward `pointer`.
///
/// Ignored unless playing; returns whether a bullet was spawned.
pub fn shoot(state: &mut GameState, pointer: Vec2) -> bool {
    if !state.mode.is_playing() {
        return false;
    }
    let angle = aim_angle(state.player.pos, pointer);
    let muzzle = state.player.radius + MUZZLE_OFFSET;
    state.bullets.push(Bullet {
        pos: state.player.pos + polar_to_cartesian(muzzle, angle),
        vel: polar_to_cartesian(BULLET_SPEED, angle),
        life: BULLET_LIFETIME,
    });
    state.events.push(GameEvent::ShotFired);
    true
}
