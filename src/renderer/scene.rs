//! Builds a `Frame` from read-only game state
//!
//! Layer order: background, billboards, bullets, particles, player, reticle,
//! instruction banner.

use glam::Vec2;

use super::frame::{DrawCmd, Frame, Glow, Rgba, colors};
use crate::Settings;
use crate::consts::PARTICLE_FADE_LIFE;
use crate::polar_to_cartesian;
use crate::sim::{GameState, Rect, Target};

/// Grid cell size for the background
const GRID_STEP: f32 = 40.0;
/// Animated background curves
const DATA_LINES: usize = 7;
const DATA_LINE_TOP: f32 = 90.0;
const DATA_LINE_SPACING: f32 = 70.0;
const DATA_LINE_SWING: f32 = 18.0;
/// Milliseconds per radian of curve phase
const DATA_LINE_PERIOD_MS: f64 = 900.0;

const BILLBOARD_RADIUS: f32 = 14.0;
const DEAD_BILLBOARD_OPACITY: f32 = 0.15;
const BULLET_RADIUS: f32 = 3.2;
const PARTICLE_RADIUS: f32 = 2.2;
const BARREL_LENGTH: f32 = 32.0;
const RETICLE_RADIUS: f32 = 10.0;
const RETICLE_ARM: f32 = 14.0;

pub const TITLE_FONT: &str = "800 18px Arial";
pub const HINT_FONT: &str = "12px Arial";
pub const BANNER_FONT: &str = "700 14px Arial";
pub const HINT_TEXT: &str = "Shoot to open";
pub const BANNER_TEXT: &str = "Shoot targets to open role panels (TCS, V2 Mentats, Anthem, Cigna)";

/// Render the current state. `pointer` is where the reticle goes.
pub fn build_frame(state: &GameState, pointer: Vec2, settings: &Settings, now_ms: f64) -> Frame {
    let mut frame = Frame::new(state.playfield.size());

    draw_background(&mut frame, settings.animation_time(now_ms));
    for target in &state.targets {
        draw_billboard(&mut frame, target);
    }
    draw_bullets(&mut frame, state);
    draw_particles(&mut frame, state);
    draw_player(&mut frame, state);
    draw_reticle(&mut frame, pointer);
    if settings.show_instructions {
        draw_banner(&mut frame);
    }

    frame
}

fn draw_background(frame: &mut Frame, time_ms: f64) {
    let Vec2 { x: w, y: h } = frame.size;
    frame.push(DrawCmd::Clear);

    // Vignette
    frame.push(DrawCmd::RadialGradient {
        rect: Rect::new(0.0, 0.0, w, h),
        inner: Vec2::new(w * 0.4, h * 0.3),
        inner_radius: 50.0,
        outer: Vec2::new(w * 0.5, h * 0.5),
        outer_radius: 700.0,
        stops: vec![
            (0.0, colors::VIGNETTE_INNER),
            (0.5, colors::VIGNETTE_MID),
            (1.0, colors::VIGNETTE_OUTER),
        ],
    });

    // Grid
    let grid = colors::GRID.fade(0.22);
    let mut x = 0.0;
    while x < w {
        frame.push(DrawCmd::Line {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, h),
            color: grid,
            width: 1.0,
        });
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < h {
        frame.push(DrawCmd::Line {
            from: Vec2::new(0.0, y),
            to: Vec2::new(w, y),
            color: grid,
            width: 1.0,
        });
        y += GRID_STEP;
    }

    // Data lines
    let t = (time_ms / DATA_LINE_PERIOD_MS) as f32;
    let line = colors::DATA_LINE.fade(0.35);
    for i in 0..DATA_LINES {
        let y = DATA_LINE_TOP + i as f32 * DATA_LINE_SPACING;
        frame.push(DrawCmd::QuadCurve {
            from: Vec2::new(0.0, y),
            ctrl: Vec2::new(w * 0.4, y + (t + i as f32).sin() * DATA_LINE_SWING),
            to: Vec2::new(w, y),
            color: line,
            width: 2.0,
        });
    }
}

fn draw_billboard(frame: &mut Frame, target: &Target) {
    let opacity = if target.alive { 1.0 } else { DEAD_BILLBOARD_OPACITY };
    let r = target.rect;

    frame.push(DrawCmd::RoundRect {
        rect: r,
        radius: BILLBOARD_RADIUS,
        fill: Some(colors::BILLBOARD_FILL.fade(opacity)),
        stroke: Some(colors::BILLBOARD_EDGE.fade(opacity)),
        glow: Some(Glow {
            color: colors::BILLBOARD_GLOW.fade(opacity),
            blur: 18.0,
        }),
    });
    frame.push(DrawCmd::Text {
        text: target.label.clone(),
        pos: Vec2::new(r.x + 14.0, r.y + 42.0),
        font: TITLE_FONT,
        color: colors::TEXT.fade(opacity),
    });
    frame.push(DrawCmd::Text {
        text: HINT_TEXT.to_string(),
        pos: Vec2::new(r.x + 14.0, r.y + 62.0),
        font: HINT_FONT,
        color: colors::HINT.fade(opacity),
    });
}

fn draw_bullets(frame: &mut Frame, state: &GameState) {
    for b in &state.bullets {
        frame.push(DrawCmd::FillCircle {
            center: b.pos,
            radius: BULLET_RADIUS,
            color: colors::BULLET,
        });
    }
}

fn draw_particles(frame: &mut Frame, state: &GameState) {
    for p in &state.particles {
        let opacity = (p.life as f32 / PARTICLE_FADE_LIFE).max(0.0);
        frame.push(DrawCmd::FillCircle {
            center: p.pos,
            radius: PARTICLE_RADIUS,
            color: Rgba::from_unit(p.color).fade(opacity),
        });
    }
}

fn draw_player(frame: &mut Frame, state: &GameState) {
    let player = &state.player;
    frame.push(DrawCmd::FillCircle {
        center: player.pos,
        radius: player.radius,
        color: colors::PLAYER,
    });
    frame.push(DrawCmd::Line {
        from: player.pos,
        to: player.pos + polar_to_cartesian(BARREL_LENGTH, player.angle),
        color: colors::BARREL,
        width: 3.0,
    });
}

fn draw_reticle(frame: &mut Frame, at: Vec2) {
    let color = colors::RETICLE.fade(0.9);
    frame.push(DrawCmd::StrokeCircle {
        center: at,
        radius: RETICLE_RADIUS,
        color,
        width: 2.0,
    });
    frame.push(DrawCmd::Line {
        from: at - Vec2::X * RETICLE_ARM,
        to: at + Vec2::X * RETICLE_ARM,
        color,
        width: 2.0,
    });
    frame.push(DrawCmd::Line {
        from: at - Vec2::Y * RETICLE_ARM,
        to: at + Vec2::Y * RETICLE_ARM,
        color,
        width: 2.0,
    });
}

fn draw_banner(frame: &mut Frame) {
    frame.push(DrawCmd::RoundRect {
        rect: Rect::new(18.0, 18.0, 340.0, 48.0),
        radius: 14.0,
        fill: Some(colors::BANNER),
        stroke: None,
        glow: None,
    });
    frame.push(DrawCmd::Text {
        text: BANNER_TEXT.to_string(),
        pos: Vec2::new(30.0, 48.0),
        font: BANNER_FONT,
        color: colors::TEXT,
    });
}
