//! Host-agnostic game session
//!
//! Owns the state, input and reference data, and exposes the handful of
//! entry points a host wires its events to. Hosts drain `GameEvent`s after
//! each call to drive audio and overlays.

use glam::Vec2;

use crate::content::{ContentPanel, PanelCatalog};
use crate::input::{InputState, KeyCommand};
use crate::renderer::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Mode, Playfield, shoot, tick};

pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub panels: PanelCatalog,
    pub settings: Settings,
}

impl Game {
    pub fn new(playfield: Playfield, seed: u64, panels: PanelCatalog, settings: Settings) -> Self {
        Self {
            state: GameState::with_playfield(playfield, seed),
            input: InputState::with_pointer(playfield.center()),
            panels,
            settings,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    /// Panel record for the open panel, if any
    pub fn open_panel(&self) -> Option<&ContentPanel> {
        self.state.mode.panel_id().and_then(|id| self.panels.get(id))
    }

    pub fn key_down(&mut self, key: &str) {
        match self.input.key_down(key) {
            Some(KeyCommand::Restart) => self.restart(),
            Some(KeyCommand::DismissPanel) => self.state.close_panel(),
            None => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Pointer moved (already in surface coordinates)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.input.set_pointer(pos);
    }

    pub fn pointer_button(&mut self, down: bool) {
        self.input.button_down = down;
    }

    /// Click on the surface: shoot while playing
    pub fn click(&mut self) -> bool {
        shoot(&mut self.state, self.input.pointer)
    }

    /// Close, backdrop and "next" controls all land here
    pub fn close_panel(&mut self) {
        self.state.close_panel();
    }

    pub fn close_ending(&mut self) {
        self.state.close_ending();
    }

    pub fn restart(&mut self) {
        self.state.restart();
    }

    /// Focus lost: drop held keys so the player doesn't keep walking
    pub fn blur(&mut self) {
        self.input.release_all();
    }

    /// One host frame: step the simulation (only while playing), then render.
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        if self.state.mode.is_playing() {
            tick(&mut self.state, &self.input.tick_input(), &self.panels);
        }
        build_frame(&self.state, self.input.pointer, &self.settings, now_ms)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Bullet;

    fn game() -> Game {
        Game::new(
            Playfield::default(),
            11,
            PanelCatalog::builtin(),
            Settings::default(),
        )
    }

    /// Stand to the left of a billboard, fire at it and keep stepping until
    /// it opens a panel
    fn shoot_down(game: &mut Game, id: &str) {
        let center = game.state.target(id).unwrap().rect.center();
        game.state.player.pos = center - Vec2::new(150.0, 0.0);
        game.pointer_moved(center);
        assert!(game.click());
        for _ in 0..200 {
            game.frame(0.0);
            if !game.mode().is_playing() {
                break;
            }
        }
        assert_eq!(game.mode().panel_id(), Some(id));
    }

    #[test]
    fn test_pointer_starts_centered() {
        let g = game();
        assert_eq!(g.input.pointer, Vec2::new(600.0, 325.0));
    }

    #[test]
    fn test_fresh_session_shoot_cigna() {
        let mut g = game();
        shoot_down(&mut g, "CIGNA");
        assert!(!g.state.target("CIGNA").unwrap().alive);
        assert_eq!(g.state.score, 250);
        assert!(g.state.bullets.is_empty());
        assert_eq!(g.open_panel().map(|p| p.id.as_str()), Some("CIGNA"));

        let events = g.drain_events();
        assert_eq!(events.first(), Some(&GameEvent::ShotFired));
        assert!(events.contains(&GameEvent::PanelOpened { id: "CIGNA".into() }));
    }

    #[test]
    fn test_clicks_ignored_while_panel_open() {
        let mut g = game();
        shoot_down(&mut g, "TCS");
        assert!(!g.click());
        assert!(g.state.bullets.is_empty());
    }

    #[test]
    fn test_escape_closes_panel() {
        let mut g = game();
        shoot_down(&mut g, "V2");
        g.key_down("Escape");
        assert!(g.mode().is_playing());
    }

    #[test]
    fn test_panel_open_freezes_player() {
        let mut g = game();
        shoot_down(&mut g, "TCS");
        let start = g.state.player.pos;
        g.key_down("d");
        g.key_down("s");
        for i in 0..10 {
            g.frame(i as f64 * 16.0);
        }
        assert_eq!(g.state.player.pos, start);
    }

    #[test]
    fn test_all_three_then_ending_once() {
        let mut g = game();
        for id in ["TCS", "V2", "CIGNA"] {
            shoot_down(&mut g, id);
            g.close_panel();
        }
        assert_eq!(g.state.score, 750);
        for _ in 0..3 {
            g.frame(0.0);
        }
        assert_eq!(*g.mode(), Mode::Ending);
        g.close_ending();
        for _ in 0..3 {
            g.frame(0.0);
        }
        let endings = g
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::EndingOpened)
            .count();
        assert_eq!(endings, 1);
        assert!(g.mode().is_playing());
    }

    #[test]
    fn test_restart_key_in_ending() {
        let mut g = game();
        g.state.open_ending();
        g.state.bullets.push(Bullet {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 3,
        });
        g.key_down("R");
        assert!(g.mode().is_playing());
        assert!(g.state.bullets.is_empty());
        assert_eq!(g.state.targets_left(), 3);
    }

    #[test]
    fn test_walk_right() {
        let mut g = game();
        let start = g.state.player.pos;
        g.key_down("d");
        for _ in 0..10 {
            g.frame(0.0);
        }
        g.key_up("d");
        g.frame(0.0);
        assert!((g.state.player.pos.x - (start.x + 32.0)).abs() < 1e-3);
        assert_eq!(g.state.player.pos.y, start.y);
    }

    #[test]
    fn test_blur_releases_keys() {
        let mut g = game();
        let start = g.state.player.pos;
        g.key_down("w");
        g.blur();
        g.frame(0.0);
        assert_eq!(g.state.player.pos, start);
    }
}
