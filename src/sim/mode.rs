//! Overlay mode and its transitions
//!
//! The simulation only steps while `Mode::Playing`; the panel and ending
//! overlays freeze gameplay while the last frame keeps rendering underneath.

use super::state::{GameEvent, GameState, Player, make_targets};
use crate::content::PanelCatalog;

/// Which overlay (if any) is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Playing,
    /// Content panel for the billboard with this id
    PanelOpen { id: String },
    /// All billboards cleared
    Ending,
}

impl Mode {
    pub fn is_playing(&self) -> bool {
        matches!(self, Mode::Playing)
    }

    pub fn panel_id(&self) -> Option<&str> {
        match self {
            Mode::PanelOpen { id } => Some(id),
            _ => None,
        }
    }
}

impl GameState {
    /// Show the panel for a billboard. Returns false if there's no such panel
    /// or the ending is showing.
    pub fn open_panel(&mut self, id: &str, panels: &PanelCatalog) -> bool {
        if self.mode == Mode::Ending {
            return false;
        }
        if panels.get(id).is_none() {
            log::warn!("No content panel for billboard {}", id);
            return false;
        }
        log::info!("Opening panel {}", id);
        self.mode = Mode::PanelOpen { id: id.to_string() };
        self.events.push(GameEvent::PanelOpened { id: id.to_string() });
        true
    }

    /// Close the content panel (close button, backdrop, "next", Escape)
    pub fn close_panel(&mut self) {
        if let Mode::PanelOpen { .. } = self.mode {
            self.mode = Mode::Playing;
            self.events.push(GameEvent::PanelClosed);
        }
    }

    /// Show the ending overlay
    pub fn open_ending(&mut self) {
        log::info!("All billboards cleared, score {}", self.score);
        self.mode = Mode::Ending;
        self.events.push(GameEvent::EndingOpened);
    }

    pub fn close_ending(&mut self) {
        if self.mode == Mode::Ending {
            self.mode = Mode::Playing;
            self.events.push(GameEvent::EndingClosed);
        }
    }

    /// Reset the run. Valid from any mode; the particle RNG keeps its stream.
    pub fn restart(&mut self) {
        log::info!(
            "Restarting after {} steps (seed {})",
            self.time_ticks,
            self.seed
        );
        self.player = Player::spawn(&self.playfield);
        self.bullets.clear();
        self.particles.clear();
        self.targets = make_targets();
        self.score = 0;
        self.won = false;
        self.time_ticks = 0;
        self.mode = Mode::Playing;
        self.refresh_hud();
        self.events.push(GameEvent::Restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Particle};
    use glam::Vec2;

    #[test]
    fn test_panel_round_trip() {
        let panels = PanelCatalog::builtin();
        let mut state = GameState::new(1);
        assert!(state.open_panel("TCS", &panels));
        assert_eq!(state.mode.panel_id(), Some("TCS"));
        state.close_panel();
        assert!(state.mode.is_playing());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PanelOpened { id: "TCS".into() }, GameEvent::PanelClosed]
        );
    }

    #[test]
    fn test_missing_panel_is_noop() {
        let mut state = GameState::new(1);
        assert!(!state.open_panel("TCS", &PanelCatalog::default()));
        assert!(state.mode.is_playing());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_close_panel_outside_panel_mode() {
        let mut state = GameState::new(1);
        state.close_panel();
        assert!(state.events.is_empty());
        state.open_ending();
        state.close_panel();
        assert_eq!(state.mode, Mode::Ending);
    }

    #[test]
    fn test_panel_cannot_cover_ending() {
        let panels = PanelCatalog::builtin();
        let mut state = GameState::new(1);
        state.open_ending();
        assert!(!state.open_panel("V2", &panels));
        assert_eq!(state.mode, Mode::Ending);
        state.close_ending();
        assert!(state.mode.is_playing());
    }

    #[test]
    fn test_restart_from_any_mode() {
        let panels = PanelCatalog::builtin();
        for setup in 0..3 {
            let mut state = GameState::new(3);
            state.score = 500;
            state.won = true;
            state.player.pos = Vec2::new(900.0, 500.0);
            state.player.hp = 12;
            state.time_ticks = 40;
            state.targets[0].alive = false;
            state.bullets.push(Bullet { pos: Vec2::ZERO, vel: Vec2::X, life: 10 });
            state.particles.push(Particle { pos: Vec2::ZERO, vel: Vec2::X, life: 10, color: [1.0; 4] });
            match setup {
                0 => {}
                1 => {
                    state.open_panel("CIGNA", &panels);
                }
                _ => state.open_ending(),
            }

            state.restart();

            assert_eq!(state.score, 0);
            assert_eq!(state.targets_left(), 3);
            assert!(state.bullets.is_empty());
            assert!(state.particles.is_empty());
            assert_eq!(state.mode, Mode::Playing);
            assert!(!state.won);
            assert_eq!(state.player.pos, state.playfield.spawn_point());
            assert_eq!(state.player.hp, 100);
            assert_eq!(state.hud.score, 0);
            assert_eq!(state.events.last(), Some(&GameEvent::Restarted));
            assert_eq!(state.time_ticks, 0);
            assert_eq!(state.seed, 3);
        }
    }
}
