//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`; nothing is held at
//! module scope.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::mode::Mode;
use crate::clamp;
use crate::consts::*;

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Displayed on the HUD. Nothing in the range deals damage.
    pub hp: u32,
    /// Facing angle (radians), follows the pointer
    pub angle: f32,
}

impl Player {
    pub fn spawn(playfield: &Playfield) -> Self {
        Self {
            pos: playfield.spawn_point(),
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            hp: PLAYER_MAX_HP,
            angle: 0.0,
        }
    }
}

/// A projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left; zero means consumed
    pub life: u32,
}

/// Decorative spark, no gameplay effect
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    /// RGBA, 0-1
    pub color: [f32; 4],
}

/// Burst color for a destroyed billboard (violet)
pub const BURST_COLOR: [f32; 4] = [124.0 / 255.0, 58.0 / 255.0, 237.0 / 255.0, 0.95];

/// A billboard that opens a content panel when shot
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: String,
    /// Text painted on the billboard
    pub label: String,
    pub rect: Rect,
    pub alive: bool,
}

impl Target {
    fn new(id: &str, label: &str, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            rect: Rect::new(x, y, w, h),
            alive: true,
        }
    }
}

/// The fixed billboard layout
pub fn make_targets() -> Vec<Target> {
    vec![
        Target::new("TCS", "TCS", 820.0, 180.0, 180.0, 70.0),
        Target::new("V2", "V2 MENTATS", 920.0, 360.0, 210.0, 70.0),
        Target::new("CIGNA", "CIGNA", 520.0, 120.0, 200.0, 70.0),
    ]
}

/// Logical drawing surface and the region the player is confined to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(
            self.width * PLAYER_SPAWN_FRAC.0,
            self.height * PLAYER_SPAWN_FRAC.1,
        )
    }

    /// Clamp a position into the movable region
    pub fn clamp_player(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            clamp(pos.x, PLAYFIELD_SIDE_MARGIN, self.width - PLAYFIELD_SIDE_MARGIN),
            clamp(pos.y, PLAYFIELD_TOP_MARGIN, self.height - PLAYFIELD_BOTTOM_MARGIN),
        )
    }

    /// Region a bullet must stay strictly inside to survive
    pub fn despawn_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height).expanded(DESPAWN_MARGIN)
    }
}

/// Values mirrored to the HUD text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub hp: u32,
    pub score: u64,
    pub targets_left: usize,
}

/// Things that happened during a step or transition, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A bullet was fired (shoot cue)
    ShotFired,
    /// A billboard was destroyed at the impact point (hit cue)
    TargetDestroyed { id: String, at: Vec2 },
    /// The content panel for a billboard was opened
    PanelOpened { id: String },
    PanelClosed,
    /// All billboards cleared (win cue)
    EndingOpened,
    EndingClosed,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for particle randomness
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub targets: Vec<Target>,
    pub score: u64,
    pub mode: Mode,
    /// Set once the ending has fired; cleared by restart
    pub won: bool,
    /// Simulation steps taken since the last restart
    pub time_ticks: u64,
    pub hud: Hud,
    /// Pending events (see `GameEvent`)
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the default surface
    pub fn new(seed: u64) -> Self {
        Self::with_playfield(Playfield::default(), seed)
    }

    /// Create a new game on a surface of the given size
    pub fn with_playfield(playfield: Playfield, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            player: Player::spawn(&playfield),
            bullets: Vec::new(),
            particles: Vec::new(),
            targets: make_targets(),
            score: 0,
            mode: Mode::Playing,
            won: false,
            time_ticks: 0,
            hud: Hud::default(),
            events: Vec::new(),
        };
        state.refresh_hud();
        state
    }

    pub fn targets_left(&self) -> usize {
        self.targets.iter().filter(|t| t.alive).count()
    }

    pub fn target(&self, id: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Recompute the HUD mirror
    pub fn refresh_hud(&mut self) {
        self.hud = Hud {
            hp: self.player.hp,
            score: self.score,
            targets_left: self.targets_left(),
        };
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.targets.len(), 3);
        assert_eq!(state.targets_left(), 3);
        assert_eq!(state.mode, Mode::Playing);
        assert!((state.player.pos - Vec2::new(180.0, 357.5)).length() < 1e-3);
        assert_eq!(state.hud, Hud { hp: 100, score: 0, targets_left: 3 });
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_clamp_player_asymmetric_top() {
        let pf = Playfield::default();
        assert_eq!(pf.clamp_player(Vec2::new(-10.0, -10.0)), Vec2::new(30.0, 80.0));
        assert_eq!(pf.clamp_player(Vec2::new(5000.0, 5000.0)), Vec2::new(1170.0, 620.0));
        let inside = Vec2::new(400.0, 300.0);
        assert_eq!(pf.clamp_player(inside), inside);
    }

    #[test]
    fn test_despawn_bounds_margin() {
        let bounds = Playfield::default().despawn_bounds();
        assert!(bounds.contains_strict(Vec2::new(-49.0, 0.0)));
        assert!(!bounds.contains_strict(Vec2::new(-50.0, 0.0)));
        assert!(!bounds.contains_strict(Vec2::new(0.0, 700.0)));
    }

    #[test]
    fn test_v2_label() {
        let targets = make_targets();
        let v2 = targets.iter().find(|t| t.id == "V2").unwrap();
        assert_eq!(v2.label, "V2 MENTATS");
    }
}
