//! Platform abstraction layer
//!
//! The game never paces itself. A host hands it a `Scheduler` with one
//! capability: arrange for the frame callback to run again.

use crate::Game;
use crate::renderer::Frame;

/// Host capability for pacing the frame callback
pub trait Scheduler {
    /// Request one more invocation of the frame callback
    fn schedule_next_frame(&mut self);
}

/// Run one host frame and ask for the next
pub fn run_frame<S: Scheduler>(game: &mut Game, scheduler: &mut S, now_ms: f64) -> Frame {
    let frame = game.frame(now_ms);
    scheduler.schedule_next_frame();
    frame
}

/// Scheduler that records requests; the host polls `take` to decide whether
/// to queue another callback. A budget bounds headless runs.
#[derive(Debug, Clone, Default)]
pub struct FrameRequests {
    pending: bool,
    granted: u64,
    budget: Option<u64>,
}

impl FrameRequests {
    /// Unbounded (browser)
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant at most `frames` further frames (headless)
    pub fn with_budget(frames: u64) -> Self {
        Self {
            budget: Some(frames),
            ..Default::default()
        }
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Frames granted so far
    pub fn granted(&self) -> u64 {
        self.granted
    }
}

impl Scheduler for FrameRequests {
    fn schedule_next_frame(&mut self) {
        if self.budget.is_some_and(|b| self.granted >= b) {
            return;
        }
        self.granted += 1;
        self.pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PanelCatalog;
    use crate::settings::Settings;
    use crate::sim::Playfield;

    #[test]
    fn test_run_frame_requests_next() {
        let mut game = Game::new(Playfield::default(), 1, PanelCatalog::builtin(), Settings::default());
        let mut sched = FrameRequests::new();
        let frame = run_frame(&mut game, &mut sched, 0.0);
        assert!(!frame.is_empty());
        assert!(sched.take());
        assert!(!sched.take());
        assert_eq!(game.state.time_ticks, 1);
    }

    #[test]
    fn test_budget_stops_loop() {
        let mut game = Game::new(Playfield::default(), 1, PanelCatalog::builtin(), Settings::default());
        let mut sched = FrameRequests::with_budget(5);
        let mut frames = 0;
        loop {
            run_frame(&mut game, &mut sched, frames as f64 * 16.0);
            frames += 1;
            if !sched.take() {
                break;
            }
        }
        assert_eq!(frames, 6);
        assert_eq!(sched.granted(), 5);
    }

    #[test]
    fn test_frames_render_while_frozen() {
        let mut game = Game::new(Playfield::default(), 1, PanelCatalog::builtin(), Settings::default());
        game.state.open_ending();
        let mut sched = FrameRequests::new();
        let frame = run_frame(&mut game, &mut sched, 0.0);
        assert!(!frame.is_empty());
        assert!(sched.take());
        assert_eq!(game.state.time_ticks, 0);
    }
}
