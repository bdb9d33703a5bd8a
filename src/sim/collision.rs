//! Axis-aligned rectangles and bullet-vs-billboard hit tests

use glam::Vec2;

use super::state::Target;

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grow by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.w + 2.0 * margin,
            self.h + 2.0 * margin,
        )
    }

    /// Point containment, edges included
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Point containment, edges excluded
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

/// Index of the first live target whose rectangle contains `pos`.
///
/// Scanning stops at the first match so a bullet can never score twice,
/// even where billboards overlap.
pub fn first_hit(pos: Vec2, targets: &[Target]) -> Option<usize> {
    targets
        .iter()
        .position(|t| t.alive && t.rect.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::make_targets;

    #[test]
    fn test_contains_inclusive_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 70.0)));
        assert!(!r.contains(Vec2::new(110.1, 70.0)));
        assert!(!r.contains(Vec2::new(9.9, 40.0)));
    }

    #[test]
    fn test_contains_strict_excludes_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!r.contains_strict(Vec2::new(0.0, 5.0)));
        assert!(r.contains_strict(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_first_hit_skips_dead_targets() {
        let mut targets = make_targets();
        let inside_cigna = Vec2::new(600.0, 150.0);
        assert_eq!(first_hit(inside_cigna, &targets), Some(2));
        targets[2].alive = false;
        assert_eq!(first_hit(inside_cigna, &targets), None);
    }

    #[test]
    fn test_first_hit_overlap_hits_only_first() {
        let mut targets = make_targets();
        // Move V2 on top of TCS
        targets[1].rect = targets[0].rect;
        let p = targets[0].rect.center();
        assert_eq!(first_hit(p, &targets), Some(0));
    }

    #[test]
    fn test_first_hit_miss() {
        assert_eq!(first_hit(Vec2::new(5.0, 5.0), &make_targets()), None);
    }
}
