//! Display list types
//!
//! A `Frame` is plain data: an ordered list of 2D drawing commands in surface
//! coordinates. Building one never touches the host; backends replay it.

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGB with a float alpha, the way CSS colors are written
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From 0-1 float components
    pub fn from_unit(c: [f32; 4]) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), c[3])
    }

    /// Scale alpha (a layer's global opacity)
    pub fn fade(self, opacity: f32) -> Self {
        Self {
            a: (self.a * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const VIGNETTE_INNER: Rgba = Rgba::new(0, 212, 255, 0.10);
    pub const VIGNETTE_MID: Rgba = Rgba::new(124, 58, 237, 0.08);
    pub const VIGNETTE_OUTER: Rgba = Rgba::new(0, 0, 0, 0.35);
    pub const GRID: Rgba = Rgba::new(255, 255, 255, 0.12);
    pub const DATA_LINE: Rgba = Rgba::new(34, 197, 94, 0.55);
    pub const BILLBOARD_GLOW: Rgba = Rgba::new(0, 212, 255, 0.8);
    pub const BILLBOARD_FILL: Rgba = Rgba::new(0, 212, 255, 0.10);
    pub const BILLBOARD_EDGE: Rgba = Rgba::new(0, 212, 255, 0.35);
    pub const TEXT: Rgba = Rgba::new(255, 255, 255, 0.92);
    pub const HINT: Rgba = Rgba::new(255, 255, 255, 0.65);
    pub const BULLET: Rgba = Rgba::new(250, 204, 21, 0.95);
    pub const PLAYER: Rgba = Rgba::new(255, 255, 255, 0.92);
    pub const BARREL: Rgba = Rgba::new(0, 212, 255, 0.85);
    pub const RETICLE: Rgba = Rgba::new(255, 255, 255, 0.7);
    pub const BANNER: Rgba = Rgba::new(255, 255, 255, 0.08);
}

/// Soft shadow drawn behind a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole surface
    Clear,
    /// Fill `rect` with a two-circle radial gradient
    RadialGradient {
        rect: Rect,
        inner: Vec2,
        inner_radius: f32,
        outer: Vec2,
        outer_radius: f32,
        stops: Vec<(f32, Rgba)>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    QuadCurve {
        from: Vec2,
        ctrl: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        width: f32,
    },
    RoundRect {
        rect: Rect,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        glow: Option<Glow>,
    },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: Rgba,
    },
}

/// A complete frame, drawn in order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub size: Vec2,
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::with_capacity(128),
        }
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(Rgba::new(0, 212, 255, 0.5).css(), "rgba(0,212,255,0.5)");
    }

    #[test]
    fn test_fade_clamps() {
        let c = Rgba::new(1, 2, 3, 0.8).fade(2.0);
        assert_eq!(c.a, 1.0);
        assert!((Rgba::new(1, 2, 3, 0.8).fade(0.5).a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_from_unit() {
        let c = Rgba::from_unit([1.0, 0.0, 0.5, 0.25]);
        assert_eq!((c.r, c.g, c.b), (255, 0, 128));
        assert_eq!(c.a, 0.25);
    }
}
