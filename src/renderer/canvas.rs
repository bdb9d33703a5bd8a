//! Canvas 2D backend: replays a `Frame` onto a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::frame::{DrawCmd, Frame, Glow};
use crate::sim::Rect;

/// Draws frames onto the game canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Replay every command in order
    pub fn present(&self, frame: &Frame) {
        let (w, h) = (frame.size.x as f64, frame.size.y as f64);
        for cmd in &frame.commands {
            self.ctx.save();
            self.draw(cmd, w, h);
            self.ctx.restore();
        }
    }

    fn draw(&self, cmd: &DrawCmd, w: f64, h: f64) {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear => ctx.clear_rect(0.0, 0.0, w, h),
            DrawCmd::RadialGradient {
                rect,
                inner,
                inner_radius,
                outer,
                outer_radius,
                stops,
            } => {
                let Ok(gradient) = ctx.create_radial_gradient(
                    inner.x as f64,
                    inner.y as f64,
                    *inner_radius as f64,
                    outer.x as f64,
                    outer.y as f64,
                    *outer_radius as f64,
                ) else {
                    return;
                };
                for (offset, color) in stops {
                    gradient.add_color_stop(*offset, &color.css()).ok();
                }
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawCmd::QuadCurve {
                from,
                ctrl,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64);
                ctx.stroke();
            }
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .ok();
                ctx.fill();
            }
            DrawCmd::StrokeCircle {
                center,
                radius,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .ok();
                ctx.stroke();
            }
            DrawCmd::RoundRect {
                rect,
                radius,
                fill,
                stroke,
                glow,
            } => {
                if let Some(Glow { color, blur }) = glow {
                    ctx.set_shadow_color(&color.css());
                    ctx.set_shadow_blur(*blur as f64);
                }
                self.round_rect_path(rect, *radius);
                if let Some(fill) = fill {
                    ctx.set_fill_style_str(&fill.css());
                    ctx.fill();
                }
                if let Some(stroke) = stroke {
                    ctx.set_stroke_style_str(&stroke.css());
                    ctx.stroke();
                }
            }
            DrawCmd::Text {
                text,
                pos,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(&color.css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
            }
        }
    }

    fn round_rect_path(&self, rect: &Rect, radius: f32) {
        let ctx = &self.ctx;
        let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0);
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r).ok();
        ctx.arc_to(x + w, y + h, x, y + h, r).ok();
        ctx.arc_to(x, y + h, x, y, r).ok();
        ctx.arc_to(x, y, x + w, y, r).ok();
        ctx.close_path();
    }
}
