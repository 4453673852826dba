//! Drawing surface abstraction
//!
//! The render loop only talks to this trait, so frames can be drawn into
//! the trail surface in the app or into a recorder in tests.

use eframe::egui::{Color32, Pos2, Rect, Vec2};

/// Soft glow painted behind filled shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Blur radius in pixels
    pub blur: f32,
    pub color: Color32,
}

impl Glow {
    pub fn new(blur: f32, color: Color32) -> Self {
        Self { blur, color }
    }
}

/// Build a color the way a 2D canvas reads `rgba(r, g, b, alpha)`.
///
/// The result is premultiplied in gamma space, so `a()` is exactly
/// `alpha * 255`. `Color32::from_rgba_unmultiplied` premultiplies in linear
/// space and would shift the color channels of translucent overlays.
pub fn canvas_rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color32 {
    let alpha = alpha.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * alpha).round() as u8;
    Color32::from_rgba_premultiplied(scale(r), scale(g), scale(b), (alpha * 255.0).round() as u8)
}

/// A fixed-size 2D surface the render loop paints into.
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Surface {
    /// Size of the surface in pixels
    fn size(&self) -> Vec2;

    /// Composite a solid (possibly translucent) rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Stroke an open polyline through `points`
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Fill a circle, drawing the current glow underneath it if one is set
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Set or clear the glow applied to subsequent fills
    fn set_glow(&mut self, glow: Option<Glow>);

    fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }
}

#[cfg(test)]
/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect { rect: Rect, color: Color32 },
    StrokePath { points: Vec<Pos2>, width: f32, color: Color32 },
    FillCircle { center: Pos2, radius: f32, color: Color32, glow: Option<Glow> },
    SetGlow(Option<Glow>),
}

/// Surface that records every call instead of drawing
#[cfg(test)]
pub struct RecordingSurface {
    size: Vec2,
    glow: Option<Glow>,
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            glow: None,
            calls: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn strokes(&self) -> Vec<&Vec<Pos2>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::StrokePath { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Pos2, Option<Glow>)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillCircle { center, glow, .. } => Some((*center, *glow)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.calls.push(DrawCall::StrokePath {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
            glow: self.glow,
        });
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
        self.calls.push(DrawCall::SetGlow(glow));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_rgba_premultiplies_in_gamma_space() {
        let color = canvas_rgba(10, 10, 30, 0.1);
        assert_eq!(color.to_array(), [1, 1, 3, 26]);
        assert_eq!(canvas_rgba(255, 0, 255, 1.0), Color32::from_rgb(255, 0, 255));
    }
}
