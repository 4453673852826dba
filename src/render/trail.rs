//! Fading trail surface
//!
//! egui repaints everything each frame, so there is no canvas for a
//! translucent overlay to darken. Instead the shapes of recent frames are
//! kept with an alpha: a full-surface fill of alpha `a` scales every stored
//! shape by `1 - a` and drops the ones that have faded out. Stored shapes
//! are handed to the painter oldest first.

use eframe::egui::emath::RectTransform;
use eframe::egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};
use thiserror::Error;

use super::surface::{Glow, Surface};

/// Shapes fainter than this are dropped
pub const MIN_ALPHA: f32 = 0.01;

/// Number of translucent rings used to draw a glow
pub const GLOW_RINGS: usize = 4;

/// Combined opacity of the glow rings where they all overlap
const GLOW_STRENGTH: f32 = 0.5;

const MAX_SHAPES: usize = 8192;

/// Errors that can occur when creating a surface
#[derive(Error, Debug, PartialEq)]
pub enum SurfaceError {
    #[error("Invalid surface size: {0:?}")]
    InvalidSize(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
enum TrailShape {
    Rect {
        rect: Rect,
        color: Color32,
    },
    Path {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
        glow: Option<Glow>,
    },
}

/// Surface that keeps recent shapes with a decaying alpha
pub struct TrailSurface {
    size: Vec2,
    background: Color32,
    shapes: Vec<(TrailShape, f32)>,
    glow: Option<Glow>,
}

impl TrailSurface {
    pub fn new(size: Vec2, background: Color32) -> Result<Self, SurfaceError> {
        if !(size.x > 0.0 && size.y > 0.0 && size.is_finite()) {
            return Err(SurfaceError::InvalidSize(size));
        }

        Ok(Self {
            size,
            background,
            shapes: Vec::with_capacity(1024),
            glow: None,
        })
    }

    /// Color under all stored shapes
    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Number of shapes still visible
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Current opacity of every stored shape, oldest first
    #[cfg(test)]
    pub fn alphas(&self) -> impl Iterator<Item = f32> + '_ {
        self.shapes.iter().map(|(_, alpha)| *alpha)
    }

    fn push(&mut self, shape: TrailShape) {
        self.shapes.push((shape, 1.0));

        if self.shapes.len() > MAX_SHAPES {
            let excess = self.shapes.len() - MAX_SHAPES;
            self.shapes.drain(0..excess);
        }
    }

    /// Convert stored shapes into painter shapes in screen space
    pub fn to_shapes(&self, to_screen: RectTransform) -> Vec<Shape> {
        let scale = to_screen.scale().x;
        let mut out = Vec::with_capacity(self.shapes.len() * 2);

        for (shape, alpha) in &self.shapes {
            let fade = |color: Color32| color.gamma_multiply(*alpha);

            match shape {
                TrailShape::Rect { rect, color } => {
                    out.push(Shape::rect_filled(to_screen.transform_rect(*rect), 0.0, fade(*color)));
                }
                TrailShape::Path { points, width, color } => {
                    let points = points.iter().map(|p| to_screen.transform_pos(*p)).collect();
                    out.push(Shape::line(points, Stroke::new(width * scale, fade(*color))));
                }
                TrailShape::Circle { center, radius, color, glow } => {
                    let center = to_screen.transform_pos(*center);
                    if let Some(glow) = glow {
                        push_glow(&mut out, center, radius * scale, glow.blur * scale, fade(glow.color));
                    }
                    out.push(Shape::circle_filled(center, radius * scale, fade(*color)));
                }
            }
        }

        out
    }
}

/// Outermost ring first, each one adding a little more color toward the center
fn push_glow(out: &mut Vec<Shape>, center: Pos2, radius: f32, blur: f32, color: Color32) {
    if blur <= 0.0 {
        return;
    }
    let ring_color = color.gamma_multiply(GLOW_STRENGTH / GLOW_RINGS as f32);
    for ring in 0..GLOW_RINGS {
        let reach = 1.0 - ring as f32 / GLOW_RINGS as f32;
        out.push(Shape::circle_filled(center, radius + blur * reach, ring_color));
    }
}

impl Surface for TrailSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        if !rect.contains_rect(self.bounds()) {
            self.push(TrailShape::Rect { rect, color });
            return;
        }

        // A fill over the whole surface fades everything under it
        let alpha = color.a() as f32 / 255.0;
        if alpha >= 1.0 {
            self.background = color;
            self.shapes.clear();
            return;
        }

        let keep = 1.0 - alpha;
        self.shapes.retain_mut(|(_, a)| {
            *a *= keep;
            *a > MIN_ALPHA
        });
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        self.push(TrailShape::Path {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.push(TrailShape::Circle {
            center,
            radius,
            color,
            glow: self.glow,
        });
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
    }
}
