//! Canvas display widget
//!
//! Paints a [`TrailSurface`] inside a rounded, bordered frame, scaled down
//! to the available width.

use eframe::egui::emath::RectTransform;
use eframe::egui::{self, Stroke, Vec2};

use super::surface::{canvas_rgba, Surface};
use super::trail::TrailSurface;

const FRAME_ROUNDING: f32 = 15.0;
const FRAME_PADDING: f32 = 20.0;
const CANVAS_ROUNDING: f32 = 10.0;

/// Size shown while no surface exists
const PLACEHOLDER_SIZE: Vec2 = Vec2::new(800.0, 400.0);

/// Widget that displays the animation
#[derive(Default)]
pub struct CanvasView;

impl CanvasView {
    pub fn new() -> Self {
        Self
    }

    /// Draw the frame and, if there is one, the surface inside it
    pub fn show(&mut self, ui: &mut egui::Ui, surface: Option<&TrailSurface>) -> egui::Response {
        let canvas_size = surface.map(|s| s.size()).unwrap_or(PLACEHOLDER_SIZE);
        let inner = fit_size(ui.available_width() - 2.0 * FRAME_PADDING, canvas_size);

        let (response, painter) =
            ui.allocate_painter(inner + Vec2::splat(2.0 * FRAME_PADDING), egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, FRAME_ROUNDING, canvas_rgba(10, 10, 30, 0.8));
        painter.rect_stroke(
            rect,
            FRAME_ROUNDING,
            Stroke::new(2.0, canvas_rgba(0, 255, 255, 0.3)),
        );

        if let Some(surface) = surface {
            let canvas_rect = egui::Rect::from_center_size(rect.center(), inner);
            let painter = painter.with_clip_rect(canvas_rect);

            painter.rect_filled(canvas_rect, CANVAS_ROUNDING, surface.background());
            painter.extend(surface.to_shapes(RectTransform::from_to(surface.bounds(), canvas_rect)));
        }

        response
    }
}

/// Scale `image` down to `max_width`, keeping its aspect ratio. Never upscales.
pub fn fit_size(max_width: f32, image: Vec2) -> Vec2 {
    if image.x <= 0.0 || max_width <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (max_width / image.x).min(1.0);
    image * scale
}
