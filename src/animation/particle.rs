//! Particles riding the wave

use std::f64::consts::TAU;

use eframe::egui::Vec2;

/// A single particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in pixels, always in `0.0..width`
    pub x: f32,
    /// Rest line the sine displacement is added to
    pub base_y: f32,
    /// Fixed offset within one cycle. Only read when staggering is enabled.
    pub phase: f64,
}

impl Particle {
    /// Move right by `speed` pixels, wrapping to the left edge at `width`
    #[inline]
    pub fn advance(&mut self, speed: f32, width: f32) {
        self.x += speed;
        if self.x >= width {
            self.x = 0.0;
        }
    }
}

/// Lay out `count` particles evenly across the surface width on its
/// vertical center, with phases spread evenly over one full cycle.
pub fn layout(count: usize, size: Vec2) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Particle {
                x: (t * size.x as f64) as f32,
                base_y: size.y / 2.0,
                phase: t * TAU,
            }
        })
        .collect()
}
