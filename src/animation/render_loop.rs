//! Per-frame animation state and drawing

use std::f64::consts::TAU;

use eframe::egui::{Color32, Pos2, Vec2};

use super::particle::{self, Particle};
use crate::params::Parameters;
use crate::render::{canvas_rgba, Glow, Surface};

pub const PARTICLE_COUNT: usize = 50;

/// Vertical displacement of the wave and particles, in pixels
pub const AMPLITUDE: f64 = 60.0;

/// Phase advance per frame per unit of speed
pub const PHASE_RATE: f64 = 0.02;

pub const WAVE_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
pub const WAVE_WIDTH: f32 = 3.0;

pub const PARTICLE_COLOR: Color32 = Color32::from_rgb(255, 0, 255);
pub const PARTICLE_RADIUS: f32 = 4.0;
pub const PARTICLE_GLOW_BLUR: f32 = 15.0;

/// Alpha of the overlay painted each frame; lower means longer trails
pub const TRAIL_ALPHA: f32 = 0.1;

/// Options fixed for the lifetime of the application
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopOptions {
    /// Add each particle's own phase offset to the shared phase
    pub stagger_particles: bool,
}

/// State of one running animation.
///
/// Created fresh on every start, so phase and particle positions never
/// survive a parameter change.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    params: Parameters,
    options: LoopOptions,
    size: Vec2,
    phase: f64,
    particles: Vec<Particle>,
    frames: u64,
}

impl RenderLoop {
    pub fn new(params: Parameters, size: Vec2, options: LoopOptions) -> Self {
        Self {
            params,
            options,
            size,
            phase: 0.0,
            particles: particle::layout(PARTICLE_COUNT, size),
            frames: 0,
        }
    }

    #[cfg(test)]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of frames drawn since start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Height of the wave at `x` for the current phase, offset from `base_y`
    pub fn wave_y(&self, x: f32, base_y: f32) -> f32 {
        self.displacement(x, self.phase) + base_y
    }

    fn displacement(&self, x: f32, phase: f64) -> f32 {
        let angle = (x as f64 / self.params.wavelength as f64) * TAU + phase;
        (angle.sin() * AMPLITUDE) as f32
    }

    /// Draw one frame and advance the animation
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let bounds = surface.bounds();
        surface.fill_rect(bounds, canvas_rgba(10, 10, 30, TRAIL_ALPHA));

        self.phase += self.params.speed as f64 * PHASE_RATE;
        self.frames += 1;

        if self.params.show_wave {
            self.draw_wave(surface);
        }

        if self.params.show_particle {
            self.draw_particles(surface);
        }
    }

    fn draw_wave<S: Surface + ?Sized>(&self, surface: &mut S) {
        let center = self.size.y / 2.0;
        let points: Vec<Pos2> = (0..self.size.x as usize)
            .map(|x| {
                let x = x as f32;
                Pos2::new(x, self.wave_y(x, center))
            })
            .collect();

        surface.stroke_path(&points, WAVE_WIDTH, WAVE_COLOR);
    }

    fn draw_particles<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let speed = self.params.speed;
        let width = self.size.x;
        let glow = Glow::new(PARTICLE_GLOW_BLUR, PARTICLE_COLOR);

        for i in 0..self.particles.len() {
            self.particles[i].advance(speed, width);

            let p = self.particles[i];
            let phase = if self.options.stagger_particles {
                self.phase + p.phase
            } else {
                self.phase
            };
            let y = p.base_y + self.displacement(p.x, phase);

            surface.set_glow(Some(glow));
            surface.fill_circle(Pos2::new(p.x, y), PARTICLE_RADIUS, PARTICLE_COLOR);
            surface.set_glow(None);
        }
    }
}
