//! Animation parameters
//!
//! The four values the controls edit. The render loop reads them once per
//! frame and never mutates them.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const SPEED_RANGE: RangeInclusive<f32> = 0.5..=5.0;
pub const SPEED_STEP: f32 = 0.5;

pub const WAVELENGTH_RANGE: RangeInclusive<f32> = 40.0..=160.0;
pub const WAVELENGTH_STEP: f32 = 10.0;

/// User-adjustable animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub show_wave: bool,
    pub show_particle: bool,
    /// Phase advance rate and particle velocity (px/frame)
    pub speed: f32,
    /// Spatial period of the sine, in pixels
    pub wavelength: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            show_wave: true,
            show_particle: true,
            speed: 2.0,
            wavelength: 80.0,
        }
    }
}

impl Parameters {
    /// Snap speed and wavelength onto the slider grid.
    ///
    /// Values coming from the controls are already on the grid; this only
    /// matters for values read from a config file.
    pub fn sanitized(self) -> Self {
        Self {
            speed: snap(self.speed, SPEED_RANGE, SPEED_STEP, Self::default().speed),
            wavelength: snap(
                self.wavelength,
                WAVELENGTH_RANGE,
                WAVELENGTH_STEP,
                Self::default().wavelength,
            ),
            ..self
        }
    }

    pub fn is_sanitized(&self) -> bool {
        *self == self.sanitized()
    }
}

fn snap(value: f32, range: RangeInclusive<f32>, step: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        return fallback;
    }
    let min = *range.start();
    let stepped = min + ((value - min) / step).round() * step;
    stepped.clamp(min, *range.end())
}
