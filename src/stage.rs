//! The animation as the window drives it
//!
//! Owns the current parameters, the loop handle and the surface. Changing
//! the parameters tears the loop down and starts it again on a fresh
//! surface.

use eframe::egui::{Color32, Vec2};

use crate::animation::{FrameScheduler, LoopHandle, LoopOptions, RenderLoop};
use crate::params::Parameters;
use crate::render::TrailSurface;

pub const SURFACE_SIZE: Vec2 = Vec2::new(800.0, 400.0);
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(10, 10, 30);

/// Create the fixed-size surface the animation draws into
fn acquire_surface() -> Option<TrailSurface> {
    match TrailSurface::new(SURFACE_SIZE, CANVAS_BACKGROUND) {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::error!("Failed to create canvas: {}", e);
            None
        }
    }
}

pub struct Stage<S: FrameScheduler> {
    params: Parameters,
    handle: LoopHandle<S>,
    surface: Option<TrailSurface>,
}

impl<S: FrameScheduler> Stage<S> {
    /// Create the stage and start the animation
    pub fn new(scheduler: S, options: LoopOptions, params: Parameters) -> Self {
        let mut stage = Self {
            params,
            handle: LoopHandle::new(scheduler, options),
            surface: None,
        };
        stage.restart();
        stage
    }

    pub fn params(&self) -> Parameters {
        self.params
    }

    /// Apply new parameters, restarting the animation if anything changed.
    /// Returns whether a restart happened.
    pub fn set_params(&mut self, params: Parameters) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.restart();
        true
    }

    /// Tear down the running loop and start a new one on a fresh surface
    pub fn restart(&mut self) {
        self.handle.stop();
        self.surface = acquire_surface();
        self.handle.start(self.params, self.surface.as_mut());
    }

    /// Serve the pending frame, if any
    pub fn tick(&mut self) -> bool {
        match self.surface.as_mut() {
            Some(surface) => self.handle.run_frame(surface),
            None => false,
        }
    }

    pub fn surface(&self) -> Option<&TrailSurface> {
        self.surface.as_ref()
    }

    pub fn state(&self) -> Option<&RenderLoop> {
        self.handle.state()
    }
}
