//! Render module - drawing surfaces and the display widget
//!
//! This module provides:
//! - The `Surface` trait the render loop draws through
//! - A trail surface that fades earlier frames out
//! - The egui widget that paints the trail surface

mod surface;
mod trail;
mod view;

pub use surface::{canvas_rgba, Glow, Surface};
pub use trail::TrailSurface;
pub use view::CanvasView;

#[cfg(test)]
pub use surface::{DrawCall, RecordingSurface};
