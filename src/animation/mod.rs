//! Animation module - the wave-particle render loop
//!
//! This module provides:
//! - `RenderLoop`: phase accumulator, particles and per-frame drawing
//! - `LoopHandle`: explicit start/stop lifecycle around a `RenderLoop`
//! - `FrameScheduler`: the request/cancel frame primitive the handle runs on

mod particle;
mod render_loop;
mod scheduler;

pub use render_loop::{LoopOptions, RenderLoop, PARTICLE_COUNT};
pub use scheduler::{FrameRequest, FrameScheduler, RepaintScheduler};

#[cfg(test)]
pub use scheduler::ManualScheduler;

use crate::params::Parameters;
use crate::render::Surface;

/// Owns at most one running [`RenderLoop`] and its pending frame request.
///
/// A parameter change is applied with `stop()` followed by `start()`, which
/// always begins from phase zero with freshly laid out particles and draws
/// the first frame right away.
pub struct LoopHandle<S: FrameScheduler> {
    scheduler: S,
    options: LoopOptions,
    running: Option<RenderLoop>,
    pending: Option<FrameRequest>,
}

impl<S: FrameScheduler> LoopHandle<S> {
    pub fn new(scheduler: S, options: LoopOptions) -> Self {
        Self {
            scheduler,
            options,
            running: None,
            pending: None,
        }
    }

    /// Set up a new loop on `surface`, draw its first frame and request the
    /// next one.
    ///
    /// Any running loop is stopped first. Without a surface nothing starts
    /// and `false` is returned.
    pub fn start<T: Surface + ?Sized>(
        &mut self,
        params: Parameters,
        surface: Option<&mut T>,
    ) -> bool {
        self.stop();

        let Some(surface) = surface else {
            log::debug!("No drawing surface, animation not started");
            return false;
        };

        let size = surface.size();
        let mut state = RenderLoop::new(params, size, self.options);
        state.step(surface);
        self.running = Some(state);
        self.pending = Some(self.scheduler.request_frame());

        log::info!(
            "Animation started: wave={} particles={} speed={} wavelength={} ({}x{})",
            params.show_wave,
            params.show_particle,
            params.speed,
            params.wavelength,
            size.x,
            size.y
        );
        true
    }

    /// Cancel the pending frame and drop the loop state
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        if let Some(state) = self.running.take() {
            log::debug!("Animation stopped after {} frames", state.frames());
        }
    }

    /// Serve the pending frame request: draw one frame and request the next.
    ///
    /// Returns `false` without drawing when no frame is pending, which is
    /// always the case after `stop()`.
    pub fn run_frame<T: Surface + ?Sized>(&mut self, surface: &mut T) -> bool {
        if self.pending.is_none() {
            return false;
        }
        let Some(state) = self.running.as_mut() else {
            self.pending = None;
            return false;
        };

        self.pending = None;
        state.step(surface);
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    pub fn state(&self) -> Option<&RenderLoop> {
        self.running.as_ref()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for LoopHandle<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::render_loop::PHASE_RATE;
    use crate::render::RecordingSurface;

    fn handle() -> LoopHandle<ManualScheduler> {
        LoopHandle::new(ManualScheduler::default(), LoopOptions::default())
    }

    fn surface() -> RecordingSurface {
        RecordingSurface::new(800.0, 400.0)
    }

    /// Scheduler whose cancel log outlives the handle that owns it
    #[derive(Default)]
    struct SharedScheduler {
        inner: ManualScheduler,
        cancelled: Rc<RefCell<Vec<FrameRequest>>>,
    }

    impl FrameScheduler for SharedScheduler {
        fn request_frame(&mut self) -> FrameRequest {
            self.inner.request_frame()
        }

        fn cancel_frame(&mut self, request: FrameRequest) {
            self.cancelled.borrow_mut().push(request);
        }
    }

    #[test]
    fn test_start_draws_first_frame() {
        let mut handle = handle();
        let mut surface = surface();
        let params = Parameters::default();
        assert!(handle.start(params, Some(&mut surface)));

        assert!(handle.is_running());
        assert_eq!(handle.scheduler().requested.len(), 1);
        assert_eq!(handle.pending(), Some(handle.scheduler().requested[0]));

        let state = handle.state().unwrap();
        assert_eq!(state.frames(), 1);
        assert!((state.phase() - params.speed as f64 * PHASE_RATE).abs() < 1e-12);
        assert_eq!(surface.strokes().len(), 1);
        assert_eq!(surface.circles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_start_without_surface_is_silent() {
        let mut handle = handle();
        assert!(!handle.start::<RecordingSurface>(Parameters::default(), None));

        assert!(!handle.is_running());
        assert!(handle.pending().is_none());
        assert!(handle.scheduler().requested.is_empty());
        assert!(!handle.run_frame(&mut surface()));
    }

    #[test]
    fn test_each_frame_requests_the_next() {
        let mut handle = handle();
        let mut surface = surface();
        handle.start(Parameters::default(), Some(&mut surface));

        for _ in 0..5 {
            assert!(handle.run_frame(&mut surface));
        }
        assert_eq!(handle.scheduler().requested.len(), 6);
        assert_eq!(handle.state().unwrap().frames(), 6);
        assert!(handle.scheduler().cancelled.is_empty());
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut handle = handle();
        let mut surface = surface();
        handle.start(Parameters::default(), Some(&mut surface));
        handle.run_frame(&mut surface);

        let pending = handle.pending().unwrap();
        handle.stop();

        assert_eq!(handle.scheduler().cancelled, vec![pending]);
        assert!(!handle.is_running());

        surface.clear();
        assert!(!handle.run_frame(&mut surface));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let scheduler = SharedScheduler {
            cancelled: Rc::clone(&cancelled),
            ..Default::default()
        };

        let pending = {
            let mut handle = LoopHandle::new(scheduler, LoopOptions::default());
            let mut surface = surface();
            handle.start(Parameters::default(), Some(&mut surface));
            handle.run_frame(&mut surface);
            let pending = handle.pending().unwrap();
            assert!(cancelled.borrow().is_empty());
            pending
        };

        assert_eq!(*cancelled.borrow(), vec![pending]);
    }

    #[test]
    fn test_drop_when_stopped_cancels_nothing() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let scheduler = SharedScheduler {
            cancelled: Rc::clone(&cancelled),
            ..Default::default()
        };

        drop(LoopHandle::new(scheduler, LoopOptions::default()));
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn test_restart_resets_state() {
        let mut handle = handle();
        let mut surface = surface();
        let params = Parameters::default();
        handle.start(params, Some(&mut surface));
        for _ in 0..30 {
            handle.run_frame(&mut surface);
        }
        assert_eq!(handle.state().unwrap().frames(), 31);

        let changed = [
            Parameters { show_wave: false, ..params },
            Parameters { show_particle: false, ..params },
            Parameters { speed: 4.5, ..params },
            Parameters { wavelength: 120.0, ..params },
        ];

        for new_params in changed {
            handle.stop();
            assert!(handle.start(new_params, Some(&mut surface)));

            let state = handle.state().unwrap();
            assert_eq!(state.frames(), 1);
            assert!((state.phase() - new_params.speed as f64 * PHASE_RATE).abs() < 1e-12);
            assert_eq!(state.params(), &new_params);

            let step = if new_params.show_particle { new_params.speed } else { 0.0 };
            for (i, p) in state.particles().iter().enumerate() {
                assert_eq!(p.x, i as f32 * 16.0 + step);
            }

            for _ in 0..10 {
                handle.run_frame(&mut surface);
            }
        }
    }
}
