//! Frame scheduling
//!
//! The render loop's only dependency on time: ask for the next display
//! refresh, or withdraw a request that has not fired yet.

use eframe::egui;

/// Identifies one outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Request-next-frame / cancel-pending-frame primitive supplied by the host
pub trait FrameScheduler {
    /// Ask for one more frame at the next display refresh
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a request that has not been served
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Scheduler backed by egui's repaint requests.
///
/// egui has no way to withdraw a repaint, so cancelling only forgets the id.
/// The extra repaint is harmless because [`super::LoopHandle`] ignores frames
/// it has no pending request for.
pub struct RepaintScheduler {
    ctx: egui::Context,
    next_id: u64,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, next_id: 0 }
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        self.ctx.request_repaint();
        FrameRequest(self.next_id)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        log::trace!("Dropping frame request {}", request.id());
    }
}

/// Scheduler that only records what was asked of it
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    next_id: u64,
    pub requested: Vec<FrameRequest>,
    pub cancelled: Vec<FrameRequest>,
}

#[cfg(test)]
impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.requested.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.cancelled.push(request);
    }
}
