use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::direction::Direction;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::ScrollableSurface;

use super::predicate::scrollable;

/// Parameters of one continuous scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousScrollOptions {
    pub direction: Direction,
    /// Offset change per frame, always positive; the sign comes from `direction`
    pub step: f64,
}

struct LoopState {
    surface: Rc<dyn ScrollableSurface>,
    /// Weak: the scheduler owns the queued callback, which owns this state
    scheduler: Weak<dyn FrameScheduler>,
    options: ContinuousScrollOptions,
    /// Frame requested but not fired yet
    pending: Cell<Option<FrameHandle>>,
    cancelled: Cell<bool>,
    ticks: Cell<u64>,
}

/// Cancellation handle for a running scroll loop
///
/// Cancelling is idempotent. Dropping the handle does not stop the loop;
/// it then runs until the surface reaches its boundary.
pub struct ScrollLoop {
    state: Rc<LoopState>,
}

impl ScrollLoop {
    /// Stop the loop; no frame fired afterwards touches the surface.
    ///
    /// Returns whether a scheduled frame was withdrawn, which is false once
    /// the loop has stopped at the boundary or was already cancelled.
    pub fn cancel(&self) -> bool {
        self.state.cancelled.set(true);
        let Some(handle) = self.state.pending.take() else {
            return false;
        };
        if let Some(scheduler) = self.state.scheduler.upgrade() {
            scheduler.cancel_frame(handle);
        }
        tracing::debug!(
            direction = %self.state.options.direction,
            ticks = self.state.ticks.get(),
            "continuous scroll cancelled"
        );
        true
    }

    /// Whether another frame is scheduled
    pub fn is_running(&self) -> bool {
        !self.state.cancelled.get() && self.state.pending.get().is_some()
    }

    pub fn direction(&self) -> Direction {
        self.state.options.direction
    }

    /// Number of frames that moved the surface
    pub fn ticks(&self) -> u64 {
        self.state.ticks.get()
    }
}

impl fmt::Debug for ScrollLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLoop")
            .field("options", &self.state.options)
            .field("running", &self.is_running())
            .field("ticks", &self.ticks())
            .finish()
    }
}

/// Start scrolling `surface` one step per frame towards `options.direction`
///
/// Returns `None` without scheduling anything when the surface cannot
/// scroll that way. Otherwise the first step happens on the next frame,
/// not synchronously, and the loop ends on its own at the boundary.
pub fn continuous_scroll(
    surface: Rc<dyn ScrollableSurface>,
    scheduler: Rc<dyn FrameScheduler>,
    options: ContinuousScrollOptions,
) -> Option<ScrollLoop> {
    if !scrollable(&*surface, options.direction) {
        tracing::debug!(direction = %options.direction, "surface not scrollable, no loop started");
        return None;
    }

    let state = Rc::new(LoopState {
        surface,
        scheduler: Rc::downgrade(&scheduler),
        options,
        pending: Cell::new(None),
        cancelled: Cell::new(false),
        ticks: Cell::new(0),
    });
    schedule(&state, &*scheduler);

    tracing::debug!(direction = %options.direction, step = options.step, "continuous scroll started");
    Some(ScrollLoop { state })
}

fn schedule(state: &Rc<LoopState>, scheduler: &dyn FrameScheduler) {
    let next = state.clone();
    let handle = scheduler.request_frame(Box::new(move || tick(next)));
    state.pending.set(Some(handle));
}

fn tick(state: Rc<LoopState>) {
    state.pending.set(None);
    if state.cancelled.get() {
        return;
    }

    let ContinuousScrollOptions { direction, step } = state.options;
    if !scrollable(&*state.surface, direction) {
        tracing::debug!(%direction, ticks = state.ticks.get(), "boundary reached");
        return;
    }

    let metrics = state.surface.metrics();
    let delta = direction.signed_step(step);
    if direction.is_horizontal() {
        let next = (metrics.scroll_left + delta).clamp(0.0, metrics.max_scroll_left());
        state.surface.set_scroll_left(next);
    } else {
        let next = (metrics.scroll_top + delta).clamp(0.0, metrics.max_scroll_top());
        state.surface.set_scroll_top(next);
    }
    state.ticks.set(state.ticks.get() + 1);
    tracing::trace!(%direction, offset_delta = delta, "scroll tick");

    // A frame is firing, so the scheduler is normally still alive
    if let Some(scheduler) = state.scheduler.upgrade() {
        schedule(&state, &*scheduler);
    }
}
