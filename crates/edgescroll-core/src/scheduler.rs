//! Frame scheduling
//!
//! `FrameScheduler` is the per-display-frame primitive the scroll loop is
//! built on. `FrameQueue` is a deterministic implementation that the host
//! pumps once per rendered frame; tests pump it by hand.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;

/// Callback fired on the next frame
pub type FrameCallback = Box<dyn FnOnce()>;

/// Identifies a requested, not yet fired frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Run `callback` on the next frame
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Prevent a callback that has not fired yet from firing.
    /// Unknown or already fired handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Manually pumped frame scheduler
#[derive(Default)]
pub struct FrameQueue {
    next_id: Cell<u64>,
    pending: RefCell<BTreeMap<FrameHandle, FrameCallback>>,
    frames: Cell<u64>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any callback is waiting for the next frame
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames.get()
    }

    /// Run one frame and return how many callbacks fired
    ///
    /// Only callbacks pending when the frame starts are eligible. Callbacks
    /// requested while the frame runs wait for the next one, and callbacks
    /// cancelled by an earlier callback of the same frame are skipped.
    pub fn run_frame(&self) -> usize {
        let due: Vec<FrameHandle> = self.pending.borrow().keys().copied().collect();
        let mut fired = 0;

        for handle in due {
            // The borrow must end before the callback runs; it may reschedule
            let callback = self.pending.borrow_mut().remove(&handle);
            if let Some(callback) = callback {
                callback();
                fired += 1;
            }
        }

        self.frames.set(self.frames.get() + 1);
        tracing::trace!(frame = self.frames.get(), fired, "frame");
        fired
    }

    /// Run `count` frames and return the total number of callbacks fired
    pub fn run_frames(&self, count: usize) -> usize {
        (0..count).map(|_| self.run_frame()).sum()
    }

    /// Run frames until nothing is pending, at most `max_frames`.
    /// Returns the number of frames run.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.has_pending() {
            self.run_frame();
            frames += 1;
        }
        frames
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = FrameHandle(id);
        self.pending.borrow_mut().insert(handle, callback);
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        // Dropped outside the borrow: the callback may own the last
        // reference to something that touches this queue when dropped
        let removed = self.pending.borrow_mut().remove(&handle);
        drop(removed);
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending_count())
            .field("frames", &self.frames.get())
            .finish()
    }
}
