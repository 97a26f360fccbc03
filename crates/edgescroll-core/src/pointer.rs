//! Pointer event source abstraction
//!
//! The controller subscribes to one channel, picked by `TrackingMode`.
//! `PointerChannels` is a listener registry hosts can embed to implement
//! `PointerEventSource` without writing their own bookkeeping.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which pointer stream feeds edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrackingMode {
    /// Ambient pointer movement
    #[default]
    #[serde(rename = "mousemove")]
    MouseMove,
    /// Movement during an active drag gesture only
    #[serde(rename = "drag")]
    Drag,
}

impl TrackingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackingMode::MouseMove => "mousemove",
            TrackingMode::Drag => "drag",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            TrackingMode::MouseMove => TrackingMode::Drag,
            TrackingMode::Drag => TrackingMode::MouseMove,
        }
    }
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mousemove" | "move" => Ok(TrackingMode::MouseMove),
            "drag" => Ok(TrackingMode::Drag),
            other => Err(crate::Error::InvalidTrackingMode(other.to_string())),
        }
    }
}

/// Pointer position in the container's local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub type PointerListener = Rc<dyn Fn(PointerEvent)>;

/// Identifies a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub trait PointerEventSource {
    fn add_listener(&self, mode: TrackingMode, listener: PointerListener) -> ListenerId;

    /// Unknown ids are ignored
    fn remove_listener(&self, mode: TrackingMode, id: ListenerId);
}

/// Listener registry keyed by tracking mode
#[derive(Default)]
pub struct PointerChannels {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(TrackingMode, ListenerId, PointerListener)>>,
}

impl PointerChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener of `mode`
    ///
    /// Listeners are snapshotted first, so a listener may unsubscribe
    /// (or subscribe others) while being called.
    pub fn dispatch(&self, mode: TrackingMode, event: PointerEvent) -> usize {
        let targets: Vec<PointerListener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(m, _, _)| *m == mode)
            .map(|(_, _, listener)| listener.clone())
            .collect();

        for listener in &targets {
            listener(event);
        }
        targets.len()
    }

    pub fn listener_count(&self, mode: TrackingMode) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(m, _, _)| *m == mode)
            .count()
    }
}

impl PointerEventSource for PointerChannels {
    fn add_listener(&self, mode: TrackingMode, listener: PointerListener) -> ListenerId {
        let id = ListenerId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.listeners.borrow_mut().push((mode, id, listener));
        id
    }

    fn remove_listener(&self, mode: TrackingMode, id: ListenerId) {
        let removed: Vec<_> = {
            let mut listeners = self.listeners.borrow_mut();
            let (removed, kept): (Vec<_>, Vec<_>) = listeners
                .drain(..)
                .partition(|(m, i, _)| *m == mode && *i == id);
            *listeners = kept;
            removed
        };
        drop(removed);
    }
}

impl fmt::Debug for PointerChannels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerChannels")
            .field("mousemove", &self.listener_count(TrackingMode::MouseMove))
            .field("drag", &self.listener_count(TrackingMode::Drag))
            .finish()
    }
}
