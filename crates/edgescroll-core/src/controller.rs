//! Edge auto-scroll controller
//!
//! `AutoScroll` listens to one pointer channel and, while the pointer sits
//! inside an edge zone, keeps a continuous scroll loop running towards that
//! edge. Leaving every zone or deactivating stops the loop.
//!
//! ```ignore
//! use edgescroll_core::{AutoScroll, AutoScrollOptions, Direction, EdgeThresholds};
//!
//! let options = AutoScrollOptions::new(surface.clone())
//!     .step(5.0)
//!     .edge(EdgeThresholds::new().with(Direction::Top, 20.0))
//!     .on_direction_change(|direction| println!("scrolling {direction}"));
//!
//! let mut controller = AutoScroll::new(options, scheduler, pointer)?;
//! controller.activate();
//! // ... pointer events and frames arrive ...
//! controller.deactivate();
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::config::{validate_step, AutoScrollConfig};
use crate::direction::Direction;
use crate::edge::{EdgeGeometry, EdgeThresholds};
use crate::pointer::{ListenerId, PointerEvent, PointerEventSource, TrackingMode};
use crate::scheduler::FrameScheduler;
use crate::scroll::{continuous_scroll, ContinuousScrollOptions, ScrollLoop};
use crate::surface::ScrollableSurface;

/// Step used when none is configured
pub const DEFAULT_STEP: f64 = 10.0;

/// Notified with the new direction each time scrolling starts
pub type DirectionCallback = Box<dyn Fn(Direction)>;

/// Controller options
pub struct AutoScrollOptions {
    /// Surface to scroll
    pub scroll_element: Rc<dyn ScrollableSurface>,
    /// Offset change per frame (default 10)
    pub step: Option<f64>,
    /// Pointer channel to listen on
    pub track_mouse_event: TrackingMode,
    /// Zone depth per side
    pub edge: EdgeThresholds,
    pub on_direction_change: Option<DirectionCallback>,
}

impl AutoScrollOptions {
    pub fn new(scroll_element: Rc<dyn ScrollableSurface>) -> Self {
        Self {
            scroll_element,
            step: None,
            track_mouse_event: TrackingMode::default(),
            edge: EdgeThresholds::default(),
            on_direction_change: None,
        }
    }

    /// Options taken from the `[autoscroll]` config section
    pub fn from_config(scroll_element: Rc<dyn ScrollableSurface>, config: &AutoScrollConfig) -> Self {
        Self {
            step: config.step,
            track_mouse_event: config.track_mouse_event,
            edge: config.edge,
            ..Self::new(scroll_element)
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn track_mouse_event(mut self, mode: TrackingMode) -> Self {
        self.track_mouse_event = mode;
        self
    }

    pub fn edge(mut self, edge: EdgeThresholds) -> Self {
        self.edge = edge;
        self
    }

    pub fn on_direction_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(Direction) + 'static,
    {
        self.on_direction_change = Some(Box::new(callback));
        self
    }

    /// Configured step, or the default
    #[inline]
    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(DEFAULT_STEP)
    }
}

impl fmt::Debug for AutoScrollOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoScrollOptions")
            .field("step", &self.step)
            .field("track_mouse_event", &self.track_mouse_event)
            .field("edge", &self.edge)
            .field("on_direction_change", &self.on_direction_change.is_some())
            .finish()
    }
}

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Not subscribed to pointer events
    Inactive,
    /// Subscribed, pointer outside every edge zone
    Idle,
    /// Subscribed, pointer in the zone of this direction
    Scrolling(Direction),
}

struct Engaged {
    direction: Direction,
    /// `None` when the surface was already at the boundary
    scroll: Option<ScrollLoop>,
}

/// State shared with the pointer listener
struct Shared {
    surface: Rc<dyn ScrollableSurface>,
    scheduler: Rc<dyn FrameScheduler>,
    step: f64,
    edge: EdgeThresholds,
    on_direction_change: Option<DirectionCallback>,
    geometry: Cell<EdgeGeometry>,
    active: Cell<bool>,
    engaged: RefCell<Option<Engaged>>,
}

impl Shared {
    fn handle_pointer_move(&self, event: PointerEvent) {
        if !self.active.get() {
            return;
        }

        let Some(direction) = self.geometry.get().detect(&self.edge, event.x, event.y) else {
            // out of every zone
            if let Some(previous) = self.disengage() {
                tracing::debug!(direction = %previous, "pointer left edge zone");
            }
            return;
        };

        let current = self.engaged.borrow().as_ref().map(|e| e.direction);
        match current {
            Some(engaged) if engaged == direction => return,
            Some(engaged) => {
                self.disengage();
                tracing::debug!(from = %engaged, to = %direction, "edge zone changed");
            }
            None => {}
        }

        let scroll = continuous_scroll(
            self.surface.clone(),
            self.scheduler.clone(),
            ContinuousScrollOptions { direction, step: self.step },
        );
        tracing::debug!(%direction, started = scroll.is_some(), "pointer entered edge zone");
        *self.engaged.borrow_mut() = Some(Engaged { direction, scroll });

        // No borrow is held here; the callback may call back into the controller
        if let Some(callback) = &self.on_direction_change {
            callback(direction);
        }
    }

    /// Cancel any running loop and return the direction that was engaged
    fn disengage(&self) -> Option<Direction> {
        let engaged = self.engaged.borrow_mut().take()?;
        if let Some(scroll) = &engaged.scroll {
            scroll.cancel();
        }
        Some(engaged.direction)
    }

    fn state(&self) -> ControllerState {
        if !self.active.get() {
            return ControllerState::Inactive;
        }
        match self.engaged.borrow().as_ref() {
            Some(engaged) => ControllerState::Scrolling(engaged.direction),
            None => ControllerState::Idle,
        }
    }
}

/// Edge auto-scroll controller
///
/// Deactivates itself when dropped.
pub struct AutoScroll {
    shared: Rc<Shared>,
    events: Rc<dyn PointerEventSource>,
    mode: TrackingMode,
    subscription: Option<ListenerId>,
}

impl AutoScroll {
    /// Validate options and snapshot the surface geometry
    pub fn new(
        options: AutoScrollOptions,
        scheduler: Rc<dyn FrameScheduler>,
        events: Rc<dyn PointerEventSource>,
    ) -> crate::Result<Self> {
        let step = options.effective_step();
        validate_step(step)?;
        options.edge.validate()?;

        let geometry = EdgeGeometry::measure(&*options.scroll_element);
        tracing::debug!(?geometry, step, mode = %options.track_mouse_event, "auto-scroll created");

        let shared = Rc::new(Shared {
            surface: options.scroll_element,
            scheduler,
            step,
            edge: options.edge,
            on_direction_change: options.on_direction_change,
            geometry: Cell::new(geometry),
            active: Cell::new(false),
            engaged: RefCell::new(None),
        });

        Ok(Self {
            shared,
            events,
            mode: options.track_mouse_event,
            subscription: None,
        })
    }

    /// Start listening for pointer events. No-op when already active.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let weak = Rc::downgrade(&self.shared);
        let id = self.events.add_listener(
            self.mode,
            Rc::new(move |event: PointerEvent| {
                if let Some(shared) = weak.upgrade() {
                    shared.handle_pointer_move(event);
                }
            }),
        );
        self.subscription = Some(id);
        self.shared.active.set(true);
        tracing::debug!(mode = %self.mode, "auto-scroll activated");
    }

    /// Stop listening and stop any running scroll. No-op when inactive.
    pub fn deactivate(&mut self) {
        let Some(id) = self.subscription.take() else {
            return;
        };
        self.events.remove_listener(self.mode, id);
        self.shared.active.set(false);
        self.shared.disengage();
        tracing::debug!(mode = %self.mode, "auto-scroll deactivated");
    }

    /// Feed one pointer position, as the subscribed listener does
    pub fn handle_pointer_move(&self, event: PointerEvent) {
        self.shared.handle_pointer_move(event);
    }

    /// Switch pointer channel, re-subscribing when active
    pub fn set_tracking_mode(&mut self, mode: TrackingMode) {
        if mode == self.mode {
            return;
        }
        let was_active = self.is_active();
        self.deactivate();
        self.mode = mode;
        if was_active {
            self.activate();
        }
    }

    /// Re-snapshot the surface geometry after a resize.
    /// Never called automatically.
    pub fn remeasure(&self) {
        let geometry = EdgeGeometry::measure(&*self.shared.surface);
        tracing::debug!(?geometry, "auto-scroll geometry remeasured");
        self.shared.geometry.set(geometry);
    }

    pub fn state(&self) -> ControllerState {
        self.shared.state()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether a scroll loop is scheduled to move the surface
    pub fn is_scrolling(&self) -> bool {
        self.shared
            .engaged
            .borrow()
            .as_ref()
            .and_then(|e| e.scroll.as_ref())
            .is_some_and(ScrollLoop::is_running)
    }

    pub fn tracking_mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn geometry(&self) -> EdgeGeometry {
        self.shared.geometry.get()
    }

    pub fn edge(&self) -> &EdgeThresholds {
        &self.shared.edge
    }

    pub fn step(&self) -> f64 {
        self.shared.step
    }
}

impl Drop for AutoScroll {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl fmt::Debug for AutoScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoScroll")
            .field("state", &self.state())
            .field("mode", &self.mode)
            .field("step", &self.shared.step)
            .field("geometry", &self.shared.geometry.get())
            .finish()
    }
}
