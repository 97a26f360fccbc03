//! Scrollable container abstraction
//!
//! A surface is a handle owned by the host: the auto-scroll machinery reads
//! its extents and writes its offsets, nothing else. Methods take `&self`
//! because hosts hand out shared handles (a DOM element, a terminal panel)
//! that are mutated through interior mutability.

use std::cell::Cell;

/// Scroll extents of a surface, both axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_left: f64,
    /// Visible viewport height
    pub client_height: f64,
    /// Visible viewport width
    pub client_width: f64,
    /// Total content height
    pub scroll_height: f64,
    /// Total content width
    pub scroll_width: f64,
}

impl ScrollMetrics {
    /// Largest meaningful vertical offset
    #[inline]
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Largest meaningful horizontal offset
    #[inline]
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

pub trait ScrollableSurface {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&self, value: f64);
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&self, value: f64);

    fn client_height(&self) -> f64;
    fn client_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn scroll_width(&self) -> f64;

    /// Width of the top border, where the client area begins
    fn client_top(&self) -> f64 {
        0.0
    }

    /// Width of the left border, where the client area begins
    fn client_left(&self) -> f64 {
        0.0
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top(),
            scroll_left: self.scroll_left(),
            client_height: self.client_height(),
            client_width: self.client_width(),
            scroll_height: self.scroll_height(),
            scroll_width: self.scroll_width(),
        }
    }
}

/// In-memory surface that clamps offsets the way a browser element does
///
/// Used by the headless simulator and by tests; counts offset writes so
/// callers can assert that nothing touched it.
#[derive(Debug, Default)]
pub struct MemorySurface {
    scroll_top: Cell<f64>,
    scroll_left: Cell<f64>,
    client_height: Cell<f64>,
    client_width: Cell<f64>,
    scroll_height: Cell<f64>,
    scroll_width: Cell<f64>,
    client_top: Cell<f64>,
    client_left: Cell<f64>,
    writes: Cell<usize>,
}

impl MemorySurface {
    /// Create a surface with the given viewport and content sizes
    pub fn new(client_width: f64, client_height: f64, scroll_width: f64, scroll_height: f64) -> Self {
        Self {
            client_width: Cell::new(client_width),
            client_height: Cell::new(client_height),
            scroll_width: Cell::new(scroll_width.max(client_width)),
            scroll_height: Cell::new(scroll_height.max(client_height)),
            ..Default::default()
        }
    }

    /// Set the initial offsets without counting them as writes
    pub fn with_offset(self, scroll_left: f64, scroll_top: f64) -> Self {
        self.scroll_left.set(scroll_left);
        self.scroll_top.set(scroll_top);
        self
    }

    /// Set the border insets reported as `client_top` / `client_left`
    pub fn with_border(self, client_left: f64, client_top: f64) -> Self {
        self.client_left.set(client_left);
        self.client_top.set(client_top);
        self
    }

    /// Change the viewport size, re-clamping the current offsets
    pub fn resize(&self, client_width: f64, client_height: f64) {
        self.client_width.set(client_width);
        self.client_height.set(client_height);
        self.scroll_width.set(self.scroll_width.get().max(client_width));
        self.scroll_height.set(self.scroll_height.get().max(client_height));
        let metrics = self.metrics();
        self.scroll_top.set(metrics.scroll_top.clamp(0.0, metrics.max_scroll_top()));
        self.scroll_left.set(metrics.scroll_left.clamp(0.0, metrics.max_scroll_left()));
    }

    /// Number of offset writes made through the `ScrollableSurface` trait
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ScrollableSurface for MemorySurface {
    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn set_scroll_top(&self, value: f64) {
        self.writes.set(self.writes.get() + 1);
        let max = self.metrics().max_scroll_top();
        self.scroll_top.set(value.clamp(0.0, max));
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left.get()
    }

    fn set_scroll_left(&self, value: f64) {
        self.writes.set(self.writes.get() + 1);
        let max = self.metrics().max_scroll_left();
        self.scroll_left.set(value.clamp(0.0, max));
    }

    fn client_height(&self) -> f64 {
        self.client_height.get()
    }

    fn client_width(&self) -> f64 {
        self.client_width.get()
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height.get()
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width.get()
    }

    fn client_top(&self) -> f64 {
        self.client_top.get()
    }

    fn client_left(&self) -> f64 {
        self.client_left.get()
    }
}
