//! Terminal panel as a scrollable surface
//!
//! Offsets are in rows and columns. The panel is drawn with a one-cell
//! border, reported as `client_top` / `client_left`.

use std::cell::Cell;

use ratatui::layout::Rect;

use edgescroll_core::ScrollableSurface;

const BORDER: u16 = 1;

#[derive(Debug, Default)]
pub struct TerminalSurface {
    scroll_top: Cell<f64>,
    scroll_left: Cell<f64>,
    viewport: Cell<(u16, u16)>,
    content: Cell<(usize, usize)>,
}

impl TerminalSurface {
    /// Surface over content of `content_width` columns and `content_lines` rows
    pub fn new(content_width: usize, content_lines: usize) -> Self {
        let surface = Self::default();
        surface.content.set((content_width, content_lines));
        surface
    }

    /// Fit the viewport to the panel drawn in `area`, borders included
    pub fn set_area(&self, area: Rect) {
        let width = area.width.saturating_sub(BORDER * 2);
        let height = area.height.saturating_sub(BORDER * 2);
        self.viewport.set((width, height));
        self.scroll_top.set(self.scroll_top.get().clamp(0.0, self.max_top()));
        self.scroll_left.set(self.scroll_left.get().clamp(0.0, self.max_left()));
    }

    /// Offsets rounded to whole cells, as `Paragraph::scroll` wants them
    pub fn cell_offset(&self) -> (u16, u16) {
        (
            self.scroll_top.get().round().min(u16::MAX as f64) as u16,
            self.scroll_left.get().round().min(u16::MAX as f64) as u16,
        )
    }

    pub fn scroll_to_top(&self) {
        self.scroll_top.set(0.0);
    }

    pub fn scroll_to_bottom(&self) {
        self.scroll_top.set(self.max_top());
    }

    fn max_top(&self) -> f64 {
        (self.scroll_height() - self.client_height()).max(0.0)
    }

    fn max_left(&self) -> f64 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }
}

impl ScrollableSurface for TerminalSurface {
    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn set_scroll_top(&self, value: f64) {
        self.scroll_top.set(value.clamp(0.0, self.max_top()));
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left.get()
    }

    fn set_scroll_left(&self, value: f64) {
        self.scroll_left.set(value.clamp(0.0, self.max_left()));
    }

    fn client_height(&self) -> f64 {
        self.viewport.get().1 as f64
    }

    fn client_width(&self) -> f64 {
        self.viewport.get().0 as f64
    }

    fn scroll_height(&self) -> f64 {
        (self.content.get().1 as f64).max(self.client_height())
    }

    fn scroll_width(&self) -> f64 {
        (self.content.get().0 as f64).max(self.client_width())
    }

    fn client_top(&self) -> f64 {
        BORDER as f64
    }

    fn client_left(&self) -> f64 {
        BORDER as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgescroll_core::{scrollable, Direction};

    #[test]
    fn test_viewport_excludes_border() {
        let surface = TerminalSurface::new(100, 50);
        surface.set_area(Rect::new(0, 0, 42, 12));
        assert_eq!(surface.client_width(), 40.0);
        assert_eq!(surface.client_height(), 10.0);
        assert_eq!(surface.client_top(), 1.0);
    }

    #[test]
    fn test_offsets_clamped_to_content() {
        let surface = TerminalSurface::new(100, 50);
        surface.set_area(Rect::new(0, 0, 42, 12));
        surface.set_scroll_top(1000.0);
        assert_eq!(surface.scroll_top(), 40.0);
        assert!(!scrollable(&surface, Direction::Bottom));

        surface.set_scroll_left(-3.0);
        assert_eq!(surface.scroll_left(), 0.0);
    }

    #[test]
    fn test_short_content_is_not_scrollable() {
        let surface = TerminalSurface::new(10, 5);
        surface.set_area(Rect::new(0, 0, 42, 12));
        for direction in Direction::DETECTION_ORDER {
            assert!(!scrollable(&surface, direction));
        }
    }

    #[test]
    fn test_shrinking_area_reclamps() {
        let surface = TerminalSurface::new(100, 50);
        surface.set_area(Rect::new(0, 0, 42, 12));
        surface.scroll_to_bottom();
        surface.set_area(Rect::new(0, 0, 42, 32));
        assert_eq!(surface.scroll_top(), 20.0);
        assert_eq!(surface.cell_offset(), (20, 0));
    }
}
