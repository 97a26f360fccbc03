use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use edgescroll_core::{ControllerState, Direction, EdgeGeometry};

use crate::app::App;

pub struct ScrollViewWidget;

impl ScrollViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let border_color = if app.controller.is_active() {
            theme.accent
        } else {
            theme.grey1
        };

        let title = format!(" edgescroll · {} ", app.controller.tracking_mode());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);

        let (top, left) = app.surface.cell_offset();
        let lines: Vec<Line> = app.document.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(theme.fg0).bg(theme.bg0))
            .scroll((top, left));
        frame.render_widget(paragraph, area);

        if !app.show_zones {
            return;
        }

        let state = app.controller.state();
        let geometry = app.controller.geometry();
        for direction in Direction::DETECTION_ORDER {
            let Some(threshold) = app.controller.edge().active(direction) else {
                continue;
            };
            let color = if state == ControllerState::Scrolling(direction) {
                theme.zone_active
            } else {
                theme.zone
            };
            let rect = zone_rect(area, geometry, direction, threshold);
            frame.buffer_mut().set_style(rect, Style::default().bg(color));
        }
    }
}

/// Screen cells covered by the zone of `direction`, clipped to the panel interior
pub fn zone_rect(area: Rect, geometry: EdgeGeometry, direction: Direction, threshold: f64) -> Rect {
    let EdgeGeometry { top, left, bottom, right } = geometry;
    // inclusive bounds in panel-local coordinates
    let (x0, y0, x1, y1) = match direction {
        Direction::Top => (left, top, right, top + threshold),
        Direction::Bottom => (left, bottom - threshold, right, bottom),
        Direction::Left => (left, top, left + threshold, bottom),
        Direction::Right => (right - threshold, top, right, bottom),
    };

    let (x0, y0) = (x0.ceil(), y0.ceil());
    let width = (x1.floor() - x0 + 1.0).max(0.0);
    let height = (y1.floor() - y0 + 1.0).max(0.0);
    let rect = Rect::new(
        (area.x as f64 + x0.max(0.0)) as u16,
        (area.y as f64 + y0.max(0.0)) as u16,
        width as u16,
        height as u16,
    );
    rect.intersection(area.inner(Margin::new(1, 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> EdgeGeometry {
        EdgeGeometry { top: 1.0, left: 1.0, bottom: 22.0, right: 78.0 }
    }

    #[test]
    fn test_top_zone() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = zone_rect(area, geometry(), Direction::Top, 2.0);
        assert_eq!(rect, Rect::new(1, 1, 78, 3));
    }

    #[test]
    fn test_bottom_zone_offset_area() {
        let area = Rect::new(0, 5, 80, 24);
        let rect = zone_rect(area, geometry(), Direction::Bottom, 2.0);
        assert_eq!(rect, Rect::new(1, 25, 78, 3));
    }

    #[test]
    fn test_right_zone() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = zone_rect(area, geometry(), Direction::Right, 4.0);
        assert_eq!(rect, Rect::new(74, 1, 5, 22));
    }
}
