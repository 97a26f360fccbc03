use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use edgescroll_core::ControllerState;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let state_str = match app.controller.state() {
            ControllerState::Inactive => "OFF".to_string(),
            ControllerState::Idle => "IDLE".to_string(),
            ControllerState::Scrolling(direction) if app.controller.is_scrolling() => {
                format!("SCROLL {}", direction.as_str().to_uppercase())
            }
            // in the zone, but that edge is already reached
            ControllerState::Scrolling(direction) => {
                format!("EDGE {}", direction.as_str().to_uppercase())
            }
        };

        let (top, left) = app.offsets();
        let last = app
            .last_direction
            .get()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | {} | top {:.0} left {:.0} | last {} ({})",
                state_str,
                app.controller.tracking_mode(),
                top,
                left,
                last,
                app.direction_changes.get()
            )
        };

        let state_color = if app.controller.is_scrolling() {
            theme.warning
        } else {
            theme.fg0
        };

        let help_hint = " q:quit a:toggle m:mode r:remeasure z:zones g/G:jump ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(state_color).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
