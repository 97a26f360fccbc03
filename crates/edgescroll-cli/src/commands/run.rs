use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use edgescroll_core::AppConfig;
use edgescroll_tui::{
    app::{split_layout, App},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{ScrollViewWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("edgescroll"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: Arc<AppConfig>) -> Result<()> {
    let size = terminal.size()?;
    let event_handler = EventHandler::new(config.ui.tick_interval());
    let frame_interval = config.ui.frame_interval();
    let mut app = App::new(config, Rect::new(0, 0, size.width, size.height))?;

    tracing::info!(
        step = app.controller.step(),
        mode = %app.controller.tracking_mode(),
        "interactive demo started"
    );

    let mut next_frame = Instant::now() + frame_interval;

    // Main loop
    loop {
        terminal.draw(|frame| {
            let (view, status) = split_layout(frame.area());
            ScrollViewWidget::render(frame, view, &app);
            StatusBarWidget::render(frame, status, &app);
        })?;

        // While a scroll loop runs, wake up in time for the next frame
        let event = if app.needs_frames() {
            event_handler.next_within(next_frame.saturating_duration_since(Instant::now()))?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        // Frames are paced by wall time so a stream of mouse events
        // cannot starve them
        let now = Instant::now();
        if app.needs_frames() {
            if now >= next_frame {
                app.run_frame();
                next_frame = now + frame_interval;
            }
        } else {
            next_frame = now + frame_interval;
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(frames = app.frames.frame_count(), "interactive demo stopped");
    Ok(())
}
