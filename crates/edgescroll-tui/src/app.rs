use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::MouseEvent;
use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};

use edgescroll_core::{
    AppConfig, AutoScroll, AutoScrollOptions, Direction, EdgeGeometry, FrameQueue,
    ScrollableSurface,
};

use crate::document::{content_width, demo_lines};
use crate::input::Action;
use crate::pointer::TerminalPointer;
use crate::surface::TerminalSurface;
use crate::theme::Theme;

/// Rows/columns per frame when the config leaves `step` unset
pub const TERMINAL_STEP: f64 = 1.0;

/// Split the screen into the scroll panel and the status bar
pub fn split_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub document: Vec<String>,
    pub surface: Rc<TerminalSurface>,
    pub pointer: Rc<TerminalPointer>,
    pub frames: Rc<FrameQueue>,
    pub controller: AutoScroll,
    /// Panel area, borders included
    pub view_area: Rect,
    pub show_zones: bool,
    /// Direction reported by the last direction-change callback
    pub last_direction: Rc<Cell<Option<Direction>>>,
    /// Number of direction-change callbacks so far
    pub direction_changes: Rc<Cell<u32>>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the demo for a screen of size `area` and activate auto-scroll
    pub fn new(config: Arc<AppConfig>, area: Rect) -> Result<Self> {
        let document = demo_lines(config.ui.content_lines, config.ui.content_width);
        let surface = Rc::new(TerminalSurface::new(content_width(&document), document.len()));
        let pointer = Rc::new(TerminalPointer::new());
        let frames = Rc::new(FrameQueue::new());

        let (view_area, _) = split_layout(area);
        surface.set_area(view_area);
        pointer.set_origin(view_area);

        let last_direction = Rc::new(Cell::new(None));
        let direction_changes = Rc::new(Cell::new(0));

        let mut options = AutoScrollOptions::from_config(surface.clone(), &config.autoscroll);
        options.step = Some(options.step.unwrap_or(TERMINAL_STEP));
        let (last, changes) = (last_direction.clone(), direction_changes.clone());
        let options = options.on_direction_change(move |direction| {
            last.set(Some(direction));
            changes.set(changes.get() + 1);
        });

        let mut controller = AutoScroll::new(options, frames.clone(), pointer.clone())?;
        controller.activate();

        Ok(Self {
            theme: Theme::default(),
            show_zones: config.ui.show_zones,
            config,
            document,
            surface,
            pointer,
            frames,
            controller,
            view_area,
            last_direction,
            direction_changes,
            status_message: None,
            should_quit: false,
        })
    }

    pub fn handle_action(&mut self, action: Action) {
        if action != Action::None {
            self.status_message = None;
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleActive => {
                if self.controller.is_active() {
                    self.controller.deactivate();
                    self.status_message = Some(" Auto-scroll off".to_string());
                } else {
                    self.controller.activate();
                    self.status_message = Some(" Auto-scroll on".to_string());
                }
            }
            Action::ToggleMode => {
                let mode = self.controller.tracking_mode().toggled();
                self.controller.set_tracking_mode(mode);
                self.status_message = Some(format!(" Tracking {mode}"));
            }
            Action::Remeasure => {
                self.controller.remeasure();
                self.status_message = Some(" Edge zones re-measured".to_string());
            }
            Action::ToggleZones => self.show_zones = !self.show_zones,
            Action::JumpToTop => self.surface.scroll_to_top(),
            Action::JumpToBottom => self.surface.scroll_to_bottom(),
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        self.pointer.handle_mouse(event);
    }

    /// Follow a terminal resize. Edge zones keep their old snapshot until
    /// the user re-measures.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (view_area, _) = split_layout(Rect::new(0, 0, width, height));
        self.view_area = view_area;
        self.surface.set_area(view_area);
        self.pointer.set_origin(view_area);

        if self.geometry_is_stale() {
            self.status_message = Some(" Resized: press r to re-measure edge zones".to_string());
        }
    }

    /// Whether the surface no longer matches the edge snapshot
    pub fn geometry_is_stale(&self) -> bool {
        EdgeGeometry::measure(&*self.surface) != self.controller.geometry()
    }

    /// Whether a scroll loop is waiting for a frame
    #[inline]
    pub fn needs_frames(&self) -> bool {
        self.frames.has_pending()
    }

    pub fn run_frame(&self) -> usize {
        self.frames.run_frame()
    }

    /// Current offsets as (top, left)
    pub fn offsets(&self) -> (f64, f64) {
        (self.surface.scroll_top(), self.surface.scroll_left())
    }
}
