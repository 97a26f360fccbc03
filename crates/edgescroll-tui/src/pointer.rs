//! Crossterm mouse events as a pointer event source
//!
//! Plain movement feeds the `mousemove` channel, movement with a button
//! held feeds `drag`. Screen cells are translated into coordinates local
//! to the scroll panel.

use std::cell::Cell;

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use edgescroll_core::{
    ListenerId, PointerChannels, PointerEvent, PointerEventSource, PointerListener, TrackingMode,
};

#[derive(Debug, Default)]
pub struct TerminalPointer {
    channels: PointerChannels,
    origin: Cell<(u16, u16)>,
    last: Cell<Option<PointerEvent>>,
}

impl TerminalPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make coordinates relative to the top-left cell of `area`
    pub fn set_origin(&self, area: Rect) {
        self.origin.set((area.x, area.y));
    }

    /// Translate a screen cell to panel-local coordinates
    pub fn to_local(&self, column: u16, row: u16) -> PointerEvent {
        let (x, y) = self.origin.get();
        PointerEvent::new(column as f64 - x as f64, row as f64 - y as f64)
    }

    /// Channel a mouse event belongs to, if any
    pub fn channel(kind: MouseEventKind) -> Option<TrackingMode> {
        match kind {
            MouseEventKind::Moved => Some(TrackingMode::MouseMove),
            MouseEventKind::Drag(_) => Some(TrackingMode::Drag),
            _ => None,
        }
    }

    /// Dispatch a terminal mouse event; returns the number of listeners reached
    pub fn handle_mouse(&self, event: MouseEvent) -> usize {
        let Some(mode) = Self::channel(event.kind) else {
            return 0;
        };
        let local = self.to_local(event.column, event.row);
        self.last.set(Some(local));
        tracing::trace!(%mode, x = local.x, y = local.y, "pointer");
        self.channels.dispatch(mode, local)
    }

    /// Last position dispatched on any channel
    pub fn last_position(&self) -> Option<PointerEvent> {
        self.last.get()
    }
}

impl PointerEventSource for TerminalPointer {
    fn add_listener(&self, mode: TrackingMode, listener: PointerListener) -> ListenerId {
        self.channels.add_listener(mode, listener)
    }

    fn remove_listener(&self, mode: TrackingMode, id: ListenerId) {
        self.channels.remove_listener(mode, id)
    }
}
