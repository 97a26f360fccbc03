mod scroll_view;
mod status_bar;

pub use scroll_view::{zone_rect, ScrollViewWidget};
pub use status_bar::StatusBarWidget;
