use crate::direction::Direction;
use crate::surface::ScrollableSurface;

/// Whether `surface` can scroll further towards `direction`
///
/// Boundaries are exact: an offset at precisely zero (or precisely at
/// `content - viewport`) is the end, anything else still counts as
/// scrollable. Overshoot is the scroll loop's problem, not this check's.
pub fn scrollable<S>(surface: &S, direction: Direction) -> bool
where
    S: ScrollableSurface + ?Sized,
{
    let m = surface.metrics();

    if direction.is_horizontal() {
        if m.scroll_width == m.client_width {
            return false;
        }
        match direction {
            Direction::Left => m.scroll_left != 0.0,
            _ => m.scroll_left + m.client_width != m.scroll_width,
        }
    } else {
        if m.scroll_height == m.client_height {
            return false;
        }
        match direction {
            Direction::Top => m.scroll_top != 0.0,
            _ => m.scroll_top + m.client_height != m.scroll_height,
        }
    }
}
