use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleActive,    // 'a' / Space: activate or deactivate auto-scroll
    ToggleMode,      // 'm': switch between mousemove and drag tracking
    Remeasure,       // 'r': re-snapshot edge geometry after a resize
    ToggleZones,     // 'z': show/hide zone shading
    JumpToTop,
    JumpToBottom,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleActive,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleActive,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMode,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Remeasure,
        (KeyCode::Char('z'), KeyModifiers::NONE) => Action::ToggleZones,

        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) => Action::JumpToBottom,
        (KeyCode::End, _) => Action::JumpToBottom,

        _ => Action::None,
    }
}
