//! Key bindings for navigation mode and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action bound to a key while navigating the analyzed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Quit,
    ToggleHelp,
    CycleView,
    Left,
    Right,
    First,
    Last,
    PageUp,
    PageDown,
    Copy,
    Paste,
    Export,
    Search,
    FocusInput,
}

/// Map a key event to its navigation action, if any.
pub fn nav_action(event: KeyEvent) -> Option<NavAction> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(NavAction::Quit),
            KeyCode::Char('u') => Some(NavAction::PageUp),
            KeyCode::Char('d') => Some(NavAction::PageDown),
            KeyCode::Char('v') => Some(NavAction::Paste),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(NavAction::Quit),
        KeyCode::F(1) => Some(NavAction::ToggleHelp),
        KeyCode::Tab => Some(NavAction::CycleView),
        KeyCode::Left | KeyCode::Char('h') => Some(NavAction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(NavAction::Right),
        KeyCode::Home | KeyCode::Char('g') => Some(NavAction::First),
        KeyCode::End | KeyCode::Char('G') => Some(NavAction::Last),
        KeyCode::PageUp => Some(NavAction::PageUp),
        KeyCode::PageDown => Some(NavAction::PageDown),
        KeyCode::Char('c') => Some(NavAction::Copy),
        KeyCode::Char('e') => Some(NavAction::Export),
        KeyCode::Char('/') => Some(NavAction::Search),
        KeyCode::Enter | KeyCode::Esc => Some(NavAction::FocusInput),
        _ => None,
    }
}

pub fn is_ctrl_c(event: &KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c')
}

pub fn is_ctrl_v(event: &KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('v')
}

/// Key/description pairs shown in the help overlay, one group per line.
pub const HELP_GROUPS: &[&[(&str, &str)]] = &[
    &[("←/h", "left"), ("→/l", "right"), ("home/g", "first"), ("end/G", "last")],
    &[("pgup/ctrl+u", "page up"), ("pgdn/ctrl+d", "page down")],
    &[("tab", "switch view"), ("enter", "confirm"), ("esc", "cancel"), ("↑/↓", "history")],
    &[("c", "copy"), ("ctrl+v", "paste"), ("e", "export"), ("/", "search")],
    &[("F1", "help"), ("q/ctrl+c", "quit")],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vim_and_arrow_keys_agree() {
        assert_eq!(nav_action(key(KeyCode::Left)), Some(NavAction::Left));
        assert_eq!(nav_action(key(KeyCode::Char('h'))), Some(NavAction::Left));
        assert_eq!(nav_action(key(KeyCode::Right)), Some(NavAction::Right));
        assert_eq!(nav_action(key(KeyCode::Char('l'))), Some(NavAction::Right));
        assert_eq!(nav_action(key(KeyCode::Char('g'))), Some(NavAction::First));
        assert_eq!(nav_action(key(KeyCode::Char('G'))), Some(NavAction::Last));
    }

    #[test]
    fn test_control_bindings() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(nav_action(ctrl('c')), Some(NavAction::Quit));
        assert_eq!(nav_action(ctrl('u')), Some(NavAction::PageUp));
        assert_eq!(nav_action(ctrl('d')), Some(NavAction::PageDown));
        assert_eq!(nav_action(ctrl('v')), Some(NavAction::Paste));
        assert_eq!(nav_action(ctrl('x')), None);
        assert!(is_ctrl_c(&ctrl('c')));
        assert!(!is_ctrl_c(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(nav_action(key(KeyCode::Char('z'))), None);
    }
}
