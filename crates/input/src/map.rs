//! Key mapping from terminal events to viewer actions.

use crate::types::ViewerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Orbit
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(ViewerAction::OrbitLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(ViewerAction::OrbitRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(ViewerAction::OrbitUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(ViewerAction::OrbitDown),

        // Zoom
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ViewerAction::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(ViewerAction::ZoomOut),

        // Presentation
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Tab => Some(ViewerAction::NextMode),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(ViewerAction::NextShading),

        // Animation
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ViewerAction::ResetParticles),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(ViewerAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<ViewerAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_orbit_keys() {
        assert_eq!(key(KeyCode::Left), Some(ViewerAction::OrbitLeft));
        assert_eq!(key(KeyCode::Right), Some(ViewerAction::OrbitRight));
        assert_eq!(key(KeyCode::Up), Some(ViewerAction::OrbitUp));
        assert_eq!(key(KeyCode::Down), Some(ViewerAction::OrbitDown));

        assert_eq!(key(KeyCode::Char('h')), Some(ViewerAction::OrbitLeft));
        assert_eq!(key(KeyCode::Char('L')), Some(ViewerAction::OrbitRight));
        assert_eq!(key(KeyCode::Char('k')), Some(ViewerAction::OrbitUp));
        assert_eq!(key(KeyCode::Char('J')), Some(ViewerAction::OrbitDown));
    }

    #[test]
    fn test_zoom_keys() {
        assert_eq!(key(KeyCode::Char('+')), Some(ViewerAction::ZoomIn));
        assert_eq!(key(KeyCode::Char('=')), Some(ViewerAction::ZoomIn));
        assert_eq!(key(KeyCode::Char('-')), Some(ViewerAction::ZoomOut));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char('m')), Some(ViewerAction::NextMode));
        assert_eq!(key(KeyCode::Tab), Some(ViewerAction::NextMode));
        assert_eq!(key(KeyCode::Char('S')), Some(ViewerAction::NextShading));
        assert_eq!(key(KeyCode::Char('r')), Some(ViewerAction::ResetParticles));
        assert_eq!(key(KeyCode::Char('p')), Some(ViewerAction::Pause));
        assert_eq!(key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_chords_are_not_actions() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
