use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    BackToTop,      // eased scroll to top, like the floating button
    OpenLightbox,   // Enter: open the gallery lightbox
    CloseOverlay,   // Esc: close the lightbox
    NextImage,      // n: next gallery image (lightbox)
    PrevImage,      // p: previous gallery image (lightbox)
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // The lightbox is a scroll-prevent region: it captures navigation keys
    if app.lightbox.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseOverlay,
            KeyCode::Char('n') | KeyCode::Char('j') | KeyCode::Right => Action::NextImage,
            KeyCode::Char('p') | KeyCode::Char('k') | KeyCode::Left => Action::PrevImage,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
            Action::ScrollPageDown
        }
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::ScrollPageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::BackToTop,
        (KeyCode::Enter, _) => Action::OpenLightbox,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use glidepage_core::AppConfig;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(AppConfig::default(), crate::theme::Theme::default(), None).unwrap()
    }

    #[test]
    fn test_scroll_bindings() {
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('d'), KeyModifiers::CONTROL), &app),
            Action::ScrollHalfPageDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t'), KeyModifiers::NONE), &app),
            Action::BackToTop
        );
    }

    #[test]
    fn test_lightbox_captures_navigation() {
        let mut app = app();
        app.lightbox = Some(0);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app),
            Action::NextImage
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE), &app),
            Action::CloseOverlay
        );
    }
}
