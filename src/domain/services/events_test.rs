use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use super::map_crossterm;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent::new(code, modifiers));
}

#[test]
fn it_maps_session_hotkeys() {
    assert!(matches!(
        map_crossterm(key(KeyCode::Tab, KeyModifiers::NONE)),
        Some(Event::KeyboardTab())
    ));
    assert!(matches!(
        map_crossterm(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Some(Event::KeyboardBackTab())
    ));
    assert!(matches!(
        map_crossterm(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCTRLN())
    ));
}

#[test]
fn it_maps_scrolling() {
    assert!(matches!(
        map_crossterm(key(KeyCode::Up, KeyModifiers::NONE)),
        Some(Event::UIScrollUp())
    ));
    assert!(matches!(
        map_crossterm(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
        Some(Event::UIScrollPageDown())
    ));
    assert!(matches!(
        map_crossterm(CrosstermEvent::Resize(80, 24)),
        Some(Event::UIResize())
    ));
}

#[test]
fn it_passes_text_through() {
    assert!(matches!(
        map_crossterm(key(KeyCode::Enter, KeyModifiers::NONE)),
        Some(Event::KeyboardEnter())
    ));
    assert!(matches!(
        map_crossterm(key(KeyCode::Char('a'), KeyModifiers::NONE)),
        Some(Event::KeyboardCharInput(_))
    ));
    assert!(matches!(
        map_crossterm(CrosstermEvent::Paste("Article 611".to_string())),
        Some(Event::KeyboardPaste(text)) if text == "Article 611"
    ));
}
