#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Merges terminal input with events coming back from the actions worker.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

pub fn map_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Resize(_, _) => {
            return Some(Event::UIResize());
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp());
            }
            MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown());
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) if keyevent.code == KeyCode::BackTab => {
            return Some(Event::KeyboardBackTab());
        }
        CrosstermEvent::Key(keyevent) => match keyevent.into() {
            Input { key: Key::Down, .. } => {
                return Some(Event::UIScrollDown());
            }
            Input { key: Key::Up, .. } => {
                return Some(Event::UIScrollUp());
            }
            Input {
                key: Key::PageDown, ..
            } => {
                return Some(Event::UIScrollPageDown());
            }
            Input {
                key: Key::PageUp, ..
            } => {
                return Some(Event::UIScrollPageUp());
            }
            Input {
                key: Key::Char('d'),
                ctrl: true,
                ..
            } => {
                return Some(Event::UIScrollPageDown());
            }
            Input {
                key: Key::Char('u'),
                ctrl: true,
                ..
            } => {
                return Some(Event::UIScrollPageUp());
            }
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                return Some(Event::KeyboardCTRLC());
            }
            Input {
                key: Key::Char('n'),
                ctrl: true,
                ..
            } => {
                return Some(Event::KeyboardCTRLN());
            }
            Input { key: Key::Tab, .. } => {
                return Some(Event::KeyboardTab());
            }
            Input {
                key: Key::Enter, ..
            } => {
                return Some(Event::KeyboardEnter());
            }
            input => {
                return Some(Event::KeyboardCharInput(input));
            }
        },
        _ => return None,
    }
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => Some(event),
                    None => bail!("actions worker stopped"),
                },
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => map_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
