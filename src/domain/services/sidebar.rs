#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::SessionStore;
use crate::domain::models::Session;

pub struct Sidebar {}

impl Sidebar {
    fn entry<'a>(number: usize, session: &Session, active_id: &str) -> Line<'a> {
        let mut text = format!("{number}. {}", session.title());
        if session.pinned() {
            text = format!("{text} *");
        }

        if session.id() == active_id {
            return Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        return Line::from(text);
    }

    /// Account summary followed by matching sessions. Numbers are the ones
    /// `/switch` accepts: pinned first, then history.
    pub fn lines<'a>(store: &SessionStore, search_term: &str) -> Vec<Line<'a>> {
        let heading = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        let user = store.user();

        let mut lines = vec![
            Line::from(Span::styled(
                user.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(user.plan_label()),
        ];
        if user.is_free() {
            lines.push(Line::from(format!(
                "Free requests left: {}",
                store.free_requests_left()
            )));
        }
        lines.push(Line::from(""));

        let listing = store.search(search_term);
        if !search_term.trim().is_empty() {
            lines.push(Line::from(format!(
                "Search: {} ({} of {})",
                search_term.trim(),
                listing.pinned.len() + listing.history.len(),
                store.len()
            )));
            lines.push(Line::from(""));
        }

        if listing.pinned.is_empty() && listing.history.is_empty() {
            lines.push(Line::from("No chats found."));
            return lines;
        }

        let mut number = 0;
        if !listing.pinned.is_empty() {
            lines.push(Line::from(Span::styled("Pinned", heading)));
            for session in listing.pinned.iter() {
                number += 1;
                lines.push(Sidebar::entry(number, session, store.active_id()));
            }
            lines.push(Line::from(""));
        }

        if !listing.history.is_empty() {
            lines.push(Line::from(Span::styled("History", heading)));
            for session in listing.history.iter() {
                number += 1;
                lines.push(Sidebar::entry(number, session, store.active_id()));
            }
        }

        return lines;
    }

    pub fn render<B: Backend>(
        frame: &mut Frame<B>,
        rect: Rect,
        store: &SessionStore,
        search_term: &str,
    ) {
        frame.render_widget(
            Paragraph::new(Sidebar::lines(store, search_term)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("DoLegal")
                    .padding(Padding::new(1, 1, 0, 0)),
            ),
            rect,
        );
    }
}
