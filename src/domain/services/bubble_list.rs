use std::collections::HashMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Message;
use crate::domain::models::Sender;

#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

struct BubbleCacheEntry<'a> {
    text_len: usize,
    lines: Vec<Line<'a>>,
}

/// Rendered lines of the active session, cached per message. The cache is
/// dropped when the width or the session changes.
pub struct BubbleList<'a> {
    cache: HashMap<usize, BubbleCacheEntry<'a>>,
    session_id: String,
    line_width: usize,
    lines_len: usize,
}

impl<'a> BubbleList<'a> {
    pub fn new() -> BubbleList<'a> {
        return BubbleList {
            cache: HashMap::new(),
            session_id: "".to_string(),
            line_width: 0,
            lines_len: 0,
        };
    }

    pub fn set_messages(&mut self, session_id: &str, messages: &[Message], line_width: usize) {
        if self.line_width != line_width || self.session_id != session_id {
            self.cache.clear();
            self.line_width = line_width;
            self.session_id = session_id.to_string();
        }

        self.lines_len = messages
            .iter()
            .enumerate()
            .map(|(idx, message)| {
                if let Some(cache_entry) = self.cache.get(&idx) {
                    if message.text().len() == cache_entry.text_len {
                        return cache_entry.lines.len();
                    }
                }

                let mut align = BubbleAlignment::Left;
                if message.sender() == Sender::User {
                    align = BubbleAlignment::Right;
                }

                let bubble_lines = Bubble::new(message, align, line_width).as_lines();
                let bubble_line_len = bubble_lines.len();

                self.cache.insert(
                    idx,
                    BubbleCacheEntry {
                        text_len: message.text().len(),
                        lines: bubble_lines,
                    },
                );

                return bubble_line_len;
            })
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let mut indexes: Vec<usize> = self.cache.keys().cloned().collect();
        indexes.sort();
        let lines: Vec<Line<'a>> = indexes
            .iter()
            .filter_map(|idx| return self.cache.get(idx))
            .flat_map(|entry| return entry.lines.to_owned())
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
