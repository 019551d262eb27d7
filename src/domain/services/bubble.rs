#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::line_formatter;
use crate::domain::models::Block;
use crate::domain::models::Message;
use crate::domain::models::Sender;

pub const DISCLAIMER: &str =
    "The answer is provided by AI. Please be informed that AI may make mistakes.";

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    /// Left border, left padding, right padding, right border.
    pub border_elements_length: usize,
    /// Column kept free for the scrollbar.
    pub scrollbar_length: usize,
    pub outer_padding_percentage: f32,
}

fn width(text: &str) -> usize {
    return text.chars().count();
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let mut iter = subtractions.into_iter();
    let first = iter.next().unwrap_or(0);
    let count = iter.fold(first, |acc, e| return acc.saturating_sub(e));

    return text.repeat(count);
}

/// Word wraps a line to `max_width` characters. Words longer than a full line
/// are split.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if width(text) <= max_width || max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = vec![];
    let mut current = String::new();
    for word in text.split(' ') {
        let mut word = word.to_string();
        while width(&word) > max_width {
            if !current.is_empty() {
                lines.push(current);
                current = String::new();
            }
            let head = word.chars().take(max_width).collect::<String>();
            word = word.chars().skip(max_width).collect::<String>();
            lines.push(head);
        }

        if current.is_empty() {
            current = word;
        } else if width(&current) + 1 + width(&word) <= max_width {
            current = format!("{current} {word}");
        } else {
            lines.push(current);
            current = word;
        }
    }
    lines.push(current);

    return lines;
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            border_elements_length: 4,
            scrollbar_length: 1,
            outer_padding_percentage: 0.04,
        };
    }

    /// Message content as unwrapped lines. Assistant text goes through the
    /// line formatter, user text is shown as typed.
    pub fn content_lines(&self) -> Vec<(String, Style)> {
        let mut style = Style::default();
        if self.message.is_error() {
            style = style.fg(Color::Red);
        }

        let mut lines: Vec<(String, Style)> = vec![];
        if self.message.sender() == Sender::User {
            for line in self.message.text().split('\n') {
                lines.push((line.replace('\t', "  "), style));
            }
        } else {
            for (idx, block) in line_formatter::format(self.message.text())
                .into_iter()
                .enumerate()
            {
                if idx > 0 {
                    lines.push(("".to_string(), style));
                }
                match block {
                    Block::Paragraph(text) => {
                        lines.push((text.replace('\t', "  "), style));
                    }
                    Block::UnorderedList(items) => {
                        for item in items {
                            lines.push((format!("• {item}"), style));
                        }
                    }
                    Block::OrderedList(items) => {
                        for (n, item) in items.into_iter().enumerate() {
                            lines.push((format!("{}. {item}", n + 1), style));
                        }
                    }
                    Block::CodeBlock(code) => {
                        for line in code {
                            lines.push((line.replace('\t', "  "), style.fg(Color::Cyan)));
                        }
                    }
                }
            }
        }

        if let Some(file_info) = self.message.file_info() {
            lines.push(("".to_string(), style));
            lines.push((file_info.describe(), style.add_modifier(Modifier::DIM)));
        }

        if self.message.sender() == Sender::Ai {
            let footer = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
            if !self.message.citations().is_empty() {
                lines.push(("".to_string(), style));
                lines.push(("Citations:".to_string(), style.add_modifier(Modifier::BOLD)));
                for citation in self.message.citations() {
                    lines.push((format!("- {citation}"), style.fg(Color::Blue)));
                }
            }

            lines.push(("".to_string(), style));
            let mut disclaimer = DISCLAIMER.to_string();
            if let Some(token_count) = self.message.token_count() {
                disclaimer = format!("{disclaimer} ({token_count} tokens)");
            }
            lines.push((disclaimer, footer));
        }

        return lines;
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();
        let mut lines: Vec<Line<'static>> = vec![];

        for (text, style) in self.content_lines() {
            for wrapped in wrap_text(&text, max_line_length) {
                lines.push(self.spans_to_line(Span::styled(wrapped, style), max_line_length));
            }
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn spans_to_line(&self, span: Span<'static>, max_line_length: usize) -> Line<'static> {
        let fill = repeat_from_subtractions(" ", vec![max_line_length, width(&span.content)]);
        let outer_bubble_padding = self.outer_padding(max_line_length);

        let mut wrapped_spans = vec![self.highlight_span("│ ".to_string())];
        wrapped_spans.push(span);
        wrapped_spans.push(self.highlight_span(format!("{fill} │")));

        if self.alignment == BubbleAlignment::Left {
            wrapped_spans.push(Span::from(outer_bubble_padding));
            return Line::from(wrapped_spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(wrapped_spans);

        return Line::from(line_spans);
    }

    fn outer_padding(&self, max_line_length: usize) -> String {
        let style_config = Bubble::style_config();
        return repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                style_config.border_elements_length,
                style_config.scrollbar_length,
            ],
        );
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        let line_border_width = style_config.border_elements_length
            + style_config.scrollbar_length
            + min_bubble_padding_length;
        let available = self.window_max_width.saturating_sub(line_border_width);

        let mut max_line_length = self
            .content_lines()
            .iter()
            .map(|(text, _)| return width(text))
            .max()
            .unwrap_or(0);

        if max_line_length > available {
            max_line_length = available;
        }

        let sender = self.message.sender().to_string();
        if max_line_length < width(&sender) {
            max_line_length = width(&sender);
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        let sender = self.message.sender().to_string();
        // Add 2 for the padding next to the vertical bars.
        let top_bar = format!(
            "╭{sender}{}╮",
            repeat_from_subtractions("─", vec![max_line_length + 2, width(&sender)])
        );
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        let bar_bubble_padding = self.outer_padding(max_line_length);

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.message.is_error() {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        } else if self.message.sender() == Sender::User {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Blue),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
