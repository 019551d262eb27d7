#[cfg(test)]
#[path = "line_formatter_test.rs"]
mod tests;

use crate::domain::models::Block;
use crate::domain::models::LineKind;
use crate::domain::models::ListKind;

fn strip_unordered_marker(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let mut chars = rest.chars();
    let marker = chars.next()?;
    if marker != '*' && marker != '-' {
        return None;
    }

    let after_marker = chars.as_str();
    let text = after_marker.trim_start();
    // At least one whitespace character must separate the marker and the item.
    if text.len() == after_marker.len() {
        return None;
    }

    return Some(text);
}

fn strip_ordered_marker(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let digits = rest.chars().take_while(|c| return c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let after_digits = rest[digits..].strip_prefix('.')?;
    let text = after_digits.trim_start();
    if text.len() == after_digits.len() {
        return None;
    }

    return Some(text);
}

/// Classifies a single line. Code block state is tracked by `format`, so a
/// line inside a fence is never passed here.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.starts_with("```") {
        return LineKind::CodeFence;
    }

    if let Some(text) = strip_unordered_marker(line) {
        return LineKind::ListItem {
            kind: ListKind::Unordered,
            text: text.to_string(),
        };
    }

    if let Some(text) = strip_ordered_marker(line) {
        return LineKind::ListItem {
            kind: ListKind::Ordered,
            text: text.to_string(),
        };
    }

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    return LineKind::Text;
}

#[derive(Default)]
struct Formatter {
    blocks: Vec<Block>,
    list: Option<(ListKind, Vec<String>)>,
    code: Option<Vec<String>>,
}

impl Formatter {
    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            self.blocks.push(Block::list(kind, items));
        }
    }

    fn flush_code(&mut self) {
        if let Some(lines) = self.code.take() {
            self.blocks.push(Block::CodeBlock(lines));
        }
    }

    fn push_item(&mut self, kind: ListKind, text: String) {
        if let Some((open_kind, items)) = self.list.as_mut() {
            if *open_kind == kind {
                items.push(text);
                return;
            }
        }

        self.flush_list();
        self.list = Some((kind, vec![text]));
    }

    fn line(&mut self, line: &str) {
        if let Some(code) = self.code.as_mut() {
            if line.trim().starts_with("```") {
                self.flush_code();
            } else {
                code.push(line.to_string());
            }
            return;
        }

        match classify(line) {
            LineKind::CodeFence => {
                self.flush_list();
                self.code = Some(vec![]);
            }
            LineKind::ListItem { kind, text } => {
                self.push_item(kind, text);
            }
            LineKind::Blank => {
                self.flush_list();
            }
            LineKind::Text => {
                self.flush_list();
                self.blocks.push(Block::Paragraph(line.to_string()));
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        // An unterminated fence keeps what it collected, a bare opening fence
        // at the end of input emits nothing.
        if self.code.as_ref().is_some_and(|lines| return !lines.is_empty()) {
            self.flush_code();
        }
        return self.blocks;
    }
}

/// Converts assistant text into blocks in a single pass over its lines.
pub fn format(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return vec![];
    }

    let mut formatter = Formatter::default();
    for line in text.split('\n') {
        formatter.line(line.strip_suffix('\r').unwrap_or(line));
    }

    return formatter.finish();
}
