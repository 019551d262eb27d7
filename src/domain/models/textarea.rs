use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

use super::estimate_tokens;
use super::FileInfo;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        return TextArea::with_text("", None);
    }

    /// Builds the input box with existing text kept in place, used when a send
    /// is refused and the typed question must survive.
    pub fn with_text(text: &str, attachment: Option<&FileInfo>) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();
        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.move_cursor(tui_textarea::CursorMove::Bottom);
        textarea.move_cursor(tui_textarea::CursorMove::End);
        TextArea::set_title(&mut textarea, attachment);

        return textarea;
    }

    /// Refreshes the border title with the estimated token count and any
    /// pending attachment.
    pub fn set_title(textarea: &mut tui_textarea::TextArea<'a>, attachment: Option<&FileInfo>) {
        let mut title = "Ask a legal question".to_string();
        let text = textarea.lines().join("\n");
        if !text.is_empty() {
            title = format!("{title} (Est. tokens: ~{})", estimate_tokens(&text));
        }
        if let Some(file_info) = attachment {
            title = format!("{title} [{}]", file_info.name);
        }

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }
}
