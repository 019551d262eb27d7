use test_utils::markdown_fixture;

use super::wrap_text;
use super::Bubble;
use super::BubbleAlignment;
use super::DISCLAIMER;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::FileInfo;
use crate::domain::models::Message;

fn create_lines(message: &Message, alignment: BubbleAlignment, width: usize) -> Vec<String> {
    Config::set(ConfigKey::Username, "testuser");

    return Bubble::new(message, alignment, width)
        .as_lines()
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect();
}

fn content_texts(message: &Message) -> Vec<String> {
    Config::set(ConfigKey::Username, "testuser");

    return Bubble::new(message, BubbleAlignment::Left, 100)
        .content_lines()
        .into_iter()
        .map(|(text, _)| return text)
        .collect();
}

#[test]
fn it_creates_user_text() {
    let message = Message::user("Hi there!");
    let lines = create_lines(&message, BubbleAlignment::Right, 50);
    let padding = " ".repeat(36);

    assert_eq!(
        lines,
        vec![
            format!("{padding}╭testuser───╮"),
            format!("{padding}│ Hi there! │"),
            format!("{padding}╰───────────╯"),
        ]
    );
}

#[test]
fn it_keeps_every_line_the_same_width() {
    let message = Message::ai(markdown_fixture(), vec!["Civil Code, Article 611".to_string()]);
    let lines = create_lines(&message, BubbleAlignment::Left, 60);

    assert!(lines.len() > 10);
    for line in lines {
        assert_eq!(line.chars().count(), 59, "{line}");
    }
}

#[test]
fn it_renders_assistant_blocks() {
    let message = Message::ai(
        "Terms:\n- Rent\n- Deposit\n\n1. Sign\n2. Pay\n```\nArt. 611\n```",
        vec!["Civil Code, Article 611".to_string()],
    )
    .with_token_count(Some(42));

    assert_eq!(
        content_texts(&message),
        vec![
            "Terms:".to_string(),
            "".to_string(),
            "• Rent".to_string(),
            "• Deposit".to_string(),
            "".to_string(),
            "1. Sign".to_string(),
            "2. Pay".to_string(),
            "".to_string(),
            "Art. 611".to_string(),
            "".to_string(),
            "Citations:".to_string(),
            "- Civil Code, Article 611".to_string(),
            "".to_string(),
            format!("{DISCLAIMER} (42 tokens)"),
        ]
    );
}

#[test]
fn it_renders_user_text_verbatim() {
    let message = Message::user("- not a list\n**bold**")
        .with_file_info(Some(FileInfo::new("lease.pdf", 2048)));

    assert_eq!(
        content_texts(&message),
        vec![
            "- not a list".to_string(),
            "**bold**".to_string(),
            "".to_string(),
            "File attached: lease.pdf (2.00 KB)".to_string(),
        ]
    );
}

#[test]
fn it_renders_error_messages_without_citations() {
    let message = Message::error("Sorry, an error occurred.");

    assert_eq!(
        content_texts(&message),
        vec![
            "Sorry, an error occurred.".to_string(),
            "".to_string(),
            DISCLAIMER.to_string(),
        ]
    );
}

#[test]
fn it_wraps_long_lines_on_words() {
    assert_eq!(
        wrap_text("The tenant must notify the landlord", 12),
        vec!["The tenant", "must notify", "the landlord"]
    );
}

#[test]
fn it_splits_words_longer_than_a_line() {
    assert_eq!(wrap_text("Հայաստանիհանրապետություն", 10).len(), 3);
    assert_eq!(wrap_text("abcdefghij", 10), vec!["abcdefghij"]);
}
