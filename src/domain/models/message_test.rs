use super::estimate_tokens;
use super::FileInfo;
use super::Message;
use crate::domain::models::Sender;

#[test]
fn it_executes_user() {
    let msg = Message::user("Can my landlord raise the rent?");
    assert_eq!(msg.sender(), Sender::User);
    assert_eq!(msg.text(), "Can my landlord raise the rent?");
    assert!(msg.citations().is_empty());
    assert!(msg.file_info().is_none());
    assert!(!msg.is_error());
    assert_eq!(msg.token_count(), None);
}

#[test]
fn it_executes_ai() {
    let msg = Message::ai(
        "Only as the contract allows.",
        vec!["Armenian Civil Code, Article 123".to_string()],
    );
    assert_eq!(msg.sender(), Sender::Ai);
    assert_eq!(msg.citations(), ["Armenian Civil Code, Article 123"]);
    assert!(!msg.is_error());
}

#[test]
fn it_executes_error() {
    let msg = Message::error("Sorry, an error occurred.");
    assert_eq!(msg.sender(), Sender::Ai);
    assert!(msg.is_error());
    assert!(msg.citations().is_empty());
}

#[test]
fn it_attaches_file_info_and_token_count() {
    let msg = Message::user("See attached.")
        .with_file_info(Some(FileInfo::new("lease.pdf", 2048)))
        .with_token_count(Some(42));

    assert_eq!(msg.file_info(), Some(&FileInfo::new("lease.pdf", 2048)));
    assert_eq!(msg.token_count(), Some(42));
}

#[test]
fn it_describes_file_info() {
    insta::assert_snapshot!(FileInfo::new("lease.pdf", 1536).describe(), @"File attached: lease.pdf (1.50 KB)");
    insta::assert_snapshot!(FileInfo::new("empty.txt", 0).describe(), @"File attached: empty.txt (0.00 KB)");
}

#[test]
fn it_estimates_tokens() {
    assert_eq!(estimate_tokens(""), 0);
    assert_eq!(estimate_tokens("abc"), 1);
    assert_eq!(estimate_tokens("abcd"), 1);
    assert_eq!(estimate_tokens("abcde"), 2);
    assert_eq!(estimate_tokens("Բարեւ"), 2);
}
