use ratatui::style::Modifier;

use super::Sidebar;
use crate::domain::models::Tier;
use crate::domain::models::User;
use crate::domain::services::SessionStore;

fn texts(store: &SessionStore, search_term: &str) -> Vec<String> {
    return Sidebar::lines(store, search_term)
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<Vec<String>>()
                .join("");
        })
        .collect();
}

#[test]
fn it_lists_pinned_before_history() {
    let mut store = SessionStore::new(User::guest(), 3);
    let first = store.active_id().to_string();
    store.rename_session(&first, "Lease Q&A");
    let second = store.create_session();
    store.rename_session(&second, "Inheritance");
    store.toggle_pin(&second);

    insta::assert_snapshot!(texts(&store, "").join("\n"), @r###"
    Guest User
    Free Plan
    Free requests left: 3

    Pinned
    1. Inheritance *

    History
    2. Lease Q&A
    "###);
}

#[test]
fn it_highlights_the_active_session() {
    let store = SessionStore::new(User::guest(), 3);
    let lines = Sidebar::lines(&store, "");
    let entry = lines
        .iter()
        .find(|line| return line.spans[0].content.starts_with("1. "));

    assert!(entry.is_some_and(|line| {
        return line.spans[0].style.add_modifier.contains(Modifier::REVERSED);
    }));
}

#[test]
fn it_hides_the_quota_for_paid_plans() {
    let store = SessionStore::new(
        User {
            is_logged_in: true,
            tier: Tier::Pro,
        },
        0,
    );

    let lines = texts(&store, "");
    assert_eq!(lines[0], "Registered User");
    assert_eq!(lines[1], "Pro Plan");
    assert!(!lines.iter().any(|line| return line.starts_with("Free requests")));
}

#[test]
fn it_reports_empty_searches() {
    let store = SessionStore::new(User::guest(), 3);
    let lines = texts(&store, "divorce");

    assert_eq!(lines.last(), Some(&"No chats found.".to_string()));
    assert!(lines.contains(&"Search: divorce (0 of 1)".to_string()));
}
