use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse(" ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_question() {
    assert!(SlashCommand::parse("What is article 611 about?").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_quit() {
    assert!(SlashCommand::parse("/q").unwrap().is_quit());
    assert!(SlashCommand::parse("/quit").unwrap().is_quit());
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}

#[test]
fn it_is_new() {
    assert!(SlashCommand::parse("/n").unwrap().is_new());
    assert!(SlashCommand::parse("/new").unwrap().is_new());
}

#[test]
fn it_is_rename_with_title() {
    let cmd = SlashCommand::parse("/rename  Lease   questions ").unwrap();
    assert!(cmd.is_rename());
    assert_eq!(cmd.args, vec!["Lease", "questions"]);
    assert_eq!(cmd.rest(), "Lease   questions");
}

#[test]
fn it_is_pin_and_delete() {
    assert!(SlashCommand::parse("/pin").unwrap().is_pin());
    assert!(SlashCommand::parse("/p").unwrap().is_pin());
    assert!(SlashCommand::parse("/delete").unwrap().is_delete());
    assert!(SlashCommand::parse("/d").unwrap().is_delete());
}

#[test]
fn it_is_switch_with_index() {
    let cmd = SlashCommand::parse("/switch 2").unwrap();
    assert!(cmd.is_switch());
    assert_eq!(cmd.args, vec!["2"]);
}

#[test]
fn it_is_search_without_term() {
    let cmd = SlashCommand::parse("/search").unwrap();
    assert!(cmd.is_search());
    assert_eq!(cmd.rest(), "");
}

#[test]
fn it_is_attach_and_detach() {
    let cmd = SlashCommand::parse("/attach ./lease.pdf").unwrap();
    assert!(cmd.is_attach());
    assert_eq!(cmd.rest(), "./lease.pdf");
    assert!(SlashCommand::parse("/detach").unwrap().is_detach());
}

#[test]
fn it_is_auth_prompts() {
    assert!(SlashCommand::parse("/login").unwrap().is_login());
    assert!(SlashCommand::parse("/signup").unwrap().is_signup());
    assert!(SlashCommand::parse("/forgot").unwrap().is_forgot_password());
    assert!(SlashCommand::parse("/logout").unwrap().is_logout());
}

#[test]
fn it_keeps_inner_spacing_in_paths() {
    let cmd = SlashCommand::parse("/attach ./My  Lease.pdf").unwrap();
    assert_eq!(cmd.rest(), "./My  Lease.pdf");
}
