use anyhow::Result;
use test_utils::chat_response_fixture;

use super::ChatRequest;
use super::ChatResponse;
use super::PendingSend;
use crate::domain::models::ChatError;

#[test]
fn it_serializes_request_in_camel_case() -> Result<()> {
    let req = PendingSend {
        session_id: "chat_1".to_string(),
        text: "Hello".to_string(),
        is_first_user_message: true,
    }
    .to_request();

    insta::assert_snapshot!(serde_json::to_string(&req)?, @r###"{"message":"Hello","isFirstUserMessage":true,"chatId":"chat_1"}"###);

    return Ok(());
}

#[test]
fn it_validates_fixture_response() -> Result<()> {
    let res: ChatResponse = serde_json::from_str(chat_response_fixture())?;
    let reply = res.validate()?;

    assert_eq!(
        reply.text,
        "A lease must be concluded in writing.\n\n- Parties\n- Rent"
    );
    assert_eq!(
        reply.citations,
        vec![
            "Armenian Civil Code, Article 123".to_string(),
            "Law on Legal Acts, Section 4".to_string()
        ]
    );
    assert_eq!(reply.new_title, Some("Lease Q&A".to_string()));
    assert_eq!(reply.token_count, None);

    return Ok(());
}

#[test]
fn it_fails_on_error_field() -> Result<()> {
    let res: ChatResponse =
        serde_json::from_str(r#"{"responseText": "ignored", "error": "model overloaded"}"#)?;

    assert_eq!(
        res.validate(),
        Err(ChatError::Logic("model overloaded".to_string()))
    );

    return Ok(());
}

#[test]
fn it_ignores_blank_error_field() -> Result<()> {
    let res: ChatResponse = serde_json::from_str(r#"{"responseText": "ok", "error": ""}"#)?;
    assert_eq!(res.validate()?.text, "ok");

    return Ok(());
}

#[test]
fn it_fails_on_whitespace_error_field() -> Result<()> {
    let res: ChatResponse = serde_json::from_str(r#"{"responseText": "ok", "error": "  "}"#)?;
    assert!(matches!(res.validate(), Err(ChatError::Logic(error)) if error == "  "));

    return Ok(());
}

#[test]
fn it_fails_on_missing_response_text() -> Result<()> {
    let res: ChatResponse = serde_json::from_str(r#"{"citations": []}"#)?;
    assert!(matches!(
        res.validate(),
        Err(ChatError::MalformedResponse(_))
    ));

    return Ok(());
}

#[test]
fn it_defaults_citations_and_drops_blank_titles() -> Result<()> {
    let res: ChatResponse =
        serde_json::from_str(r#"{"responseText": "ok", "newTitle": "   ", "tokenCount": 12}"#)?;
    let reply = res.validate()?;

    assert!(reply.citations.is_empty());
    assert_eq!(reply.new_title, None);
    assert_eq!(reply.token_count, Some(12));

    return Ok(());
}

#[test]
fn it_accepts_null_title() -> Result<()> {
    let res: ChatResponse =
        serde_json::from_str(r#"{"responseText": "ok", "citations": [], "newTitle": null}"#)?;
    assert_eq!(res.validate()?.new_title, None);

    let req: ChatRequest = serde_json::from_str(
        r#"{"message": "hi", "isFirstUserMessage": false, "chatId": "chat_2"}"#,
    )?;
    assert_eq!(req.chat_id, "chat_2");
    assert!(!req.is_first_user_message);

    return Ok(());
}
