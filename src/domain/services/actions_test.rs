use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::help_text;
use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Backend;
use crate::domain::models::ChatError;
use crate::domain::models::ChatReply;
use crate::domain::models::ChatRequest;
use crate::domain::models::Event;

struct FakeBackend {
    healthy: bool,
}

#[async_trait]
impl Backend for FakeBackend {
    async fn health_check(&self) -> Result<()> {
        if !self.healthy {
            bail!("DoLegal API is not running");
        }

        return Ok(());
    }

    async fn send_chat(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        if request.message == "fail" {
            return Err(ChatError::Transport("500 Internal Server Error".to_string()));
        }

        let mut new_title = None;
        if request.is_first_user_message {
            new_title = Some(format!("About {}", request.message));
        }

        return Ok(ChatReply {
            text: format!("Echo: {}", request.message),
            citations: vec![],
            new_title,
            token_count: None,
        });
    }
}

fn request(message: &str, chat_id: &str) -> ChatRequest {
    return ChatRequest {
        message: message.to_string(),
        is_first_user_message: true,
        chat_id: chat_id.to_string(),
    };
}

fn start(healthy: bool) -> (mpsc::UnboundedSender<Action>, mpsc::UnboundedReceiver<Event>) {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    tokio::spawn(async move {
        return ActionsService::start(Box::new(FakeBackend { healthy }), event_tx, &mut action_rx)
            .await;
    });

    return (action_tx, event_rx);
}

#[tokio::test]
async fn it_settles_successful_requests() -> Result<()> {
    let (tx, mut rx) = start(true);
    tx.send(Action::ChatRequest(
        "chat_1".to_string(),
        request("lease", "chat_1"),
    ))?;

    match rx.recv().await {
        Some(Event::ChatSettled(session_id, Ok(reply))) => {
            assert_eq!(session_id, "chat_1");
            assert_eq!(reply.text, "Echo: lease");
            assert_eq!(reply.new_title, Some("About lease".to_string()));
        }
        _ => bail!("Wrong event"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_settles_failed_requests() -> Result<()> {
    let (tx, mut rx) = start(true);
    tx.send(Action::ChatRequest("chat_2".to_string(), request("fail", "chat_2")))?;

    match rx.recv().await {
        Some(Event::ChatSettled(session_id, Err(err))) => {
            assert_eq!(session_id, "chat_2");
            assert!(matches!(err, ChatError::Transport(_)));
        }
        _ => bail!("Wrong event"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_reports_unhealthy_backends() -> Result<()> {
    let (tx, mut rx) = start(false);
    tx.send(Action::BackendHealthCheck())?;

    match rx.recv().await {
        Some(Event::BackendUnavailable(msg)) => {
            assert_eq!(msg, "DoLegal API is not running");
        }
        _ => bail!("Wrong event"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_stays_quiet_for_healthy_backends() -> Result<()> {
    let (tx, mut rx) = start(true);
    tx.send(Action::BackendHealthCheck())?;
    tx.send(Action::ChatRequest("chat_3".to_string(), request("hi", "chat_3")))?;

    // The only event is the chat reply.
    match rx.recv().await {
        Some(Event::ChatSettled(session_id, Ok(_))) => {
            assert_eq!(session_id, "chat_3");
        }
        _ => bail!("Wrong event"),
    }

    return Ok(());
}

#[test]
fn it_lists_every_command_in_help() {
    let help = help_text();
    for command in [
        "/new", "/rename", "/pin", "/delete", "/switch", "/search", "/attach", "/detach", "/login",
        "/signup", "/logout", "/quit", "/help",
    ] {
        assert!(help.contains(command), "missing {command}");
    }
}
