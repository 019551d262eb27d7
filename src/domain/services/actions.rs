#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::ChatRequest;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /new (/n) - Starts a new chat and makes it active.
- /rename [TITLE] - Renames the active chat.
- /pin (/p) - Pins or unpins the active chat.
- /delete (/d) - Deletes the active chat.
- /switch (/s) [NUMBER] - Switches to a chat by its number in the sidebar.
- /search (/f) [TERM?] - Filters the sidebar by title. Omit TERM to clear the filter.
- /attach (/a) [PATH] - Attaches a file to the next message. Requires a paid plan.
- /detach - Removes the pending attachment.
- /login, /signup, /forgot - Account actions.
- /logout - Signs out and continues as a guest.
- /quit /exit (/q) - Exit DoLegal.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- TAB / SHIFT+TAB - Next / previous chat
- CTRL+N - New chat
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

async fn chat(
    backend: Arc<BackendBox>,
    session_id: String,
    request: ChatRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    tracing::debug!(session_id = session_id, "dispatching chat request");
    let res = backend.send_chat(request).await;
    if let Err(err) = &res {
        tracing::error!(session_id = session_id, error = %err, "chat request failed");
    }

    tx.send(Event::ChatSettled(session_id, res))?;

    return Ok(());
}

async fn health_check(backend: Arc<BackendBox>, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    if let Err(err) = backend.health_check().await {
        tracing::warn!(error = ?err, "backend health check failed");
        tx.send(Event::BackendUnavailable(err.to_string()))?;
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs requests off the UI task. Each chat request gets its own task and
    /// answers with exactly one `Event::ChatSettled`. Per session ordering is
    /// enforced by the session store before an action is ever sent.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend = Arc::new(backend);

        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            let worker_backend = backend.clone();
            match action {
                Action::BackendHealthCheck() => {
                    tokio::spawn(async move {
                        return health_check(worker_backend, worker_tx).await;
                    });
                }
                Action::ChatRequest(session_id, request) => {
                    tokio::spawn(async move {
                        return chat(worker_backend, session_id, request, worker_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
