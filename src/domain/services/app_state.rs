#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::path;
use std::str::FromStr;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::fs;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use super::SessionStore;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::AuthPrompt;
use crate::domain::models::ChatError;
use crate::domain::models::ChatReply;
use crate::domain::models::FileInfo;
use crate::domain::models::Message;
use crate::domain::models::Notice;
use crate::domain::models::SlashCommand;
use crate::domain::models::Tier;
use crate::domain::models::User;

/// Shown in the chat in place of any failed reply. The cause is logged and
/// kept in `AppState::last_diagnostic`.
pub const ERROR_FALLBACK: &str = "Sorry, an error occurred.";

pub struct AppState<'a> {
    pub store: SessionStore,
    pub bubble_list: BubbleList<'a>,
    pub scroll: Scroll,
    pub search_term: String,
    pub notice: Option<Notice>,
    pub last_diagnostic: Option<String>,
    pub attachment: Option<FileInfo>,
    pub help_visible: bool,
    pub last_known_height: u16,
    pub last_known_width: u16,
}

fn notice_for_rejection(err: ChatError) -> Notice {
    match err {
        ChatError::QuotaExceeded => return Notice::Auth(AuthPrompt::SignUp),
        ChatError::UploadNotAllowed => {
            return Notice::Error(
                "File uploads are available on paid plans. Use /detach to send without the file."
                    .to_string(),
            );
        }
        ChatError::SendInProgress(_) => {
            return Notice::Info(
                "Please wait for the current answer before asking again.".to_string(),
            );
        }
        err => return Notice::Error(err.to_string()),
    }
}

impl<'a> AppState<'a> {
    pub fn new(user: User, free_requests: u32) -> AppState<'a> {
        let mut app_state = AppState {
            store: SessionStore::new(user, free_requests),
            bubble_list: BubbleList::new(),
            scroll: Scroll::default(),
            search_term: "".to_string(),
            notice: None,
            last_diagnostic: None,
            attachment: None,
            help_visible: false,
            last_known_height: 0,
            last_known_width: 0,
        };
        app_state.sync_dependants();

        return app_state;
    }

    /// Starts as a guest. Paid tiers count as signed in.
    pub fn for_tier(tier: Tier, free_requests: u32) -> AppState<'a> {
        let mut app_state = AppState::new(User::guest(), free_requests);
        if tier != Tier::Free {
            app_state.store.sign_in(tier);
        }

        return app_state;
    }

    pub fn from_config() -> Result<AppState<'a>> {
        let tier = Tier::from_str(&Config::get(ConfigKey::Tier))?;
        let free_requests = Config::get(ConfigKey::FreeRequests).parse::<u32>()?;

        return Ok(AppState::for_tier(tier, free_requests));
    }

    pub fn is_loading(&self) -> bool {
        return self.store.is_loading();
    }

    pub fn is_blocked(&self) -> bool {
        return self.store.is_blocked();
    }

    /// Sends a question for the active session. Returns whether the input box
    /// should be cleared. A refused send keeps the text and attachment and
    /// explains why through `notice`.
    pub fn submit(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() && self.attachment.is_none() {
            return Ok(false);
        }

        self.help_visible = false;
        let session_id = self.store.active_id().to_string();
        match self
            .store
            .append_user_message(&session_id, text, self.attachment.clone())
        {
            Ok(pending) => {
                self.attachment = None;
                self.notice = None;
                tx.send(Action::ChatRequest(
                    pending.session_id.to_string(),
                    pending.to_request(),
                ))?;
                self.sync_dependants();
                self.scroll.last();

                return Ok(true);
            }
            Err(err) => {
                tracing::debug!(session_id = session_id, error = %err, "send refused");
                self.notice = Some(notice_for_rejection(err));

                return Ok(false);
            }
        }
    }

    /// Applies the outcome of a chat request. Every outcome closes the
    /// session's send, replies for deleted sessions are dropped.
    pub fn handle_chat_settled(&mut self, session_id: &str, result: Result<ChatReply, ChatError>) {
        let res = match result {
            Ok(reply) => {
                let message =
                    Message::ai(&reply.text, reply.citations).with_token_count(reply.token_count);
                self.store
                    .append_assistant_message(session_id, message, reply.new_title.as_deref())
                    .map(|_| return ())
            }
            Err(err) => {
                tracing::error!(session_id = session_id, error = %err, "chat failed");
                self.last_diagnostic = Some(err.to_string());
                self.store.append_error_message(session_id, ERROR_FALLBACK)
            }
        };

        if let Err(err) = res {
            tracing::warn!(error = %err, "reply dropped");
        }

        self.sync_dependants();
        if session_id == self.store.active_id() {
            self.scroll.last();
        }
    }

    pub fn handle_backend_unavailable(&mut self, err: &str) {
        self.last_diagnostic = Some(err.to_string());
        self.notice = Some(Notice::Error(format!(
            "The DoLegal API at {} is not reachable. Requests will fail until it is running.",
            Config::get(ConfigKey::ApiURL)
        )));
    }

    /// Runs a slash command. Returns `(should_break, handled)`, text that is
    /// not a known command is left for `submit`.
    pub async fn handle_slash_commands(&mut self, input_str: &str) -> Result<(bool, bool)> {
        let Some(command) = SlashCommand::parse(input_str) else {
            return Ok((false, false));
        };

        self.notice = None;
        self.help_visible = false;

        if command.is_quit() {
            return Ok((true, true));
        }

        if command.is_help() {
            self.help_visible = true;
        } else if command.is_new() {
            self.store.create_session();
            self.scroll.last();
        } else if command.is_rename() {
            let active_id = self.store.active_id().to_string();
            if !self.store.rename_session(&active_id, &command.rest()) {
                self.notice = Some(Notice::Error("Usage: /rename TITLE".to_string()));
            }
        } else if command.is_pin() {
            let active_id = self.store.active_id().to_string();
            self.store.toggle_pin(&active_id);
        } else if command.is_delete() {
            let active_id = self.store.active_id().to_string();
            self.store.delete_session(&active_id);
            self.scroll.last();
        } else if command.is_switch() {
            self.switch_to(&command.rest());
        } else if command.is_search() {
            self.search_term = command.rest().trim().to_string();
        } else if command.is_attach() {
            self.attach(&command.rest()).await;
        } else if command.is_detach() {
            self.attachment = None;
        } else if command.is_login() {
            self.notice = Some(Notice::Auth(AuthPrompt::Login));
        } else if command.is_signup() {
            self.notice = Some(Notice::Auth(AuthPrompt::SignUp));
        } else if command.is_forgot_password() {
            self.notice = Some(Notice::Auth(AuthPrompt::ForgotPassword));
        } else if command.is_logout() {
            self.store.sign_out();
            self.attachment = None;
            self.notice = Some(Notice::Info("Signed out. You are now a guest.".to_string()));
        }

        self.sync_dependants();
        return Ok((false, true));
    }

    fn switch_to(&mut self, number: &str) {
        let ordered = self
            .store
            .search(&self.search_term)
            .ordered()
            .iter()
            .map(|session| return session.id().to_string())
            .collect::<Vec<String>>();

        let target = number
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| return n.checked_sub(1))
            .and_then(|idx| return ordered.get(idx));

        match target {
            Some(id) => {
                self.store.set_active(id);
                self.scroll.last();
            }
            None => {
                self.notice = Some(Notice::Error(format!(
                    "Usage: /switch NUMBER, where NUMBER is between 1 and {}",
                    ordered.len()
                )));
            }
        }
    }

    async fn attach(&mut self, file_path: &str) {
        let file_path = path::PathBuf::from(file_path.trim());
        let name = file_path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_default();

        match fs::metadata(&file_path).await {
            Ok(metadata) if metadata.is_file() && !name.is_empty() => {
                self.attachment = Some(FileInfo::new(&name, metadata.len()));
                if self.store.user().is_free() {
                    self.notice = Some(Notice::Info(
                        "File uploads require a paid plan. The file is kept until you /detach it."
                            .to_string(),
                    ));
                }
            }
            _ => {
                self.notice = Some(Notice::Error(format!(
                    "Cannot attach {}: not a readable file",
                    file_path.to_string_lossy()
                )));
            }
        }
    }

    /// Moves the active session through the sidebar order, wrapping at both
    /// ends.
    pub fn cycle_session(&mut self, step: isize) {
        let ordered = self
            .store
            .search(&self.search_term)
            .ordered()
            .iter()
            .map(|session| return session.id().to_string())
            .collect::<Vec<String>>();
        if ordered.is_empty() {
            return;
        }

        let len = ordered.len() as isize;
        let next = match ordered.iter().position(|id| return id == self.store.active_id()) {
            Some(pos) => (pos as isize + step).rem_euclid(len),
            None => 0,
        };

        self.store.set_active(&ordered[next as usize]);
        self.help_visible = false;
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn new_session(&mut self) {
        self.store.create_session();
        self.help_visible = false;
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        let session = self.store.active();
        self.bubble_list.set_messages(
            session.id(),
            session.messages(),
            self.last_known_width.into(),
        );

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.store.is_loading() {
            self.scroll.last();
        }
    }
}
