#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::models::AssistantAppend;
use crate::domain::models::ChatError;
use crate::domain::models::FileInfo;
use crate::domain::models::Message;
use crate::domain::models::PendingSend;
use crate::domain::models::SendState;
use crate::domain::models::Session;
use crate::domain::models::Tier;
use crate::domain::models::User;

/// Sessions matching a search term, split the way the sidebar lists them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionListing<'a> {
    pub pinned: Vec<&'a Session>,
    pub history: Vec<&'a Session>,
}

impl<'a> SessionListing<'a> {
    /// Pinned sessions first, then history, the order used for `/switch N`.
    pub fn ordered(&self) -> Vec<&'a Session> {
        let mut res = self.pinned.clone();
        res.extend(self.history.iter());
        return res;
    }
}

/// Owns every chat session, the active pointer and the free tier quota.
///
/// The collection is never empty once constructed, and the active id always
/// names a session in it. Only one send may be outstanding per session, a
/// second one is rejected with `ChatError::SendInProgress`.
pub struct SessionStore {
    sessions: Vec<Session>,
    active_id: String,
    user: User,
    free_requests_left: u32,
    send_states: HashMap<String, SendState>,
    last_id_millis: i64,
}

impl SessionStore {
    pub fn new(user: User, free_requests_left: u32) -> SessionStore {
        let mut store = SessionStore {
            sessions: vec![],
            active_id: "".to_string(),
            user,
            free_requests_left,
            send_states: HashMap::new(),
            last_id_millis: 0,
        };
        store.create_session();

        return store;
    }

    fn next_id(&mut self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        if millis <= self.last_id_millis {
            millis = self.last_id_millis + 1;
        }
        self.last_id_millis = millis;

        return format!("chat_{millis}");
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Session> {
        return self.sessions.iter_mut().find(|s| return s.id() == id);
    }

    pub fn create_session(&mut self) -> String {
        let id = self.next_id();
        self.sessions.push(Session::new(&id));
        self.active_id = id.to_string();
        tracing::debug!(id = id, "session created");

        return id;
    }

    pub fn rename_session(&mut self, id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        if let Some(session) = self.find_mut(id) {
            session.set_title(title);
            return true;
        }

        return false;
    }

    pub fn toggle_pin(&mut self, id: &str) -> bool {
        if let Some(session) = self.find_mut(id) {
            session.toggle_pinned();
            return true;
        }

        return false;
    }

    /// Removes a session. When the active session goes, the first remaining
    /// session becomes active, or a fresh default session is created if none
    /// remain.
    pub fn delete_session(&mut self, id: &str) -> bool {
        let Some(idx) = self.sessions.iter().position(|s| return s.id() == id) else {
            return false;
        };

        self.sessions.remove(idx);
        self.send_states.remove(id);
        tracing::debug!(id = id, "session deleted");

        if self.sessions.is_empty() {
            self.create_session();
            return true;
        }

        if self.active_id == id {
            self.active_id = self.sessions[0].id().to_string();
        }

        return true;
    }

    pub fn set_active(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        self.active_id = id.to_string();
        return true;
    }

    pub fn active_id(&self) -> &str {
        return &self.active_id;
    }

    pub fn active(&self) -> &Session {
        return self
            .get(&self.active_id)
            .unwrap_or_else(|| return &self.sessions[0]);
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        return self.sessions.iter().find(|s| return s.id() == id);
    }

    pub fn len(&self) -> usize {
        return self.sessions.len();
    }

    /// Case-insensitive title filter. An empty term lists everything.
    pub fn search(&self, term: &str) -> SessionListing<'_> {
        let needle = term.to_lowercase();
        let mut listing = SessionListing::default();
        for session in self
            .sessions
            .iter()
            .filter(|s| return s.title().to_lowercase().contains(&needle))
        {
            if session.pinned() {
                listing.pinned.push(session);
            } else {
                listing.history.push(session);
            }
        }

        return listing;
    }

    pub fn user(&self) -> &User {
        return &self.user;
    }

    pub fn sign_in(&mut self, tier: Tier) {
        self.user = User {
            is_logged_in: true,
            tier,
        };
    }

    pub fn sign_out(&mut self) {
        self.user = User::guest();
    }

    pub fn free_requests_left(&self) -> u32 {
        return self.free_requests_left;
    }

    pub fn is_blocked(&self) -> bool {
        return self.user.is_free() && self.free_requests_left == 0;
    }

    pub fn send_state(&self, id: &str) -> SendState {
        return self.send_states.get(id).copied().unwrap_or_default();
    }

    pub fn is_sending(&self, id: &str) -> bool {
        return self.send_state(id) == SendState::Sending;
    }

    pub fn is_loading(&self) -> bool {
        return self.is_sending(&self.active_id);
    }

    /// Appends a user message and opens a send on the session. Nothing is
    /// mutated on failure. The returned `PendingSend` says whether this was
    /// the session's first user message, which the API uses to pick a title.
    pub fn append_user_message(
        &mut self,
        session_id: &str,
        text: &str,
        file: Option<FileInfo>,
    ) -> Result<PendingSend, ChatError> {
        if self.get(session_id).is_none() {
            return Err(ChatError::UnknownSession(session_id.to_string()));
        }
        if self.is_sending(session_id) {
            return Err(ChatError::SendInProgress(session_id.to_string()));
        }
        if self.is_blocked() {
            return Err(ChatError::QuotaExceeded);
        }
        if file.is_some() && self.user.is_free() {
            return Err(ChatError::UploadNotAllowed);
        }

        let is_free = self.user.is_free();
        let Some(session) = self.find_mut(session_id) else {
            return Err(ChatError::UnknownSession(session_id.to_string()));
        };
        let is_first_user_message = session.user_message_count() == 0;
        session.push(Message::user(text).with_file_info(file));

        if is_free {
            self.free_requests_left = self.free_requests_left.saturating_sub(1);
        }
        self.send_states
            .insert(session_id.to_string(), SendState::Sending);

        return Ok(PendingSend {
            session_id: session_id.to_string(),
            text: text.to_string(),
            is_first_user_message,
        });
    }

    /// Applies a reply: title first, then the message, both inside this call.
    /// An unknown session applies neither.
    pub fn append_assistant_message(
        &mut self,
        session_id: &str,
        message: Message,
        new_title: Option<&str>,
    ) -> Result<AssistantAppend, ChatError> {
        self.settle(session_id, SendState::Settled);
        let Some(session) = self.find_mut(session_id) else {
            return Err(ChatError::UnknownSession(session_id.to_string()));
        };

        let mut title_updated = false;
        if let Some(title) = new_title.map(str::trim) {
            if !title.is_empty() {
                session.set_title(title);
                title_updated = true;
            }
        }
        session.push(message);

        return Ok(AssistantAppend { title_updated });
    }

    pub fn append_error_message(
        &mut self,
        session_id: &str,
        display_text: &str,
    ) -> Result<(), ChatError> {
        self.settle(session_id, SendState::Failed);
        let Some(session) = self.find_mut(session_id) else {
            return Err(ChatError::UnknownSession(session_id.to_string()));
        };
        session.push(Message::error(display_text));

        return Ok(());
    }

    /// Closes an outstanding send. Sessions deleted while a request was in
    /// flight have no entry and are ignored.
    pub fn settle(&mut self, session_id: &str, state: SendState) {
        if let Some(current) = self.send_states.get_mut(session_id) {
            *current = state;
        }
    }
}
