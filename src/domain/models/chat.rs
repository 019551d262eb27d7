#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ChatError;

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub is_first_user_message: bool,
    pub chat_id: String,
}

/// Raw response of `POST /api/chat`. Every field is optional on the wire and
/// checked by `ChatResponse::validate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<String>>,
    #[serde(default)]
    pub new_title: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub token_count: Option<u64>,
}

impl ChatResponse {
    pub fn validate(self) -> Result<ChatReply, ChatError> {
        if let Some(error) = self.error {
            if !error.is_empty() {
                return Err(ChatError::Logic(error));
            }
        }

        let text = match self.response_text {
            Some(text) => text,
            None => {
                return Err(ChatError::MalformedResponse(
                    "missing field `responseText`".to_string(),
                ));
            }
        };

        let new_title = self
            .new_title
            .map(|title| return title.trim().to_string())
            .filter(|title| return !title.is_empty());

        return Ok(ChatReply {
            text,
            citations: self.citations.unwrap_or_default(),
            new_title,
            token_count: self.token_count,
        });
    }
}

/// A validated assistant reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub citations: Vec<String>,
    pub new_title: Option<String>,
    pub token_count: Option<u64>,
}

/// Returned by the store when a user message was accepted, carries what the
/// backend request needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub session_id: String,
    pub text: String,
    pub is_first_user_message: bool,
}

impl PendingSend {
    pub fn to_request(&self) -> ChatRequest {
        return ChatRequest {
            message: self.text.to_string(),
            is_first_user_message: self.is_first_user_message,
            chat_id: self.session_id.to_string(),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantAppend {
    pub title_updated: bool,
}

/// Per session lifecycle of a send.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
    Settled,
    Failed,
}
