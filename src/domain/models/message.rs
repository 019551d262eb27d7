#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Sender;

/// Rough token estimate used by the input box, four characters per token.
pub fn estimate_tokens(text: &str) -> u64 {
    let chars = text.chars().count() as u64;
    return (chars + 3) / 4;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

impl FileInfo {
    pub fn new(name: &str, size: u64) -> FileInfo {
        return FileInfo {
            name: name.to_string(),
            size,
        };
    }

    pub fn describe(&self) -> String {
        return format!(
            "File attached: {} ({:.2} KB)",
            self.name,
            self.size as f64 / 1024.0
        );
    }
}

/// A single chat message. Messages are never edited after they are appended to
/// a session, so fields are only reachable through getters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
    citations: Vec<String>,
    file_info: Option<FileInfo>,
    is_error: bool,
    token_count: Option<u64>,
}

impl Message {
    pub fn user(text: &str) -> Message {
        return Message {
            sender: Sender::User,
            text: text.to_string(),
            citations: vec![],
            file_info: None,
            is_error: false,
            token_count: None,
        };
    }

    pub fn ai(text: &str, citations: Vec<String>) -> Message {
        return Message {
            sender: Sender::Ai,
            text: text.to_string(),
            citations,
            file_info: None,
            is_error: false,
            token_count: None,
        };
    }

    pub fn error(text: &str) -> Message {
        return Message {
            sender: Sender::Ai,
            text: text.to_string(),
            citations: vec![],
            file_info: None,
            is_error: true,
            token_count: None,
        };
    }

    pub fn with_file_info(mut self, file_info: Option<FileInfo>) -> Message {
        self.file_info = file_info;
        return self;
    }

    pub fn with_token_count(mut self, token_count: Option<u64>) -> Message {
        self.token_count = token_count;
        return self;
    }

    pub fn sender(&self) -> Sender {
        return self.sender;
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn citations(&self) -> &[String] {
        return &self.citations;
    }

    pub fn file_info(&self) -> Option<&FileInfo> {
        return self.file_info.as_ref();
    }

    pub fn is_error(&self) -> bool {
        return self.is_error;
    }

    pub fn token_count(&self) -> Option<u64> {
        return self.token_count;
    }
}
