use super::Message;
use super::Sender;

pub const DEFAULT_TITLE: &str = "New Chat";
pub const GREETING: &str =
    "Hello! I am your AI assistant. How can I help you with Armenian legislation today?";

/// One chat conversation. Title and pin state are changed through the
/// session store, messages are append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    id: String,
    title: String,
    messages: Vec<Message>,
    pinned: bool,
}

impl Session {
    pub fn new(id: &str) -> Session {
        return Session {
            id: id.to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: vec![Message::ai(GREETING, vec![])],
            pinned: false,
        };
    }

    pub fn id(&self) -> &str {
        return &self.id;
    }

    pub fn title(&self) -> &str {
        return &self.title;
    }

    pub fn pinned(&self) -> bool {
        return self.pinned;
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn user_message_count(&self) -> usize {
        return self
            .messages
            .iter()
            .filter(|message| return message.sender() == Sender::User)
            .count();
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub(crate) fn toggle_pinned(&mut self) {
        self.pinned = !self.pinned;
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}
