use tui_textarea::Input;

use super::ChatError;
use super::ChatReply;

#[derive(Debug)]
pub enum Event {
    BackendUnavailable(String),
    ChatSettled(String, Result<ChatReply, ChatError>),
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLN(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
}
