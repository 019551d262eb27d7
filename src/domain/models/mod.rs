mod action;
mod backend;
mod block;
mod chat;
mod error;
mod event;
mod loading;
mod message;
mod notice;
mod sender;
mod session;
mod slash_commands;
mod textarea;
mod user;

pub use action::*;
pub use backend::*;
pub use block::*;
pub use chat::*;
pub use error::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use notice::*;
pub use sender::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
pub use user::*;
