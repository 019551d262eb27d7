pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod events;
pub mod line_formatter;
mod scroll;
mod session_store;
mod sidebar;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use scroll::*;
pub use session_store::*;
pub use sidebar::*;
