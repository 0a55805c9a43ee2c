// Client-side view state (pure, framework-free so it can be unit tested)
pub mod chat_list;
pub mod chat_session;

pub use chat_list::{chat_title, group_chats, ChatGroup};
pub use chat_session::{ChatSessionState, MessageStatus, SendCheck, ViewMessage};
