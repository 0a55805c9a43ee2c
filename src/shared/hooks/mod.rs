// Shared hooks module
pub mod use_auth;
pub mod use_chat_list;
pub mod use_chat_state;
pub mod use_locale;

pub use use_auth::{use_auth, use_auth_provider, AuthState};
pub use use_chat_list::{use_chat_list, use_chat_list_provider, ChatListState};
pub use use_chat_state::{use_chat_state, ChatState};
pub use use_locale::use_locale;
