use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::domain::models::Chat;
use crate::shared::errors::ClientError;
use crate::shared::services::ApiService;

/// Sidebar chats, shared by the list and the open conversation
#[derive(Clone, Copy, PartialEq)]
pub struct ChatListState {
    pub chats: Signal<Vec<Chat>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<ClientError>>,
}

impl ChatListState {
    pub async fn refresh(mut self) {
        self.loading.set(true);
        match ApiService::new().list_chats().await {
            Ok(chats) => {
                self.chats.set(chats);
                self.error.set(None);
            }
            Err(e) => {
                tracing::warn!("Failed to load chats: {}", e);
                self.error.set(Some(e));
            }
        }
        self.loading.set(false);
    }

    /// Create an empty chat and put it at the top of the list
    pub async fn create(mut self) -> Result<Chat, ClientError> {
        let chat = ApiService::new().create_chat(None).await?;
        self.chats.write().insert(0, chat.clone());
        Ok(chat)
    }

    /// Remove optimistically; restore at the same position if the call fails
    pub async fn delete(mut self, chat_id: String) -> Result<(), ClientError> {
        let removed = {
            let mut chats = self.chats.write();
            chats
                .iter()
                .position(|c| c.id == chat_id)
                .map(|index| (index, chats.remove(index)))
        };

        let result = ApiService::new().delete_chat(&chat_id).await;
        if let (Err(_), Some((index, chat))) = (&result, removed) {
            let mut chats = self.chats.write();
            let index = index.min(chats.len());
            chats.insert(index, chat);
        }
        result
    }

    /// Reflect a newly sent message in the sidebar without refetching
    pub fn touch(&mut self, chat_id: &str, preview: &str, at: DateTime<Utc>) {
        let mut chats = self.chats.write();
        if let Some(chat) = chats.iter_mut().find(|c| c.id == chat_id) {
            chat.updated_at = at;
            chat.last_message = Some(preview.to_string());
        }
    }
}

pub fn use_chat_list_provider() -> ChatListState {
    use_context_provider(|| ChatListState {
        chats: Signal::new(Vec::new()),
        loading: Signal::new(true),
        error: Signal::new(None),
    })
}

pub fn use_chat_list() -> ChatListState {
    use_context::<ChatListState>()
}
