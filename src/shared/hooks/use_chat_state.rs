use chrono::Utc;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::shared::errors::ClientError;
use crate::shared::services::ApiService;
use crate::shared::state::{ChatSessionState, SendCheck};

/// Open conversation state
#[derive(Clone, Copy, PartialEq)]
pub struct ChatState {
    pub session: Signal<ChatSessionState>,
    pub input: Signal<String>,
    pub is_loading: Signal<bool>,
    pub load_error: Signal<Option<ClientError>>,
}

impl ChatState {
    /// Clear the input field
    pub fn clear_input(&mut self) {
        self.input.set(String::new());
    }

    /// Fetch the conversation history
    pub async fn load(mut self, chat_id: String) {
        self.is_loading.set(true);
        self.load_error.set(None);
        match ApiService::new().get_chat(&chat_id).await {
            Ok(chat) => self.session.set(ChatSessionState::from_history(&chat_id, chat.messages)),
            Err(e) => {
                tracing::warn!(chat_id = %chat_id, "Failed to load chat: {}", e);
                self.session.set(ChatSessionState::from_history(&chat_id, Vec::new()));
                self.load_error.set(Some(e));
            }
        }
        self.is_loading.set(false);
    }

    /// Validate the draft and append it as a pending message.
    /// Returns `(pending_id, content)` when something should be delivered.
    pub fn stage_draft(&mut self) -> Option<(String, String)> {
        let draft = self.input.read().clone();
        let check = self.session.read().check_draft(&draft);
        match check {
            SendCheck::Ok => {
                let pending_id = self.session.write().push_pending(
                    &draft,
                    &Uuid::new_v4().to_string(),
                    Utc::now(),
                );
                self.clear_input();
                Some((pending_id, draft.trim().to_string()))
            }
            other => {
                if let Some(key) = other.error_key() {
                    self.session.write().error = Some(key.to_string());
                }
                None
            }
        }
    }

    /// Send a staged message and settle its pending entry.
    /// The outcome is returned even when another chat was opened meanwhile,
    /// but only the chat it was sent from has its view updated.
    pub async fn deliver(mut self, chat_id: String, pending_id: String, content: String) -> Result<(), ClientError> {
        let result = ApiService::new().send_message(&chat_id, &content).await;
        if !self.session.peek().is_for(&chat_id) {
            tracing::debug!(chat_id = %chat_id, "Reply for a chat that is no longer open");
            return result.map(|_| ());
        }

        match result {
            Ok(reply) => {
                self.session.write().confirm(&pending_id, reply);
                Ok(())
            }
            Err(e) => {
                let message = e
                    .user_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| "chat.errors.send_failed".to_string());
                self.session.write().fail(&pending_id, message);
                Err(e)
            }
        }
    }

    /// Put a failed message back in flight; returns its content when allowed
    pub fn stage_retry(&mut self, message_id: &str) -> Option<String> {
        self.session.write().retry(message_id)
    }
}

/// Hook to manage chat state
pub fn use_chat_state() -> ChatState {
    let session = use_signal(ChatSessionState::default);
    let input = use_signal(String::new);
    let is_loading = use_signal(|| true);
    let load_error = use_signal(|| None::<ClientError>);

    ChatState {
        session,
        input,
        is_loading,
        load_error,
    }
}
