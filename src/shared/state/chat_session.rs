//! Optimistic message state of an open diagnosis chat
//!
//! A sent message is shown immediately with a `pending-` id. The server
//! reply either confirms it (and appends the assistant answer) or marks it
//! failed so the user can retry. Replies only ever settle their own pending
//! entry, so a late answer from a chat the user left is dropped.

use chrono::{DateTime, Utc};

use crate::domain::models::{ChatMessage, ChatRole, Diagnosis, SendMessageResponse, MAX_MESSAGE_CHARS};

pub const PENDING_PREFIX: &str = "pending-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Sent,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewMessage {
    pub message: ChatMessage,
    pub status: MessageStatus,
}

/// Why a draft cannot be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendCheck {
    Ok,
    Empty,
    TooLong,
    Busy,
}

impl SendCheck {
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            SendCheck::TooLong => Some("chat.errors.too_long"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSessionState {
    /// Conversation the messages belong to
    pub chat_id: Option<String>,
    pub messages: Vec<ViewMessage>,
    pub diagnosis: Option<Diagnosis>,
    /// i18n key or server message of the last failure
    pub error: Option<String>,
}

impl ChatSessionState {
    pub fn from_history(chat_id: &str, history: Vec<ChatMessage>) -> Self {
        Self {
            chat_id: Some(chat_id.to_string()),
            messages: history
                .into_iter()
                .map(|message| ViewMessage { message, status: MessageStatus::Sent })
                .collect(),
            ..Default::default()
        }
    }

    pub fn is_for(&self, chat_id: &str) -> bool {
        self.chat_id.as_deref() == Some(chat_id)
    }

    pub fn is_sending(&self) -> bool {
        self.messages.iter().any(|m| m.status == MessageStatus::Pending)
    }

    pub fn check_draft(&self, draft: &str) -> SendCheck {
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            SendCheck::Empty
        } else if trimmed.chars().count() > MAX_MESSAGE_CHARS {
            SendCheck::TooLong
        } else if self.is_sending() {
            SendCheck::Busy
        } else {
            SendCheck::Ok
        }
    }

    /// Append the optimistic user message; returns its pending id
    pub fn push_pending(&mut self, content: &str, pending_id: &str, now: DateTime<Utc>) -> String {
        let id = format!("{}{}", PENDING_PREFIX, pending_id);
        self.error = None;
        self.messages.push(ViewMessage {
            message: ChatMessage {
                id: id.clone(),
                chat_id: None,
                role: ChatRole::User,
                content: content.trim().to_string(),
                created_at: now,
            },
            status: MessageStatus::Pending,
        });
        id
    }

    /// Replace the pending message with the server copy and append the reply.
    /// Returns false (and changes nothing) when the pending entry is gone.
    pub fn confirm(&mut self, pending_id: &str, reply: SendMessageResponse) -> bool {
        let Some(slot) = self.messages.iter_mut().find(|m| m.message.id == pending_id) else {
            return false;
        };
        *slot = ViewMessage { message: reply.user_message, status: MessageStatus::Sent };
        self.messages.push(ViewMessage {
            message: reply.assistant_message,
            status: MessageStatus::Sent,
        });
        if reply.diagnosis.is_some() {
            self.diagnosis = reply.diagnosis;
        }
        true
    }

    /// Mark the pending message failed; no-op when it is gone
    pub fn fail(&mut self, pending_id: &str, error: String) -> bool {
        let Some(slot) = self.messages.iter_mut().find(|m| m.message.id == pending_id) else {
            return false;
        };
        slot.status = MessageStatus::Failed;
        self.error = Some(error);
        true
    }

    /// Put a failed message back into pending; returns its content to resend
    pub fn retry(&mut self, message_id: &str) -> Option<String> {
        if self.is_sending() {
            return None;
        }
        let slot = self
            .messages
            .iter_mut()
            .find(|m| m.message.id == message_id && m.status == MessageStatus::Failed)?;
        slot.status = MessageStatus::Pending;
        self.error = None;
        Some(slot.message.content.clone())
    }

    /// Drop a failed message the user gave up on
    pub fn discard(&mut self, message_id: &str) {
        self.messages
            .retain(|m| !(m.message.id == message_id && m.status == MessageStatus::Failed));
    }
}
