//! Sidebar list of diagnosis chats

use chrono::{DateTime, Utc};

use crate::domain::models::Chat;
use crate::i18n::{t, Locale};
use crate::shared::utils::{date_bucket, DateBucket};

const TITLE_MAX_CHARS: usize = 48;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatGroup {
    pub bucket: DateBucket,
    pub chats: Vec<Chat>,
}

/// Sort newest first and split into date buckets; empty buckets are omitted
pub fn group_chats(chats: &[Chat], now: &DateTime<Utc>) -> Vec<ChatGroup> {
    let mut sorted = chats.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut groups: Vec<ChatGroup> = Vec::new();
    for chat in sorted {
        let bucket = date_bucket(&chat.updated_at, now);
        match groups.last_mut() {
            Some(group) if group.bucket == bucket => group.chats.push(chat),
            _ => groups.push(ChatGroup { bucket, chats: vec![chat] }),
        }
    }
    groups
}

fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    } else {
        text.to_string()
    }
}

/// Title, else first user message / last message preview, else the localized placeholder
pub fn chat_title(chat: &Chat, locale: Locale) -> String {
    if !chat.title.trim().is_empty() {
        return truncate(&chat.title, TITLE_MAX_CHARS);
    }

    chat.messages
        .iter()
        .find(|m| m.is_user())
        .map(|m| m.content.as_str())
        .or(chat.last_message.as_deref())
        .filter(|s| !s.trim().is_empty())
        .map(|s| truncate(s, TITLE_MAX_CHARS))
        .unwrap_or_else(|| t(locale, "chat.untitled"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ChatMessage, ChatRole};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 12, 15, 0, 0).unwrap()
    }

    fn chat(id: &str, updated: DateTime<Utc>) -> Chat {
        Chat {
            id: id.to_string(),
            title: String::new(),
            created_at: updated,
            updated_at: updated,
            messages: vec![],
            last_message: None,
        }
    }

    #[test]
    fn test_group_chats() {
        let now = now();
        let chats = vec![
            chat("old", now - Duration::days(30)),
            chat("today-1", now - Duration::hours(1)),
            chat("yesterday", now - Duration::hours(22)),
            chat("today-2", now - Duration::minutes(5)),
            chat("week", now - Duration::days(3)),
        ];

        let groups = group_chats(&chats, &now);
        let shape: Vec<(DateBucket, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.bucket, g.chats.iter().map(|c| c.id.as_str()).collect()))
            .collect();

        assert_eq!(
            shape,
            vec![
                (DateBucket::Today, vec!["today-2", "today-1"]),
                (DateBucket::Yesterday, vec!["yesterday"]),
                (DateBucket::LastWeek, vec!["week"]),
                (DateBucket::Older, vec!["old"]),
            ]
        );
    }

    #[test]
    fn test_group_chats_empty() {
        assert!(group_chats(&[], &now()).is_empty());
    }

    #[test]
    fn test_chat_title_fallbacks() {
        let mut c = chat("c1", now());
        assert_eq!(chat_title(&c, Locale::En), "New consultation");

        c.last_message = Some("Fever since Monday".to_string());
        assert_eq!(chat_title(&c, Locale::En), "Fever since Monday");

        c.messages.push(ChatMessage {
            id: "m1".to_string(),
            chat_id: None,
            role: ChatRole::User,
            content: "I have had a persistent dry cough for about three weeks now".to_string(),
            created_at: now(),
        });
        let title = chat_title(&c, Locale::En);
        assert!(title.ends_with('…'));
        assert!(title.chars().count() <= TITLE_MAX_CHARS + 1);

        c.title = "Cough".to_string();
        assert_eq!(chat_title(&c, Locale::En), "Cough");
    }
}
