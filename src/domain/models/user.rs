use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Patient account as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Up to two initials for the navbar avatar
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect();

        if initials.is_empty() {
            self.email.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
        } else {
            initials
        }
    }

    /// First name for greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: "u1".to_string(),
            name: name.to_string(),
            email: "amina@example.com".to_string(),
            phone: None,
            created_at: None,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("Amina Benali").initials(), "AB");
        assert_eq!(user("jean paul sartre").initials(), "JP");
        assert_eq!(user("   ").initials(), "A");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(user("Amina Benali").first_name(), "Amina");
        assert_eq!(user("").first_name(), "");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":"7","name":"Amina","email":"a@b.co","createdAt":"2025-03-01T10:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "7");
        assert!(user.phone.is_none());
        assert!(user.created_at.is_some());
    }
}
