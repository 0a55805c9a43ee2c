use serde::{Deserialize, Serialize};

/// Specialty ids of the directory, also the keys under `doctors.specialties`
pub const SPECIALTIES: &[&str] = &[
    "general",
    "cardiology",
    "dermatology",
    "pediatrics",
    "neurology",
    "psychiatry",
    "gynecology",
];

/// Canonical id of a known specialty, ignoring case and surrounding blanks
pub fn known_specialty(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    SPECIALTIES.iter().copied().find(|s| s.eq_ignore_ascii_case(raw))
}

/// Entry of the doctor directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub available: bool,
}

impl Doctor {
    /// Rating rounded to one decimal, if any
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|r| format!("{:.1}", r.clamp(0.0, 5.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_specialty() {
        assert_eq!(known_specialty(" Cardiology "), Some("cardiology"));
        assert_eq!(known_specialty("astrology"), None);
        assert_eq!(known_specialty(""), None);
    }
}
