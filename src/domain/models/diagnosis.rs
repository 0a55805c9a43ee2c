use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AI assessment produced for a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    pub condition: String,
    /// 0.0..=1.0
    pub confidence: f32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Diagnosis {
    /// Confidence as a whole percentage, clamped to 0..=100
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnosis(confidence: f32) -> Diagnosis {
        Diagnosis {
            id: "d1".to_string(),
            chat_id: None,
            condition: "Migraine".to_string(),
            confidence,
            summary: String::new(),
            recommendations: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(diagnosis(0.824).confidence_percent(), 82);
        assert_eq!(diagnosis(1.7).confidence_percent(), 100);
        assert_eq!(diagnosis(-0.2).confidence_percent(), 0);
    }
}
