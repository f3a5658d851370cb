//! Chat message domain model.
//!
//! # Invariants
//! - The persisted conversation is append-only and keeps insertion order,
//!   which is not necessarily timestamp order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// Optional rendering hint for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Suggestion,
    Action,
}

/// One conversation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Serialized as `type` to match the persisted schema naming.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, MessageKind, Sender};
    use chrono::{TimeZone, Utc};

    #[test]
    fn kind_serializes_under_the_type_key() {
        let message = ChatMessage {
            id: "1".to_string(),
            text: "hello".to_string(),
            sender: Sender::Ai,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap(),
            kind: Some(MessageKind::Suggestion),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["sender"], "ai");
        assert_eq!(json["type"], "suggestion");

        let decoded: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn absent_kind_is_omitted_and_decodes_as_none() {
        let message = ChatMessage {
            id: "2".to_string(),
            text: "hi".to_string(),
            sender: Sender::User,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 5, 8, 1, 0).unwrap(),
            kind: None,
        };

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("type").is_none());

        let decoded: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.kind, None);
    }
}
