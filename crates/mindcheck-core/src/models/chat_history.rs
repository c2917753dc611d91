use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A support session opened after an assessment routes the user to chat
/// or to a therapist hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatSession {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub kind: SessionKind,
    pub started_at: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<jiff::Timestamp>,
    pub messages: Vec<ChatMessage>,
    /// Self-reported mood for the session, 0–10. Starts at 5.
    pub mood: u8,
}

impl ChatSession {
    pub fn start(kind: SessionKind, assessment_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            assessment_id,
            kind,
            started_at: jiff::Timestamp::now(),
            ended_at: None,
            messages: Vec::new(),
            mood: 5,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionKind {
    AiSupport,
    HumanTherapy,
}

/// A single message in a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}
