use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the synthetic first message carrying the character's greeting
pub const GREETING_MESSAGE_ID: &str = "character-greeting";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new_id() -> String {
        Uuid::now_v7().to_string()
    }

    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Self::new_id(),
            role,
            content: content.into(),
        }
    }

    pub fn greeting(content: impl Into<String>) -> Self {
        Self {
            id: GREETING_MESSAGE_ID.to_string(),
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn to_turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// A message as sent to the chat endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_prompt: Option<String>,
}
