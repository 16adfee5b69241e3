use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use cr_core::{Message, NewMessage};

/// Body of `POST /messages/`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

impl From<CreateMessageRequest> for NewMessage {
    fn from(request: CreateMessageRequest) -> Self {
        NewMessage {
            phone_number: request.phone_number,
            name: request.name,
            body: request.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageResponse {
    pub id: i64,
    pub phone_number: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for ContactMessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            phone_number: message.phone_number,
            name: message.name,
            message: message.body,
            created_at: message.created_at,
        }
    }
}
