use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::message::schema::{MessageEntity, MessageType};

#[derive(Debug, Clone)]
pub struct InsertMessage {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub attachment_url: Option<String>,
    pub message_type: MessageType,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    pub content: Option<String>,
    #[validate(url)]
    pub attachment_url: Option<String>,
    pub message_type: Option<MessageType>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ThreadQuery {
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub messages: Vec<MessageEntity>,
    pub total: i64,
}
