use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::modules::message::schema::MessageType;

/// One row per distinct peer, derived on every query. Conversations are
/// never materialized: the per-participant deletion flags would force an
/// invalidation on every send, read and delete.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConversationSummary {
    pub peer_id: Uuid,
    pub peer_display_name: Option<String>,
    pub peer_avatar_url: Option<String>,
    pub last_message_id: i64,
    pub last_message: String,
    pub last_message_type: MessageType,
    pub last_sender_id: Uuid,
    pub last_message_time: chrono::DateTime<chrono::Utc>,
    pub unread_count: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConversationListQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}
