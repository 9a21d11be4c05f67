use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, PartialEq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "message_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Image,
    Video,
    Audio,
    Location,
}

impl Default for MessageType {
    fn default() -> Self {
        MessageType::Text
    }
}

/// A direct message. Append-only: after creation only `read_status` and the
/// per-party deletion flags may change. A row with both deletion flags set
/// is invisible to everyone but is never hard-deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessageEntity {
    pub id: i64,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub attachment_url: Option<String>,
    pub message_type: MessageType,
    pub read_status: bool,
    pub deleted_by_sender: bool,
    pub deleted_by_receiver: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MessageEntity {
    /// A participant sees a message until their own deletion flag is set;
    /// the other party's flag never affects them.
    pub fn is_visible_to(&self, user_id: &Uuid) -> bool {
        if self.sender_id == *user_id {
            !self.deleted_by_sender
        } else if self.receiver_id == *user_id {
            !self.deleted_by_receiver
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender: Uuid, receiver: Uuid) -> MessageEntity {
        MessageEntity {
            id: 1,
            sender_id: sender,
            receiver_id: receiver,
            content: "hi".into(),
            attachment_url: None,
            message_type: MessageType::Text,
            read_status: false,
            deleted_by_sender: false,
            deleted_by_receiver: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn visible_to_both_participants_by_default() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let m = message(a, b);
        assert!(m.is_visible_to(&a));
        assert!(m.is_visible_to(&b));
        assert!(!m.is_visible_to(&Uuid::now_v7()));
    }

    #[test]
    fn sender_delete_hides_only_the_sender_copy() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let mut m = message(a, b);
        m.deleted_by_sender = true;
        assert!(!m.is_visible_to(&a));
        assert!(m.is_visible_to(&b));
    }

    #[test]
    fn both_flags_set_hides_the_message_from_everyone() {
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        let mut m = message(a, b);
        m.deleted_by_sender = true;
        m.deleted_by_receiver = true;
        assert!(!m.is_visible_to(&a));
        assert!(!m.is_visible_to(&b));
    }
}
