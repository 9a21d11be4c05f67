use uuid::Uuid;

use crate::{
    api::error,
    modules::message::{model::InsertMessage, schema::MessageEntity},
};

#[async_trait::async_trait]
pub trait MessageRepository {
    /// Single atomic insert; id assignment and row creation are one unit.
    async fn append(&self, message: &InsertMessage)
        -> Result<MessageEntity, error::SystemError>;

    /// Flips `read_status` iff `reader_id` is the receiver. Returns false
    /// when no row matched (missing message or wrong reader). Idempotent.
    async fn mark_read(&self, id: i64, reader_id: &Uuid) -> Result<bool, error::SystemError>;

    /// Set-based bulk flip of every unread message from `peer_id` to
    /// `reader_id`.
    async fn mark_conversation_read(
        &self,
        reader_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<u64, error::SystemError>;

    /// Sets the requester's own deletion flag. Returns false when the
    /// requester is not a participant (the caller must report NotFound, not
    /// Forbidden, so existence is not leaked). Idempotent.
    async fn soft_delete(&self, id: i64, requester_id: &Uuid)
        -> Result<bool, error::SystemError>;

    /// One set-based update over the whole thread, from `user_id`'s
    /// perspective only.
    async fn soft_delete_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<(), error::SystemError>;

    /// Messages of the pair visible to `user_id`, newest first.
    async fn list_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MessageEntity>, error::SystemError>;

    async fn count_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<i64, error::SystemError>;

    /// Messages sent by `sender_id` to `receiver_id` at or after `since`.
    async fn count_sent_since(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<i64, error::SystemError>;
}
