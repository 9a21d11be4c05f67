use uuid::Uuid;

use crate::{
    api::error,
    modules::message::{
        model::InsertMessage, repository::MessageRepository, schema::MessageEntity,
    },
};

#[derive(Clone)]
pub struct MessageRepositoryPg {
    pool: sqlx::PgPool,
}

impl MessageRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MessageRepository for MessageRepositoryPg {
    async fn append(
        &self,
        message: &InsertMessage,
    ) -> Result<MessageEntity, error::SystemError> {
        let message = sqlx::query_as::<_, MessageEntity>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content, attachment_url, message_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(&message.content)
        .bind(&message.attachment_url)
        .bind(message.message_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn mark_read(&self, id: i64, reader_id: &Uuid) -> Result<bool, error::SystemError> {
        let result = sqlx::query(
            "UPDATE messages SET read_status = TRUE WHERE id = $1 AND receiver_id = $2",
        )
        .bind(id)
        .bind(reader_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_conversation_read(
        &self,
        reader_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<u64, error::SystemError> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET read_status = TRUE
            WHERE receiver_id = $1 AND sender_id = $2 AND read_status = FALSE
            "#,
        )
        .bind(reader_id)
        .bind(peer_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn soft_delete(
        &self,
        id: i64,
        requester_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        // sender and receiver are distinct by construction, so exactly one
        // flag flips
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET deleted_by_sender = deleted_by_sender OR (sender_id = $2),
                deleted_by_receiver = deleted_by_receiver OR (receiver_id = $2)
            WHERE id = $1 AND (sender_id = $2 OR receiver_id = $2)
            "#,
        )
        .bind(id)
        .bind(requester_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        sqlx::query(
            r#"
            UPDATE messages
            SET deleted_by_sender = deleted_by_sender OR (sender_id = $1 AND receiver_id = $2),
                deleted_by_receiver = deleted_by_receiver OR (receiver_id = $1 AND sender_id = $2)
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            "#,
        )
        .bind(user_id)
        .bind(peer_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        let messages = sqlx::query_as::<_, MessageEntity>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2 AND deleted_by_sender = FALSE)
               OR (sender_id = $2 AND receiver_id = $1 AND deleted_by_receiver = FALSE)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(user_id)
        .bind(peer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn count_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<i64, error::SystemError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2 AND deleted_by_sender = FALSE)
               OR (sender_id = $2 AND receiver_id = $1 AND deleted_by_receiver = FALSE)
            "#,
        )
        .bind(user_id)
        .bind(peer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    async fn count_sent_since(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<i64, error::SystemError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM messages
            WHERE sender_id = $1 AND receiver_id = $2 AND created_at >= $3
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
