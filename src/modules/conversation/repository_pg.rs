use uuid::Uuid;

use crate::{
    api::error,
    modules::conversation::{model::ConversationSummary, repository::ConversationRepository},
};

#[derive(Clone)]
pub struct ConversationRepositoryPg {
    pool: sqlx::PgPool,
}

impl ConversationRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ConversationRepository for ConversationRepositoryPg {
    async fn list_summaries(
        &self,
        user_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ConversationSummary>, error::SystemError> {
        // message ids are monotonic, so MAX(id) per peer is the latest
        // message in either direction
        let summaries = sqlx::query_as::<_, ConversationSummary>(
            r#"
            SELECT
                peers.peer_id,
                prof.display_name   AS peer_display_name,
                prof.avatar_url     AS peer_avatar_url,
                lm.id               AS last_message_id,
                lm.content          AS last_message,
                lm.message_type     AS last_message_type,
                lm.sender_id        AS last_sender_id,
                lm.created_at       AS last_message_time,
                COALESCE(unread.unread_count, 0) AS unread_count
            FROM (
                SELECT
                    CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END AS peer_id,
                    MAX(id) AS last_id
                FROM messages
                WHERE sender_id = $1 OR receiver_id = $1
                GROUP BY 1
            ) peers
            JOIN messages lm ON lm.id = peers.last_id
            LEFT JOIN user_profiles prof ON prof.user_id = peers.peer_id
            LEFT JOIN (
                SELECT sender_id, COUNT(*) AS unread_count
                FROM messages
                WHERE receiver_id = $1
                  AND read_status = FALSE
                  AND deleted_by_receiver = FALSE
                GROUP BY sender_id
            ) unread ON unread.sender_id = peers.peer_id
            ORDER BY lm.created_at DESC, lm.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    async fn count_peers(&self, user_id: &Uuid) -> Result<i64, error::SystemError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT
                CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END
            )
            FROM messages
            WHERE sender_id = $1 OR receiver_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
