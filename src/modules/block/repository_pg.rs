use uuid::Uuid;

use crate::{
    api::error,
    modules::block::{model::BlockedUserRow, repository::BlockRepository},
};

#[derive(Clone)]
pub struct BlockRepositoryPg {
    pool: sqlx::PgPool,
}

impl BlockRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BlockRepository for BlockRepositoryPg {
    async fn exists_between(
        &self,
        user_a: &Uuid,
        user_b: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT blocker_id FROM user_blocks
            WHERE (blocker_id = $1 AND blocked_id = $2)
               OR (blocker_id = $2 AND blocked_id = $1)
            LIMIT 1
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    async fn related_block_ids(&self, user_id: &Uuid) -> Result<Vec<Uuid>, error::SystemError> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT blocked_id FROM user_blocks WHERE blocker_id = $1
            UNION
            SELECT blocker_id FROM user_blocks WHERE blocked_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn create(
        &self,
        blocker_id: &Uuid,
        blocked_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        sqlx::query(
            r#"
            INSERT INTO user_blocks (blocker_id, blocked_id)
            VALUES ($1, $2)
            ON CONFLICT (blocker_id, blocked_id) DO NOTHING
            "#,
        )
        .bind(blocker_id)
        .bind(blocked_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(
        &self,
        blocker_id: &Uuid,
        blocked_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        sqlx::query("DELETE FROM user_blocks WHERE blocker_id = $1 AND blocked_id = $2")
            .bind(blocker_id)
            .bind(blocked_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_blocked_users(
        &self,
        blocker_id: &Uuid,
    ) -> Result<Vec<BlockedUserRow>, error::SystemError> {
        let rows = sqlx::query_as::<_, BlockedUserRow>(
            r#"
            SELECT
                b.blocked_id,
                p.display_name,
                b.created_at
            FROM user_blocks b
            LEFT JOIN user_profiles p ON p.user_id = b.blocked_id
            WHERE b.blocker_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(blocker_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
