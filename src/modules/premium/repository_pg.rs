use uuid::Uuid;

use crate::{api::error, modules::premium::repository::PremiumProvider};

#[derive(Clone)]
pub struct PremiumProviderPg {
    pool: sqlx::PgPool,
}

impl PremiumProviderPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PremiumProvider for PremiumProviderPg {
    async fn is_premium(&self, user_id: &Uuid) -> Result<bool, error::SystemError> {
        let active: Option<(Uuid,)> = sqlx::query_as(
            "SELECT user_id FROM premium_memberships WHERE user_id = $1 AND expires_at > NOW()",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(active.is_some())
    }
}
