use uuid::Uuid;

use crate::{
    api::error,
    modules::profile::{repository::ProfileRepository, schema::AllowMessages},
};

#[derive(Clone)]
pub struct ProfileRepositoryPg {
    pool: sqlx::PgPool,
}

impl ProfileRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for ProfileRepositoryPg {
    async fn allow_messages(&self, user_id: &Uuid) -> Result<AllowMessages, error::SystemError> {
        let setting: Option<(AllowMessages,)> =
            sqlx::query_as("SELECT allow_messages FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(setting.map(|s| s.0).unwrap_or_default())
    }
}
