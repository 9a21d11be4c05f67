use uuid::Uuid;

use crate::{
    api::error,
    modules::location::{
        model::UpsertLocation, repository::LocationRepository, schema::LocationEntity,
    },
};

#[derive(Clone)]
pub struct LocationRepositoryPg {
    pool: sqlx::PgPool,
}

impl LocationRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LocationRepository for LocationRepositoryPg {
    async fn upsert(
        &self,
        location: &UpsertLocation,
    ) -> Result<LocationEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, LocationEntity>(
            r#"
            INSERT INTO locations (subject_id, latitude, longitude, city, country, privacy_level, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (subject_id) DO UPDATE
            SET latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                city = EXCLUDED.city,
                country = EXCLUDED.country,
                privacy_level = EXCLUDED.privacy_level,
                last_updated = NOW()
            RETURNING *
            "#,
        )
        .bind(location.subject_id)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.city)
        .bind(&location.country)
        .bind(location.privacy_level)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_subject(
        &self,
        subject_id: &Uuid,
    ) -> Result<Option<LocationEntity>, error::SystemError> {
        let location =
            sqlx::query_as::<_, LocationEntity>("SELECT * FROM locations WHERE subject_id = $1")
                .bind(subject_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(location)
    }
}
