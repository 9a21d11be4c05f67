use crate::{
    api::error,
    modules::{
        discovery::{
            model::{UserCandidate, VenueCandidate},
            repository::DiscoveryRepository,
        },
        geo::BoundingBox,
    },
};

#[derive(Clone)]
pub struct DiscoveryRepositoryPg {
    pool: sqlx::PgPool,
}

impl DiscoveryRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DiscoveryRepository for DiscoveryRepositoryPg {
    async fn find_user_candidates(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<UserCandidate>, error::SystemError> {
        let candidates = sqlx::query_as::<_, UserCandidate>(
            r#"
            SELECT
                p.user_id,
                p.display_name,
                p.avatar_url,
                p.role,
                p.is_verified,
                p.last_active,
                l.latitude,
                l.longitude,
                l.city,
                l.country,
                l.privacy_level
            FROM user_profiles p
            JOIN locations l ON l.subject_id = p.user_id
            WHERE l.latitude BETWEEN $1 AND $2
              AND l.longitude BETWEEN $3 AND $4
            "#,
        )
        .bind(bbox.lat_min)
        .bind(bbox.lat_max)
        .bind(bbox.lon_min)
        .bind(bbox.lon_max)
        .fetch_all(&self.pool)
        .await?;

        Ok(candidates)
    }

    async fn find_venue_candidates(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<VenueCandidate>, error::SystemError> {
        let candidates = sqlx::query_as::<_, VenueCandidate>(
            r#"
            SELECT id, name, latitude, longitude, city, country, rating, is_active
            FROM venues
            WHERE latitude BETWEEN $1 AND $2
              AND longitude BETWEEN $3 AND $4
            "#,
        )
        .bind(bbox.lat_min)
        .bind(bbox.lat_max)
        .bind(bbox.lon_min)
        .bind(bbox.lon_max)
        .fetch_all(&self.pool)
        .await?;

        Ok(candidates)
    }
}
