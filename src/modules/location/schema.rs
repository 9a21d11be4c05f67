use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// One current location per subject. Updates overwrite in place; no history.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationEntity {
    pub subject_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub privacy_level: i16,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}
