use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Optional narrowing of a nearby-user search. All filters are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct NearbyFilters {
    pub role: Option<String>,
    pub verified: Option<bool>,
    /// Only subjects active within the last N hours.
    pub active_within_hours: Option<i64>,
}

/// Profile joined with its stored location, as selected by the bounding-box
/// range scan. Exact distance and privacy are decided by the service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserCandidate {
    pub user_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub is_verified: bool,
    pub last_active: chrono::DateTime<chrono::Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing)]
    pub privacy_level: i16,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VenueCandidate {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub rating: f32,
    #[serde(skip)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NearbyUser {
    #[serde(flatten)]
    pub user: UserCandidate,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyVenue {
    #[serde(flatten)]
    pub venue: VenueCandidate,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NearbyUsersQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.1, max = 1000.0))]
    pub radius_km: Option<f64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub role: Option<String>,
    pub verified: Option<bool>,
    #[validate(range(min = 1))]
    pub active_within_hours: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NearbyVenuesQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.1, max = 1000.0))]
    pub radius_km: Option<f64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}
