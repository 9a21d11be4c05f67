use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Visibility tiers for a stored location, most restrictive first:
/// 0 hidden, 1 premium-only, 2 members, 3 everyone.
pub const PRIVACY_HIDDEN: i16 = 0;
pub const PRIVACY_PREMIUM_ONLY: i16 = 1;
pub const PRIVACY_MEMBERS: i16 = 2;
pub const PRIVACY_EVERYONE: i16 = 3;

#[derive(Debug, Clone)]
pub struct UpsertLocation {
    pub subject_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub privacy_level: i16,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub city: Option<String>,
    pub country: Option<String>,
    #[validate(range(min = 0, max = 3))]
    pub privacy_level: Option<i16>,
}
