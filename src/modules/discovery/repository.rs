use crate::{
    api::error,
    modules::{
        discovery::model::{UserCandidate, VenueCandidate},
        geo::BoundingBox,
    },
};

#[async_trait::async_trait]
pub trait DiscoveryRepository {
    /// Indexed range scan over the bounding box. Role, verification,
    /// recency, privacy, block exclusion and the exact distance cut are all
    /// applied by the service.
    async fn find_user_candidates(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<UserCandidate>, error::SystemError>;

    /// Venues inside the bounding box, inactive rows included; the service
    /// applies the active cut.
    async fn find_venue_candidates(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<VenueCandidate>, error::SystemError>;
}
