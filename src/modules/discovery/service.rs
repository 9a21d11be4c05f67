use std::{cmp::Ordering, collections::HashSet, sync::Arc};

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    api::error,
    configs::RedisCache,
    modules::{
        block::repository::BlockRepository,
        discovery::{
            model::{NearbyFilters, NearbyUser, NearbyVenue},
            repository::DiscoveryRepository,
        },
        geo::{haversine_km, BoundingBox},
        location::{model::PRIVACY_PREMIUM_ONLY, repository::LocationRepository},
        premium::repository::PremiumProvider,
    },
};

const VENUE_CACHE_TTL_SECS: u64 = 60;

#[derive(Clone)]
pub struct DiscoveryService<D, B, R, L>
where
    D: DiscoveryRepository + Send + Sync,
    B: BlockRepository + Send + Sync,
    R: PremiumProvider + Send + Sync,
    L: LocationRepository + Send + Sync,
{
    discovery_repo: Arc<D>,
    block_repo: Arc<B>,
    premium: Arc<R>,
    location_repo: Arc<L>,
    default_radius_km: f64,
    cache: Option<RedisCache>,
}

impl<D, B, R, L> DiscoveryService<D, B, R, L>
where
    D: DiscoveryRepository + Send + Sync,
    B: BlockRepository + Send + Sync,
    R: PremiumProvider + Send + Sync,
    L: LocationRepository + Send + Sync,
{
    pub fn with_dependencies(
        discovery_repo: Arc<D>,
        block_repo: Arc<B>,
        premium: Arc<R>,
        location_repo: Arc<L>,
        default_radius_km: f64,
    ) -> Self {
        DiscoveryService {
            discovery_repo,
            block_repo,
            premium,
            location_repo,
            default_radius_km,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: RedisCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Users within `radius_km` of the origin, nearest first, ties broken by
    /// user id. Hidden profiles, profiles above the viewer's privacy tier and
    /// users in a blocking relationship with the viewer never appear. The
    /// repository only narrows by bounding box; every other cut happens here.
    pub async fn find_nearby_users(
        &self,
        viewer_id: Uuid,
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_km: Option<f64>,
        limit: i64,
        offset: i64,
        filters: NearbyFilters,
    ) -> Result<Vec<NearbyUser>, error::SystemError> {
        let (lat, lon) = self.resolve_origin(&viewer_id, latitude, longitude).await?;
        let radius = radius_km.unwrap_or(self.default_radius_km);
        let bbox = BoundingBox::around(lat, lon, radius);

        let candidates = self.discovery_repo.find_user_candidates(&bbox).await?;

        // Premium viewers see premium-only tier and up; members see the
        // members tier and up. Tier 0 is never returned.
        let viewer_tier = if self.premium.is_premium(&viewer_id).await? {
            PRIVACY_PREMIUM_ONLY
        } else {
            PRIVACY_PREMIUM_ONLY + 1
        };

        let excluded: HashSet<Uuid> =
            self.block_repo.related_block_ids(&viewer_id).await?.into_iter().collect();

        let active_cutoff = filters.active_within_hours.map(|h| Utc::now() - Duration::hours(h));

        let mut nearby: Vec<NearbyUser> = candidates
            .into_iter()
            .filter(|c| c.privacy_level >= viewer_tier && !excluded.contains(&c.user_id))
            .filter(|c| filters.role.as_deref().map_or(true, |r| c.role == r))
            .filter(|c| !filters.verified.unwrap_or(false) || c.is_verified)
            .filter(|c| active_cutoff.map_or(true, |cutoff| c.last_active > cutoff))
            .map(|c| {
                let distance_km = haversine_km(lat, lon, c.latitude, c.longitude);
                NearbyUser { user: c, distance_km }
            })
            .filter(|n| n.distance_km <= radius)
            .collect();

        nearby.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.user.user_id.cmp(&b.user.user_id))
        });

        Ok(page(nearby, limit, offset))
    }

    /// Active venues within `radius_km`, nearest first. Venue pages are the
    /// same for every viewer, so they go through the short-lived cache when
    /// one is configured.
    pub async fn find_nearby_venues(
        &self,
        viewer_id: Uuid,
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_km: Option<f64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NearbyVenue>, error::SystemError> {
        let (lat, lon) = self.resolve_origin(&viewer_id, latitude, longitude).await?;
        let radius = radius_km.unwrap_or(self.default_radius_km);

        let cache_key = format!("nearby:venues:{lat:.4}:{lon:.4}:{radius}:{limit}:{offset}");
        if let Some(cache) = &self.cache {
            match cache.get::<Vec<NearbyVenue>>(&cache_key).await {
                Ok(Some(cached)) => return Ok(cached),
                Ok(None) => {}
                Err(e) => log::warn!("venue cache read failed, falling through: {e}"),
            }
        }

        let bbox = BoundingBox::around(lat, lon, radius);
        let candidates = self.discovery_repo.find_venue_candidates(&bbox).await?;

        let mut nearby: Vec<NearbyVenue> = candidates
            .into_iter()
            .filter(|v| v.is_active)
            .map(|v| {
                let distance_km = haversine_km(lat, lon, v.latitude, v.longitude);
                NearbyVenue { venue: v, distance_km }
            })
            .filter(|n| n.distance_km <= radius)
            .collect();

        nearby.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.venue.id.cmp(&b.venue.id))
        });

        let page = page(nearby, limit, offset);

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(&cache_key, &page, VENUE_CACHE_TTL_SECS).await {
                log::warn!("venue cache write failed: {e}");
            }
        }

        Ok(page)
    }

    /// Explicit coordinates win; otherwise fall back to the viewer's stored
    /// location. (0,0) is the no-location sentinel and never a valid origin.
    async fn resolve_origin(
        &self,
        viewer_id: &Uuid,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(f64, f64), error::SystemError> {
        let (lat, lon) = match (latitude, longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            (None, None) => match self.location_repo.find_by_subject(viewer_id).await? {
                Some(stored) => (stored.latitude, stored.longitude),
                None => {
                    return Err(error::SystemError::bad_request(
                        "No coordinates provided and no stored location",
                    ))
                }
            },
            _ => {
                return Err(error::SystemError::bad_request(
                    "Both latitude and longitude are required",
                ))
            }
        };

        if lat == 0.0 && lon == 0.0 {
            return Err(error::SystemError::bad_request("No coordinates provided"));
        }

        Ok((lat, lon))
    }
}

fn page<T>(items: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    items.into_iter().skip(offset.max(0) as usize).take(limit.max(0) as usize).collect()
}
