use actix_web::{get, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        block::repository_pg::BlockRepositoryPg,
        discovery::{
            model::{NearbyFilters, NearbyUser, NearbyUsersQuery, NearbyVenue, NearbyVenuesQuery},
            repository_pg::DiscoveryRepositoryPg,
            service::DiscoveryService,
        },
        location::repository_pg::LocationRepositoryPg,
        premium::repository_pg::PremiumProviderPg,
    },
    utils::ValidatedQuery,
};

type DiscoverySvc = DiscoveryService<
    DiscoveryRepositoryPg,
    BlockRepositoryPg,
    PremiumProviderPg,
    LocationRepositoryPg,
>;

#[get("/users")]
pub async fn get_nearby_users(
    discovery_service: web::Data<DiscoverySvc>,
    query: ValidatedQuery<NearbyUsersQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<NearbyUser>>, error::Error> {
    let viewer_id = get_claims(&req)?.sub;
    let q = query.0;

    let users = discovery_service
        .find_nearby_users(
            viewer_id,
            q.latitude,
            q.longitude,
            q.radius_km,
            q.limit.unwrap_or(20),
            q.offset.unwrap_or(0),
            NearbyFilters {
                role: q.role,
                verified: q.verified,
                active_within_hours: q.active_within_hours,
            },
        )
        .await?;

    Ok(success::Success::ok(Some(users)))
}

#[get("/venues")]
pub async fn get_nearby_venues(
    discovery_service: web::Data<DiscoverySvc>,
    query: ValidatedQuery<NearbyVenuesQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<NearbyVenue>>, error::Error> {
    let viewer_id = get_claims(&req)?.sub;
    let q = query.0;

    let venues = discovery_service
        .find_nearby_venues(
            viewer_id,
            q.latitude,
            q.longitude,
            q.radius_km,
            q.limit.unwrap_or(20),
            q.offset.unwrap_or(0),
        )
        .await?;

    Ok(success::Success::ok(Some(venues)))
}
