use actix_web::{get, put, HttpRequest, web};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::location::{
        model::UpdateLocationRequest, repository_pg::LocationRepositoryPg,
        schema::LocationEntity, service::LocationService,
    },
    utils::ValidatedJson,
};

type LocationSvc = LocationService<LocationRepositoryPg>;

#[put("/")]
pub async fn update_location(
    location_service: web::Data<LocationSvc>,
    body: ValidatedJson<UpdateLocationRequest>,
    req: HttpRequest,
) -> Result<success::Success<LocationEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let location = location_service.update_location(user_id, body.0).await?;

    Ok(success::Success::ok(Some(location)).message("Location updated"))
}

#[get("/")]
pub async fn get_location(
    location_service: web::Data<LocationSvc>,
    req: HttpRequest,
) -> Result<success::Success<LocationEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let location = location_service.get_location(user_id).await?;

    Ok(success::Success::ok(Some(location)))
}
