use actix_web::{delete, get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::block::{
        model::BlockedUserRow, repository_pg::BlockRepositoryPg, service::BlockService,
    },
};

type BlockSvc = BlockService<BlockRepositoryPg>;

#[post("/{user_id}")]
pub async fn block_user(
    block_service: web::Data<BlockSvc>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    block_service.block_user(user_id, path.into_inner()).await?;

    Ok(success::Success::ok(None).message("User blocked"))
}

#[delete("/{user_id}")]
pub async fn unblock_user(
    block_service: web::Data<BlockSvc>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    block_service.unblock_user(user_id, path.into_inner()).await?;

    Ok(success::Success::ok(None).message("User unblocked"))
}

#[get("/")]
pub async fn get_blocked_users(
    block_service: web::Data<BlockSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<BlockedUserRow>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let blocked = block_service.get_blocked_users(user_id).await?;

    Ok(success::Success::ok(Some(blocked)))
}
