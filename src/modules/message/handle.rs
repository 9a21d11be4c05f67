use actix_web::{delete, get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        block::repository_pg::BlockRepositoryPg,
        message::{
            model::{SendMessageRequest, ThreadQuery, ThreadResponse},
            repository_pg::MessageRepositoryPg,
            schema::MessageEntity,
            service::MessageService,
        },
        premium::repository_pg::PremiumProviderPg,
        profile::repository_pg::ProfileRepositoryPg,
    },
    utils::{ValidatedJson, ValidatedQuery},
};

type MessageSvc =
    MessageService<MessageRepositoryPg, BlockRepositoryPg, ProfileRepositoryPg, PremiumProviderPg>;

#[post("/")]
pub async fn send_message(
    message_service: web::Data<MessageSvc>,
    body: ValidatedJson<SendMessageRequest>,
    req: HttpRequest,
) -> Result<success::Success<MessageEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let message = message_service.send_message(user_id, body.0).await?;

    Ok(success::Success::created(Some(message)).message("Message sent"))
}

#[get("/{peer_id}")]
pub async fn get_conversation(
    message_service: web::Data<MessageSvc>,
    path: web::Path<Uuid>,
    query: ValidatedQuery<ThreadQuery>,
    req: HttpRequest,
) -> Result<success::Success<ThreadResponse>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let (messages, total) = message_service
        .get_conversation(
            user_id,
            path.into_inner(),
            query.0.limit.unwrap_or(50),
            query.0.offset.unwrap_or(0),
        )
        .await?;

    Ok(success::Success::ok(Some(ThreadResponse { messages, total })))
}

#[post("/{message_id}/read")]
pub async fn mark_read(
    message_service: web::Data<MessageSvc>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    message_service.mark_read(path.into_inner(), user_id).await?;

    Ok(success::Success::ok(None).message("Message marked as read"))
}

#[delete("/{message_id}")]
pub async fn delete_message(
    message_service: web::Data<MessageSvc>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    message_service.delete_message(path.into_inner(), user_id).await?;

    Ok(success::Success::ok(None).message("Message deleted"))
}
