use actix_web::{delete, get, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        conversation::{
            model::{ConversationListQuery, ConversationSummary},
            repository_pg::ConversationRepositoryPg,
            service::ConversationService,
        },
        message::repository_pg::MessageRepositoryPg,
    },
    utils::ValidatedQuery,
};

type ConversationSvc = ConversationService<ConversationRepositoryPg, MessageRepositoryPg>;

#[get("/")]
pub async fn get_conversations(
    conversation_service: web::Data<ConversationSvc>,
    query: ValidatedQuery<ConversationListQuery>,
    req: HttpRequest,
) -> Result<success::Success<success::Paged<ConversationSummary>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let (items, total) = conversation_service
        .list_conversations(user_id, query.0.limit.unwrap_or(20), query.0.offset.unwrap_or(0))
        .await?;

    Ok(success::Success::ok(Some(success::Paged { items, total })))
}

#[delete("/{peer_id}")]
pub async fn delete_conversation(
    conversation_service: web::Data<ConversationSvc>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    conversation_service.delete_conversation(user_id, path.into_inner()).await?;

    Ok(success::Success::ok(None).message("Conversation deleted"))
}
