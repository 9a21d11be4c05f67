use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        conversation::{model::ConversationSummary, repository::ConversationRepository},
        message::repository::MessageRepository,
    },
};

#[derive(Clone)]
pub struct ConversationService<C, M>
where
    C: ConversationRepository + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    conversation_repo: Arc<C>,
    message_repo: Arc<M>,
}

impl<C, M> ConversationService<C, M>
where
    C: ConversationRepository + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    pub fn with_dependencies(conversation_repo: Arc<C>, message_repo: Arc<M>) -> Self {
        ConversationService { conversation_repo, message_repo }
    }

    pub async fn list_conversations(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ConversationSummary>, i64), error::SystemError> {
        let summaries = self.conversation_repo.list_summaries(&user_id, limit, offset).await?;
        let total = self.conversation_repo.count_peers(&user_id).await?;

        Ok((summaries, total))
    }

    pub async fn delete_conversation(
        &self,
        user_id: Uuid,
        peer_id: Uuid,
    ) -> Result<(), error::SystemError> {
        self.message_repo.soft_delete_conversation(&user_id, &peer_id).await
    }
}
