use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        block::repository::BlockRepository,
        message::{
            gate::EligibilityGate,
            model::{InsertMessage, SendMessageRequest},
            repository::MessageRepository,
            schema::MessageEntity,
        },
        notification::{NewMessageEvent, NotificationSender},
        premium::repository::PremiumProvider,
        profile::repository::ProfileRepository,
    },
};

#[derive(Clone)]
pub struct MessageService<M, B, P, R>
where
    M: MessageRepository + Send + Sync,
    B: BlockRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
    R: PremiumProvider + Send + Sync,
{
    message_repo: Arc<M>,
    gate: EligibilityGate<B, P, R, M>,
    notifier: NotificationSender,
}

impl<M, B, P, R> MessageService<M, B, P, R>
where
    M: MessageRepository + Send + Sync,
    B: BlockRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
    R: PremiumProvider + Send + Sync,
{
    pub fn with_dependencies(
        message_repo: Arc<M>,
        block_repo: Arc<B>,
        profile_repo: Arc<P>,
        premium: Arc<R>,
        notifier: NotificationSender,
        daily_free_limit: u32,
    ) -> Self {
        let gate = EligibilityGate::with_dependencies(
            block_repo,
            profile_repo,
            premium,
            message_repo.clone(),
            daily_free_limit,
        );
        MessageService { message_repo, gate, notifier }
    }

    /// Flow: validate payload, run the eligibility gate, append, publish the
    /// new-message event. The event is fire-and-forget; a closed channel
    /// never fails the send.
    pub async fn send_message(
        &self,
        sender_id: Uuid,
        req: SendMessageRequest,
    ) -> Result<MessageEntity, error::SystemError> {
        let content = req.content.unwrap_or_default();
        if content.trim().is_empty() && req.attachment_url.is_none() {
            return Err(error::SystemError::EmptyMessage);
        }

        self.gate.ensure_can_send(&sender_id, &req.receiver_id).await?;

        let message = self
            .message_repo
            .append(&InsertMessage {
                sender_id,
                receiver_id: req.receiver_id,
                content,
                attachment_url: req.attachment_url,
                message_type: req.message_type.unwrap_or_default(),
            })
            .await?;

        if let Err(e) = self.notifier.send(NewMessageEvent {
            message_id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
        }) {
            log::warn!("notification channel closed, event dropped: {e}");
        }

        Ok(message)
    }

    /// Thread between `user_id` and `peer_id` in chronological order, plus
    /// the visible total. Reading a thread marks it read.
    pub async fn get_conversation(
        &self,
        user_id: Uuid,
        peer_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<MessageEntity>, i64), error::SystemError> {
        let mut messages =
            self.message_repo.list_conversation(&user_id, &peer_id, limit, offset).await?;
        messages.reverse();

        let total = self.message_repo.count_conversation(&user_id, &peer_id).await?;

        self.message_repo.mark_conversation_read(&user_id, &peer_id).await?;

        Ok((messages, total))
    }

    pub async fn mark_read(
        &self,
        message_id: i64,
        user_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let updated = self.message_repo.mark_read(message_id, &user_id).await?;

        if !updated {
            return Err(error::SystemError::forbidden(
                "Only the receiver can mark a message as read",
            ));
        }

        Ok(())
    }

    /// NotFound rather than Forbidden for non-participants, so the call
    /// does not reveal whether the message exists.
    pub async fn delete_message(
        &self,
        message_id: i64,
        user_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let deleted = self.message_repo.soft_delete(message_id, &user_id).await?;

        if !deleted {
            return Err(error::SystemError::not_found("Message not found"));
        }

        Ok(())
    }

}
