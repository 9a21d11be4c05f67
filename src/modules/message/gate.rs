use std::sync::Arc;

use chrono::{Local, NaiveTime, Utc};
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        block::repository::BlockRepository,
        message::repository::MessageRepository,
        premium::repository::PremiumProvider,
        profile::{repository::ProfileRepository, schema::AllowMessages},
    },
};

/// Start of the current day in the server's configured time zone, as the
/// lower bound of the daily quota window.
pub fn start_of_local_day() -> chrono::DateTime<Utc> {
    let now = Local::now();
    now.with_time(NaiveTime::MIN).single().unwrap_or(now).with_timezone(&Utc)
}

/// Pre-send authorization. Checks run in order and short-circuit on the
/// first failure; each rejection is a distinct error variant. The gate is
/// advisory with respect to concurrency: two sends racing at the quota
/// boundary may both pass, which is accepted.
#[derive(Clone)]
pub struct EligibilityGate<B, P, R, M>
where
    B: BlockRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
    R: PremiumProvider + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    block_repo: Arc<B>,
    profile_repo: Arc<P>,
    premium: Arc<R>,
    message_repo: Arc<M>,
    daily_free_limit: u32,
}

impl<B, P, R, M> EligibilityGate<B, P, R, M>
where
    B: BlockRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
    R: PremiumProvider + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    pub fn with_dependencies(
        block_repo: Arc<B>,
        profile_repo: Arc<P>,
        premium: Arc<R>,
        message_repo: Arc<M>,
        daily_free_limit: u32,
    ) -> Self {
        EligibilityGate { block_repo, profile_repo, premium, message_repo, daily_free_limit }
    }

    pub async fn ensure_can_send(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        if sender_id == receiver_id {
            return Err(error::SystemError::SelfMessage);
        }

        if self.block_repo.exists_between(sender_id, receiver_id).await? {
            return Err(error::SystemError::Blocked);
        }

        let sender_is_premium = self.premium.is_premium(sender_id).await?;

        match self.profile_repo.allow_messages(receiver_id).await? {
            AllowMessages::Nobody => return Err(error::SystemError::PrivacyDenied),
            AllowMessages::Premium if !sender_is_premium => {
                return Err(error::SystemError::PrivacyDenied);
            }
            // authenticated callers are members already
            _ => {}
        }

        // Quota is per (sender, receiver) pair, not a global cap.
        if !sender_is_premium && self.daily_free_limit > 0 {
            let sent_today = self
                .message_repo
                .count_sent_since(sender_id, receiver_id, start_of_local_day())
                .await?;

            if sent_today >= self.daily_free_limit as i64 {
                return Err(error::SystemError::QuotaExceeded);
            }
        }

        Ok(())
    }
}
