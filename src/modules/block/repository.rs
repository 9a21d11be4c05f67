use uuid::Uuid;

use crate::{api::error, modules::block::model::BlockedUserRow};

#[async_trait::async_trait]
pub trait BlockRepository {
    /// True if either user has blocked the other.
    async fn exists_between(
        &self,
        user_a: &Uuid,
        user_b: &Uuid,
    ) -> Result<bool, error::SystemError>;

    /// Ids blocked by `user_id` plus ids that have blocked `user_id`.
    async fn related_block_ids(&self, user_id: &Uuid) -> Result<Vec<Uuid>, error::SystemError>;

    /// Idempotent; re-blocking an already blocked user is a no-op.
    async fn create(&self, blocker_id: &Uuid, blocked_id: &Uuid)
        -> Result<(), error::SystemError>;

    async fn delete(&self, blocker_id: &Uuid, blocked_id: &Uuid)
        -> Result<(), error::SystemError>;

    async fn find_blocked_users(
        &self,
        blocker_id: &Uuid,
    ) -> Result<Vec<BlockedUserRow>, error::SystemError>;
}
