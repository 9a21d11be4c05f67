use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::block::{model::BlockedUserRow, repository::BlockRepository},
};

#[derive(Clone)]
pub struct BlockService<B>
where
    B: BlockRepository + Send + Sync,
{
    block_repo: Arc<B>,
}

impl<B> BlockService<B>
where
    B: BlockRepository + Send + Sync,
{
    pub fn with_dependencies(block_repo: Arc<B>) -> Self {
        BlockService { block_repo }
    }

    pub async fn block_user(
        &self,
        user_id: Uuid,
        target_id: Uuid,
    ) -> Result<(), error::SystemError> {
        if user_id == target_id {
            return Err(error::SystemError::bad_request("Cannot block yourself"));
        }

        self.block_repo.create(&user_id, &target_id).await
    }

    pub async fn unblock_user(
        &self,
        user_id: Uuid,
        target_id: Uuid,
    ) -> Result<(), error::SystemError> {
        self.block_repo.delete(&user_id, &target_id).await
    }

    pub async fn get_blocked_users(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<BlockedUserRow>, error::SystemError> {
        self.block_repo.find_blocked_users(&user_id).await
    }
}
