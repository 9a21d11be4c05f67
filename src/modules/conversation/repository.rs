use uuid::Uuid;

use crate::{api::error, modules::conversation::model::ConversationSummary};

#[async_trait::async_trait]
pub trait ConversationRepository {
    /// Summaries ordered by last message time descending, ties broken by
    /// last message id so pagination stays stable. Peers stay listed
    /// even when the viewer soft-deleted every message of the thread; the
    /// deletion flags prune message detail, not list membership.
    async fn list_summaries(
        &self,
        user_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ConversationSummary>, error::SystemError>;

    /// Distinct-peer count, independent of pagination.
    async fn count_peers(&self, user_id: &Uuid) -> Result<i64, error::SystemError>;
}
