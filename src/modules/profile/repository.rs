use uuid::Uuid;

use crate::{api::error, modules::profile::schema::AllowMessages};

/// Read-only seam over the profile collaborator. Profile CRUD itself is
/// owned by the host platform; display fields are joined in SQL where
/// summaries need them.
#[async_trait::async_trait]
pub trait ProfileRepository {
    /// Messaging privacy setting; users without a profile row fall back to
    /// the default.
    async fn allow_messages(&self, user_id: &Uuid) -> Result<AllowMessages, error::SystemError>;
}
