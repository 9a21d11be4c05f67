use uuid::Uuid;

use crate::api::error;

/// Seam over the subscription collaborator. Billing and renewal are not this
/// service's concern; it only asks whether a membership is currently active.
#[async_trait::async_trait]
pub trait PremiumProvider {
    async fn is_premium(&self, user_id: &Uuid) -> Result<bool, error::SystemError>;
}
