use uuid::Uuid;

use crate::{
    api::error,
    modules::location::{model::UpsertLocation, schema::LocationEntity},
};

#[async_trait::async_trait]
pub trait LocationRepository {
    /// Insert-or-overwrite; concurrent upserts for the same subject are
    /// last-write-wins.
    async fn upsert(&self, location: &UpsertLocation)
        -> Result<LocationEntity, error::SystemError>;

    async fn find_by_subject(
        &self,
        subject_id: &Uuid,
    ) -> Result<Option<LocationEntity>, error::SystemError>;
}
