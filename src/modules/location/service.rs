use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::location::{
        model::{UpdateLocationRequest, UpsertLocation, PRIVACY_MEMBERS},
        repository::LocationRepository,
        schema::LocationEntity,
    },
};

#[derive(Clone)]
pub struct LocationService<L>
where
    L: LocationRepository + Send + Sync,
{
    location_repo: Arc<L>,
}

impl<L> LocationService<L>
where
    L: LocationRepository + Send + Sync,
{
    pub fn with_dependencies(location_repo: Arc<L>) -> Self {
        LocationService { location_repo }
    }

    pub async fn update_location(
        &self,
        subject_id: Uuid,
        req: UpdateLocationRequest,
    ) -> Result<LocationEntity, error::SystemError> {
        // Browser geolocation widgets report (0,0) when no fix is available.
        // A real saved coordinate in this domain is never exactly (0,0).
        if req.latitude == 0.0 && req.longitude == 0.0 {
            return Err(error::SystemError::bad_request("No coordinates provided"));
        }

        self.location_repo
            .upsert(&UpsertLocation {
                subject_id,
                latitude: req.latitude,
                longitude: req.longitude,
                city: req.city.unwrap_or_default(),
                country: req.country.unwrap_or_default(),
                privacy_level: req.privacy_level.unwrap_or(PRIVACY_MEMBERS),
            })
            .await
    }

    pub async fn get_location(
        &self,
        subject_id: Uuid,
    ) -> Result<LocationEntity, error::SystemError> {
        self.location_repo
            .find_by_subject(&subject_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Location not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct InMemoryLocationRepo {
        rows: Mutex<Vec<LocationEntity>>,
    }

    impl InMemoryLocationRepo {
        fn new() -> Self {
            Self { rows: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait::async_trait]
    impl LocationRepository for InMemoryLocationRepo {
        async fn upsert(
            &self,
            location: &UpsertLocation,
        ) -> Result<LocationEntity, error::SystemError> {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|r| r.subject_id != location.subject_id);
            let entity = LocationEntity {
                subject_id: location.subject_id,
                latitude: location.latitude,
                longitude: location.longitude,
                city: location.city.clone(),
                country: location.country.clone(),
                privacy_level: location.privacy_level,
                last_updated: chrono::Utc::now(),
            };
            rows.push(entity.clone());
            Ok(entity)
        }

        async fn find_by_subject(
            &self,
            subject_id: &Uuid,
        ) -> Result<Option<LocationEntity>, error::SystemError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|r| r.subject_id == *subject_id).cloned())
        }
    }

    fn request(lat: f64, lon: f64) -> UpdateLocationRequest {
        UpdateLocationRequest {
            latitude: lat,
            longitude: lon,
            city: None,
            country: None,
            privacy_level: None,
        }
    }

    #[tokio::test]
    async fn rejects_zero_zero_coordinates() {
        let svc = LocationService::with_dependencies(Arc::new(InMemoryLocationRepo::new()));

        let err = svc.update_location(Uuid::now_v7(), request(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, error::SystemError::BadRequest(_)));
    }

    #[tokio::test]
    async fn upsert_overwrites_previous_row() {
        let svc = LocationService::with_dependencies(Arc::new(InMemoryLocationRepo::new()));
        let subject = Uuid::now_v7();

        svc.update_location(subject, request(40.0, -3.0)).await.unwrap();
        svc.update_location(subject, request(41.0, 2.0)).await.unwrap();

        let stored = svc.get_location(subject).await.unwrap();
        assert_eq!(stored.latitude, 41.0);
        assert_eq!(stored.longitude, 2.0);
    }

    #[tokio::test]
    async fn missing_location_is_not_found() {
        let svc = LocationService::with_dependencies(Arc::new(InMemoryLocationRepo::new()));

        let err = svc.get_location(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, error::SystemError::NotFound(_)));
    }
}
