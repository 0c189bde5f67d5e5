use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    facility::{
        event::{CreateFacility, DeleteFacility, UpdateFacility},
        Facility, FacilityType,
    },
    id::FacilityId,
};

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn create(&self, event: CreateFacility) -> AppResult<FacilityId>;
    async fn find_all(&self) -> AppResult<Vec<Facility>>;
    async fn find_by_type(&self, facility_type: FacilityType) -> AppResult<Vec<Facility>>;
    async fn find_by_id(
        &self,
        facility_type: FacilityType,
        facility_id: FacilityId,
    ) -> AppResult<Option<Facility>>;
    // Full-record update; returns the stored result.
    async fn update(&self, event: UpdateFacility) -> AppResult<Facility>;
    async fn delete(&self, event: DeleteFacility) -> AppResult<()>;
}
