use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    facility::{event::DeleteFacility, FacilityType},
    id::FacilityId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    facility::{CreateFacilityRequest, FacilityResponse, UpdateFacilityRequest},
    MessageResponse,
};

fn parse_type(value: &str) -> AppResult<FacilityType> {
    FacilityType::parse(value)
        .ok_or_else(|| AppError::ConversionEntityError(format!("unknown facility type: {value}")))
}

pub async fn register_facility(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFacilityRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    req.validate(&())?;
    let facility_type = parse_type(&req.facility_type)?;

    registry
        .facility_repository()
        .create(req.into_event(facility_type))
        .await
        .map(|_| {
            (
                StatusCode::CREATED,
                Json(MessageResponse::new("Facility saved successfully!")),
            )
        })
}

pub async fn show_all_facilities(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FacilityResponse>>> {
    registry
        .facility_repository()
        .find_all()
        .await
        .map(|items| items.into_iter().map(FacilityResponse::from).collect())
        .map(Json)
}

pub async fn show_facilities_by_type(
    Path(facility_type): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FacilityResponse>>> {
    let facility_type = parse_type(&facility_type)?;
    registry
        .facility_repository()
        .find_by_type(facility_type)
        .await
        .map(|items| items.into_iter().map(FacilityResponse::from).collect())
        .map(Json)
}

pub async fn show_facility(
    Path((facility_type, facility_id)): Path<(String, FacilityId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FacilityResponse>> {
    let facility_type = parse_type(&facility_type)?;
    registry
        .facility_repository()
        .find_by_id(facility_type, facility_id)
        .await
        .and_then(|facility| match facility {
            Some(facility) => Ok(Json(facility.into())),
            None => Err(AppError::EntityNotFound("Facility not found".into())),
        })
}

pub async fn update_facility(
    Path((facility_type, facility_id)): Path<(String, FacilityId)>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateFacilityRequest>,
) -> AppResult<Json<FacilityResponse>> {
    req.validate(&())?;
    let facility_type = parse_type(&facility_type)?;

    registry
        .facility_repository()
        .update(req.into_event(facility_type, facility_id))
        .await
        .map(FacilityResponse::from)
        .map(Json)
}

pub async fn delete_facility(
    Path((facility_type, facility_id)): Path<(String, FacilityId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    let facility_type = parse_type(&facility_type)?;
    registry
        .facility_repository()
        .delete(DeleteFacility {
            facility_id,
            facility_type,
        })
        .await
        .map(|_| Json(MessageResponse::new("Facility deleted successfully")))
}
