use axum::{
    extract::{Path, Query, State},
    http::header,
    Json,
};
use garde::Validate;
use kernel::model::timetable::timetable_key;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AdminKey,
    model::{
        timetable::{
            BookSlotsRequest, BulkTimetableRequest, GenerateSlotsRequest, ReleaseSlotRequest,
            SlotResponse, TimetableRangeQuery,
        },
        MessageResponse,
    },
};

pub async fn book_slots(
    Path(facility): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<BookSlotsRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    registry
        .timetable_repository()
        .book_slots(req.into_event(timetable_key(&facility)))
        .await
        .map(|_| Json(MessageResponse::new("Slots booked successfully!")))
}

pub async fn show_booked_slots(
    Path(facility): Path<String>,
    Query(query): Query<TimetableRangeQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<([(header::HeaderName, &'static str); 1], Json<Vec<SlotResponse>>)> {
    let slots = registry
        .timetable_repository()
        .find_booked_in_range(&timetable_key(&facility), query.start, query.end)
        .await?;

    // The UI re-reads right after booking; never serve a cached view.
    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(slots.into_iter().map(SlotResponse::from).collect()),
    ))
}

pub async fn generate_slots(
    Path(facility): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<GenerateSlotsRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    registry
        .timetable_repository()
        .generate_slots(req.into_event(timetable_key(&facility)))
        .await
        .map(|_| Json(MessageResponse::new("Slots generated successfully!")))
}

pub async fn bulk_book_slots(
    _admin: AdminKey,
    Path(facility): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<BulkTimetableRequest>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .timetable_repository()
        .bulk_book(req.into_event(timetable_key(&facility)))
        .await
        .map(|_| Json(MessageResponse::new("Bulk slots booked successfully!")))
}

pub async fn release_slot(
    _admin: AdminKey,
    Path(facility): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ReleaseSlotRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    registry
        .timetable_repository()
        .release_slot(req.into_event(timetable_key(&facility)))
        .await
        .map(|_| Json(MessageResponse::new("Slot released successfully")))
}
