use axum::{
    extract::{Path, Query, State},
    http::header,
    Json,
};
use chrono::Local;
use garde::Validate;
use kernel::model::{
    booking::event::ActionBooking,
    event::{BookingKind, ChangeOp, StreamEvent},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AdminKey, OwnerHeaders},
    model::{
        booking::{
            ApprovedBookingResponse, BookingResponse, BulkActionRequest, CreateBookingRequest,
            HistoryResponse, OwnerQuery, TodayTimetableRow, TotalResponse,
        },
        timetable::{history_slots, HistorySlotResponse, HistoryTimetableQuery, TodayTimetableQuery},
        MessageResponse,
    },
};

type NoStore<T> = ([(header::HeaderName, &'static str); 1], Json<T>);

fn no_store<T>(body: T) -> NoStore<T> {
    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}

pub async fn submit_booking(
    OwnerHeaders(caller): OwnerHeaders,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .create(req.into_event(caller))
        .await?;

    registry.event_hub().publish_booking(StreamEvent::booking(
        BookingKind::Pending,
        ChangeOp::Insert,
        booking.booking_id.to_string(),
    ));

    // The full record goes back so the caller can reserve timetable slots
    // against its id.
    Ok(Json(booking.into()))
}

pub async fn show_pending_bookings(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_pending(None)
        .await
        .map(|items| items.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn show_my_bookings(
    Query(query): Query<OwnerQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_pending(query.into())
        .await
        .map(|items| items.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn delete_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .booking_repository()
        .delete_pending(booking_id)
        .await?;

    registry.event_hub().publish_booking(StreamEvent::booking(
        BookingKind::Pending,
        ChangeOp::Delete,
        booking_id.to_string(),
    ));

    Ok(Json(MessageResponse::new("Booking deleted successfully")))
}

pub async fn approve_bulk(
    _admin: AdminKey,
    State(registry): State<AppRegistry>,
    Json(req): Json<BulkActionRequest>,
) -> AppResult<Json<MessageResponse>> {
    if req.bookings.is_empty() {
        return Err(AppError::UnprocessableEntity("No bookings received.".into()));
    }

    let items: Vec<ActionBooking> = req.bookings.into_iter().map(Into::into).collect();

    registry
        .booking_repository()
        .action(items.clone(), "admin")
        .await?;

    // The records are committed; everything past this point is best-effort.
    for item in &items {
        if let Some(id) = item.booking_id {
            registry.event_hub().publish_booking(StreamEvent::booking(
                BookingKind::Pending,
                ChangeOp::Delete,
                id.to_string(),
            ));
        }

        if item.email.is_empty() {
            continue;
        }
        if let Err(e) = registry.mailer().send_booking_status(item).await {
            tracing::warn!(error = %e, to = item.email, "Failed to send status mail");
        }
    }

    Ok(Json(MessageResponse::new(
        "Booking(s) actioned and moved to history!",
    )))
}

pub async fn show_approved_bookings(
    Query(query): Query<OwnerQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ApprovedBookingResponse>>> {
    registry
        .booking_repository()
        .find_approved(query.into())
        .await
        .map(|items| {
            items
                .into_iter()
                .map(ApprovedBookingResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn show_booking_history(
    Query(query): Query<OwnerQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HistoryResponse>>> {
    registry
        .booking_repository()
        .find_history(query.into())
        .await
        .map(|items| items.into_iter().map(HistoryResponse::from).collect())
        .map(Json)
}

pub async fn bookings_total(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotalResponse>> {
    let pending = registry.booking_repository().pending_count().await?;
    let approved = registry.booking_repository().approved_count().await?;
    Ok(Json(TotalResponse {
        total: pending + approved,
    }))
}

pub async fn pending_bookings_total(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotalResponse>> {
    registry
        .booking_repository()
        .pending_count()
        .await
        .map(|total| Json(TotalResponse { total }))
}

pub async fn approved_bookings_total(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotalResponse>> {
    registry
        .booking_repository()
        .approved_count()
        .await
        .map(|total| Json(TotalResponse { total }))
}

pub async fn today_timetable(
    Query(query): Query<TodayTimetableQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<NoStore<Vec<TodayTimetableRow>>> {
    let today = Local::now().date_naive();
    let items = registry
        .booking_repository()
        .find_approved_on(today, query.facility)
        .await?;

    let mut rows: Vec<TodayTimetableRow> =
        items.into_iter().map(TodayTimetableRow::from).collect();
    rows.sort_by(|a, b| {
        a.start_fraction()
            .partial_cmp(&b.start_fraction())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(no_store(rows))
}

pub async fn history_timetable(
    Query(query): Query<HistoryTimetableQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<NoStore<Vec<HistorySlotResponse>>> {
    let records = registry
        .booking_repository()
        .find_history_in_range(&query.facility, query.status, query.start, query.end)
        .await?;

    Ok(no_store(history_slots(records)))
}
