use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    approve_bulk, approved_bookings_total, bookings_total, delete_booking, history_timetable,
    pending_bookings_total, show_approved_bookings, show_booking_history, show_my_bookings,
    show_pending_bookings, submit_booking, today_timetable,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/booking", post(submit_booking))
        .route("/bookings", get(show_pending_bookings))
        .route("/bookings/:booking_id", delete(delete_booking))
        .route("/my-bookings", get(show_my_bookings))
        .route("/approved-bookings", get(show_approved_bookings))
        .route("/approve-bulk", post(approve_bulk))
        .route("/booking-history", get(show_booking_history))
        .route("/bookings-total", get(bookings_total))
        .route("/pending-bookings-total", get(pending_bookings_total))
        .route("/approved-bookings-total", get(approved_bookings_total))
        .route("/today-timetable", get(today_timetable))
        .route("/history-timetable", get(history_timetable))
}
