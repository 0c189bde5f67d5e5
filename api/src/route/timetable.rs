use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::timetable::{
    book_slots, bulk_book_slots, generate_slots, release_slot, show_booked_slots,
};

pub fn build_timetable_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/:facility", post(book_slots))
        .route("/:facility", get(show_booked_slots))
        .route("/:facility", delete(release_slot))
        .route("/:facility/generate", post(generate_slots))
        .route("/:facility/bulk", post(bulk_book_slots));

    Router::new().nest("/timetable", routers)
}
