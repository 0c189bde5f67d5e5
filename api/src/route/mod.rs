pub mod booking;
pub mod complaint;
pub mod facility;
pub mod health;
pub mod stream;
pub mod timetable;
pub mod user;

use axum::Router;
use registry::AppRegistry;

/// Everything the service exposes, nested under `/api`.
pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(health::build_health_check_routers())
        .merge(user::build_user_routers())
        .merge(facility::build_facility_routers())
        .merge(booking::build_booking_routers())
        .merge(timetable::build_timetable_routers())
        .merge(complaint::build_complaint_routers())
        .merge(stream::build_stream_routers());
    Router::new().nest("/api", router)
}
