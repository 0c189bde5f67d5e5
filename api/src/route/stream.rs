use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::stream::{stream_bookings, stream_complaints};

pub fn build_stream_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/stream/bookings", get(stream_bookings))
        .route("/stream/complains", get(stream_complaints))
}
