use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::facility::{
    delete_facility, register_facility, show_all_facilities, show_facilities_by_type,
    show_facility, update_facility,
};

pub fn build_facility_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_facility))
        .route("/", get(show_all_facilities))
        .route("/:facility_type", get(show_facilities_by_type))
        .route("/:facility_type/:facility_id", get(show_facility))
        .route("/:facility_type/:facility_id", put(update_facility))
        .route("/:facility_type/:facility_id", delete(delete_facility));

    Router::new().nest("/facilities", routers)
}
