use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::complaint::{
    delete_complaint, file_complaint, mark_read, reply_to_complaint, show_inbox, unread_count,
};

pub fn build_complaint_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/complains", post(file_complaint))
        .route("/complains/:complaint_id", delete(delete_complaint))
        .route("/complains/:complaint_id/read", patch(mark_read))
        .route("/complains/:complaint_id/reply", post(reply_to_complaint))
        .route("/inbox", get(show_inbox))
        .route("/inbox/unread-count", get(unread_count))
}
