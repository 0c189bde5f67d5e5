use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{delete_user, login, register_user, show_user_list};

pub fn build_user_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/register/:role", post(register_user))
        .route("/login", post(login))
        .route("/users", get(show_user_list))
        .route("/users/:user_id", delete(delete_user))
}
