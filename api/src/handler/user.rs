use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::event::DeleteUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    user::{DeleteUserQuery, LoginRequest, LoginResponse, RegisterUserRequest, UserEntryResponse},
    MessageResponse,
};

pub async fn register_user(
    Path(role): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    req.validate(&())?;

    let role: Role = role
        .parse()
        .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;

    // Union members must name a faculty; union and student sign-ups carry
    // id-document references.
    if role == Role::Union && req.faculty.as_deref().unwrap_or_default().is_empty() {
        return Err(AppError::UnprocessableEntity("Missing required fields".into()));
    }
    if matches!(role, Role::Union | Role::Student)
        && (req.id_front.is_none() || req.id_back.is_none())
    {
        return Err(AppError::UnprocessableEntity("Missing required fields".into()));
    }

    let message = match role {
        Role::Union => "Faculty Union Member registered!",
        Role::Student => "Student registered!",
        Role::Staff => "Staff registered!",
    };

    registry
        .user_repository()
        .create(req.into_event(role))
        .await
        .map(|_| Json(MessageResponse::new(message)))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate(&())?;

    let user = registry
        .user_repository()
        .find_by_credentials(&req.email, &req.password)
        .await?;

    // A miss is a regular response, not an error status.
    Ok(Json(
        user.map(LoginResponse::from)
            .unwrap_or_else(LoginResponse::rejected),
    ))
}

pub async fn show_user_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<UserEntryResponse>>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(|users| users.into_iter().map(UserEntryResponse::from).collect())
        .map(Json)
}

pub async fn delete_user(
    Path(user_id): Path<UserId>,
    Query(query): Query<DeleteUserQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    let role: Role = query.user_type.parse().map_err(|_| {
        AppError::ConversionEntityError("User type not specified or invalid".into())
    })?;

    registry
        .user_repository()
        .delete(DeleteUser { user_id, role })
        .await
        .map(|_| Json(MessageResponse::new("User deleted successfully")))
}
