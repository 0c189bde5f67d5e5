use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    complaint::event::AppendReply,
    event::{ChangeOp, StreamEvent},
    id::ComplaintId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AdminKey,
    model::complaint::{
        CreateComplaintRequest, CreateComplaintResponse, InboxItemResponse, OkResponse,
        ReplyRequest, UnreadCountResponse,
    },
};

const INBOX_LIMIT: i64 = 500;

pub async fn file_complaint(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateComplaintRequest>,
) -> AppResult<(StatusCode, Json<CreateComplaintResponse>)> {
    req.validate(&())?;

    let complaint = registry.complaint_repository().create(req.into()).await?;

    // Admin notification is best-effort; the complaint is already filed.
    let admin_to = registry.admin_email().to_owned();
    if let Err(e) = registry
        .mailer()
        .send_complaint_filed(&admin_to, &complaint)
        .await
    {
        tracing::warn!(error = %e, "Failed to send complaint notification mail");
    }

    registry.event_hub().publish_complaint(StreamEvent::complaint(
        ChangeOp::Insert,
        complaint.complaint_id.to_string(),
    ));

    Ok((
        StatusCode::CREATED,
        Json(CreateComplaintResponse {
            id: complaint.complaint_id,
            created_at: complaint.created_at,
        }),
    ))
}

pub async fn show_inbox(
    _admin: AdminKey,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<InboxItemResponse>>> {
    registry
        .complaint_repository()
        .find_all(INBOX_LIMIT)
        .await
        .map(|items| items.into_iter().map(InboxItemResponse::from).collect())
        .map(Json)
}

pub async fn unread_count(
    _admin: AdminKey,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UnreadCountResponse>> {
    registry
        .complaint_repository()
        .unread_count()
        .await
        .map(|count| Json(UnreadCountResponse { count }))
}

pub async fn mark_read(
    _admin: AdminKey,
    Path(complaint_id): Path<ComplaintId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OkResponse>> {
    registry.complaint_repository().mark_read(complaint_id).await?;

    registry.event_hub().publish_complaint(StreamEvent::complaint(
        ChangeOp::Update,
        complaint_id.to_string(),
    ));

    Ok(Json(OkResponse::new()))
}

pub async fn reply_to_complaint(
    _admin: AdminKey,
    Path(complaint_id): Path<ComplaintId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ReplyRequest>,
) -> AppResult<Json<OkResponse>> {
    req.validate(&())?;

    let complaint = registry
        .complaint_repository()
        .find_by_id(complaint_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Complaint not found".into()))?;

    let Some(to) = complaint.user.email.clone().filter(|e| !e.is_empty()) else {
        return Err(AppError::UnprocessableEntity(
            "No recipient email on complaint".into(),
        ));
    };

    // Unlike the other notifications, the reply IS the operation; a failed
    // send fails the request before anything is recorded.
    registry
        .mailer()
        .send_complaint_reply(&to, &req.subject, &req.message, &complaint)
        .await?;

    let admin_from = registry.admin_email().to_owned();
    registry
        .complaint_repository()
        .append_reply(AppendReply::new(
            complaint_id,
            req.subject,
            req.message,
            admin_from,
        ))
        .await?;

    Ok(Json(OkResponse::new()))
}

pub async fn delete_complaint(
    _admin: AdminKey,
    Path(complaint_id): Path<ComplaintId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OkResponse>> {
    registry.complaint_repository().delete(complaint_id).await?;

    registry.event_hub().publish_complaint(StreamEvent::complaint(
        ChangeOp::Delete,
        complaint_id.to_string(),
    ));

    Ok(Json(OkResponse::new()))
}
