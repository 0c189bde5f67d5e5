use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    complaint::{
        event::CreateComplaint, Complaint, ComplaintContext, ComplaintPriority, ComplaintStatus,
        ComplaintSubject, ComplaintUser,
    },
    id::{ComplaintId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUserRequest {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl From<ComplaintUserRequest> for ComplaintUser {
    fn from(value: ComplaintUserRequest) -> Self {
        let ComplaintUserRequest {
            id,
            email,
            name,
            role,
        } = value;
        ComplaintUser {
            id,
            email,
            name,
            role,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ComplaintContextRequest {
    pub page: Option<String>,
    pub ua: Option<String>,
}

impl From<ComplaintContextRequest> for ComplaintContext {
    fn from(value: ComplaintContextRequest) -> Self {
        ComplaintContext {
            page: value.page,
            user_agent: value.ua,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    #[garde(skip)]
    pub subject: ComplaintSubject,
    #[garde(length(min = 1))]
    pub message: String,
    #[garde(skip)]
    pub priority: ComplaintPriority,
    #[garde(skip)]
    #[serde(default)]
    pub user: ComplaintUserRequest,
    #[garde(skip)]
    #[serde(default)]
    pub context: ComplaintContextRequest,
}

impl From<CreateComplaintRequest> for CreateComplaint {
    fn from(value: CreateComplaintRequest) -> Self {
        let CreateComplaintRequest {
            subject,
            message,
            priority,
            user,
            context,
        } = value;
        CreateComplaint::new(subject, message, priority, user.into(), context.into())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintResponse {
    pub id: ComplaintId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxUserResponse {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Inbox listing item: the complainant's name/email are flattened to the top
/// level for the UI, with the snapshot kept nested alongside.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxItemResponse {
    pub id: ComplaintId,
    pub subject: ComplaintSubject,
    pub message: String,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub fullname: String,
    pub email: String,
    pub user: InboxUserResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Complaint> for InboxItemResponse {
    fn from(value: Complaint) -> Self {
        let Complaint {
            complaint_id,
            subject,
            message,
            priority,
            status,
            is_read,
            read_at,
            user,
            context: _,
            replies: _,
            created_at,
        } = value;
        let name = user.name.unwrap_or_default();
        let email = user.email.unwrap_or_default();
        Self {
            id: complaint_id,
            subject,
            message,
            priority,
            status,
            is_read,
            read_at,
            fullname: name.clone(),
            email: email.clone(),
            user: InboxUserResponse {
                id: user.id,
                name,
                email,
                role: user.role.unwrap_or_default(),
            },
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    #[garde(length(min = 1))]
    pub subject: String,
    #[garde(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_kebab_case_enums() {
        let req: CreateComplaintRequest = serde_json::from_value(serde_json::json!({
            "subject": "schedule-conflict",
            "message": "Double booked.",
            "priority": "critical"
        }))
        .unwrap();
        assert_eq!(req.subject, ComplaintSubject::ScheduleConflict);
        assert_eq!(req.priority, ComplaintPriority::Critical);
        assert!(req.user.email.is_none());
    }

    #[test]
    fn inbox_item_flattens_the_user_snapshot() {
        let complaint = Complaint {
            complaint_id: ComplaintId::new(),
            subject: ComplaintSubject::Other,
            message: "msg".into(),
            priority: ComplaintPriority::Low,
            status: ComplaintStatus::Open,
            is_read: false,
            read_at: None,
            user: ComplaintUser {
                id: None,
                email: Some("sam@example.com".into()),
                name: Some("Sam".into()),
                role: Some("student".into()),
            },
            context: ComplaintContext::default(),
            replies: Vec::new(),
            created_at: Utc::now(),
        };

        let item = InboxItemResponse::from(complaint);
        assert_eq!(item.fullname, "Sam");
        assert_eq!(item.email, "sam@example.com");
        assert_eq!(item.user.role, "student");
    }
}
