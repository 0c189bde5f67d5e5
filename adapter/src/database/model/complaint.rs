use chrono::{DateTime, Utc};
use kernel::model::{
    complaint::{
        Complaint, ComplaintContext, ComplaintPriority, ComplaintReply, ComplaintStatus,
        ComplaintSubject, ComplaintUser,
    },
    id::{ComplaintId, UserId},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ComplaintRow {
    pub complaint_id: ComplaintId,
    pub subject: String,
    pub message: String,
    pub priority: String,
    pub status: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub user_id: Option<UserId>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub user_role: Option<String>,
    pub context_page: Option<String>,
    pub context_ua: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ComplaintRow {
    pub fn into_complaint(self, replies: Vec<ComplaintReply>) -> Result<Complaint, AppError> {
        let ComplaintRow {
            complaint_id,
            subject,
            message,
            priority,
            status,
            is_read,
            read_at,
            user_id,
            user_email,
            user_name,
            user_role,
            context_page,
            context_ua,
            created_at,
        } = self;
        let subject = subject.parse::<ComplaintSubject>().map_err(|_| {
            AppError::ConversionEntityError(format!("unknown complaint subject: {subject}"))
        })?;
        let priority = priority.parse::<ComplaintPriority>().map_err(|_| {
            AppError::ConversionEntityError(format!("unknown complaint priority: {priority}"))
        })?;
        let status = status.parse::<ComplaintStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!("unknown complaint status: {status}"))
        })?;
        Ok(Complaint {
            complaint_id,
            subject,
            message,
            priority,
            status,
            is_read,
            read_at,
            user: ComplaintUser {
                id: user_id,
                email: user_email,
                name: user_name,
                role: user_role,
            },
            context: ComplaintContext {
                page: context_page,
                user_agent: context_ua,
            },
            replies,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct ComplaintReplyRow {
    pub complaint_id: ComplaintId,
    pub subject: String,
    pub message: String,
    pub sent_from: String,
    pub sent_at: DateTime<Utc>,
}

impl From<ComplaintReplyRow> for ComplaintReply {
    fn from(value: ComplaintReplyRow) -> Self {
        let ComplaintReplyRow {
            complaint_id: _,
            subject,
            message,
            sent_from,
            sent_at,
        } = value;
        ComplaintReply {
            subject,
            message,
            from: sent_from,
            sent_at,
        }
    }
}
