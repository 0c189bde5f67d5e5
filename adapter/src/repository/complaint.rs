use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    complaint::{
        event::{AppendReply, CreateComplaint},
        Complaint, ComplaintReply, ComplaintStatus,
    },
    id::ComplaintId,
};
use kernel::repository::complaint::ComplaintRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::complaint::{ComplaintReplyRow, ComplaintRow},
    ConnectionPool,
};

const COMPLAINT_COLUMNS: &str = r#"
    complaint_id, subject, message, priority, status, is_read, read_at,
    user_id, user_email, user_name, user_role, context_page, context_ua,
    created_at
"#;

#[derive(new)]
pub struct ComplaintRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ComplaintRepository for ComplaintRepositoryImpl {
    async fn create(&self, event: CreateComplaint) -> AppResult<Complaint> {
        let complaint_id = ComplaintId::new();
        let created_at = Utc::now();

        let res = sqlx::query(
            r#"
                INSERT INTO complaints
                (complaint_id, subject, message, priority, status, is_read,
                 user_id, user_email, user_name, user_role, context_page,
                 context_ua, created_at)
                VALUES ($1, $2, $3, $4, $5, false, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(complaint_id)
        .bind(event.subject.to_string())
        .bind(&event.message)
        .bind(event.priority.to_string())
        .bind(ComplaintStatus::Open.to_string())
        .bind(event.user.id)
        .bind(&event.user.email)
        .bind(&event.user.name)
        .bind(&event.user.role)
        .bind(&event.context.page)
        .bind(&event.context.user_agent)
        .bind(created_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No complaint record has been created".into(),
            ));
        }

        let CreateComplaint {
            subject,
            message,
            priority,
            user,
            context,
        } = event;
        Ok(Complaint {
            complaint_id,
            subject,
            message,
            priority,
            status: ComplaintStatus::Open,
            is_read: false,
            read_at: None,
            user,
            context,
            replies: Vec::new(),
            created_at,
        })
    }

    async fn find_all(&self, limit: i64) -> AppResult<Vec<Complaint>> {
        let rows: Vec<ComplaintRow> = sqlx::query_as(&format!(
            r#"
                SELECT {COMPLAINT_COLUMNS}
                FROM complaints
                ORDER BY created_at DESC
                LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let ids: Vec<_> = rows.iter().map(|r| r.complaint_id).collect();
        let reply_rows: Vec<ComplaintReplyRow> = sqlx::query_as(
            r#"
                SELECT complaint_id, subject, message, sent_from, sent_at
                FROM complaint_replies
                WHERE complaint_id = ANY($1)
                ORDER BY sent_at
            "#,
        )
        .bind(&ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut replies: HashMap<ComplaintId, Vec<ComplaintReply>> = HashMap::new();
        for row in reply_rows {
            replies
                .entry(row.complaint_id)
                .or_default()
                .push(ComplaintReply::from(row));
        }

        rows.into_iter()
            .map(|row| {
                let own = replies.remove(&row.complaint_id).unwrap_or_default();
                row.into_complaint(own)
            })
            .collect()
    }

    async fn find_by_id(&self, complaint_id: ComplaintId) -> AppResult<Option<Complaint>> {
        let row: Option<ComplaintRow> = sqlx::query_as(&format!(
            r#"
                SELECT {COMPLAINT_COLUMNS}
                FROM complaints
                WHERE complaint_id = $1
            "#
        ))
        .bind(complaint_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let reply_rows: Vec<ComplaintReplyRow> = sqlx::query_as(
            r#"
                SELECT complaint_id, subject, message, sent_from, sent_at
                FROM complaint_replies
                WHERE complaint_id = $1
                ORDER BY sent_at
            "#,
        )
        .bind(complaint_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let replies = reply_rows.into_iter().map(ComplaintReply::from).collect();
        row.into_complaint(replies).map(Some)
    }

    async fn unread_count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM complaints WHERE NOT is_read")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn mark_read(&self, complaint_id: ComplaintId) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE complaints SET is_read = true, read_at = now() WHERE complaint_id = $1",
        )
        .bind(complaint_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Complaint not found".into()));
        }

        Ok(())
    }

    async fn append_reply(&self, event: AppendReply) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO complaint_replies
                (complaint_id, subject, message, sent_from, sent_at)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event.complaint_id)
        .bind(&event.subject)
        .bind(&event.message)
        .bind(&event.from)
        .bind(Utc::now())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reply record has been created".into(),
            ));
        }

        Ok(())
    }

    async fn delete(&self, complaint_id: ComplaintId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM complaints WHERE complaint_id = $1")
            .bind(complaint_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Complaint not found".into()));
        }

        Ok(())
    }
}
