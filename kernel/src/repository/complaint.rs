use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    complaint::{
        event::{AppendReply, CreateComplaint},
        Complaint,
    },
    id::ComplaintId,
};

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn create(&self, event: CreateComplaint) -> AppResult<Complaint>;
    // Newest first, bounded by `limit`.
    async fn find_all(&self, limit: i64) -> AppResult<Vec<Complaint>>;
    async fn find_by_id(&self, complaint_id: ComplaintId) -> AppResult<Option<Complaint>>;
    async fn unread_count(&self) -> AppResult<i64>;
    async fn mark_read(&self, complaint_id: ComplaintId) -> AppResult<()>;
    async fn append_reply(&self, event: AppendReply) -> AppResult<()>;
    async fn delete(&self, complaint_id: ComplaintId) -> AppResult<()>;
}
