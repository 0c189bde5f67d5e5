use derive_new::new;

use super::{ComplaintContext, ComplaintPriority, ComplaintSubject, ComplaintUser};
use crate::model::id::ComplaintId;

#[derive(new)]
pub struct CreateComplaint {
    pub subject: ComplaintSubject,
    pub message: String,
    pub priority: ComplaintPriority,
    pub user: ComplaintUser,
    pub context: ComplaintContext,
}

#[derive(new)]
pub struct AppendReply {
    pub complaint_id: ComplaintId,
    pub subject: String,
    pub message: String,
    pub from: String,
}
