use async_trait::async_trait;
use derive_new::new;
use shared::error::AppResult;

use crate::model::{booking::event::ActionBooking, complaint::Complaint};

#[derive(Debug, Clone, new)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Outbound mail seam. Callers treat failures as log-and-continue; a failed
/// send never fails the operation that triggered it (the complaint reply is
/// the one exception and propagates).
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: MailMessage) -> AppResult<()>;

    /// Status notification to the booking's contact address.
    async fn send_booking_status(&self, item: &ActionBooking) -> AppResult<()>;

    /// Heads-up to the admin inbox about a newly filed complaint.
    async fn send_complaint_filed(&self, to: &str, complaint: &Complaint) -> AppResult<()>;

    /// Admin reply to the complainant, quoting the original message.
    async fn send_complaint_reply(
        &self,
        to: &str,
        subject: &str,
        message: &str,
        complaint: &Complaint,
    ) -> AppResult<()>;
}
