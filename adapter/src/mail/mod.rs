use async_trait::async_trait;
use kernel::mailer::{MailMessage, Mailer};
use kernel::model::{booking::event::ActionBooking, complaint::Complaint};
use reqwest::Client;
use shared::{
    config::MailConfig,
    error::{AppError, AppResult},
};

pub mod template;

/// Dispatches mail through an HTTP mail API: one JSON POST per message,
/// bearer-authenticated. The callers decide whether a failure matters; here
/// it is just reported.
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    api_key: String,
    sender: String,
}

impl HttpMailer {
    pub fn new(cfg: &MailConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key.clone(),
            sender: cfg.sender.clone(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: MailMessage) -> AppResult<()> {
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "from": self.sender,
                "to": message.to,
                "subject": message.subject,
                "html": message.html,
            }))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("mail dispatch failed: {e}")))?;

        if !res.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "mail endpoint returned {}",
                res.status()
            )));
        }

        Ok(())
    }

    async fn send_booking_status(&self, item: &ActionBooking) -> AppResult<()> {
        self.send(template::booking_status_mail(item)).await
    }

    async fn send_complaint_filed(&self, to: &str, complaint: &Complaint) -> AppResult<()> {
        self.send(template::complaint_filed_mail(to, complaint)).await
    }

    async fn send_complaint_reply(
        &self,
        to: &str,
        subject: &str,
        message: &str,
        complaint: &Complaint,
    ) -> AppResult<()> {
        self.send(template::complaint_reply_mail(to, subject, message, complaint))
            .await
    }
}
