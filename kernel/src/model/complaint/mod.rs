use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::id::{ComplaintId, UserId};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintSubject {
    BookingIssue,
    TechnicalSupport,
    ScheduleConflict,
    FacilityProblem,
    GeneralInquiry,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

/// Snapshot of the complainant taken at filing time; not a foreign key.
#[derive(Debug, Clone, Default)]
pub struct ComplaintUser {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ComplaintContext {
    pub page: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ComplaintReply {
    pub subject: String,
    pub message: String,
    pub from: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct Complaint {
    pub complaint_id: ComplaintId,
    pub subject: ComplaintSubject,
    pub message: String,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub user: ComplaintUser,
    pub context: ComplaintContext,
    pub replies: Vec<ComplaintReply>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_kebab_case_storage_form() {
        assert_eq!(ComplaintSubject::BookingIssue.to_string(), "booking-issue");
        assert_eq!(ComplaintStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            "schedule-conflict".parse::<ComplaintSubject>().unwrap(),
            ComplaintSubject::ScheduleConflict
        );
        assert_eq!(
            "critical".parse::<ComplaintPriority>().unwrap(),
            ComplaintPriority::Critical
        );
    }
}
