use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::id::{BookingId, UserId};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Cancelled,
}

/// Who a booking belongs to. Populated from the caller context at submit
/// time; body-supplied values only fill fields the context left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerIdentity {
    pub owner_id: Option<UserId>,
    pub owner_role: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
}

impl OwnerIdentity {
    /// Field-wise merge where `self` wins and `fallback` fills the gaps.
    pub fn or(self, fallback: OwnerIdentity) -> OwnerIdentity {
        OwnerIdentity {
            owner_id: self.owner_id.or(fallback.owner_id),
            owner_role: self.owner_role.or(fallback.owner_role),
            owner_email: self.owner_email.or(fallback.owner_email),
            owner_name: self.owner_name.or(fallback.owner_name),
        }
    }
}

/// Owner scoping for listing queries: an id filter takes precedence over an
/// email filter when the caller supplies both.
#[derive(Debug, Clone)]
pub enum OwnerFilter {
    ById(UserId),
    ByEmail(String),
}

impl OwnerFilter {
    pub fn from_query(owner_id: Option<UserId>, email: Option<String>) -> Option<Self> {
        match (owner_id, email) {
            (Some(id), _) => Some(OwnerFilter::ById(id)),
            (None, Some(email)) => Some(OwnerFilter::ByEmail(email)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub faculty_dept: Option<String>,
    pub facility: String,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub participants: Option<i32>,
    pub purpose: Option<String>,
    pub description: Option<String>,
    pub terms: Option<bool>,
    pub status: BookingStatus,
    pub cancellation_reason: Option<String>,
    pub owner: OwnerIdentity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ApprovedBooking {
    pub booking_id: BookingId,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub faculty_dept: Option<String>,
    pub facility: String,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub participants: Option<i32>,
    pub purpose: Option<String>,
    pub description: Option<String>,
    pub terms: Option<bool>,
    pub status: BookingStatus,
    pub cancellation_reason: Option<String>,
    pub owner: OwnerIdentity,
    pub original_booking_id: Option<BookingId>,
    pub created_at: DateTime<Utc>,
}

/// Terminal archive entry; one per booking that left the pending state.
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub history_id: BookingId,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub faculty_dept: Option<String>,
    pub facility: String,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub participants: Option<i32>,
    pub purpose: Option<String>,
    pub description: Option<String>,
    pub terms: Option<bool>,
    pub status: BookingStatus,
    pub cancellation_reason: Option<String>,
    pub owner: OwnerIdentity,
    pub action_by: String,
    pub action_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_identity_prefers_left_hand_fields() {
        let header = OwnerIdentity {
            owner_id: Some(UserId::new()),
            owner_role: Some("staff".into()),
            owner_email: None,
            owner_name: None,
        };
        let body = OwnerIdentity {
            owner_id: Some(UserId::new()),
            owner_role: Some("student".into()),
            owner_email: Some("body@example.com".into()),
            owner_name: Some("Body Name".into()),
        };

        let merged = header.clone().or(body);
        assert_eq!(merged.owner_id, header.owner_id);
        assert_eq!(merged.owner_role.as_deref(), Some("staff"));
        assert_eq!(merged.owner_email.as_deref(), Some("body@example.com"));
        assert_eq!(merged.owner_name.as_deref(), Some("Body Name"));
    }

    #[test]
    fn owner_filter_prefers_id_over_email() {
        let id = UserId::new();
        let filter = OwnerFilter::from_query(Some(id), Some("a@b.c".into()));
        assert!(matches!(filter, Some(OwnerFilter::ById(got)) if got == id));

        let filter = OwnerFilter::from_query(None, Some("a@b.c".into()));
        assert!(matches!(filter, Some(OwnerFilter::ByEmail(ref e)) if e == "a@b.c"));

        assert!(OwnerFilter::from_query(None, None).is_none());
    }
}
