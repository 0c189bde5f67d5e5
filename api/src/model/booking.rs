use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{
        event::{ActionBooking, CreateBooking},
        ApprovedBooking, Booking, BookingStatus, HistoryRecord, OwnerFilter, OwnerIdentity,
    },
    id::{BookingId, UserId},
    timetable::time_fraction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub fullname: String,
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(skip)]
    pub faculty_dept: Option<String>,
    #[garde(length(min = 1))]
    pub facility: String,
    #[garde(skip)]
    pub booking_date: NaiveDate,
    #[garde(length(min = 1))]
    pub start_time: String,
    #[garde(length(min = 1))]
    pub end_time: String,
    #[garde(skip)]
    pub participants: Option<i32>,
    #[garde(skip)]
    pub purpose: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub terms: Option<bool>,
    // Accepted but ignored; submitted bookings are always pending.
    #[garde(skip)]
    pub status: Option<String>,
    #[garde(skip)]
    pub owner_id: Option<UserId>,
    #[garde(skip)]
    pub owner_role: Option<String>,
    #[garde(skip)]
    pub owner_email: Option<String>,
    #[garde(skip)]
    pub owner_name: Option<String>,
}

impl CreateBookingRequest {
    /// Builds the creation event. The caller-context identity wins over any
    /// body-supplied owner fields; the body only fills gaps.
    pub fn into_event(self, caller: OwnerIdentity) -> CreateBooking {
        let CreateBookingRequest {
            fullname,
            email,
            phone,
            faculty_dept,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms,
            status: _,
            owner_id,
            owner_role,
            owner_email,
            owner_name,
        } = self;
        let body_owner = OwnerIdentity {
            owner_id,
            owner_role,
            owner_email,
            owner_name,
        };
        CreateBooking::new(
            fullname,
            email,
            phone,
            faculty_dept,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms,
            caller.or(body_owner),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
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
    pub owner_id: Option<UserId>,
    pub owner_role: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            fullname,
            email,
            phone,
            faculty_dept,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms,
            status,
            cancellation_reason,
            owner,
            created_at,
        } = value;
        Self {
            booking_id,
            fullname,
            email,
            phone,
            faculty_dept,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms,
            status,
            cancellation_reason,
            owner_id: owner.owner_id,
            owner_role: owner.owner_role,
            owner_email: owner.owner_email,
            owner_name: owner.owner_name,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedBookingResponse {
    pub booking_id: BookingId,
    pub fullname: String,
    pub email: String,
    pub facility: String,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub participants: Option<i32>,
    pub purpose: Option<String>,
    pub description: Option<String>,
    pub status: BookingStatus,
    pub cancellation_reason: Option<String>,
    pub owner_id: Option<UserId>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub original_booking_id: Option<BookingId>,
    pub created_at: DateTime<Utc>,
}

impl From<ApprovedBooking> for ApprovedBookingResponse {
    fn from(value: ApprovedBooking) -> Self {
        let ApprovedBooking {
            booking_id,
            fullname,
            email,
            phone: _,
            faculty_dept: _,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms: _,
            status,
            cancellation_reason,
            owner,
            original_booking_id,
            created_at,
        } = value;
        Self {
            booking_id,
            fullname,
            email,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            status,
            cancellation_reason,
            owner_id: owner.owner_id,
            owner_email: owner.owner_email,
            owner_name: owner.owner_name,
            original_booking_id,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub history_id: BookingId,
    pub fullname: String,
    pub email: String,
    pub facility: String,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub participants: Option<i32>,
    pub purpose: Option<String>,
    pub status: BookingStatus,
    pub cancellation_reason: Option<String>,
    pub owner_id: Option<UserId>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub action_by: String,
    pub action_at: DateTime<Utc>,
}

impl From<HistoryRecord> for HistoryResponse {
    fn from(value: HistoryRecord) -> Self {
        let HistoryRecord {
            history_id,
            fullname,
            email,
            phone: _,
            faculty_dept: _,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description: _,
            terms: _,
            status,
            cancellation_reason,
            owner,
            action_by,
            action_at,
        } = value;
        Self {
            history_id,
            fullname,
            email,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            status,
            cancellation_reason,
            owner_id: owner.owner_id,
            owner_email: owner.owner_email,
            owner_name: owner.owner_name,
            action_by,
            action_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub owner_id: Option<UserId>,
    pub email: Option<String>,
}

impl From<OwnerQuery> for Option<OwnerFilter> {
    fn from(value: OwnerQuery) -> Self {
        OwnerFilter::from_query(value.owner_id, value.email)
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkActionRequest {
    pub bookings: Vec<BulkBookingItem>,
}

/// One raw bulk item as the admin UI sends it. Ids may be missing when the
/// payload was assembled from a stale listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkBookingItem {
    pub booking_id: Option<BookingId>,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub faculty_dept: Option<String>,
    #[serde(default)]
    pub facility: String,
    pub booking_date: NaiveDate,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub participants: Option<i32>,
    pub purpose: Option<String>,
    pub description: Option<String>,
    pub terms: Option<bool>,
    pub status: Option<BookingStatus>,
    pub cancellation_reason: Option<String>,
    pub owner_id: Option<UserId>,
    pub owner_role: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
}

impl From<BulkBookingItem> for ActionBooking {
    fn from(value: BulkBookingItem) -> Self {
        let BulkBookingItem {
            booking_id,
            fullname,
            email,
            phone,
            faculty_dept,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms,
            status,
            cancellation_reason,
            owner_id,
            owner_role,
            owner_email,
            owner_name,
        } = value;
        ActionBooking {
            booking_id,
            fullname,
            email,
            phone,
            faculty_dept,
            facility,
            booking_date,
            start_time,
            end_time,
            participants,
            purpose,
            description,
            terms,
            // Missing status resolves to Approved; missing reason to "".
            status: status.unwrap_or(BookingStatus::Approved),
            cancellation_reason: cancellation_reason.unwrap_or_default(),
            owner: OwnerIdentity {
                owner_id,
                owner_role,
                owner_email,
                owner_name,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayTimetableRow {
    pub id: BookingId,
    pub facility: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub organizer: String,
}

impl From<ApprovedBooking> for TodayTimetableRow {
    fn from(value: ApprovedBooking) -> Self {
        let title = value
            .purpose
            .filter(|p| !p.is_empty())
            .or(value.description.filter(|d| !d.is_empty()))
            .unwrap_or_else(|| "Booked".into());
        Self {
            id: value.booking_id,
            facility: value.facility,
            title,
            start_time: value.start_time,
            end_time: value.end_time,
            organizer: value.fullname,
        }
    }
}

impl TodayTimetableRow {
    /// Sort key: numeric start time, with unreadable values last.
    pub fn start_fraction(&self) -> f64 {
        if self.start_time.is_empty() {
            f64::INFINITY
        } else {
            time_fraction(&self.start_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateBookingRequest {
        serde_json::from_value(serde_json::json!({
            "fullname": "Jamie Lee",
            "email": "jamie@example.com",
            "phone": "555-0100",
            "facility": "Lab1",
            "bookingDate": "2025-03-10",
            "startTime": "9.00-10.00",
            "endTime": "10.00-11.00",
            "status": "Approved",
            "ownerId": "0b9fbf3e-5f46-4f14-b3a5-4b0a87b8b3c7",
            "ownerEmail": "body@example.com"
        }))
        .unwrap()
    }

    #[test]
    fn caller_identity_wins_over_body_fields() {
        let caller_id = UserId::new();
        let caller = OwnerIdentity {
            owner_id: Some(caller_id),
            owner_role: Some("staff".into()),
            owner_email: Some("caller@example.com".into()),
            owner_name: Some("Jamie Lee".into()),
        };

        let event = base_request().into_event(caller);
        assert_eq!(event.owner.owner_id, Some(caller_id));
        assert_eq!(event.owner.owner_email.as_deref(), Some("caller@example.com"));
    }

    #[test]
    fn body_owner_fields_fill_in_when_context_is_empty() {
        let event = base_request().into_event(OwnerIdentity::default());
        assert_eq!(
            event.owner.owner_id.map(|id| id.to_string()).as_deref(),
            Some("0b9fbf3e-5f46-4f14-b3a5-4b0a87b8b3c7")
        );
        assert_eq!(event.owner.owner_email.as_deref(), Some("body@example.com"));
    }

    fn bulk_item(status: Option<&str>, reason: Option<&str>) -> BulkBookingItem {
        let mut value = serde_json::json!({
            "fullname": "Jamie Lee",
            "email": "jamie@example.com",
            "facility": "Lab1",
            "bookingDate": "2025-03-10",
            "startTime": "9.00-10.00",
            "endTime": "10.00-11.00"
        });
        if let Some(status) = status {
            value["status"] = status.into();
        }
        if let Some(reason) = reason {
            value["cancellationReason"] = reason.into();
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn bulk_item_defaults_to_approved_with_empty_reason() {
        let action = ActionBooking::from(bulk_item(None, None));
        assert_eq!(action.status, BookingStatus::Approved);
        assert!(action.is_approved());
        assert_eq!(action.cancellation_reason, "");
    }

    #[test]
    fn cancelled_bulk_item_keeps_its_reason_and_skips_approval() {
        let action = ActionBooking::from(bulk_item(Some("Cancelled"), Some("Conflict")));
        assert_eq!(action.status, BookingStatus::Cancelled);
        assert!(!action.is_approved());
        assert_eq!(action.cancellation_reason, "Conflict");
    }

    fn approved(purpose: Option<&str>, description: Option<&str>) -> ApprovedBooking {
        ApprovedBooking {
            booking_id: BookingId::new(),
            fullname: "Jamie Lee".into(),
            email: "jamie@example.com".into(),
            phone: String::new(),
            faculty_dept: None,
            facility: "Lab1".into(),
            booking_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start_time: "9:30".into(),
            end_time: "11.00".into(),
            participants: None,
            purpose: purpose.map(Into::into),
            description: description.map(Into::into),
            terms: None,
            status: BookingStatus::Approved,
            cancellation_reason: None,
            owner: OwnerIdentity::default(),
            original_booking_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn today_row_title_prefers_purpose_then_description() {
        let row = TodayTimetableRow::from(approved(Some("Workshop"), Some("Desc")));
        assert_eq!(row.title, "Workshop");

        let row = TodayTimetableRow::from(approved(None, Some("Desc")));
        assert_eq!(row.title, "Desc");

        let row = TodayTimetableRow::from(approved(Some(""), None));
        assert_eq!(row.title, "Booked");
    }

    #[test]
    fn today_row_sorts_by_numeric_start_time() {
        let mut row = TodayTimetableRow::from(approved(None, None));
        assert_eq!(row.start_fraction(), 9.5);

        row.start_time = String::new();
        assert!(row.start_fraction().is_infinite());
    }
}
