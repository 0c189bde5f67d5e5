use chrono::NaiveDate;
use derive_new::new;

use super::{BookingStatus, OwnerIdentity};
use crate::model::id::BookingId;

#[derive(Debug, new)]
pub struct CreateBooking {
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
    pub owner: OwnerIdentity,
}

/// One normalized item of a bulk approval/cancellation call. `booking_id`
/// may be absent; removal then falls back to the exact
/// (email, date, facility, start, end) match.
#[derive(Debug, Clone)]
pub struct ActionBooking {
    pub booking_id: Option<BookingId>,
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
    pub cancellation_reason: String,
    pub owner: OwnerIdentity,
}

impl ActionBooking {
    pub fn is_approved(&self) -> bool {
        self.status == BookingStatus::Approved
    }
}
