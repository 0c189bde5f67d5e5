use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{ApprovedBooking, Booking, BookingStatus, HistoryRecord, OwnerIdentity},
    id::{BookingId, UserId},
};
use shared::error::AppError;

fn parse_status(status: &str) -> Result<BookingStatus, AppError> {
    status
        .parse::<BookingStatus>()
        .map_err(|_| AppError::ConversionEntityError(format!("unknown booking status: {status}")))
}

#[derive(sqlx::FromRow)]
pub struct BookingRow {
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
    pub status: String,
    pub cancellation_reason: Option<String>,
    pub owner_id: Option<UserId>,
    pub owner_role: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let status = parse_status(&value.status)?;
        let BookingRow {
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
            status: _,
            cancellation_reason,
            owner_id,
            owner_role,
            owner_email,
            owner_name,
            created_at,
        } = value;
        Ok(Booking {
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
            owner: OwnerIdentity {
                owner_id,
                owner_role,
                owner_email,
                owner_name,
            },
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct ApprovedBookingRow {
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
    pub status: String,
    pub cancellation_reason: Option<String>,
    pub owner_id: Option<UserId>,
    pub owner_role: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub original_booking_id: Option<BookingId>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ApprovedBookingRow> for ApprovedBooking {
    type Error = AppError;

    fn try_from(value: ApprovedBookingRow) -> Result<Self, Self::Error> {
        let status = parse_status(&value.status)?;
        let ApprovedBookingRow {
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
            status: _,
            cancellation_reason,
            owner_id,
            owner_role,
            owner_email,
            owner_name,
            original_booking_id,
            created_at,
        } = value;
        Ok(ApprovedBooking {
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
            owner: OwnerIdentity {
                owner_id,
                owner_role,
                owner_email,
                owner_name,
            },
            original_booking_id,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct HistoryRow {
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
    pub status: String,
    pub cancellation_reason: Option<String>,
    pub owner_id: Option<UserId>,
    pub owner_role: Option<String>,
    pub owner_email: Option<String>,
    pub owner_name: Option<String>,
    pub action_by: String,
    pub action_at: DateTime<Utc>,
}

impl TryFrom<HistoryRow> for HistoryRecord {
    type Error = AppError;

    fn try_from(value: HistoryRow) -> Result<Self, Self::Error> {
        let status = parse_status(&value.status)?;
        let HistoryRow {
            history_id,
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
            cancellation_reason,
            owner_id,
            owner_role,
            owner_email,
            owner_name,
            action_by,
            action_at,
        } = value;
        Ok(HistoryRecord {
            history_id,
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
            owner: OwnerIdentity {
                owner_id,
                owner_role,
                owner_email,
                owner_name,
            },
            action_by,
            action_at,
        })
    }
}
