use chrono::NaiveDate;
use kernel::model::timetable::{SlotStatus, TimetableSlot};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct TimetableSlotRow {
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub status: String,
    pub booked_by: Option<String>,
    pub booking_id: Option<String>,
}

impl TryFrom<TimetableSlotRow> for TimetableSlot {
    type Error = AppError;

    fn try_from(value: TimetableSlotRow) -> Result<Self, Self::Error> {
        let TimetableSlotRow {
            slot_date,
            slot_time,
            status,
            booked_by,
            booking_id,
        } = value;
        let status = status
            .parse::<SlotStatus>()
            .map_err(|_| AppError::ConversionEntityError(format!("unknown slot status: {status}")))?;
        Ok(TimetableSlot {
            date: slot_date,
            time: slot_time,
            status,
            booked_by,
            booking_id,
        })
    }
}
