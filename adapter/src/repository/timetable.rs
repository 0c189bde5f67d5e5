use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::timetable::{
    event::{BookSlots, BulkBookSlots, GenerateSlots, ReleaseSlot},
    slot_grid, SlotStatus, TimetableSlot,
};
use kernel::repository::timetable::TimetableRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::timetable::TimetableSlotRow, ConnectionPool};

#[derive(new)]
pub struct TimetableRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TimetableRepository for TimetableRepositoryImpl {
    async fn book_slots(&self, event: BookSlots) -> AppResult<()> {
        // Overwrites whatever was there; conflict checking is not this
        // layer's job.
        for time in &event.times {
            sqlx::query(
                r#"
                    INSERT INTO timetable_slots
                    (facility, slot_date, slot_time, status, booked_by, booking_id)
                    VALUES ($1, $2, $3, 'booked', $4, $5)
                    ON CONFLICT (facility, slot_date, slot_time)
                    DO UPDATE SET
                        status = 'booked',
                        booked_by = EXCLUDED.booked_by,
                        booking_id = EXCLUDED.booking_id
                "#,
            )
            .bind(&event.facility)
            .bind(event.date)
            .bind(time)
            .bind(&event.booked_by)
            .bind(&event.booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        Ok(())
    }

    async fn generate_slots(&self, event: GenerateSlots) -> AppResult<()> {
        for (date, time) in slot_grid(event.start_date, event.days) {
            sqlx::query(
                r#"
                    INSERT INTO timetable_slots (facility, slot_date, slot_time, status)
                    VALUES ($1, $2, $3, 'available')
                    ON CONFLICT (facility, slot_date, slot_time) DO NOTHING
                "#,
            )
            .bind(&event.facility)
            .bind(date)
            .bind(time)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        Ok(())
    }

    async fn bulk_book(&self, event: BulkBookSlots) -> AppResult<()> {
        for entry in &event.entries {
            if entry.times.is_empty() {
                continue;
            }
            self.book_slots(BookSlots::new(
                event.facility.clone(),
                entry.date,
                entry.times.clone(),
                event.booked_by.clone(),
                Some(event.booking_id.clone()),
            ))
            .await?;
        }

        Ok(())
    }

    async fn release_slot(&self, event: ReleaseSlot) -> AppResult<()> {
        let res = sqlx::query(
            "DELETE FROM timetable_slots WHERE facility = $1 AND slot_date = $2 AND slot_time = $3",
        )
        .bind(&event.facility)
        .bind(event.date)
        .bind(&event.time)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Slot not found".into()));
        }

        Ok(())
    }

    async fn find_booked_in_range(
        &self,
        facility: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimetableSlot>> {
        let rows: Vec<TimetableSlotRow> = sqlx::query_as(
            r#"
                SELECT slot_date, slot_time, status, booked_by, booking_id
                FROM timetable_slots
                WHERE facility = $1
                  AND slot_date BETWEEN $2 AND $3
                  AND status = $4
                ORDER BY slot_date, slot_time
            "#,
        )
        .bind(facility)
        .bind(start)
        .bind(end)
        .bind(SlotStatus::Booked.to_string())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(TimetableSlot::try_from).collect()
    }

    async fn sweep_dated_before(&self, today: NaiveDate) -> AppResult<u64> {
        let res = sqlx::query("DELETE FROM timetable_slots WHERE slot_date < $1")
            .bind(today)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected())
    }

    async fn sweep_passed_today(&self, today: NaiveDate, times: Vec<String>) -> AppResult<u64> {
        if times.is_empty() {
            return Ok(0);
        }

        let res = sqlx::query(
            "DELETE FROM timetable_slots WHERE slot_date = $1 AND slot_time = ANY($2)",
        )
        .bind(today)
        .bind(&times)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected())
    }
}
