use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    booking::{
        event::{ActionBooking, CreateBooking},
        ApprovedBooking, Booking, BookingStatus, HistoryRecord, OwnerFilter,
    },
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::booking::{ApprovedBookingRow, BookingRow, HistoryRow},
    ConnectionPool,
};

const BOOKING_COLUMNS: &str = r#"
    booking_id, fullname, email, phone, faculty_dept, facility, booking_date,
    start_time, end_time, participants, purpose, description, terms, status,
    cancellation_reason, owner_id, owner_role, owner_email, owner_name,
    created_at
"#;

const APPROVED_COLUMNS: &str = r#"
    booking_id, fullname, email, phone, faculty_dept, facility, booking_date,
    start_time, end_time, participants, purpose, description, terms, status,
    cancellation_reason, owner_id, owner_role, owner_email, owner_name,
    original_booking_id, created_at
"#;

const HISTORY_COLUMNS: &str = r#"
    history_id, fullname, email, phone, faculty_dept, facility, booking_date,
    start_time, end_time, participants, purpose, description, terms, status,
    cancellation_reason, owner_id, owner_role, owner_email, owner_name,
    action_by, action_at
"#;

fn owner_filter_binds(filter: Option<OwnerFilter>) -> (Option<UserId>, Option<String>) {
    match filter {
        Some(OwnerFilter::ById(id)) => (Some(id), None),
        Some(OwnerFilter::ByEmail(email)) => (None, Some(email)),
        None => (None, None),
    }
}

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let booking_id = BookingId::new();
        let created_at = Utc::now();

        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, fullname, email, phone, faculty_dept, facility,
                 booking_date, start_time, end_time, participants, purpose,
                 description, terms, status, owner_id, owner_role, owner_email,
                 owner_name, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                        $14, $15, $16, $17, $18, $19)
            "#,
        )
        .bind(booking_id)
        .bind(&event.fullname)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(&event.faculty_dept)
        .bind(&event.facility)
        .bind(event.booking_date)
        .bind(&event.start_time)
        .bind(&event.end_time)
        .bind(event.participants)
        .bind(&event.purpose)
        .bind(&event.description)
        .bind(event.terms)
        .bind(BookingStatus::Pending.to_string())
        .bind(event.owner.owner_id)
        .bind(&event.owner.owner_role)
        .bind(&event.owner.owner_email)
        .bind(&event.owner.owner_name)
        .bind(created_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        let CreateBooking {
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
            owner,
        } = event;
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
            status: BookingStatus::Pending,
            cancellation_reason: None,
            owner,
            created_at,
        })
    }

    async fn find_pending(&self, filter: Option<OwnerFilter>) -> AppResult<Vec<Booking>> {
        let (owner_id, owner_email) = owner_filter_binds(filter);
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings
                WHERE status = 'Pending'
                  AND ($1::uuid IS NULL OR owner_id = $1)
                  AND ($2::text IS NULL OR owner_email = $2)
                ORDER BY booking_date DESC
            "#
        ))
        .bind(owner_id)
        .bind(owner_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn delete_pending(&self, booking_id: BookingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Booking not found".into()));
        }

        Ok(())
    }

    // The archive append always lands before the pending removal, so an
    // interrupted batch can lose a pending record only after its trace
    // exists. Items already committed stay committed when a later item
    // fails.
    async fn action(&self, items: Vec<ActionBooking>, action_by: &str) -> AppResult<()> {
        for item in items {
            let mut tx = self.db.begin().await?;
            let action_at = Utc::now();

            sqlx::query(
                r#"
                    INSERT INTO booking_history
                    (history_id, fullname, email, phone, faculty_dept, facility,
                     booking_date, start_time, end_time, participants, purpose,
                     description, terms, status, cancellation_reason, owner_id,
                     owner_role, owner_email, owner_name, action_by, action_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                            $13, $14, $15, $16, $17, $18, $19, $20, $21)
                "#,
            )
            .bind(BookingId::new())
            .bind(&item.fullname)
            .bind(&item.email)
            .bind(&item.phone)
            .bind(&item.faculty_dept)
            .bind(&item.facility)
            .bind(item.booking_date)
            .bind(&item.start_time)
            .bind(&item.end_time)
            .bind(item.participants)
            .bind(&item.purpose)
            .bind(&item.description)
            .bind(item.terms)
            .bind(item.status.to_string())
            .bind(&item.cancellation_reason)
            .bind(item.owner.owner_id)
            .bind(&item.owner.owner_role)
            .bind(&item.owner.owner_email)
            .bind(&item.owner.owner_name)
            .bind(action_by)
            .bind(action_at)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if item.is_approved() {
                sqlx::query(
                    r#"
                        INSERT INTO approved_bookings
                        (booking_id, fullname, email, phone, faculty_dept, facility,
                         booking_date, start_time, end_time, participants, purpose,
                         description, terms, status, cancellation_reason, owner_id,
                         owner_role, owner_email, owner_name, original_booking_id)
                        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                                $13, $14, $15, $16, $17, $18, $19, $20)
                    "#,
                )
                .bind(BookingId::new())
                .bind(&item.fullname)
                .bind(&item.email)
                .bind(&item.phone)
                .bind(&item.faculty_dept)
                .bind(&item.facility)
                .bind(item.booking_date)
                .bind(&item.start_time)
                .bind(&item.end_time)
                .bind(item.participants)
                .bind(&item.purpose)
                .bind(&item.description)
                .bind(item.terms)
                .bind(item.status.to_string())
                .bind(&item.cancellation_reason)
                .bind(item.owner.owner_id)
                .bind(&item.owner.owner_role)
                .bind(&item.owner.owner_email)
                .bind(&item.owner.owner_name)
                .bind(item.booking_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            }

            // Bulk payloads may arrive without ids; fall back to the exact
            // natural-key match.
            match item.booking_id {
                Some(id) => {
                    sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await
                        .map_err(AppError::SpecificOperationError)?;
                }
                None => {
                    sqlx::query(
                        r#"
                            DELETE FROM bookings
                            WHERE email = $1
                              AND booking_date = $2
                              AND facility = $3
                              AND start_time = $4
                              AND end_time = $5
                        "#,
                    )
                    .bind(&item.email)
                    .bind(item.booking_date)
                    .bind(&item.facility)
                    .bind(&item.start_time)
                    .bind(&item.end_time)
                    .execute(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
                }
            }

            tx.commit().await.map_err(AppError::TransactionError)?;
        }

        Ok(())
    }

    async fn find_approved(
        &self,
        filter: Option<OwnerFilter>,
    ) -> AppResult<Vec<ApprovedBooking>> {
        let (owner_id, owner_email) = owner_filter_binds(filter);
        let rows: Vec<ApprovedBookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {APPROVED_COLUMNS}
                FROM approved_bookings
                WHERE ($1::uuid IS NULL OR owner_id = $1)
                  AND ($2::text IS NULL OR owner_email = $2)
                ORDER BY booking_date DESC
            "#
        ))
        .bind(owner_id)
        .bind(owner_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ApprovedBooking::try_from).collect()
    }

    async fn find_approved_on(
        &self,
        date: NaiveDate,
        facility: Option<String>,
    ) -> AppResult<Vec<ApprovedBooking>> {
        let rows: Vec<ApprovedBookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {APPROVED_COLUMNS}
                FROM approved_bookings
                WHERE booking_date = $1
                  AND ($2::text IS NULL OR facility = $2)
            "#
        ))
        .bind(date)
        .bind(facility)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ApprovedBooking::try_from).collect()
    }

    async fn find_approved_all(&self) -> AppResult<Vec<ApprovedBooking>> {
        let rows: Vec<ApprovedBookingRow> = sqlx::query_as(&format!(
            "SELECT {APPROVED_COLUMNS} FROM approved_bookings"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ApprovedBooking::try_from).collect()
    }

    async fn delete_approved(&self, booking_id: BookingId) -> AppResult<()> {
        sqlx::query("DELETE FROM approved_bookings WHERE booking_id = $1")
            .bind(booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_history(&self, filter: Option<OwnerFilter>) -> AppResult<Vec<HistoryRecord>> {
        let (owner_id, owner_email) = owner_filter_binds(filter);
        let rows: Vec<HistoryRow> = sqlx::query_as(&format!(
            r#"
                SELECT {HISTORY_COLUMNS}
                FROM booking_history
                WHERE ($1::uuid IS NULL OR owner_id = $1)
                  AND ($2::text IS NULL OR owner_email = $2)
                ORDER BY action_at DESC
            "#
        ))
        .bind(owner_id)
        .bind(owner_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(HistoryRecord::try_from).collect()
    }

    async fn find_history_in_range(
        &self,
        facility: &str,
        status: BookingStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<HistoryRecord>> {
        let rows: Vec<HistoryRow> = sqlx::query_as(&format!(
            r#"
                SELECT {HISTORY_COLUMNS}
                FROM booking_history
                WHERE facility = $1
                  AND status = $2
                  AND booking_date BETWEEN $3 AND $4
            "#
        ))
        .bind(facility)
        .bind(status.to_string())
        .bind(start)
        .bind(end)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(HistoryRecord::try_from).collect()
    }

    async fn pending_count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn approved_count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM approved_bookings")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}
