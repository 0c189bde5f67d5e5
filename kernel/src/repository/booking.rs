use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{ActionBooking, CreateBooking},
        ApprovedBooking, Booking, BookingStatus, HistoryRecord, OwnerFilter,
    },
    id::BookingId,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Persists one pending record and returns it verbatim, id included.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_pending(&self, filter: Option<OwnerFilter>) -> AppResult<Vec<Booking>>;
    async fn delete_pending(&self, booking_id: BookingId) -> AppResult<()>;
    // One transaction per item: history append, approved insert where the
    // resolved status says so, then pending removal. A failure leaves the
    // items already processed committed.
    async fn action(&self, items: Vec<ActionBooking>, action_by: &str) -> AppResult<()>;
    async fn find_approved(&self, filter: Option<OwnerFilter>) -> AppResult<Vec<ApprovedBooking>>;
    async fn find_approved_on(
        &self,
        date: NaiveDate,
        facility: Option<String>,
    ) -> AppResult<Vec<ApprovedBooking>>;
    async fn find_approved_all(&self) -> AppResult<Vec<ApprovedBooking>>;
    // Sweep delete; absent records are not an error.
    async fn delete_approved(&self, booking_id: BookingId) -> AppResult<()>;
    async fn find_history(&self, filter: Option<OwnerFilter>) -> AppResult<Vec<HistoryRecord>>;
    async fn find_history_in_range(
        &self,
        facility: &str,
        status: BookingStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<HistoryRecord>>;
    async fn pending_count(&self) -> AppResult<i64>;
    async fn approved_count(&self) -> AppResult<i64>;
}
