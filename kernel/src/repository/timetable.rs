use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::timetable::{
    event::{BookSlots, BulkBookSlots, GenerateSlots, ReleaseSlot},
    TimetableSlot,
};

#[async_trait]
pub trait TimetableRepository: Send + Sync {
    // Unconditional upsert to booked; existing slot state is overwritten.
    async fn book_slots(&self, event: BookSlots) -> AppResult<()>;
    // Insert-if-absent; idempotent across repeated calls.
    async fn generate_slots(&self, event: GenerateSlots) -> AppResult<()>;
    async fn bulk_book(&self, event: BulkBookSlots) -> AppResult<()>;
    async fn release_slot(&self, event: ReleaseSlot) -> AppResult<()>;
    async fn find_booked_in_range(
        &self,
        facility: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimetableSlot>>;
    // Sweep operations; idempotent deletes across every facility's timetable.
    async fn sweep_dated_before(&self, today: NaiveDate) -> AppResult<u64>;
    async fn sweep_passed_today(&self, today: NaiveDate, times: Vec<String>) -> AppResult<u64>;
}
