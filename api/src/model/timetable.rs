use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    booking::{BookingStatus, HistoryRecord},
    timetable::{
        covered_labels,
        event::{BookSlots, BulkBookSlots, BulkSlotEntry, GenerateSlots, ReleaseSlot},
        SlotStatus, TimetableSlot,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookSlotsRequest {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(length(min = 1))]
    pub times: Vec<String>,
    #[garde(length(min = 1))]
    pub booked_by: String,
    #[garde(skip)]
    pub booking_id: Option<String>,
}

impl BookSlotsRequest {
    pub fn into_event(self, facility: String) -> BookSlots {
        let BookSlotsRequest {
            date,
            times,
            booked_by,
            booking_id,
        } = self;
        BookSlots::new(facility, date, times, booked_by, booking_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSlotsRequest {
    #[garde(skip)]
    pub start_date: NaiveDate,
    #[garde(range(min = 1, max = 365))]
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    7
}

impl GenerateSlotsRequest {
    pub fn into_event(self, facility: String) -> GenerateSlots {
        GenerateSlots::new(facility, self.start_date, self.days)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSlotEntryRequest {
    // Entries without a date are skipped, not rejected.
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub times: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkTimetableRequest {
    pub entries: Vec<BulkSlotEntryRequest>,
    pub booked_by: Option<String>,
    pub booking_id: Option<String>,
}

impl BulkTimetableRequest {
    pub fn into_event(self, facility: String) -> BulkBookSlots {
        let BulkTimetableRequest {
            entries,
            booked_by,
            booking_id,
        } = self;
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let date = entry.date?;
                if entry.times.is_empty() {
                    return None;
                }
                Some(BulkSlotEntry {
                    date,
                    times: entry.times,
                })
            })
            .collect();
        BulkBookSlots::new(
            facility,
            entries,
            booked_by.unwrap_or_else(|| "admin".into()),
            booking_id.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSlotRequest {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(length(min = 1))]
    pub time: String,
}

impl ReleaseSlotRequest {
    pub fn into_event(self, facility: String) -> ReleaseSlot {
        ReleaseSlot::new(facility, self.date, self.time)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub date: NaiveDate,
    pub time: String,
    pub status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

impl From<TimetableSlot> for SlotResponse {
    fn from(value: TimetableSlot) -> Self {
        let TimetableSlot {
            date,
            time,
            status,
            booked_by,
            booking_id,
        } = value;
        Self {
            date,
            time,
            status,
            booked_by,
            booking_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryTimetableQuery {
    pub facility: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default = "default_history_status")]
    pub status: BookingStatus,
}

fn default_history_status() -> BookingStatus {
    BookingStatus::Approved
}

/// Booked slots reconstructed from the archive rather than the live
/// timetable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySlotResponse {
    pub date: NaiveDate,
    pub time: String,
    pub status: SlotStatus,
    pub booked_by: String,
    pub booking_id: String,
    pub source: &'static str,
}

pub fn history_slots(records: Vec<HistoryRecord>) -> Vec<HistorySlotResponse> {
    let mut out = Vec::new();
    for record in records {
        let booked_by = if record.fullname.is_empty() {
            "history".to_string()
        } else {
            record.fullname.clone()
        };
        for label in covered_labels(&record.start_time, &record.end_time) {
            out.push(HistorySlotResponse {
                date: record.booking_date,
                time: label,
                status: SlotStatus::Booked,
                booked_by: booked_by.clone(),
                booking_id: record.history_id.to_string(),
                source: "history",
            });
        }
    }
    out
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayTimetableQuery {
    pub facility: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use kernel::model::{booking::OwnerIdentity, id::BookingId};

    use super::*;

    fn record(start: &str, end: &str) -> HistoryRecord {
        HistoryRecord {
            history_id: BookingId::new(),
            fullname: "Jamie Lee".into(),
            email: "jamie@example.com".into(),
            phone: String::new(),
            faculty_dept: None,
            facility: "Lab1".into(),
            booking_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start_time: start.into(),
            end_time: end.into(),
            participants: None,
            purpose: None,
            description: None,
            terms: None,
            status: BookingStatus::Approved,
            cancellation_reason: None,
            owner: OwnerIdentity::default(),
            action_by: "admin".into(),
            action_at: Utc::now(),
        }
    }

    #[test]
    fn history_slots_expand_whole_hours() {
        let slots = history_slots(vec![record("9.00", "11.30")]);
        let labels: Vec<_> = slots.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(labels, vec!["9.00-10.00", "10.00-11.00", "11.00-12.00"]);
        assert!(slots.iter().all(|s| s.booked_by == "Jamie Lee"));
        assert!(slots.iter().all(|s| s.source == "history"));
    }

    #[test]
    fn bulk_request_skips_dateless_and_empty_entries() {
        let req: BulkTimetableRequest = serde_json::from_value(serde_json::json!({
            "entries": [
                {"date": "2025-03-10", "times": ["8.00-9.00"]},
                {"times": ["9.00-10.00"]},
                {"date": "2025-03-11", "times": []}
            ]
        }))
        .unwrap();

        let event = req.into_event("lab1".into());
        assert_eq!(event.entries.len(), 1);
        assert_eq!(event.booked_by, "admin");
    }

    #[test]
    fn generate_request_defaults_to_a_week() {
        let req: GenerateSlotsRequest =
            serde_json::from_value(serde_json::json!({"startDate": "2025-03-10"})).unwrap();
        assert_eq!(req.days, 7);
    }
}
