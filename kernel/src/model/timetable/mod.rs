use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

/// The fixed daily vocabulary: nine one-hour slots.
pub const SLOT_LABELS: [&str; 9] = [
    "8.00-9.00",
    "9.00-10.00",
    "10.00-11.00",
    "11.00-12.00",
    "12.00-13.00",
    "13.00-14.00",
    "14.00-15.00",
    "15.00-16.00",
    "16.00-17.00",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    #[default]
    Available,
    Booked,
}

/// One slot-status record; unique per (date, time) within a facility's
/// timetable.
#[derive(Debug, Clone)]
pub struct TimetableSlot {
    pub date: NaiveDate,
    pub time: String,
    pub status: SlotStatus,
    pub booked_by: Option<String>,
    pub booking_id: Option<String>,
}

/// Normalizes a facility name into its timetable key: trimmed, inner
/// whitespace removed, lowercased.
pub fn timetable_key(facility_name: &str) -> String {
    facility_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// The (date, label) grid that `generateSlots` materializes: all nine labels
/// across `days` consecutive days from `start`.
pub fn slot_grid(start: NaiveDate, days: u32) -> Vec<(NaiveDate, &'static str)> {
    let mut grid = Vec::with_capacity(days as usize * SLOT_LABELS.len());
    for d in 0..days {
        let date = start + Days::new(u64::from(d));
        for label in SLOT_LABELS {
            grid.push((date, label));
        }
    }
    grid
}

fn label_end_fraction(label: &str) -> Option<f64> {
    let end = label.split('-').nth(1)?;
    let mut parts = end.split('.');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);
    Some(f64::from(hour) + f64::from(minute) / 60.0)
}

/// Labels whose end hour has elapsed at `hour_fraction` (e.g. 14.5 for
/// 14:30). Used by the timetable sweep on today's slots.
pub fn passed_labels(hour_fraction: f64) -> Vec<&'static str> {
    SLOT_LABELS
        .into_iter()
        .filter(|label| matches!(label_end_fraction(label), Some(end) if hour_fraction >= end))
        .collect()
}

/// Loose numeric reading of a clock string: `:` is treated as `.`, and any
/// component that does not parse reads as zero.
pub fn time_fraction(t: &str) -> f64 {
    let normalized = t.replace(':', ".");
    let mut parts = normalized.split('.');
    let hour: i64 = parts
        .next()
        .and_then(|h| h.parse().ok())
        .unwrap_or_default();
    let minute: i64 = parts
        .next()
        .and_then(|m| m.parse().ok())
        .unwrap_or_default();
    hour as f64 + minute as f64 / 60.0
}

pub fn hour_label(hour: i64) -> String {
    format!("{hour}.00-{}.00", hour + 1)
}

/// In-vocabulary hourly labels covered by a start/end pair, flooring the
/// start and ceiling the end. Drives the history-backed timetable view.
pub fn covered_labels(start_time: &str, end_time: &str) -> Vec<String> {
    let from = time_fraction(start_time).floor() as i64;
    let to = time_fraction(end_time).ceil() as i64;
    (from..to)
        .map(hour_label)
        .filter(|label| SLOT_LABELS.contains(&label.as_str()))
        .collect()
}

/// The instant an approved booking's occupancy window closes. Accepts the
/// range form (`9.00-10.00`, second half wins) and the bare `H:MM` form;
/// anything unparsable falls back to end of day, 23:59.
pub fn booking_end_instant(booking_date: NaiveDate, end_time: &str) -> NaiveDateTime {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap();

    let parsed = if end_time.contains('-') {
        end_time.split('-').nth(1).and_then(parse_dotted_time)
    } else if end_time.contains(':') {
        parse_dotted_time(&end_time.replace(':', "."))
    } else {
        None
    };

    booking_date.and_time(parsed.unwrap_or(end_of_day))
}

fn parse_dotted_time(value: &str) -> Option<NaiveTime> {
    let mut parts = value.split('.');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next().and_then(|m| m.trim().parse().ok()).unwrap_or(0);
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn timetable_key_strips_and_lowercases() {
        assert_eq!(timetable_key("  Lecture Hall A "), "lecturehalla");
        assert_eq!(timetable_key("ComputerLab"), "computerlab");
    }

    #[test]
    fn slot_grid_covers_all_labels_for_each_day() {
        let grid = slot_grid(date(2025, 3, 10), 2);
        assert_eq!(grid.len(), 18);
        assert_eq!(grid[0], (date(2025, 3, 10), "8.00-9.00"));
        assert_eq!(grid[9], (date(2025, 3, 11), "8.00-9.00"));
        assert_eq!(grid[17], (date(2025, 3, 11), "16.00-17.00"));
    }

    #[test]
    fn passed_labels_respects_slot_end() {
        // 12:30 — everything ending at or before 12:30 is over.
        let passed = passed_labels(12.5);
        assert_eq!(
            passed,
            vec!["8.00-9.00", "9.00-10.00", "10.00-11.00", "11.00-12.00"]
        );

        // Exactly on a boundary counts as passed.
        assert!(passed_labels(9.0).contains(&"8.00-9.00"));
        assert!(!passed_labels(8.99).contains(&"8.00-9.00"));

        assert!(passed_labels(0.0).is_empty());
        assert_eq!(passed_labels(23.0).len(), SLOT_LABELS.len());
    }

    #[test]
    fn time_fraction_reads_both_separators() {
        assert_eq!(time_fraction("9.00"), 9.0);
        assert_eq!(time_fraction("9:30"), 9.5);
        assert_eq!(time_fraction("garbage"), 0.0);
        assert_eq!(time_fraction(""), 0.0);
    }

    #[test]
    fn covered_labels_floor_start_ceil_end() {
        assert_eq!(
            covered_labels("9.00", "11.30"),
            vec!["9.00-10.00", "10.00-11.00", "11.00-12.00"]
        );
        // Hours outside the vocabulary are dropped.
        assert_eq!(covered_labels("7:00", "8:30"), vec!["8.00-9.00"]);
        assert!(covered_labels("18.00", "20.00").is_empty());
    }

    #[test]
    fn booking_end_instant_reads_range_form() {
        let end = booking_end_instant(date(2025, 3, 10), "9.00-10.00");
        assert_eq!(end, date(2025, 3, 10).and_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn booking_end_instant_reads_bare_clock_form() {
        let end = booking_end_instant(date(2025, 3, 10), "17:30");
        assert_eq!(end, date(2025, 3, 10).and_hms_opt(17, 30, 0).unwrap());
    }

    #[test]
    fn booking_end_instant_falls_back_to_end_of_day() {
        let end_of_day = date(2025, 3, 10).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(booking_end_instant(date(2025, 3, 10), "soon"), end_of_day);
        assert_eq!(booking_end_instant(date(2025, 3, 10), "25:00"), end_of_day);
        assert_eq!(booking_end_instant(date(2025, 3, 10), "x-y"), end_of_day);
    }
}
