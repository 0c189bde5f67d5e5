use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

use crate::model::id::FacilityId;

pub mod event;

/// Facility categories are a closed set; a record's category decides which
/// typed listing it shows up in and never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FacilityType {
    Auditorium,
    ComputerLab,
    ConferenceHall,
    LectureHall,
    MeetingRoom,
    SeminarRoom,
}

impl FacilityType {
    /// Parses external identifiers, tolerating `snake_case` spellings
    /// such as `computer_lab`.
    pub fn parse(value: &str) -> Option<Self> {
        value.replace('_', "").parse().ok()
    }
}

#[derive(Debug)]
pub struct Facility {
    pub facility_id: FacilityId,
    pub facility_type: FacilityType,
    pub facility_name: String,
    pub facility_code: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub facilities: Vec<String>,
    pub additional_equipment: Option<String>,
    pub status: Option<String>,
    pub booking_restrictions: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_type_accepts_snake_case_and_mixed_case() {
        assert_eq!(
            FacilityType::parse("computer_lab"),
            Some(FacilityType::ComputerLab)
        );
        assert_eq!(
            FacilityType::parse("LectureHall"),
            Some(FacilityType::LectureHall)
        );
        assert_eq!(FacilityType::parse("gymnasium"), None);
    }

    #[test]
    fn facility_type_roundtrips_through_storage_form() {
        assert_eq!(FacilityType::MeetingRoom.to_string(), "meetingroom");
        assert_eq!(
            "meetingroom".parse::<FacilityType>().unwrap(),
            FacilityType::MeetingRoom
        );
    }
}
