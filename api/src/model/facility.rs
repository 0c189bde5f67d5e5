use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    facility::{
        event::{CreateFacility, UpdateFacility},
        Facility, FacilityType,
    },
    id::FacilityId,
};
use serde::{Deserialize, Serialize};

/// Equipment lists arrive either as a JSON array or as one comma-separated
/// string; both normalize to the same vector.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EquipmentList {
    List(Vec<String>),
    Csv(String),
}

impl Default for EquipmentList {
    fn default() -> Self {
        EquipmentList::List(Vec::new())
    }
}

impl EquipmentList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            EquipmentList::List(items) => items,
            EquipmentList::Csv(csv) => csv
                .split(',')
                .map(|item| item.trim().to_owned())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityRequest {
    #[garde(length(min = 1))]
    pub facility_type: String,
    #[garde(length(min = 1))]
    pub facility_name: String,
    #[garde(skip)]
    pub facility_code: Option<String>,
    #[garde(skip)]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub facilities: EquipmentList,
    #[garde(skip)]
    pub additional_equipment: Option<String>,
    #[garde(skip)]
    pub status: Option<String>,
    #[garde(skip)]
    pub booking_restrictions: Option<String>,
    #[garde(skip)]
    pub notes: Option<String>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

impl CreateFacilityRequest {
    pub fn into_event(self, facility_type: FacilityType) -> CreateFacility {
        let CreateFacilityRequest {
            facility_type: _,
            facility_name,
            facility_code,
            capacity,
            location,
            facilities,
            additional_equipment,
            status,
            booking_restrictions,
            notes,
            image_url,
        } = self;
        CreateFacility {
            facility_type,
            facility_name,
            facility_code,
            capacity,
            location,
            facilities: facilities.into_vec(),
            additional_equipment,
            status,
            booking_restrictions,
            notes,
            image_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacilityRequest {
    #[garde(length(min = 1))]
    pub facility_name: String,
    #[garde(skip)]
    pub facility_code: Option<String>,
    #[garde(skip)]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub facilities: EquipmentList,
    #[garde(skip)]
    pub additional_equipment: Option<String>,
    #[garde(skip)]
    pub status: Option<String>,
    #[garde(skip)]
    pub booking_restrictions: Option<String>,
    #[garde(skip)]
    pub notes: Option<String>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

impl UpdateFacilityRequest {
    pub fn into_event(
        self,
        facility_type: FacilityType,
        facility_id: FacilityId,
    ) -> UpdateFacility {
        let UpdateFacilityRequest {
            facility_name,
            facility_code,
            capacity,
            location,
            facilities,
            additional_equipment,
            status,
            booking_restrictions,
            notes,
            image_url,
        } = self;
        UpdateFacility {
            facility_id,
            facility_type,
            facility_name,
            facility_code,
            capacity,
            location,
            facilities: facilities.into_vec(),
            additional_equipment,
            status,
            booking_restrictions,
            notes,
            image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResponse {
    pub id: FacilityId,
    pub facility_type: String,
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

impl From<Facility> for FacilityResponse {
    fn from(value: Facility) -> Self {
        let Facility {
            facility_id,
            facility_type,
            facility_name,
            facility_code,
            capacity,
            location,
            facilities,
            additional_equipment,
            status,
            booking_restrictions,
            notes,
            image_url,
            created_at,
            updated_at,
        } = value;
        Self {
            id: facility_id,
            facility_type: facility_type.to_string(),
            facility_name,
            facility_code,
            capacity,
            location,
            facilities,
            additional_equipment,
            status,
            booking_restrictions,
            notes,
            image_url,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_list_accepts_arrays() {
        let list = EquipmentList::List(vec!["Projector".into(), "Whiteboard".into()]);
        assert_eq!(list.into_vec(), vec!["Projector", "Whiteboard"]);
    }

    #[test]
    fn equipment_list_splits_comma_separated_strings() {
        let list = EquipmentList::Csv("Projector, Whiteboard, , HDMI ".into());
        assert_eq!(list.into_vec(), vec!["Projector", "Whiteboard", "HDMI"]);
    }

    #[test]
    fn equipment_list_deserializes_both_forms() {
        let from_array: EquipmentList = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(from_array.into_vec(), vec!["a", "b"]);

        let from_string: EquipmentList = serde_json::from_str(r#""a, b""#).unwrap();
        assert_eq!(from_string.into_vec(), vec!["a", "b"]);
    }
}
