use super::FacilityType;
use crate::model::id::FacilityId;

pub struct CreateFacility {
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
}

#[derive(Debug)]
pub struct UpdateFacility {
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
}

#[derive(Debug)]
pub struct DeleteFacility {
    pub facility_id: FacilityId,
    pub facility_type: FacilityType,
}
