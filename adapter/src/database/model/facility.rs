use chrono::{DateTime, Utc};
use kernel::model::{
    facility::{Facility, FacilityType},
    id::FacilityId,
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct FacilityRow {
    pub facility_id: FacilityId,
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

impl TryFrom<FacilityRow> for Facility {
    type Error = AppError;

    fn try_from(value: FacilityRow) -> Result<Self, Self::Error> {
        let FacilityRow {
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
        let facility_type = facility_type.parse::<FacilityType>().map_err(|_| {
            AppError::ConversionEntityError(format!("unknown facility type: {facility_type}"))
        })?;
        Ok(Facility {
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
        })
    }
}
