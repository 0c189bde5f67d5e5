use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct BookSlots {
    pub facility: String,
    pub date: NaiveDate,
    pub times: Vec<String>,
    pub booked_by: String,
    pub booking_id: Option<String>,
}

#[derive(Debug, new)]
pub struct GenerateSlots {
    pub facility: String,
    pub start_date: NaiveDate,
    pub days: u32,
}

#[derive(Debug)]
pub struct BulkSlotEntry {
    pub date: NaiveDate,
    pub times: Vec<String>,
}

#[derive(Debug, new)]
pub struct BulkBookSlots {
    pub facility: String,
    pub entries: Vec<BulkSlotEntry>,
    pub booked_by: String,
    pub booking_id: String,
}

#[derive(Debug, new)]
pub struct ReleaseSlot {
    pub facility: String,
    pub date: NaiveDate,
    pub time: String,
}
