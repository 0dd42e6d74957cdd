use crate::schema::doctor_availability;
use chrono::NaiveTime;

#[derive(Queryable)]
pub struct AvailabilitySlot {
    pub id: u64,
    pub did: String,
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

#[derive(Insertable)]
#[table_name = "doctor_availability"]
pub struct NewAvailability {
    pub did: String,
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

#[derive(AsChangeset)]
#[table_name = "doctor_availability"]
pub struct UpdateAvailability {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
