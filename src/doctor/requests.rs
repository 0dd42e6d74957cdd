use serde::Deserialize;

#[derive(Deserialize)]
pub struct ViewInfoRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub login_token: String,
    #[serde(default = "search_appoint_request_status_default")]
    pub status: String,
    /// Restricts the list to one patient's history.
    pub patient_uid: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct HandleAppointRequest {
    pub login_token: String,
    pub aid: String,
}

#[derive(Deserialize)]
pub struct PatientsRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct AvailabilityRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct RemoveAvailabilityRequest {
    pub login_token: String,
    pub id: u64,
}

#[derive(Deserialize, Clone)]
pub struct AvailabilityInput {
    pub id: Option<u64>,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "availability_input_is_available_default")]
    pub is_available: bool,
}

#[derive(Deserialize)]
pub struct SaveAvailabilityRequest {
    pub login_token: String,
    pub slots: Vec<AvailabilityInput>,
}

fn search_appoint_request_status_default() -> String {
    "all".to_string()
}

fn availability_input_is_available_default() -> bool {
    true
}
