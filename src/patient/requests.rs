use serde::Deserialize;

#[derive(Deserialize)]
pub struct ViewProfileRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct SearchDoctorRequest {
    pub query: Option<String>,
    pub specialty: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct AvailableSlotsRequest {
    pub did: String,
    pub date: String,
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub login_token: String,
    pub did: String,
    #[serde(rename = "type")]
    pub consult_type: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct AppointmentsRequest {
    pub login_token: String,
    #[serde(default = "appointments_request_tab_default")]
    pub tab: String,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct AppointmentDetailRequest {
    pub login_token: String,
    pub aid: String,
}

#[derive(Deserialize)]
pub struct CancelAppointRequest {
    pub login_token: String,
    pub aid: String,
}

fn appointments_request_tab_default() -> String {
    "all".to_string()
}
