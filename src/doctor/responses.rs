use serde::Serialize;

#[derive(Default, Serialize)]
pub struct ViewInfoResponse {
    pub success: bool,
    pub err: String,
    pub did: String,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub bio: String,
    pub location: String,
    pub years_experience: Option<i32>,
    pub consultation_fee: i32,
    pub rating: f64,
    pub review_count: i32,
    pub avatar: String,
    pub offers_video: bool,
}

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub aid: String,
    pub patient_uid: String,
    pub patient_name: String,
    pub patient_email: String,
    pub appointment_date: String,
    pub appointment_time: String,
    #[serde(rename = "type")]
    pub consult_type: String,
    pub status: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<SearchAppointItem>,
}

#[derive(Default, Serialize)]
pub struct PatientItem {
    pub uid: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub total_appointments: usize,
    pub upcoming_appointments: usize,
    pub last_appointment: Option<String>,
}

#[derive(Default, Serialize)]
pub struct PatientsResponse {
    pub success: bool,
    pub err: String,
    pub patients: Vec<PatientItem>,
}

#[derive(Default, Serialize)]
pub struct AvailabilityItem {
    pub id: u64,
    pub day_of_week: i32,
    pub day_name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Default, Serialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub err: String,
    pub slots: Vec<AvailabilityItem>,
}

crate::impl_err_response! {
    ViewInfoResponse,
    SearchAppointResponse,
    PatientsResponse,
    AvailabilityResponse,
}
