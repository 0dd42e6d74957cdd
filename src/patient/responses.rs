use serde::Serialize;

#[derive(Default, Serialize)]
pub struct ViewProfileResponse {
    pub success: bool,
    pub err: String,
    pub uid: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

#[derive(Default, Serialize)]
pub struct SearchDoctorItem {
    pub did: String,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    pub review_count: i32,
    pub experience: String,
    pub location: String,
    pub consultation_fee: i32,
    pub avatar: String,
    pub is_available_today: bool,
    pub offers_video_consult: bool,
}

#[derive(Default, Serialize)]
pub struct SearchDoctorResponse {
    pub success: bool,
    pub err: String,
    pub doctors: Vec<SearchDoctorItem>,
}

#[derive(Default, Serialize)]
pub struct AvailableSlotsResponse {
    pub success: bool,
    pub err: String,
    pub slots: Vec<String>,
}

#[derive(Default, Serialize)]
pub struct BookResponse {
    pub success: bool,
    pub err: String,
    pub aid: String,
}

#[derive(Default, Serialize)]
pub struct AppointmentItem {
    pub aid: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub consult_type: String,
    pub status: String,
    pub location: Option<String>,
    pub doctor_avatar: String,
    pub appointment_date: String,
    pub appointment_time: String,
}

#[derive(Default, Serialize)]
pub struct AppointmentsResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
}

#[derive(Default, Serialize)]
pub struct AppointmentDetailResponse {
    pub success: bool,
    pub err: String,
    pub aid: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub consult_type: String,
    pub type_label: String,
    pub status: String,
    pub location: String,
    pub notes: Option<String>,
    pub consultation_fee: i32,
    pub did: String,
    pub doctor_name: String,
    pub doctor_email: String,
    pub specialty: String,
    pub doctor_avatar: String,
    pub preparation: Vec<String>,
}

crate::impl_err_response! {
    ViewProfileResponse,
    SearchDoctorResponse,
    AvailableSlotsResponse,
    BookResponse,
    AppointmentsResponse,
    AppointmentDetailResponse,
}
