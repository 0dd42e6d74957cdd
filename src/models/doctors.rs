use crate::schema::doctors;

pub const DEFAULT_AVATAR_URL: &str = "https://cdn4.iconfinder.com/data/icons/glyphs/24/icons_user-1024.png";

#[derive(Queryable, Insertable, Clone)]
#[table_name = "doctors"]
pub struct DoctorData {
    pub did: String,
    pub uid: String,
    pub specialty: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub years_experience: Option<i32>,
    pub consultation_fee: i32,
    pub avatar_url: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    pub offers_video: bool,
}
