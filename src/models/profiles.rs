use crate::schema::profiles;

#[derive(Queryable, Insertable, Clone)]
#[table_name = "profiles"]
pub struct ProfileData {
    pub uid: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}
