use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub display_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "register_request_role_default")]
    pub role: String,
    // doctors only
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub years_experience: Option<i32>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct RoleRequest {
    pub login_token: String,
}

fn register_request_role_default() -> String {
    crate::models::users::Role::Patient.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_to_patient() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@b.c","password":"secret1","confirm_password":"secret1","display_name":"Ann"}"#,
        )
        .unwrap();
        assert_eq!(req.role, "patient");
        assert!(req.specialty.is_none());
        assert!(req.phone.is_none());
    }

    #[test]
    fn register_doctor_fields() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"d@b.c","password":"secret1","confirm_password":"secret1",
                "display_name":"Dana","role":"doctor","specialty":"Cardiology","years_experience":12}"#,
        )
        .unwrap();
        assert_eq!(req.role, "doctor");
        assert_eq!(req.specialty.as_deref(), Some("Cardiology"));
        assert_eq!(req.years_experience, Some(12));
    }
}
