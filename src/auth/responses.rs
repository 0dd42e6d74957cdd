use serde::Serialize;

#[derive(Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub err: String,
    pub login_token: String,
    pub role: String,
}

#[derive(Default, Serialize)]
pub struct RoleResponse {
    pub success: bool,
    pub err: String,
    pub role: String,
}

crate::impl_err_response! {
    LoginResponse,
    RoleResponse,
}
