pub mod appointments;
pub mod availability;
pub mod doctors;
pub mod profiles;
pub mod users;

pub mod logins;
