use std::{fmt, str::FromStr};

use crate::schema::users;
use anyhow::bail;
use chrono::NaiveDateTime;

#[derive(Queryable, Insertable, Identifiable)]
#[primary_key(uid)]
#[table_name = "users"]
pub struct UserData {
    pub uid: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        }
    }

    /// Profile role first, then the role given at registration, then patient.
    pub fn resolve(profile_role: Option<&str>, account_role: Option<&str>) -> Role {
        profile_role
            .and_then(|r| r.parse().ok())
            .or_else(|| account_role.and_then(|r| r.parse().ok()))
            .unwrap_or(Role::Patient)
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            _ => bail!("Unknown role '{}'", s),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roles() {
        assert_eq!("patient".parse::<Role>().unwrap(), Role::Patient);
        assert_eq!("doctor".parse::<Role>().unwrap(), Role::Doctor);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn resolve_prefers_profile() {
        assert_eq!(Role::resolve(Some("doctor"), Some("patient")), Role::Doctor);
    }

    #[test]
    fn resolve_falls_back_to_account_then_patient() {
        assert_eq!(Role::resolve(None, Some("doctor")), Role::Doctor);
        assert_eq!(Role::resolve(Some("nurse"), Some("doctor")), Role::Doctor);
        assert_eq!(Role::resolve(None, None), Role::Patient);
    }
}
