use actix_web::web;
use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::Local;
use diesel::prelude::*;

use crate::{models::logins::LoginData, DbPool};

pub const MIN_PASSWORD_LEN: usize = 6;
const MAX_LOGIN_TIME_SECS: i64 = 3600;

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Blake2b::digest(password.as_bytes()))
}

pub fn new_login_token(uid: &str) -> String {
    let salt = uuid::Uuid::new_v4();
    format!("{:x}", Blake2b::digest(format!("{}{}", uid, salt).as_bytes()))
}

pub fn check_signup(email: &str, password: &str, confirm_password: &str) -> anyhow::Result<()> {
    if !email.contains('@') {
        bail!("Wrong format on email");
    }
    if password != confirm_password {
        bail!("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        );
    }
    Ok(())
}

pub async fn get_uid_from_token(token: String, pool: &web::Data<DbPool>) -> anyhow::Result<String> {
    use crate::schema::logins;

    let conn = pool.get().context("DB connection error")?;
    let data = web::block(move || {
        logins::table
            .filter(logins::token.eq(token))
            .order(logins::login_time.desc())
            .limit(1)
            .get_result::<LoginData>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    if let Some(data) = data {
        let time_diff = Local::now()
            .naive_local()
            .signed_duration_since(data.login_time);
        if time_diff.num_seconds() <= MAX_LOGIN_TIME_SECS {
            Ok(data.uid)
        } else {
            bail!("Login has expired");
        }
    } else {
        bail!("No such login token");
    }
}

/// Resolves a token to the doctor row owned by the logged-in account.
pub async fn get_did_from_token(token: String, pool: &web::Data<DbPool>) -> anyhow::Result<String> {
    use crate::schema::doctors;

    let uid = get_uid_from_token(token, pool).await?;
    let conn = pool.get().context("DB connection error")?;
    let did = web::block(move || {
        doctors::table
            .filter(doctors::uid.eq(uid))
            .select(doctors::did)
            .get_result::<String>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    match did {
        Some(did) => Ok(did),
        None => bail!("This account is not a doctor"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rules() {
        assert!(check_signup("ann@example.com", "secret1", "secret1").is_ok());
        assert_eq!(
            check_signup("ann@example.com", "secret1", "secret2")
                .unwrap_err()
                .to_string(),
            "Passwords do not match"
        );
        assert!(check_signup("ann@example.com", "12345", "12345").is_err());
        assert!(check_signup("ann@example.com", "123456", "123456").is_ok());
        assert!(check_signup("ann.example.com", "secret1", "secret1").is_err());
    }

    #[test]
    fn password_hash_is_stable_hex() {
        let hash = hash_password("secret1");
        assert_eq!(hash, hash_password("secret1"));
        assert_ne!(hash, hash_password("secret2"));
        assert_eq!(hash.len(), 128);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn login_tokens_differ_per_login() {
        assert_ne!(new_login_token("uid-1"), new_login_token("uid-1"));
    }
}
