mod requests;
mod responses;
pub mod utils;

use crate::{
    database::{assert, get_db_conn},
    models::{
        doctors::DoctorData,
        logins::LoginData,
        profiles::ProfileData,
        users::{Role, UserData},
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Local;
use diesel::prelude::*;

use self::{
    requests::*,
    responses::*,
    utils::{check_signup, get_uid_from_token, hash_password, new_login_token},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(logout)
        .service(role);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
    (role, "/role", RoleRequest, RoleResponse),
}

const DEFAULT_SPECIALTY: &str = "General Practice";

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{doctors, profiles, users};

    let info = info.into_inner();
    let user_role: Role = info.role.parse()?;
    let email = info.email.trim().to_lowercase();
    check_signup(&email, &info.password, &info.confirm_password)?;

    let conn = get_db_conn(&pool)?;
    let uid = web::block(move || {
        conn.transaction(|| {
            let res = users::table
                .filter(users::email.eq(&email))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("An account with this email already exists");
            }

            let uid = uuid::Uuid::new_v4().to_string();
            let user = UserData {
                uid: uid.clone(),
                email: email.clone(),
                password: hash_password(&info.password),
                role: user_role.as_str().to_string(),
                created_at: Local::now().naive_local(),
            };
            diesel::insert_into(users::table)
                .values(user)
                .execute(&conn)
                .context("DB error")?;

            let profile = ProfileData {
                uid: uid.clone(),
                display_name: info.display_name,
                email,
                phone: info.phone.filter(|p| !p.is_empty()),
                role: Some(user_role.as_str().to_string()),
            };
            diesel::insert_into(profiles::table)
                .values(profile)
                .execute(&conn)
                .context("DB error")?;

            if user_role == Role::Doctor {
                let doctor = DoctorData {
                    did: uuid::Uuid::new_v4().to_string(),
                    uid: uid.clone(),
                    specialty: info
                        .specialty
                        .filter(|s| !s.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_SPECIALTY.to_string()),
                    bio: info.bio,
                    location: info.location,
                    years_experience: info.years_experience,
                    consultation_fee: 0,
                    avatar_url: None,
                    rating: 0.0,
                    review_count: 0,
                    offers_video: true,
                };
                diesel::insert_into(doctors::table)
                    .values(doctor)
                    .execute(&conn)
                    .context("DB error")?;
            }

            Ok(uid)
        })
    })
    .await?;

    tracing::info!(uid = %uid, role = %user_role, "account registered");
    Ok(SimpleResponse::ok())
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::{logins, users};

    let info = info.into_inner();
    let email = info.email.trim().to_lowercase();

    let conn = get_db_conn(&pool)?;
    let (login_token, user_role) = web::block(move || {
        conn.transaction(|| {
            let user = users::table
                .filter(users::email.eq(&email))
                .filter(users::password.eq(hash_password(&info.password)))
                .get_result::<UserData>(&conn)
                .optional()
                .context("DB error")?;
            let user = match user {
                Some(user) => user,
                None => bail!("Invalid email or password"),
            };

            let login_token = new_login_token(&user.uid);
            let token_data = LoginData {
                token: login_token.clone(),
                uid: user.uid,
                login_time: Local::now().naive_local(),
            };
            diesel::insert_into(logins::table)
                .values(token_data)
                .execute(&conn)
                .context("DB error")?;

            Ok((login_token, user.role))
        })
    })
    .await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        login_token,
        role: user_role,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::logins;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(logins::table.filter(logins::token.eq(info.login_token))).execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn role_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RoleRequest>,
) -> anyhow::Result<RoleResponse> {
    use crate::schema::{profiles, users};

    let info = info.into_inner();
    let uid = get_uid_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, uid.clone()).await?;

    let conn = get_db_conn(&pool)?;
    let (profile_role, account_role) = web::block(move || {
        let profile_role = profiles::table
            .filter(profiles::uid.eq(&uid))
            .select(profiles::role)
            .get_result::<Option<String>>(&conn)
            .optional()?
            .flatten();
        let account_role = users::table
            .filter(users::uid.eq(&uid))
            .select(users::role)
            .get_result::<String>(&conn)
            .optional()?;
        Ok::<_, diesel::result::Error>((profile_role, account_role))
    })
    .await
    .context("DB error")?;

    let user_role = Role::resolve(profile_role.as_deref(), account_role.as_deref());
    Ok(RoleResponse {
        success: true,
        err: "".to_string(),
        role: user_role.as_str().to_string(),
    })
}
