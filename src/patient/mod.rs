mod requests;
mod responses;
mod utils;

use crate::{
    appointments::{self, listing},
    auth::utils::get_uid_from_token,
    booking::{slots, BookingWizard},
    database::{assert, get_db_conn},
    models::{
        appointments::{Appointment, AppointmentStatus, ConsultationType},
        doctors::{DoctorData, DEFAULT_AVATAR_URL},
        profiles::ProfileData,
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;
use chrono::Local;
use diesel::prelude::*;

use self::{
    requests::*,
    responses::*,
    utils::{check_consult_offered, search_patterns},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(view_profile)
        .service(search_doctor)
        .service(available_slots)
        .service(book)
        .service(my_appointments)
        .service(appointment_detail)
        .service(cancel_appoint);
}

crate::post_funcs! {
    (view_profile, "/view_profile", ViewProfileRequest, ViewProfileResponse),
    (search_doctor, "/search_doctor", SearchDoctorRequest, SearchDoctorResponse),
    (available_slots, "/available_slots", AvailableSlotsRequest, AvailableSlotsResponse),
    (book, "/book", BookRequest, BookResponse),
    (my_appointments, "/appointments", AppointmentsRequest, AppointmentsResponse),
    (appointment_detail, "/appointment_detail", AppointmentDetailRequest, AppointmentDetailResponse),
    (cancel_appoint, "/cancel_appoint", CancelAppointRequest, SimpleResponse),
}

const DEFAULT_LOCATION: &str = "Medical Center";
const UNKNOWN_DOCTOR: &str = "Unknown Doctor";
const PLACEHOLDER_AVATAR: &str = "/placeholder-doctor.jpg";

async fn view_profile_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewProfileRequest>,
) -> anyhow::Result<ViewProfileResponse> {
    use crate::schema::profiles;

    let info = info.into_inner();
    let uid = get_uid_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, uid.clone()).await?;

    let conn = get_db_conn(&pool)?;
    let res = web::block(move || {
        profiles::table
            .filter(profiles::uid.eq(&uid))
            .get_result::<ProfileData>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(ViewProfileResponse {
        success: true,
        err: "".to_string(),
        uid: res.uid,
        display_name: res.display_name,
        email: res.email,
        phone: res.phone.unwrap_or_default(),
        role: res.role.unwrap_or_default(),
    })
}

async fn search_doctor_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchDoctorRequest>,
) -> anyhow::Result<SearchDoctorResponse> {
    use crate::schema::{doctors, profiles};

    let info = info.into_inner();
    let (query_pattern, specialty_pattern) = search_patterns(info.query, info.specialty);
    let (first_index, limit) = crate::utils::paging(info.first_index, info.limit);

    let conn = get_db_conn(&pool)?;
    let docs = web::block(move || {
        doctors::table
            .inner_join(profiles::table.on(doctors::uid.eq(profiles::uid)))
            .filter(
                profiles::display_name
                    .like(&query_pattern)
                    .or(doctors::specialty.like(&query_pattern)),
            )
            .filter(doctors::specialty.like(specialty_pattern))
            .order(profiles::display_name.asc())
            .offset(first_index)
            .limit(limit)
            .get_results::<(DoctorData, ProfileData)>(&conn)
    })
    .await
    .context("DB error")?;

    tracing::debug!(found = docs.len(), "doctor search");

    let now = Local::now().naive_local();
    let is_available_today = !slots::generate_slots(now.date(), now).is_empty();
    let docs = docs
        .into_iter()
        .map(|(doctor, profile)| SearchDoctorItem {
            did: doctor.did,
            name: listing::doctor_display_name(Some(&profile.display_name)),
            specialty: doctor.specialty,
            rating: doctor.rating,
            review_count: doctor.review_count,
            experience: doctor
                .years_experience
                .map_or_else(String::new, |years| format!("{} years", years)),
            location: doctor
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            consultation_fee: doctor.consultation_fee,
            avatar: doctor
                .avatar_url
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            is_available_today,
            offers_video_consult: doctor.offers_video,
        })
        .collect();

    Ok(SearchDoctorResponse {
        success: true,
        err: "".to_string(),
        doctors: docs,
    })
}

async fn available_slots_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AvailableSlotsRequest>,
) -> anyhow::Result<AvailableSlotsResponse> {
    let info = info.into_inner();
    assert::assert_doctor(&pool, info.did).await?;
    let date = crate::utils::parse_date_str(&info.date)?;

    Ok(AvailableSlotsResponse {
        success: true,
        err: "".to_string(),
        slots: slots::generate_slots(date, Local::now().naive_local()),
    })
}

async fn book_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<BookResponse> {
    use crate::schema::doctors;

    let info = info.into_inner();
    let uid = get_uid_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, uid.clone()).await?;
    assert::assert_doctor(&pool, info.did.clone()).await?;

    let consult_type: ConsultationType = info.consult_type.parse()?;
    let date = crate::utils::parse_date_str(&info.date)?;

    let conn = get_db_conn(&pool)?;
    let did = info.did.clone();
    let (location, offers_video) = web::block(move || {
        doctors::table
            .filter(doctors::did.eq(did))
            .select((doctors::location, doctors::offers_video))
            .get_result::<(Option<String>, bool)>(&conn)
    })
    .await
    .context("DB error")?;
    check_consult_offered(consult_type, offers_video)?;

    let mut wizard = BookingWizard::new(info.did);
    wizard.select_type(consult_type)?;
    wizard.select_date(date, Local::now().naive_local())?;
    wizard.select_time(&info.time)?;
    let intent = wizard.confirm()?;
    tracing::debug!(?intent, "booking wizard confirmed");

    let notes = info.notes.filter(|n| !n.trim().is_empty());
    let aid = appointments::insert_pending(&pool, uid, intent, location, notes).await?;

    Ok(BookResponse {
        success: true,
        err: "".to_string(),
        aid,
    })
}

async fn my_appointments_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AppointmentsRequest>,
) -> anyhow::Result<AppointmentsResponse> {
    use crate::schema::{appointments, doctors, profiles};

    let info = info.into_inner();
    let uid = get_uid_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, uid.clone()).await?;

    let tab: listing::Tab = info.tab.parse()?;
    let (first_index, limit) = crate::utils::paging_unbounded(info.first_index, info.limit);

    let conn = get_db_conn(&pool)?;
    let appos = web::block(move || {
        appointments::table
            .filter(appointments::patient_uid.eq(&uid))
            .inner_join(doctors::table.on(appointments::did.eq(doctors::did)))
            .left_join(profiles::table.on(doctors::uid.eq(profiles::uid)))
            .order((
                appointments::appointment_date.desc(),
                appointments::appointment_time.desc(),
            ))
            .get_results::<(Appointment, DoctorData, Option<ProfileData>)>(&conn)
    })
    .await
    .context("DB error")?;

    let now = Local::now().naive_local();
    let today = now.date();
    let appos = appos
        .into_iter()
        .filter(|(appo, _, _)| tab.contains(appo, now))
        .skip(first_index)
        .take(limit)
        .map(|(appo, doctor, profile)| AppointmentItem {
            doctor_name: profile
                .map(|p| p.display_name)
                .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string()),
            specialty: doctor.specialty,
            date: crate::utils::date_label(&appo.appointment_date, &today),
            time: crate::utils::time_label(&appo.appointment_time),
            consult_type: appo.consult_type,
            status: appo.status,
            location: appo.location,
            doctor_avatar: doctor
                .avatar_url
                .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
            appointment_date: crate::utils::format_date_str(&appo.appointment_date),
            appointment_time: slots::format_slot(&appo.appointment_time),
            aid: appo.aid,
        })
        .collect();

    Ok(AppointmentsResponse {
        success: true,
        err: "".to_string(),
        appointments: appos,
    })
}

async fn appointment_detail_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AppointmentDetailRequest>,
) -> anyhow::Result<AppointmentDetailResponse> {
    let info = info.into_inner();
    let uid = get_uid_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, uid.clone()).await?;

    let (appo, doctor, profile) = appointments::find_for_patient(&pool, info.aid, uid).await?;

    let consult_type = appo
        .consult_type
        .parse::<ConsultationType>()
        .unwrap_or(ConsultationType::InPerson);
    let (doctor_name, doctor_email) = match profile {
        Some(profile) => (Some(profile.display_name), profile.email),
        None => (None, "".to_string()),
    };

    Ok(AppointmentDetailResponse {
        success: true,
        err: "".to_string(),
        appointment_date: crate::utils::format_date_str(&appo.appointment_date),
        appointment_time: slots::format_slot(&appo.appointment_time),
        date: crate::utils::long_date_label(&appo.appointment_date),
        time: crate::utils::time_label(&appo.appointment_time),
        consult_type: appo.consult_type,
        type_label: consult_type.label().to_string(),
        status: appo.status,
        location: appo
            .location
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        notes: appo.notes,
        consultation_fee: doctor.consultation_fee,
        did: doctor.did,
        doctor_name: listing::doctor_display_name(doctor_name.as_deref()),
        doctor_email,
        specialty: doctor.specialty,
        doctor_avatar: doctor
            .avatar_url
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        preparation: consult_type
            .preparation()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        aid: appo.aid,
    })
}

async fn cancel_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let uid = get_uid_from_token(info.login_token, &pool).await?;
    assert::assert_user(&pool, uid.clone()).await?;
    assert::assert_patient_appoint(&pool, uid, info.aid.clone()).await?;

    appointments::update_status(&pool, info.aid, AppointmentStatus::Cancelled).await?;

    Ok(SimpleResponse::ok())
}
