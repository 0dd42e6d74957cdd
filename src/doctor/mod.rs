mod requests;
mod responses;
mod utils;

use crate::{
    appointments::{self, listing},
    auth::utils::get_did_from_token,
    booking::slots::format_slot,
    database::{assert, get_db_conn},
    models::{
        appointments::{Appointment, AppointmentStatus},
        availability::{AvailabilitySlot, DAYS_OF_WEEK},
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
    utils::{ensure_slot_updated, plan_availability_save},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(view_info)
        .service(search_appoint)
        .service(approve_appoint)
        .service(reject_appoint)
        .service(finish_appoint)
        .service(patients)
        .service(availability)
        .service(remove_availability)
        .service(save_availability);
}

crate::post_funcs! {
    (view_info, "/view_info", ViewInfoRequest, ViewInfoResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (approve_appoint, "/approve_appoint", HandleAppointRequest, SimpleResponse),
    (reject_appoint, "/reject_appoint", HandleAppointRequest, SimpleResponse),
    (finish_appoint, "/finish_appoint", HandleAppointRequest, SimpleResponse),
    (patients, "/patients", PatientsRequest, PatientsResponse),
    (availability, "/availability", AvailabilityRequest, AvailabilityResponse),
    (remove_availability, "/remove_availability", RemoveAvailabilityRequest, SimpleResponse),
    (save_availability, "/save_availability", SaveAvailabilityRequest, SimpleResponse),
}

const UNKNOWN_PATIENT: &str = "Unknown Patient";

async fn view_info_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewInfoRequest>,
) -> anyhow::Result<ViewInfoResponse> {
    use crate::schema::{doctors, profiles};

    let info = info.into_inner();
    let did = get_did_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let (doctor, profile) = web::block(move || {
        doctors::table
            .filter(doctors::did.eq(&did))
            .left_join(profiles::table.on(doctors::uid.eq(profiles::uid)))
            .get_result::<(DoctorData, Option<ProfileData>)>(&conn)
    })
    .await
    .context("DB error")?;

    let (name, email) = match profile {
        Some(profile) => (Some(profile.display_name), profile.email),
        None => (None, "".to_string()),
    };

    Ok(ViewInfoResponse {
        success: true,
        err: "".to_string(),
        did: doctor.did,
        name: listing::doctor_display_name(name.as_deref()),
        email,
        specialty: doctor.specialty,
        bio: doctor.bio.unwrap_or_default(),
        location: doctor.location.unwrap_or_default(),
        years_experience: doctor.years_experience,
        consultation_fee: doctor.consultation_fee,
        rating: doctor.rating,
        review_count: doctor.review_count,
        avatar: doctor
            .avatar_url
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        offers_video: doctor.offers_video,
    })
}

async fn search_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    use crate::schema::{appointments, profiles};

    let info = info.into_inner();
    let did = get_did_from_token(info.login_token, &pool).await?;

    let status = info.status;
    if status != "all" {
        status.parse::<AppointmentStatus>()?;
    }
    let patient_uid = info.patient_uid.filter(|uid| !uid.is_empty());
    let any_patient = patient_uid.is_none();
    let patient_uid = patient_uid.unwrap_or_default();
    let (first_index, limit) = crate::utils::paging(info.first_index, info.limit);

    let conn = get_db_conn(&pool)?;
    let appos = web::block(move || {
        appointments::table
            .filter(appointments::did.eq(&did))
            .filter(appointments::status.eq(&status).or(&status == "all"))
            .filter(appointments::patient_uid.eq(&patient_uid).or(any_patient))
            .left_join(profiles::table.on(appointments::patient_uid.eq(profiles::uid)))
            .order((
                appointments::appointment_date.desc(),
                appointments::appointment_time.desc(),
            ))
            .offset(first_index)
            .limit(limit)
            .get_results::<(Appointment, Option<ProfileData>)>(&conn)
    })
    .await
    .context("DB error")?;

    let appos = appos
        .into_iter()
        .map(|(appo, profile)| {
            let (patient_name, patient_email) = match profile {
                Some(profile) => (profile.display_name, profile.email),
                None => (UNKNOWN_PATIENT.to_string(), "".to_string()),
            };
            SearchAppointItem {
                patient_name,
                patient_email,
                appointment_date: crate::utils::format_date_str(&appo.appointment_date),
                appointment_time: format_slot(&appo.appointment_time),
                aid: appo.aid,
                patient_uid: appo.patient_uid,
                consult_type: appo.consult_type,
                status: appo.status,
                location: appo.location,
                notes: appo.notes,
            }
        })
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments: appos,
    })
}

async fn set_appoint_status(
    pool: web::Data<DbPool>,
    info: HandleAppointRequest,
    status: AppointmentStatus,
) -> anyhow::Result<SimpleResponse> {
    let did = get_did_from_token(info.login_token, &pool).await?;
    assert::assert_doctor_appoint(&pool, did, info.aid.clone()).await?;

    appointments::update_status(&pool, info.aid, status).await?;

    Ok(SimpleResponse::ok())
}

async fn approve_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<HandleAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    set_appoint_status(pool, info.into_inner(), AppointmentStatus::Confirmed).await
}

async fn reject_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<HandleAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    set_appoint_status(pool, info.into_inner(), AppointmentStatus::Cancelled).await
}

async fn finish_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<HandleAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    set_appoint_status(pool, info.into_inner(), AppointmentStatus::Completed).await
}

async fn patients_impl(
    pool: web::Data<DbPool>,
    info: web::Json<PatientsRequest>,
) -> anyhow::Result<PatientsResponse> {
    use crate::schema::{appointments, profiles};

    let info = info.into_inner();
    let did = get_did_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let (appos, profs) = web::block(move || {
        let appos = appointments::table
            .filter(appointments::did.eq(&did))
            .order(appointments::appointment_date.desc())
            .get_results::<Appointment>(&conn)?;

        let mut uids: Vec<&str> = appos.iter().map(|a| a.patient_uid.as_str()).collect();
        uids.sort_unstable();
        uids.dedup();
        let profs = profiles::table
            .filter(profiles::uid.eq_any(uids))
            .get_results::<ProfileData>(&conn)?;

        Ok::<_, diesel::result::Error>((appos, profs))
    })
    .await
    .context("DB error")?;

    let now = Local::now().naive_local();
    let patient_items = listing::summarize_patients(&appos, now)
        .into_iter()
        .map(|summary| {
            let profile = profs.iter().find(|p| p.uid == summary.patient_uid);
            PatientItem {
                display_name: profile
                    .map(|p| p.display_name.clone())
                    .unwrap_or_else(|| UNKNOWN_PATIENT.to_string()),
                email: profile.map(|p| p.email.clone()).unwrap_or_default(),
                phone: profile.and_then(|p| p.phone.clone()),
                total_appointments: summary.total,
                upcoming_appointments: summary.upcoming,
                last_appointment: summary
                    .last_visit
                    .as_ref()
                    .map(crate::utils::format_date_str),
                uid: summary.patient_uid,
            }
        })
        .collect();

    Ok(PatientsResponse {
        success: true,
        err: "".to_string(),
        patients: patient_items,
    })
}

async fn availability_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AvailabilityRequest>,
) -> anyhow::Result<AvailabilityResponse> {
    use crate::schema::doctor_availability;

    let info = info.into_inner();
    let did = get_did_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let slots = web::block(move || {
        doctor_availability::table
            .filter(doctor_availability::did.eq(&did))
            .order((
                doctor_availability::day_of_week.asc(),
                doctor_availability::start_time.asc(),
            ))
            .get_results::<AvailabilitySlot>(&conn)
    })
    .await
    .context("DB error")?;

    let slots = slots
        .into_iter()
        .map(|slot| AvailabilityItem {
            id: slot.id,
            day_of_week: slot.day_of_week,
            day_name: DAYS_OF_WEEK
                .get(slot.day_of_week as usize)
                .map_or_else(String::new, |d| d.to_string()),
            start_time: format_slot(&slot.start_time),
            end_time: format_slot(&slot.end_time),
            is_available: slot.is_available,
        })
        .collect();

    Ok(AvailabilityResponse {
        success: true,
        err: "".to_string(),
        slots,
    })
}

async fn remove_availability_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RemoveAvailabilityRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::doctor_availability;

    let info = info.into_inner();
    let did = get_did_from_token(info.login_token, &pool).await?;
    assert::assert_availability(&pool, did, info.id).await?;

    let conn = get_db_conn(&pool)?;
    let id = info.id;
    web::block(move || {
        diesel::delete(doctor_availability::table.filter(doctor_availability::id.eq(id)))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    tracing::info!(id, "availability slot removed");
    Ok(SimpleResponse::ok())
}

/// New slots go in as one insert; existing ones are updated one call at a
/// time and the first failure stops the rest. Nothing spans the writes.
async fn save_availability_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SaveAvailabilityRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::doctor_availability;

    let info = info.into_inner();
    let did = get_did_from_token(info.login_token, &pool).await?;
    let plan = plan_availability_save(&did, info.slots)?;

    let inserted = plan.inserts.len();
    if inserted > 0 {
        let conn = get_db_conn(&pool)?;
        let inserts = plan.inserts;
        web::block(move || {
            diesel::insert_into(doctor_availability::table)
                .values(&inserts)
                .execute(&conn)
        })
        .await
        .context("DB error")?;
    }

    let updated = plan.updates.len();
    for (id, data) in plan.updates {
        let conn = get_db_conn(&pool)?;
        let did = did.clone();
        let changed = web::block(move || {
            diesel::update(
                doctor_availability::table
                    .filter(doctor_availability::id.eq(id))
                    .filter(doctor_availability::did.eq(did)),
            )
            .set(&data)
            .execute(&conn)
        })
        .await
        .with_context(|| format!("DB error on time slot {}", id))?;
        ensure_slot_updated(id, changed)?;
    }

    tracing::info!(did = %did, inserted, updated, "availability saved");
    Ok(SimpleResponse::ok())
}
