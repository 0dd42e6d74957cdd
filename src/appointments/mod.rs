//! Appointment rows: inserting a booked intent as `pending`, single-row status
//! updates, and the joined read used by the confirmation page.
//!
//! Status updates do not look at the current status. Callers check existence
//! and ownership through `database::assert`, nothing else.

pub mod listing;

use actix_web::web;
use anyhow::{bail, Context};
use chrono::Local;
use diesel::prelude::*;

use crate::{
    booking::BookingIntent,
    database::get_db_conn,
    models::{
        appointments::{Appointment, AppointmentStatus, NewAppointment},
        doctors::DoctorData,
        profiles::ProfileData,
    },
    DbPool,
};

pub async fn insert_pending(
    pool: &web::Data<DbPool>,
    patient_uid: String,
    intent: BookingIntent,
    location: Option<String>,
    notes: Option<String>,
) -> anyhow::Result<String> {
    use crate::schema::appointments;

    let aid = uuid::Uuid::new_v4().to_string();
    let data = NewAppointment {
        aid: aid.clone(),
        patient_uid,
        did: intent.doctor_id,
        appointment_date: intent.date,
        appointment_time: intent.time,
        consult_type: intent.consult_type.as_str().to_string(),
        status: AppointmentStatus::Pending.as_str().to_string(),
        location,
        notes,
        created_at: Local::now().naive_local(),
    };

    let conn = get_db_conn(pool)?;
    web::block(move || {
        diesel::insert_into(appointments::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    tracing::info!(aid = %aid, "appointment booked");
    Ok(aid)
}

pub async fn update_status(
    pool: &web::Data<DbPool>,
    aid: String,
    status: AppointmentStatus,
) -> anyhow::Result<()> {
    use crate::schema::appointments;

    let conn = get_db_conn(pool)?;
    let target = aid.clone();
    let updated = web::block(move || {
        diesel::update(appointments::table.filter(appointments::aid.eq(target)))
            .set(appointments::status.eq(status.as_str()))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    if updated == 0 {
        bail!("No such appointment");
    }

    tracing::info!(aid = %aid, status = %status, "appointment status updated");
    Ok(())
}

/// One appointment of `patient_uid` with its doctor and the doctor's profile.
pub async fn find_for_patient(
    pool: &web::Data<DbPool>,
    aid: String,
    patient_uid: String,
) -> anyhow::Result<(Appointment, DoctorData, Option<ProfileData>)> {
    use crate::schema::{appointments, doctors, profiles};

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        appointments::table
            .filter(appointments::aid.eq(aid))
            .filter(appointments::patient_uid.eq(patient_uid))
            .inner_join(doctors::table.on(appointments::did.eq(doctors::did)))
            .left_join(profiles::table.on(doctors::uid.eq(profiles::uid)))
            .get_result::<(Appointment, DoctorData, Option<ProfileData>)>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    match res {
        Some(res) => Ok(res),
        None => bail!("No such appointment"),
    }
}
