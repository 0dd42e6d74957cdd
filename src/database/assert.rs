use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_user(pool: &web::Data<DbPool>, uid: String) -> anyhow::Result<()> {
    use crate::schema::users;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        users::table
            .filter(users::uid.eq(uid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such user");
    }

    Ok(())
}

pub async fn assert_doctor(pool: &web::Data<DbPool>, did: String) -> anyhow::Result<()> {
    use crate::schema::doctors;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        doctors::table
            .filter(doctors::did.eq(did))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such doctor");
    }

    Ok(())
}

pub async fn assert_patient_appoint(
    pool: &web::Data<DbPool>,
    patient_uid: String,
    aid: String,
) -> anyhow::Result<()> {
    use crate::schema::appointments;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        appointments::table
            .filter(appointments::aid.eq(aid))
            .filter(appointments::patient_uid.eq(patient_uid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such appointment");
    }

    Ok(())
}

pub async fn assert_doctor_appoint(
    pool: &web::Data<DbPool>,
    did: String,
    aid: String,
) -> anyhow::Result<()> {
    use crate::schema::appointments;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        appointments::table
            .filter(appointments::aid.eq(aid))
            .filter(appointments::did.eq(did))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such appointment");
    }

    Ok(())
}

pub async fn assert_availability(
    pool: &web::Data<DbPool>,
    did: String,
    id: u64,
) -> anyhow::Result<()> {
    use crate::schema::doctor_availability;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        doctor_availability::table
            .filter(doctor_availability::id.eq(id))
            .filter(doctor_availability::did.eq(did))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such time slot");
    }

    Ok(())
}
