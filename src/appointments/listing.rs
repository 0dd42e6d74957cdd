use std::str::FromStr;

use anyhow::bail;
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::appointments::{Appointment, AppointmentStatus};

/// Tabs of a patient's appointment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Upcoming,
    Past,
    Cancelled,
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "all" => Ok(Tab::All),
            "upcoming" => Ok(Tab::Upcoming),
            "past" => Ok(Tab::Past),
            "cancelled" => Ok(Tab::Cancelled),
            _ => bail!("Unknown tab '{}'", s),
        }
    }
}

impl Tab {
    pub fn contains(&self, appo: &Appointment, now: NaiveDateTime) -> bool {
        let status = appo.status();
        match self {
            Tab::All => true,
            Tab::Upcoming => {
                appo.start() >= now
                    && matches!(
                        status,
                        Some(AppointmentStatus::Confirmed) | Some(AppointmentStatus::Pending)
                    )
            }
            Tab::Past => appo.start() < now || status == Some(AppointmentStatus::Completed),
            Tab::Cancelled => status == Some(AppointmentStatus::Cancelled),
        }
    }
}

pub fn doctor_display_name(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) if name.starts_with("Dr.") => name.to_string(),
        Some(name) => format!("Dr. {}", name),
        None => "Dr. Professional".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientSummary {
    pub patient_uid: String,
    pub total: usize,
    pub upcoming: usize,
    pub last_visit: Option<NaiveDate>,
}

/// Groups a doctor's appointments by patient, keeping the order in which
/// each patient first shows up in `appos`.
pub fn summarize_patients(appos: &[Appointment], now: NaiveDateTime) -> Vec<PatientSummary> {
    let mut summaries: Vec<PatientSummary> = vec![];
    for appo in appos {
        let idx = match summaries
            .iter()
            .position(|s| s.patient_uid == appo.patient_uid)
        {
            Some(idx) => idx,
            None => {
                summaries.push(PatientSummary {
                    patient_uid: appo.patient_uid.clone(),
                    total: 0,
                    upcoming: 0,
                    last_visit: None,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[idx];
        summary.total += 1;
        if appo.start() >= now && appo.status() != Some(AppointmentStatus::Cancelled) {
            summary.upcoming += 1;
        }
        if appo.start() < now {
            summary.last_visit = summary.last_visit.max(Some(appo.appointment_date));
        }
    }
    summaries
}
