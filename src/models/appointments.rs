use std::{fmt, str::FromStr};

use crate::schema::appointments;
use anyhow::bail;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Queryable, Clone)]
pub struct Appointment {
    pub aid: String,
    pub patient_uid: String,
    pub did: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub consult_type: String,
    pub status: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Appointment {
    pub fn start(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }

    pub fn status(&self) -> Option<AppointmentStatus> {
        self.status.parse().ok()
    }
}

#[derive(Insertable)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub aid: String,
    pub patient_uid: String,
    pub did: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub consult_type: String,
    pub status: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => bail!("Unknown appointment status '{}'", s),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationType {
    InPerson,
    Video,
    Phone,
}

impl ConsultationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::InPerson => "in-person",
            ConsultationType::Video => "video",
            ConsultationType::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::InPerson => "In-Person Consultation",
            ConsultationType::Video => "Video Consultation",
            ConsultationType::Phone => "Phone Consultation",
        }
    }

    /// Checklist shown on the confirmation page.
    pub fn preparation(&self) -> &'static [&'static str] {
        match self {
            ConsultationType::Video => &[
                "Ensure stable internet connection",
                "Test your camera and microphone",
                "Have your medical records ready",
                "Find a quiet, private space",
            ],
            ConsultationType::InPerson | ConsultationType::Phone => &[
                "Arrive 15 minutes early",
                "Bring a valid ID and insurance card",
                "Bring list of current medications",
                "Prepare any questions for the doctor",
            ],
        }
    }
}

impl FromStr for ConsultationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "in-person" => Ok(ConsultationType::InPerson),
            "video" => Ok(ConsultationType::Video),
            "phone" => Ok(ConsultationType::Phone),
            _ => bail!("Unknown consultation type '{}'", s),
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        for status in &[
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<AppointmentStatus>().unwrap(), *status);
        }
        assert!("canceled".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn consultation_type_strings() {
        assert_eq!("in-person".parse::<ConsultationType>().unwrap(), ConsultationType::InPerson);
        assert_eq!("video".parse::<ConsultationType>().unwrap(), ConsultationType::Video);
        assert_eq!("phone".parse::<ConsultationType>().unwrap(), ConsultationType::Phone);
        assert!("in_person".parse::<ConsultationType>().is_err());
    }

    #[test]
    fn video_has_its_own_checklist() {
        assert_eq!(
            ConsultationType::Video.preparation()[0],
            "Ensure stable internet connection"
        );
        assert_eq!(
            ConsultationType::InPerson.preparation(),
            ConsultationType::Phone.preparation()
        );
    }
}
