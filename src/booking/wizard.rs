use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use super::slots;
use crate::models::appointments::ConsultationType;

/// Days offered by the date picker, today included.
pub const BOOKING_WINDOW_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Type,
    Date,
    Time,
    Confirm,
}

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("Booking is at the {actual:?} step, expected {expected:?}")]
    WrongStep { expected: Step, actual: Step },
    #[error("Date {0} is outside the booking window")]
    DateOutOfWindow(NaiveDate),
    #[error("Time {0} is not an available slot")]
    SlotUnavailable(String),
    #[error("Cannot go back from {from:?} to {to:?}")]
    NotAPriorStep { from: Step, to: Step },
}

/// What a finished wizard hands to the caller for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingIntent {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub consult_type: ConsultationType,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    doctor_id: String,
    step: Step,
    consult_type: Option<ConsultationType>,
    date: Option<NaiveDate>,
    slots: Vec<NaiveTime>,
    time: Option<NaiveTime>,
}

impl BookingWizard {
    pub fn new<S: Into<String>>(doctor_id: S) -> Self {
        Self {
            doctor_id: doctor_id.into(),
            step: Step::Type,
            consult_type: None,
            date: None,
            slots: vec![],
            time: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn available_slots(&self) -> Vec<String> {
        self.slots.iter().map(slots::format_slot).collect()
    }

    pub fn select_type(&mut self, consult_type: ConsultationType) -> Result<(), WizardError> {
        self.expect(Step::Type)?;
        self.consult_type = Some(consult_type);
        self.step = Step::Date;
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate, now: NaiveDateTime) -> Result<(), WizardError> {
        self.expect(Step::Date)?;
        let today = now.date();
        if date < today || date >= today + Duration::days(BOOKING_WINDOW_DAYS) {
            return Err(WizardError::DateOutOfWindow(date));
        }

        self.date = Some(date);
        self.slots = slots::slot_times(date, now);
        self.step = Step::Time;
        Ok(())
    }

    pub fn select_time(&mut self, time: &str) -> Result<(), WizardError> {
        self.expect(Step::Time)?;
        let slot = slots::parse_slot(time)
            .ok()
            .filter(|t| self.slots.contains(t))
            .ok_or_else(|| WizardError::SlotUnavailable(time.to_string()))?;

        self.time = Some(slot);
        self.step = Step::Confirm;
        Ok(())
    }

    /// Returns to an earlier step, clearing that step's selection and
    /// everything chosen after it.
    pub fn back_to(&mut self, step: Step) -> Result<(), WizardError> {
        if step >= self.step {
            return Err(WizardError::NotAPriorStep {
                from: self.step,
                to: step,
            });
        }

        if step <= Step::Time {
            self.time = None;
        }
        if step <= Step::Date {
            self.date = None;
            self.slots.clear();
        }
        if step <= Step::Type {
            self.consult_type = None;
        }
        self.step = step;
        Ok(())
    }

    pub fn confirm(&self) -> Result<BookingIntent, WizardError> {
        self.expect(Step::Confirm)?;
        match (self.consult_type, self.date, self.time) {
            (Some(consult_type), Some(date), Some(time)) => Ok(BookingIntent {
                doctor_id: self.doctor_id.clone(),
                date,
                time,
                consult_type,
            }),
            _ => Err(WizardError::WrongStep {
                expected: Step::Confirm,
                actual: self.step,
            }),
        }
    }

    fn expect(&self, expected: Step) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd(2024, 5, 6).and_hms(11, 20, 0)
    }

    fn at_time_step() -> BookingWizard {
        let mut wizard = BookingWizard::new("doc-1");
        wizard.select_type(ConsultationType::Video).unwrap();
        wizard
            .select_date(NaiveDate::from_ymd(2024, 5, 8), now())
            .unwrap();
        wizard
    }

    #[test]
    fn walks_all_steps() {
        let mut wizard = at_time_step();
        assert_eq!(wizard.step(), Step::Time);
        assert_eq!(wizard.available_slots().len(), 16);

        wizard.select_time("14:30").unwrap();
        assert_eq!(wizard.step(), Step::Confirm);

        let intent = wizard.confirm().unwrap();
        assert_eq!(
            intent,
            BookingIntent {
                doctor_id: "doc-1".to_string(),
                date: NaiveDate::from_ymd(2024, 5, 8),
                time: NaiveTime::from_hms(14, 30, 0),
                consult_type: ConsultationType::Video,
            }
        );
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut wizard = BookingWizard::new("doc-1");
        assert_eq!(
            wizard.select_date(now().date(), now()),
            Err(WizardError::WrongStep {
                expected: Step::Date,
                actual: Step::Type
            })
        );
        assert!(wizard.select_time("09:00").is_err());
        assert!(wizard.confirm().is_err());
    }

    #[test]
    fn today_offers_only_future_slots() {
        let mut wizard = BookingWizard::new("doc-1");
        wizard.select_type(ConsultationType::InPerson).unwrap();
        wizard.select_date(now().date(), now()).unwrap();

        let slots = wizard.available_slots();
        assert_eq!(slots.first().unwrap(), "11:30");
        assert_eq!(
            wizard.select_time("10:00"),
            Err(WizardError::SlotUnavailable("10:00".to_string()))
        );
        assert_eq!(wizard.step(), Step::Time);
    }

    #[test]
    fn date_must_be_in_window() {
        let mut wizard = BookingWizard::new("doc-1");
        wizard.select_type(ConsultationType::Phone).unwrap();

        let yesterday = now().date().pred();
        assert_eq!(
            wizard.select_date(yesterday, now()),
            Err(WizardError::DateOutOfWindow(yesterday))
        );

        let too_far = now().date() + Duration::days(BOOKING_WINDOW_DAYS);
        assert!(wizard.select_date(too_far, now()).is_err());

        let last_day = too_far.pred();
        assert!(wizard.select_date(last_day, now()).is_ok());
    }

    #[test]
    fn off_grid_time_is_rejected() {
        let mut wizard = at_time_step();
        assert!(wizard.select_time("09:15").is_err());
        assert!(wizard.select_time("17:00").is_err());
        assert!(wizard.select_time("noon").is_err());
    }

    #[test]
    fn going_back_discards_later_selections() {
        let mut wizard = at_time_step();
        wizard.select_time("09:00").unwrap();

        wizard.back_to(Step::Date).unwrap();
        assert_eq!(wizard.step(), Step::Date);
        assert!(wizard.available_slots().is_empty());
        assert!(wizard.confirm().is_err());

        // type survives a return to the date step
        wizard
            .select_date(NaiveDate::from_ymd(2024, 5, 9), now())
            .unwrap();
        wizard.select_time("10:00").unwrap();
        let intent = wizard.confirm().unwrap();
        assert_eq!(intent.consult_type, ConsultationType::Video);
        assert_eq!(intent.date, NaiveDate::from_ymd(2024, 5, 9));
    }

    #[test]
    fn back_to_time_keeps_type_and_date() {
        let mut wizard = at_time_step();
        wizard.select_time("14:30").unwrap();

        wizard.back_to(Step::Time).unwrap();
        assert_eq!(wizard.step(), Step::Time);
        assert_eq!(wizard.available_slots().len(), 16);
        assert!(wizard.confirm().is_err());

        wizard.select_time("16:00").unwrap();
        let intent = wizard.confirm().unwrap();
        assert_eq!(intent.consult_type, ConsultationType::Video);
        assert_eq!(intent.date, NaiveDate::from_ymd(2024, 5, 8));
        assert_eq!(intent.time, NaiveTime::from_hms(16, 0, 0));
    }

    #[test]
    fn back_to_type_resets_everything() {
        let mut wizard = at_time_step();
        wizard.back_to(Step::Type).unwrap();
        assert_eq!(wizard.step(), Step::Type);
        wizard.select_type(ConsultationType::Phone).unwrap();
        assert_eq!(wizard.step(), Step::Date);
    }

    #[test]
    fn back_only_moves_backwards() {
        let mut wizard = at_time_step();
        assert_eq!(
            wizard.back_to(Step::Time),
            Err(WizardError::NotAPriorStep {
                from: Step::Time,
                to: Step::Time
            })
        );
        assert!(wizard.back_to(Step::Confirm).is_err());
        assert_eq!(wizard.step(), Step::Time);
    }
}
