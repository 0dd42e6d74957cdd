use anyhow::Context;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const DAY_START_HOUR: u32 = 9;
pub const DAY_END_HOUR: u32 = 17;
pub const SLOT_MINUTES: i64 = 30;

const SLOT_FMT: &str = "%H:%M";

/// Candidate start times for `date`, 09:00 up to (excluding) 17:00.
///
/// When `date` is the same day as `now`, slots that do not start strictly
/// after `now` are dropped. Other dates, past ones included, get the full
/// window.
pub fn slot_times(date: NaiveDate, now: NaiveDateTime) -> Vec<NaiveTime> {
    let is_today = date == now.date();
    let end = NaiveTime::from_hms(DAY_END_HOUR, 0, 0);

    let mut slots = vec![];
    let mut time = NaiveTime::from_hms(DAY_START_HOUR, 0, 0);
    while time < end {
        if !is_today || date.and_time(time) > now {
            slots.push(time);
        }
        time = time + Duration::minutes(SLOT_MINUTES);
    }
    slots
}

/// [`slot_times`] rendered as `HH:MM` strings.
pub fn generate_slots(date: NaiveDate, now: NaiveDateTime) -> Vec<String> {
    slot_times(date, now).iter().map(format_slot).collect()
}

pub fn format_slot(time: &NaiveTime) -> String {
    time.format(SLOT_FMT).to_string()
}

pub fn parse_slot<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s.as_ref(), SLOT_FMT).context("Wrong format on time, expected HH:MM")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms(h, m, 0)
    }

    #[test]
    fn full_window_for_other_days() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        let tomorrow = today.succ();
        let slots = generate_slots(tomorrow, at(today, 15, 10));

        assert_eq!(slots.len(), 16);
        assert_eq!(slots.first().unwrap(), "09:00");
        assert_eq!(slots[1], "09:30");
        assert_eq!(slots.last().unwrap(), "16:30");
        assert!(!slots.contains(&"17:00".to_string()));
    }

    #[test]
    fn past_dates_are_not_filtered() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        let yesterday = today.pred();
        assert_eq!(generate_slots(yesterday, at(today, 12, 0)).len(), 16);
    }

    #[test]
    fn today_drops_elapsed_slots() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        let slots = generate_slots(today, at(today, 13, 10));
        assert_eq!(slots.first().unwrap(), "13:30");
        assert_eq!(slots.len(), 7);
    }

    #[test]
    fn slot_equal_to_now_is_dropped() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        let slots = generate_slots(today, at(today, 10, 0));
        assert_eq!(slots.first().unwrap(), "10:30");
    }

    #[test]
    fn nothing_left_late_in_the_day() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        assert!(generate_slots(today, at(today, 16, 30)).is_empty());
        assert!(generate_slots(today, at(today, 22, 0)).is_empty());
    }

    #[test]
    fn early_morning_keeps_everything() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        assert_eq!(generate_slots(today, at(today, 7, 45)).len(), 16);
    }

    #[test]
    fn parse_and_format() {
        let time = parse_slot("09:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms(9, 30, 0));
        assert_eq!(format_slot(&time), "09:30");
        assert!(parse_slot("9.30").is_err());
        assert!(parse_slot("25:00").is_err());
    }
}
