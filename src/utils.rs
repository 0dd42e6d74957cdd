#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => {
                            tracing::warn!(endpoint = $url, "request failed: {:#}", err);
                            <$response>::err(err.to_string())
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref(), DATE_FMT).context("Wrong format on date, expected YYYY-MM-DD")
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// `Today`, `Tomorrow`, or e.g. `Monday, Mar 04, 2024`.
pub fn date_label(date: &NaiveDate, today: &NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if *date == *today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%A, %b %d, %Y").to_string()
    }
}

/// Confirmation page form, e.g. `Monday, March 4th, 2024`.
pub fn long_date_label(date: &NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!(
        "{}, {} {}{}, {}",
        date.format("%A"),
        date.format("%B"),
        day,
        suffix,
        date.year()
    )
}

/// 12-hour clock, e.g. `2:30 PM`.
pub fn time_label(time: &NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

pub fn get_str_pattern_opt<S: AsRef<str>>(s: Option<S>) -> String {
    match s {
        Some(s) => get_str_pattern(s),
        None => "%".to_string(),
    }
}

pub fn paging(first_index: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    (first_index.unwrap_or(0).max(0), limit.unwrap_or(30).max(0))
}

/// Like `paging`, but a missing limit means the whole list.
pub fn paging_unbounded(first_index: Option<i64>, limit: Option<i64>) -> (usize, usize) {
    (
        first_index.unwrap_or(0).max(0) as usize,
        limit.map_or(usize::MAX, |limit| limit.max(0) as usize),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_labels() {
        let today = NaiveDate::from_ymd(2024, 3, 4);
        assert_eq!(date_label(&today, &today), "Today");
        assert_eq!(date_label(&today.succ(), &today), "Tomorrow");
        assert_eq!(
            date_label(&NaiveDate::from_ymd(2024, 3, 1), &today),
            "Friday, Mar 01, 2024"
        );
        assert_eq!(
            date_label(&NaiveDate::from_ymd(2024, 3, 6), &today),
            "Wednesday, Mar 06, 2024"
        );
    }

    #[test]
    fn long_date_labels() {
        assert_eq!(
            long_date_label(&NaiveDate::from_ymd(2024, 3, 4)),
            "Monday, March 4th, 2024"
        );
        assert_eq!(
            long_date_label(&NaiveDate::from_ymd(2024, 3, 1)),
            "Friday, March 1st, 2024"
        );
        assert_eq!(
            long_date_label(&NaiveDate::from_ymd(2024, 3, 12)),
            "Tuesday, March 12th, 2024"
        );
        assert_eq!(
            long_date_label(&NaiveDate::from_ymd(2024, 3, 23)),
            "Saturday, March 23rd, 2024"
        );
    }

    #[test]
    fn time_labels() {
        assert_eq!(time_label(&NaiveTime::from_hms(9, 0, 0)), "9:00 AM");
        assert_eq!(time_label(&NaiveTime::from_hms(14, 30, 0)), "2:30 PM");
        assert_eq!(time_label(&NaiveTime::from_hms(12, 0, 0)), "12:00 PM");
    }

    #[test]
    fn dates_round_trip() {
        let date = parse_date_str("2024-02-29").unwrap();
        assert_eq!(format_date_str(&date), "2024-02-29");
        assert!(parse_date_str("2023-02-29").is_err());
        assert!(parse_date_str("29/02/2024").is_err());
    }

    #[test]
    fn like_patterns() {
        assert_eq!(get_str_pattern("card"), "%card%");
        assert_eq!(get_str_pattern_opt::<&str>(None), "%");
    }

    #[test]
    fn paging_defaults_and_clamps() {
        assert_eq!(paging(None, None), (0, 30));
        assert_eq!(paging(Some(-5), Some(-1)), (0, 0));
        assert_eq!(paging(Some(10), Some(5)), (10, 5));
    }

    #[test]
    fn unbounded_paging_keeps_every_item() {
        let items: Vec<u32> = (0..45).collect();
        let (skip, take) = paging_unbounded(None, None);
        assert_eq!(items.iter().skip(skip).take(take).count(), 45);

        let (skip, take) = paging_unbounded(Some(40), None);
        assert_eq!(items.iter().skip(skip).take(take).count(), 5);

        assert_eq!(paging_unbounded(Some(-3), Some(10)), (0, 10));
        assert_eq!(paging_unbounded(None, Some(-1)), (0, 0));
    }
}
