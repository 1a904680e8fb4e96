use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::catalog::models::Course;

/// Date formats found in exam listings, the two-digit year is tried first
/// since `%Y` would happily read `24` as year 24
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%B %e, %Y", "%b %e, %Y"];

/// When an exam happens, as precisely as the catalog tells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamSlot {
    /// Only the day is known
    Day(NaiveDate),
    /// Day and starting time are known
    At(NaiveDateTime),
}

/// Turn a catalog date to a calendar date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
}

/// Turn a catalog time to a time of the day, i.e.: `7:30PM`, `9 am`, `19:30`
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    // h => hour | m => minute | p => AM/PM marker
    let re = Regex::new(r"(?i)^\s*(?P<h>\d{1,2})(?::(?P<m>\d{2}))?\s*(?P<p>[ap])?\.?(?:m\.?)?\s*$")
        .expect("time pattern is valid");
    let captures = re.captures(time)?;

    let mut hour: u32 = captures.name("h")?.as_str().parse().ok()?;
    let minute: u32 = match captures.name("m") {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    match captures.name("p").map(|p| p.as_str().to_ascii_lowercase()) {
        Some(marker) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            hour %= 12;
            if marker == "p" {
                hour += 12;
            }
        }
        // A bare number isn't enough to tell the time
        None if captures.name("m").is_none() => return None,
        None => (),
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// When the exam of this course happens, `None` if the date can't be read
pub fn exam_slot(course: &Course) -> Option<ExamSlot> {
    let date = parse_date(&course.date)?;

    Some(match parse_time(&course.time) {
        Some(time) => ExamSlot::At(date.and_time(time)),
        None => ExamSlot::Day(date),
    })
}

/// Short day name of the exam, i.e.: `Tue`
pub fn weekday(date: &str) -> Option<String> {
    parse_date(date).map(|date| date.format("%a").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-05-10"), Some(ymd(2024, 5, 10)));
        assert_eq!(parse_date("3/5/2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("03/05/24"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("May 10, 2024"), Some(ymd(2024, 5, 10)));
        assert_eq!(parse_date(" Oct 3, 2024 "), Some(ymd(2024, 10, 3)));
    }

    #[test]
    fn test_parse_date_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("TBA"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("7:30PM"), Some(hm(19, 30)));
        assert_eq!(parse_time("7:30 pm"), Some(hm(19, 30)));
        assert_eq!(parse_time("9 AM"), Some(hm(9, 0)));
        assert_eq!(parse_time("12:00 PM"), Some(hm(12, 0)));
        assert_eq!(parse_time("12:15 a.m."), Some(hm(0, 15)));
        assert_eq!(parse_time("19:30"), Some(hm(19, 30)));
    }

    #[test]
    fn test_parse_time_garbage() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("7"), None);
        assert_eq!(parse_time("13:00 PM"), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("evening"), None);
    }

    #[test]
    fn test_exam_slot() {
        let mut course = Course {
            acronym: "CS 1110".into(),
            name: "Intro to Computing".into(),
            date: "3/5/2024".into(),
            time: "7:30PM".into(),
            rooms: vec!["Statler Aud".into()],
        };
        assert_eq!(
            exam_slot(&course),
            Some(ExamSlot::At(ymd(2024, 3, 5).and_time(hm(19, 30))))
        );

        course.time = "TBA".into();
        assert_eq!(exam_slot(&course), Some(ExamSlot::Day(ymd(2024, 3, 5))));

        course.date = "TBA".into();
        assert_eq!(exam_slot(&course), None);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday("2024-05-10").as_deref(), Some("Fri"));
        assert_eq!(weekday("soon"), None);
    }
}
