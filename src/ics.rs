use chrono::{Duration, Utc};
use ics::{
    components::Parameter,
    escape_text,
    properties::{Description, DtEnd, DtStart, Location, Summary},
    Event, ICalendar,
};
use tracing::{info, warn};

use crate::error::Result;
use crate::info::{exam_slot, ExamSlot};
use crate::selection::SelectionStore;

const DATE_FORMAT: &str = "%Y%m%d";
const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Write the selected exams to an iCalendar file, returns how many were written.
///
/// Exams without a readable date are left out. `filename` gets the `.ics`
/// extension when it lacks it.
pub fn export(store: &SelectionStore, filename: &mut String, duration: Duration) -> Result<usize> {
    let mut calendar = ICalendar::new("2.0", "-//examtor//EN");
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let conflicts = store.conflicts();

    let mut written = 0;
    for selected in store.list() {
        let Some(slot) = exam_slot(selected) else {
            warn!(acronym = %selected.acronym, date = %selected.date, "unreadable exam date, not exported");
            continue;
        };

        let mut event = Event::new(uuid::Uuid::new_v4().to_string(), dtstamp.clone());

        match slot {
            ExamSlot::At(start) => {
                event.push(DtStart::new(start.format(DATETIME_FORMAT).to_string()));
                event.push(DtEnd::new((start + duration).format(DATETIME_FORMAT).to_string()));
            }
            ExamSlot::Day(day) => {
                let mut dtstart = DtStart::new(day.format(DATE_FORMAT).to_string());
                dtstart.add(Parameter::new("VALUE", "DATE"));
                event.push(dtstart);

                let mut dtend = DtEnd::new((day + Duration::days(1)).format(DATE_FORMAT).to_string());
                dtend.add(Parameter::new("VALUE", "DATE"));
                event.push(dtend);
            }
        }

        event.push(Summary::new(escape_text(format!(
            "{}: {}",
            selected.acronym, selected.name
        ))));
        event.push(Location::new(escape_text(selected.rooms.join(", "))));

        let mut description = format!("Prelim: {} {}", selected.date, selected.time);
        if conflicts.is_conflicting(&selected.date) {
            description.push_str("\nAnother selected exam is on the same day");
        }
        event.push(Description::new(escape_text(description)));

        calendar.add_event(event);
        written += 1;
    }

    if !std::path::Path::new(filename.as_str())
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ics"))
    {
        filename.push_str(".ics");
    }

    calendar.save_file(filename.as_str())?;
    info!(events = written, file = %filename, "calendar exported");

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Course;

    fn course(acronym: &str, date: &str, time: &str) -> Course {
        Course {
            acronym: acronym.into(),
            name: "Prelim".into(),
            date: date.into(),
            time: time.into(),
            rooms: vec!["Statler Aud".into()],
        }
    }

    #[test]
    fn test_export_events() {
        let mut store = SelectionStore::new();
        store.add(course("CS 1110", "3/5/2024", "7:30PM"), None).unwrap();
        store.add(course("MATH 1920", "3/5/2024", "TBA"), None).unwrap();
        store.add(course("ECON 1110", "TBA", "TBA"), None).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut filename = dir.path().join("exams").to_str().unwrap().to_owned();

        let written = export(&store, &mut filename, Duration::minutes(150)).unwrap();
        assert_eq!(written, 2);
        assert!(filename.ends_with("exams.ics"));

        let content = std::fs::read_to_string(&filename).unwrap();
        assert_eq!(content.matches("BEGIN:VEVENT").count(), 2);
        assert!(content.contains("DTSTART:20240305T193000"));
        assert!(content.contains("DTEND:20240305T220000"));
        assert!(content.contains("DTSTART;VALUE=DATE:20240305"));
        assert!(content.contains("DTEND;VALUE=DATE:20240306"));
        assert!(content.contains("LOCATION:Statler Aud"));
        assert!(!content.contains("ECON 1110"));
    }

    #[test]
    fn test_export_keeps_extension() {
        let store = SelectionStore::new();
        let dir = tempfile::tempdir().unwrap();
        let mut filename = dir.path().join("exams.ICS").to_str().unwrap().to_owned();

        assert_eq!(export(&store, &mut filename, Duration::minutes(90)).unwrap(), 0);
        assert!(filename.ends_with("exams.ICS"));
        assert!(std::path::Path::new(&filename).exists());
    }
}
