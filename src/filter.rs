use chrono::Duration;
use dialoguer::{Input, Select};
use tracing::debug;

use crate::catalog::models::Course;
use crate::display::display;
use crate::error::Result;
use crate::selection::{models::SelectedCourse, Session};

const DISCLAIMER: &str = "(ESC to cancel)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    AddAtEnd,
    AddAfter,
    Remove,
    Show,
    Export,
    Quit,
}

const ACTIONS: [(&str, Action); 6] = [
    ("Add a course", Action::AddAtEnd),
    ("Add a course after another one", Action::AddAfter),
    ("Remove a course", Action::Remove),
    ("Show my exams", Action::Show),
    ("Export to iCalendar (.ics)", Action::Export),
    ("Quit", Action::Quit),
];

/// Name of a course in the search results
fn course_label(course: &Course) -> String {
    format!("{} - {} ({})", course.acronym, course.name, course.date)
}

/// Name of a selected course when choosing a row
fn row_label(position: usize, selected: &SelectedCourse) -> String {
    format!(
        "{position}. {} {} - {}",
        selected.instance_id, selected.acronym, selected.date
    )
}

/// Search the catalog and pick a course, the pick is cleared when nothing is chosen
fn pick(session: &mut Session) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search courses")
        .allow_empty(true)
        .interact_text()?;

    let matches: Vec<Course> = session
        .catalog()
        .search(query.trim())
        .into_iter()
        .cloned()
        .collect();
    debug!(query = %query, found = matches.len(), "catalog search");

    if matches.is_empty() {
        println!("No course matches \"{}\"", query.trim());
        session.pick(None);
        return Ok(());
    }

    let labels: Vec<String> = matches.iter().map(course_label).collect();
    let choice = Select::new()
        .with_prompt(format!("Choose a course {DISCLAIMER}"))
        .items(&labels)
        .default(0)
        .interact_opt()?;

    session.pick(choice.and_then(|i| matches.into_iter().nth(i)));
    debug!(picked = ?session.pending().map(|course| &course.acronym), "pick");

    Ok(())
}

/// Choose one of the selected courses, `None` when the list is empty or on cancel
fn choose_row(session: &Session, prompt: &str) -> Result<Option<usize>> {
    let list = session.store().list();
    if list.is_empty() {
        println!("No course selected yet.");
        return Ok(None);
    }

    let labels: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(i, selected)| row_label(i, selected))
        .collect();

    Ok(Select::new()
        .with_prompt(format!("{prompt} {DISCLAIMER}"))
        .items(&labels)
        .default(0)
        .interact_opt()?)
}

/// Add the picked course and tell the user what happened
fn add(session: &mut Session, after: Option<usize>) -> Result<()> {
    if let Some(instance_id) = session.add(after)? {
        if let Some(selected) = session.store().get(instance_id) {
            let conflicts = session.store().conflicts();
            debug!(counts = ?conflicts.as_map(), "exams per date");
            println!(
                "Added {} {} ({} course(s) selected)",
                instance_id,
                selected.acronym,
                session.store().len()
            );
            if conflicts.is_conflicting(&selected.date) {
                println!(
                    "Heads up: {} exams on {}",
                    conflicts.count(&selected.date),
                    selected.date
                );
            }
        }
    }

    Ok(())
}

/// Interactive session, runs until the user quits
pub fn interactive(session: &mut Session, duration: Duration) -> Result<()> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();

    loop {
        let choice = Select::new()
            .with_prompt("What do you want to do?")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let action = choice.map_or(Action::Quit, |i| ACTIONS[i].1);
        debug!(?action, "menu");

        match action {
            Action::AddAtEnd => {
                pick(session)?;
                add(session, None)?;
            }
            Action::AddAfter => {
                if let Some(row) = choose_row(session, "Add after which course?")? {
                    pick(session)?;
                    add(session, Some(row))?;
                }
            }
            Action::Remove => {
                if let Some(row) = choose_row(session, "Remove which course?")? {
                    let instance_id = session.store().list()[row].instance_id;
                    if session.remove(instance_id) {
                        println!("Removed {instance_id}");
                    }
                }
            }
            Action::Show => display(session.store()),
            Action::Export => {
                let mut filename: String = Input::new()
                    .with_prompt("File name")
                    .default(String::from("exams.ics"))
                    .interact_text()?;
                let written = crate::ics::export(session.store(), &mut filename, duration)?;
                println!("Calendar exported ({written} exams) => {filename}");
            }
            Action::Quit => break,
        }
    }

    Ok(())
}
