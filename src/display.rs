use crate::info::weekday;
use crate::selection::SelectionStore;
use crate::utils::{
    line_table,
    models::{Column, Position},
    row_table,
};

const CONFLICT: &str = "CONFLICT";

fn columns() -> [Column; 7] {
    [
        Column {
            title: "#",
            width: 3,
        },
        Column {
            title: "Id",
            width: 4,
        },
        Column {
            title: "Course",
            width: 10,
        },
        Column {
            title: "Name",
            width: 28,
        },
        Column {
            title: "Exam",
            width: 24,
        },
        Column {
            title: "Location",
            width: 20,
        },
        Column {
            title: "",
            width: CONFLICT.len(),
        },
    ]
}

/// Exam cell, with the day name when the date can be read
fn exam_cell(date: &str, time: &str) -> String {
    let date = match weekday(date) {
        Some(day) => format!("{day} {date}"),
        None => date.to_owned(),
    };

    format!("{date} {time}").trim().to_owned()
}

/// Build the table of the selected courses, conflicting ones being marked
pub fn render(store: &SelectionStore) -> String {
    if store.is_empty() {
        return String::from("No course selected yet.");
    }

    let columns = columns();
    let conflicts = store.conflicts();

    let mut lines = vec![line_table(&columns, &Position::Top)];
    let titles: Vec<&str> = columns.iter().map(|column| column.title).collect();
    lines.push(row_table(&columns, &titles));
    lines.push(line_table(&columns, &Position::Middle));

    for (i, selected) in store.list().iter().enumerate() {
        let marker = if conflicts.is_conflicting(&selected.date) {
            CONFLICT
        } else {
            ""
        };

        lines.push(row_table(
            &columns,
            &[
                i.to_string(),
                selected.instance_id.to_string(),
                selected.acronym.clone(),
                selected.name.clone(),
                exam_cell(&selected.date, &selected.time),
                selected.location().to_owned(),
                marker.to_owned(),
            ],
        ));
    }
    lines.push(line_table(&columns, &Position::Bottom));

    let dates = conflicts.conflicting_dates();
    if !dates.is_empty() {
        let summary: Vec<String> = dates
            .iter()
            .map(|date| format!("{date} ({} exams)", conflicts.count(date)))
            .collect();
        lines.push(format!("Conflicts on: {}", summary.join(", ")));
    }

    lines.join("\n")
}

/// Display the selected courses
pub fn display(store: &SelectionStore) {
    println!("{}", render(store));
}
