use std::fmt::Write;

use crate::utils::models::{Column, Position, TabChar};

pub mod models;

/// Separator line of the table
pub fn line_table(columns: &[Column], position: &Position) -> String {
    let (left, inner, right) = position.joints();
    let bar = TabChar::Bh.val();

    let cells: Vec<String> = columns
        .iter()
        // One space of padding on each side
        .map(|column| bar.to_string().repeat(column.width + 2))
        .collect();

    format!(
        "{}{}{}",
        left.val(),
        cells.join(&inner.val().to_string()),
        right.val()
    )
}

/// Content line of the table, each cell is cut to the width of its column
pub fn row_table<S: AsRef<str>>(columns: &[Column], cells: &[S]) -> String {
    let sep = TabChar::Bv.val();

    let mut line = String::new();
    line.push(sep);
    for (column, cell) in columns.iter().zip(cells) {
        let width = column.width;
        let _ = write!(line, " {:<width$} {sep}", etc_str(cell.as_ref(), width));
    }

    line
}

/// Cut the text with an ellipsis when it doesn't fit
pub fn etc_str(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }

    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');

    cut
}
