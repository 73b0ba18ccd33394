//! Menu action handlers, one module per menu entry.
//!
//! Handlers print their own results and recoverable errors; they only
//! return `Err` for I/O failures.

pub mod add_student;
pub mod by_class;
pub mod class_stats;
pub mod find;
pub mod list;
pub mod record_grade;
pub mod remove;
pub mod top;
pub mod update;

use comfy_table::{Cell, Table};
use gradebook_core::model::Student;

/// Standard tabular rendering of a set of students.
pub(crate) fn student_table<'a>(students: impl IntoIterator<Item = &'a Student>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Class", "Subjects", "Average", "Status"]);
    for s in students {
        table.add_row(vec![
            Cell::new(s.id()),
            Cell::new(s.name()),
            Cell::new(s.class_name()),
            Cell::new(s.subject_count()),
            Cell::new(format!("{:.2}", s.average())),
            Cell::new(s.status()),
        ]);
    }
    table
}
