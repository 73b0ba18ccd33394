//! Demo roster preloaded by `--seed-demo`.

use anyhow::Result;

use gradebook_core::model::Student;
use gradebook_core::roster::Roster;

/// A small roster covering both classes, pass and fail averages, and a
/// student with no grades yet.
pub fn demo_roster() -> Result<Roster> {
    let data: &[(&str, &str, &str, &[(&str, f64)])] = &[
        (
            "S001",
            "Alice Park",
            "10A",
            &[("Math", 85.0), ("English", 90.0), ("Science", 88.0)],
        ),
        ("S002", "Ben Okafor", "10A", &[("Math", 62.0), ("English", 71.0)]),
        (
            "S003",
            "Chloe Reyes",
            "10B",
            &[("Math", 95.0), ("English", 92.0), ("Science", 88.0)],
        ),
        ("S004", "Dan Voss", "10B", &[("Math", 74.0), ("Science", 77.0)]),
        ("S005", "Erin Walsh", "10A", &[]),
    ];

    let mut roster = Roster::new();
    for (id, name, class_name, grades) in data {
        let mut student = Student::new(*id, *name, *class_name)?;
        for (subject, score) in *grades {
            student.record_grade(subject, *score)?;
        }
        roster.add(student)?;
    }
    Ok(roster)
}
