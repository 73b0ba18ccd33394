//! The "add student" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::model::Student;
use gradebook_core::roster::Roster;

use crate::prompt::Prompt;

pub fn execute<R: BufRead>(roster: &mut Roster, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n--- Add Student ---");

    let Some(id) = prompt.line("Student ID: ")? else {
        return Ok(());
    };
    let Some(name) = prompt.line("Name: ")? else {
        return Ok(());
    };
    let Some(class_name) = prompt.line("Class (e.g. 10A): ")? else {
        return Ok(());
    };

    // Coarse emptiness check; the entity re-validates regardless.
    if id.trim().is_empty() || name.trim().is_empty() || class_name.trim().is_empty() {
        println!("\nAll fields are required.");
        return Ok(());
    }

    let student = match Student::new(id.trim(), name.trim(), class_name.trim()) {
        Ok(s) => s,
        Err(e) => {
            println!("\nError: {e}");
            return Ok(());
        }
    };

    let name = student.name().to_string();
    match roster.add(student) {
        Ok(()) => println!("\nStudent {name} added."),
        Err(e) => println!("\nError: {e}"),
    }
    Ok(())
}
