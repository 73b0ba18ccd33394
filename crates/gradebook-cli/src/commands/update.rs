//! The "update student" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::model::StudentUpdate;
use gradebook_core::roster::{Roster, UpdateOutcome};

use crate::prompt::Prompt;

pub fn execute<R: BufRead>(roster: &mut Roster, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n--- Update Student ---");

    let Some(id) = prompt.line("Student ID to update: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();

    let (describe, name, class_name) = match roster.find(&id) {
        Some(s) => (
            s.describe(),
            s.name().to_string(),
            s.class_name().to_string(),
        ),
        None => {
            println!("\nNo student with ID '{id}'.");
            return Ok(());
        }
    };

    println!("\nCurrent record:\n{describe}");
    println!("\nEnter new values (leave blank to keep the current one):");

    let Some(new_name) = prompt.line(&format!("New name [{name}]: "))? else {
        return Ok(());
    };
    let Some(new_class) = prompt.line(&format!("New class [{class_name}]: "))? else {
        return Ok(());
    };

    let update = StudentUpdate {
        name: Some(new_name),
        class_name: Some(new_class),
    };

    match roster.update(&id, update) {
        Ok(UpdateOutcome::Applied) => {
            println!("\nStudent updated.");
            if let Some(s) = roster.find(&id) {
                println!("{}", s.describe());
            }
        }
        Ok(UpdateOutcome::Unchanged) => println!("\nNo update performed."),
        Err(e) => println!("\nError: {e}"),
    }
    Ok(())
}
