//! The "remove student" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::roster::Roster;

use crate::config::GradebookConfig;
use crate::prompt::Prompt;

pub fn execute<R: BufRead>(
    roster: &mut Roster,
    prompt: &mut Prompt<R>,
    config: &GradebookConfig,
) -> Result<()> {
    println!("\n--- Remove Student ---");

    let Some(id) = prompt.line("Student ID to remove: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();

    match roster.find(&id) {
        Some(s) => println!("\n{}", s.describe()),
        None => {
            println!("\nNo student with ID '{id}'.");
            return Ok(());
        }
    }

    if config.confirm_delete && !prompt.confirm("\nRemove this student? (y/n): ")? {
        println!("Removal cancelled.");
        return Ok(());
    }

    match roster.remove(&id) {
        Ok(removed) => println!("Student {} removed.", removed.name()),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}
