//! The "find student" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::roster::Roster;

use crate::prompt::Prompt;

pub fn execute<R: BufRead>(roster: &Roster, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n--- Find Student ---");

    let Some(id) = prompt.line("Student ID: ")? else {
        return Ok(());
    };
    let id = id.trim();

    match roster.find(id) {
        Some(student) => println!("\n{}", student.describe()),
        None => println!("\nNo student with ID '{id}'."),
    }
    Ok(())
}
