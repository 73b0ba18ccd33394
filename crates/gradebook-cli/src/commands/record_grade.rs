//! The "record grade" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::roster::Roster;

use crate::prompt::Prompt;

pub fn execute<R: BufRead>(roster: &mut Roster, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n--- Record Grade ---");

    let Some(id) = prompt.line("Student ID: ")? else {
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

    let Some(subject) = prompt.line("\nSubject: ")? else {
        return Ok(());
    };
    let Some(score_input) = prompt.line("Score (0-100): ")? else {
        return Ok(());
    };

    let score: f64 = match score_input.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            println!("\nError: score must be a number");
            return Ok(());
        }
    };

    match roster.record_grade(&id, &subject, score) {
        Ok(()) => {
            println!("\nGrade for {} recorded.", subject.trim());
            if let Some(s) = roster.find(&id) {
                println!("{}", s.describe());
            }
        }
        Err(e) => println!("\nError: {e}"),
    }
    Ok(())
}
