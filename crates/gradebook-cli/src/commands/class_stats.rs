//! The "class statistics" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::roster::Roster;

use crate::prompt::Prompt;

pub fn execute<R: BufRead>(roster: &Roster, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n--- Class Statistics ---");

    let Some(class_name) = prompt.line("Class: ")? else {
        return Ok(());
    };
    let stats = roster.class_statistics(class_name.trim());

    println!("\nClass {} statistics:", stats.class_name);
    println!("  Students: {}", stats.total_students);
    println!("  Class average: {:.2}", stats.average_score);
    println!("  Passed: {}", stats.passed);
    println!("  Failed: {}", stats.failed);
    Ok(())
}
