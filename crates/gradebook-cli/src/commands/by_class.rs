//! The "students by class" menu action.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::roster::Roster;

use crate::prompt::Prompt;

use super::student_table;

pub fn execute<R: BufRead>(roster: &Roster, prompt: &mut Prompt<R>) -> Result<()> {
    println!("\n--- Students by Class ---");

    let Some(class_name) = prompt.line("Class: ")? else {
        return Ok(());
    };
    let class_name = class_name.trim();

    let members = roster.by_class(class_name);
    if members.is_empty() {
        println!("\nNo students in class '{class_name}'.");
        return Ok(());
    }

    println!("\n{}", student_table(members.iter().copied()));
    Ok(())
}
