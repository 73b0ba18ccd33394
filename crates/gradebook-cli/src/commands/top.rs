//! The "top students" menu action.

use std::io::BufRead;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::roster::Roster;

use crate::config::GradebookConfig;
use crate::prompt::Prompt;

pub fn execute<R: BufRead>(
    roster: &Roster,
    prompt: &mut Prompt<R>,
    config: &GradebookConfig,
) -> Result<()> {
    println!("\n--- Top Students ---");

    if roster.is_empty() {
        println!("No students registered yet.");
        return Ok(());
    }

    let Some(raw) = prompt.line(&format!("How many? [{}]: ", config.top_count))? else {
        return Ok(());
    };
    let count = if raw.trim().is_empty() {
        config.top_count
    } else {
        match raw.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("\nError: count must be a whole number");
                return Ok(());
            }
        }
    };

    let mut table = Table::new();
    table.set_header(vec!["Rank", "ID", "Name", "Class", "Average", "Status"]);
    for (rank, s) in roster.top(count).iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(s.id()),
            Cell::new(s.name()),
            Cell::new(s.class_name()),
            Cell::new(format!("{:.2}", s.average())),
            Cell::new(s.status()),
        ]);
    }

    println!("\n{table}");
    Ok(())
}
