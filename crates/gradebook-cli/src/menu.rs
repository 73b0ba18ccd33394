//! The interactive menu loop.

use std::io::BufRead;

use anyhow::Result;

use gradebook_core::roster::Roster;

use crate::commands;
use crate::config::GradebookConfig;
use crate::prompt::Prompt;

const BANNER: &str = "\
=================================
       Student Gradebook
=================================";

fn print_menu() {
    println!("\n=================================");
    println!("1. Add student");
    println!("2. List students");
    println!("3. Find student");
    println!("4. Update student");
    println!("5. Remove student");
    println!("6. Record grade");
    println!("7. Top students");
    println!("8. Students by class");
    println!("9. Class statistics");
    println!("0. Exit");
    println!("=================================");
}

/// Run the menu until the user exits or input ends.
///
/// Roster-level failures are printed by the handlers and never abort the
/// loop; only I/O errors propagate.
pub fn run<R: BufRead>(
    roster: &mut Roster,
    config: &GradebookConfig,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    println!("{BANNER}");

    loop {
        print_menu();

        let Some(choice) = prompt.line("\nSelect an option (0-9): ")? else {
            break;
        };

        match choice.trim() {
            "1" => commands::add_student::execute(roster, prompt)?,
            "2" => commands::list::execute(roster),
            "3" => commands::find::execute(roster, prompt)?,
            "4" => commands::update::execute(roster, prompt)?,
            "5" => commands::remove::execute(roster, prompt, config)?,
            "6" => commands::record_grade::execute(roster, prompt)?,
            "7" => commands::top::execute(roster, prompt, config)?,
            "8" => commands::by_class::execute(roster, prompt)?,
            "9" => commands::class_stats::execute(roster, prompt)?,
            "0" | "exit" | "quit" => {
                println!("\nGoodbye!");
                break;
            }
            other => println!("\nInvalid choice '{other}'. Pick an option from 0-9."),
        }
    }

    Ok(())
}
