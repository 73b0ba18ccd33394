//! The "list students" menu action.

use gradebook_core::roster::Roster;

use super::student_table;

pub fn execute(roster: &Roster) {
    if roster.is_empty() {
        println!("\nNo students registered yet.");
        return;
    }

    println!("\n{}", student_table(roster.all()));
    println!("{} student(s) registered.", roster.len());
}
