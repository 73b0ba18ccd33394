//! The roster manager: an insertion-ordered collection of students.
//!
//! The roster owns its students exclusively. Read operations hand out
//! `&Student` references, which the borrow checker keeps read-only; all
//! mutation goes through `&mut self` methods that re-validate input, so
//! nothing can bypass the entity's invariants.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::model::{Student, StudentUpdate};
use crate::statistics::{class_statistics, rank_by_average, ClassStatistics};

/// Outcome of [`Roster::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// At least one field was changed.
    Applied,
    /// No non-blank field was supplied; nothing changed.
    Unchanged,
}

/// An insertion-ordered collection of [`Student`]s with unique IDs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Append a student, rejecting duplicate IDs.
    ///
    /// On failure the roster is left untouched and the error names the
    /// colliding ID.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if self.find(student.id()).is_some() {
            return Err(RosterError::DuplicateId(student.id().to_string()));
        }
        tracing::debug!(id = student.id(), "student added to roster");
        self.students.push(student);
        Ok(())
    }

    /// Remove and return the student with the given ID, keeping the
    /// relative order of everyone else.
    pub fn remove(&mut self, id: &str) -> Result<Student, RosterError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        tracing::debug!(id, "student removed from roster");
        Ok(self.students.remove(index))
    }

    /// Look up a student by ID. Absence is an expected outcome, so this
    /// returns `None` rather than an error.
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Apply the non-blank fields of `update` to the matching student.
    ///
    /// Omitted or blank fields are left unchanged. Supplying nothing
    /// effective is not an error; it reports [`UpdateOutcome::Unchanged`]
    /// so callers can tell the user no update was performed.
    pub fn update(&mut self, id: &str, update: StudentUpdate) -> Result<UpdateOutcome, RosterError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        if update.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        if let Some(name) = update.effective_name() {
            student.set_name(name.to_string());
        }
        if let Some(class_name) = update.effective_class_name() {
            student.set_class_name(class_name.to_string());
        }
        tracing::debug!(id, "student record updated");
        Ok(UpdateOutcome::Applied)
    }

    /// Record or overwrite a grade on the student with the given ID.
    pub fn record_grade(
        &mut self,
        id: &str,
        subject: &str,
        score: f64,
    ) -> Result<(), RosterError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        student.record_grade(subject, score)
    }

    /// All students in insertion order.
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    /// Up to `n` students ranked by descending average; ties keep roster
    /// order. Asking for more than the roster holds returns everyone.
    pub fn top(&self, n: usize) -> Vec<&Student> {
        let mut ranked = rank_by_average(&self.students);
        ranked.truncate(n);
        ranked
    }

    /// Students whose class equals `class_name`, in roster order.
    pub fn by_class(&self, class_name: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.class_name() == class_name)
            .collect()
    }

    /// Aggregate statistics for one class. Never fails; an unknown class
    /// yields the zeroed statistics.
    pub fn class_statistics(&self, class_name: &str) -> ClassStatistics {
        class_statistics(class_name, &self.by_class(class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str, class_name: &str, scores: &[f64]) -> Student {
        let mut s = Student::new(id, name, class_name).unwrap();
        for (i, score) in scores.iter().enumerate() {
            s.record_grade(&format!("Subject{i}"), *score).unwrap();
        }
        s
    }

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add(student("S001", "Alice Park", "10A", &[85.0, 90.0, 88.0])) // 87.67
            .unwrap();
        roster
            .add(student("S002", "Ben Okafor", "10A", &[90.0, 85.0])) // 87.5
            .unwrap();
        roster
            .add(student("S003", "Chloe Reyes", "10B", &[82.0, 81.0, 84.0])) // 82.33
            .unwrap();
        roster
            .add(student("S004", "Dan Voss", "10B", &[95.0, 92.0, 88.0])) // 91.67
            .unwrap();
        roster
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut roster = sample_roster();
        let dup = student("S001", "Imposter", "11C", &[]);
        assert_eq!(roster.add(dup), Err(RosterError::DuplicateId("S001".into())));
        assert_eq!(roster.len(), 4);
        // Original record untouched
        assert_eq!(roster.find("S001").unwrap().name(), "Alice Park");
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut roster = sample_roster();
        let removed = roster.remove("S002").unwrap();
        assert_eq!(removed.name(), "Ben Okafor");
        assert_eq!(roster.len(), 3);
        assert!(roster.find("S002").is_none());

        let ids: Vec<&str> = roster.all().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S001", "S003", "S004"]);
    }

    #[test]
    fn remove_absent_id_fails_without_mutation() {
        let mut roster = sample_roster();
        assert_eq!(
            roster.remove("S999"),
            Err(RosterError::NotFound("S999".into()))
        );
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn id_is_reusable_after_removal() {
        let mut roster = sample_roster();
        roster.remove("S001").unwrap();
        roster
            .add(student("S001", "Alice Again", "11A", &[]))
            .unwrap();
        assert_eq!(roster.find("S001").unwrap().name(), "Alice Again");
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn find_absent_is_none() {
        let roster = sample_roster();
        assert!(roster.find("S999").is_none());
        assert_eq!(roster.find("S003").unwrap().class_name(), "10B");
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let mut roster = sample_roster();
        let outcome = roster
            .update(
                "S001",
                StudentUpdate {
                    name: Some("Alice Chen".into()),
                    class_name: None,
                },
            )
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Applied);

        let s = roster.find("S001").unwrap();
        assert_eq!(s.name(), "Alice Chen");
        assert_eq!(s.class_name(), "10A");
    }

    #[test]
    fn update_ignores_blank_fields() {
        let mut roster = sample_roster();
        let outcome = roster
            .update(
                "S001",
                StudentUpdate {
                    name: Some("   ".into()),
                    class_name: None,
                },
            )
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert_eq!(roster.find("S001").unwrap().name(), "Alice Park");
    }

    #[test]
    fn update_absent_id_fails() {
        let mut roster = sample_roster();
        assert_eq!(
            roster.update("S999", StudentUpdate::default()),
            Err(RosterError::NotFound("S999".into()))
        );
    }

    #[test]
    fn record_grade_through_the_manager() {
        let mut roster = sample_roster();
        roster.record_grade("S002", "History", 70.0).unwrap();
        assert_eq!(roster.find("S002").unwrap().subject_count(), 3);

        assert_eq!(
            roster.record_grade("S999", "History", 70.0),
            Err(RosterError::NotFound("S999".into()))
        );
        assert!(roster
            .record_grade("S002", "History", 250.0)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn top_ranks_by_descending_average() {
        let roster = sample_roster();
        let top = roster.top(3);
        let ids: Vec<&str> = top.iter().map(|s| s.id()).collect();
        // Averages: S004 91.67, S001 87.67, S002 87.5, S003 82.33
        assert_eq!(ids, vec!["S004", "S001", "S002"]);
    }

    #[test]
    fn top_with_oversized_n_returns_everyone() {
        let roster = sample_roster();
        let top = roster.top(10);
        assert_eq!(top.len(), 4);
        let ids: Vec<&str> = top.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S004", "S001", "S002", "S003"]);
    }

    #[test]
    fn top_does_not_reorder_the_roster() {
        let roster = sample_roster();
        let _ = roster.top(4);
        let ids: Vec<&str> = roster.all().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S001", "S002", "S003", "S004"]);
    }

    #[test]
    fn by_class_filters_in_order() {
        let roster = sample_roster();
        let class_10b: Vec<&str> = roster.by_class("10B").iter().map(|s| s.id()).collect();
        assert_eq!(class_10b, vec!["S003", "S004"]);
        assert!(roster.by_class("12Z").is_empty());
    }

    #[test]
    fn class_statistics_for_known_class() {
        let roster = sample_roster();
        let stats = roster.class_statistics("10B");
        assert_eq!(stats.total_students, 2);
        // (82.33 + 91.67) / 2 = 87.0
        assert_eq!(stats.average_score, 87.0);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn class_statistics_for_unknown_class_is_zeroed() {
        let roster = sample_roster();
        let stats = roster.class_statistics("12Z");
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.passed, 0);
        assert_eq!(stats.failed, 0);
    }
}
