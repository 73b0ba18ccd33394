//! Ranking and per-class aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::model::{PassStatus, Student};

/// Round to 2 decimal places, half away from zero.
///
/// `f64::round` rounds half-way cases away from zero, which is the
/// rounding mode used everywhere a displayed average is produced.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sort students by descending average.
///
/// The sort is stable, so students with equal averages keep their
/// relative roster order. The input slice is not reordered; the ranking
/// is returned as a fresh vector of references.
pub fn rank_by_average(students: &[Student]) -> Vec<&Student> {
    let mut ranked: Vec<&Student> = students.iter().collect();
    ranked.sort_by(|a, b| b.average().total_cmp(&a.average()));
    ranked
}

/// Aggregate statistics for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStatistics {
    /// The class these numbers describe.
    pub class_name: String,
    /// Number of students in the class.
    pub total_students: usize,
    /// Mean of the students' individual averages, rounded to 2 decimals.
    pub average_score: f64,
    /// Students whose average clears the pass threshold.
    pub passed: usize,
    /// Students below the pass threshold.
    pub failed: usize,
}

impl ClassStatistics {
    /// The all-zero statistics for a class with no members.
    pub fn empty(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            total_students: 0,
            average_score: 0.0,
            passed: 0,
            failed: 0,
        }
    }
}

/// Compute class statistics over an already-filtered set of students.
///
/// Each student's average is itself rounded before the class mean is
/// taken, so the class average matches what the per-student displays sum
/// to. An empty set yields [`ClassStatistics::empty`], never an error.
pub fn class_statistics(class_name: &str, members: &[&Student]) -> ClassStatistics {
    if members.is_empty() {
        return ClassStatistics::empty(class_name);
    }

    let total: f64 = members.iter().map(|s| s.average()).sum();
    let passed = members
        .iter()
        .filter(|s| s.status() == PassStatus::Pass)
        .count();

    ClassStatistics {
        class_name: class_name.to_string(),
        total_students: members.len(),
        average_score: round2(total / members.len() as f64),
        passed,
        failed: members.len() - passed,
    }
}
