//! Core data model types for the gradebook.
//!
//! A [`Student`] owns its identity and a subject→score map; averages and
//! pass/fail status are derived on demand, never stored.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::statistics::round2;

/// Minimum average required for a [`PassStatus::Pass`].
pub const PASS_THRESHOLD: f64 = 75.0;

/// A single student record.
///
/// Fields are private: reads go through the accessors and every mutation
/// goes through a validating method, so a `&Student` handed out by the
/// roster is read-only by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, immutable after creation.
    id: String,
    /// Display name.
    name: String,
    /// Class the student belongs to (e.g. "10A").
    class_name: String,
    /// Subject name → score in [0, 100]. Keys are stored trimmed.
    grades: BTreeMap<String, f64>,
}

impl Student {
    /// Create a student with an empty grade map.
    ///
    /// Fails with [`RosterError::BlankField`] if any of the fields is
    /// empty or whitespace-only.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Result<Self, RosterError> {
        let id = id.into();
        let name = name.into();
        let class_name = class_name.into();

        require_non_blank(&id, "id")?;
        require_non_blank(&name, "name")?;
        require_non_blank(&class_name, "class")?;

        Ok(Self {
            id,
            name,
            class_name,
            grades: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The subject→score map, keyed by trimmed subject name.
    pub fn grades(&self) -> &BTreeMap<String, f64> {
        &self.grades
    }

    /// Number of subjects with a recorded score.
    pub fn subject_count(&self) -> usize {
        self.grades.len()
    }

    /// Rename the student. Callers go through
    /// [`Roster::update`](crate::roster::Roster::update) rather than
    /// calling this directly.
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_class_name(&mut self, class_name: String) {
        self.class_name = class_name;
    }

    /// Record or overwrite the score for a subject.
    ///
    /// The subject name is trimmed before it is used as a key, so
    /// `"Math "` and `"Math"` address the same entry. On any validation
    /// failure the grade map is left untouched.
    pub fn record_grade(&mut self, subject: &str, score: f64) -> Result<(), RosterError> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(RosterError::BlankField { field: "subject" });
        }
        if !score.is_finite() {
            return Err(RosterError::ScoreNotFinite);
        }
        if !(0.0..=100.0).contains(&score) {
            return Err(RosterError::ScoreOutOfRange { score });
        }

        self.grades.insert(subject.to_string(), score);
        Ok(())
    }

    /// Arithmetic mean of all recorded scores, rounded to 2 decimal
    /// places with round-half-away-from-zero. Returns `0.0` when no
    /// grades have been recorded.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().sum();
        round2(total / self.grades.len() as f64)
    }

    /// Pass/fail status derived from the current average.
    pub fn status(&self) -> PassStatus {
        if self.average() >= PASS_THRESHOLD {
            PassStatus::Pass
        } else {
            PassStatus::Fail
        }
    }

    /// Multi-line textual summary of the record. Pure; printing it is the
    /// caller's concern.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str("------------------------\n");
        out.push_str(&format!("ID: {}\n", self.id));
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Class: {}\n", self.class_name));
        if self.grades.is_empty() {
            out.push_str("No grades recorded yet\n");
        } else {
            out.push_str("Subjects:\n");
            for (subject, score) in &self.grades {
                out.push_str(&format!("  - {subject}: {score}\n"));
            }
            out.push_str(&format!("Average: {}\n", self.average()));
            out.push_str(&format!("Status: {}\n", self.status()));
        }
        out.push_str("------------------------");
        out
    }
}

fn require_non_blank(value: &str, field: &'static str) -> Result<(), RosterError> {
    if value.trim().is_empty() {
        Err(RosterError::BlankField { field })
    } else {
        Ok(())
    }
}

/// Whether a student's average clears [`PASS_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassStatus {
    Pass,
    Fail,
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassStatus::Pass => write!(f, "Pass"),
            PassStatus::Fail => write!(f, "Fail"),
        }
    }
}

/// Optional-field update applied by
/// [`Roster::update`](crate::roster::Roster::update).
///
/// `None` and blank strings both mean "leave the current value
/// unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    /// New display name, if any.
    #[serde(default)]
    pub name: Option<String>,
    /// New class, if any.
    #[serde(default)]
    pub class_name: Option<String>,
}

impl StudentUpdate {
    /// The new name with blanks filtered out, trimmed.
    pub(crate) fn effective_name(&self) -> Option<&str> {
        effective(self.name.as_deref())
    }

    pub(crate) fn effective_class_name(&self) -> Option<&str> {
        effective(self.class_name.as_deref())
    }

    /// Returns `true` when no field would actually change anything.
    pub fn is_empty(&self) -> bool {
        self.effective_name().is_none() && self.effective_class_name().is_none()
    }
}

fn effective(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
