//! Boundary records exchanged with the subject store and the calendar.

use pyo3::prelude::*;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Problems found by [`Subject::validate`] and [`validate_subjects`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("Subject name must not be empty")]
    EmptyName,
    #[error("completed_units ({completed}) must be between 0 and total_units ({total})")]
    CompletedUnits { completed: i32, total: i32 },
    #[error("Duplicate subject id: {0}")]
    DuplicateId(i64),
}

fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), SubjectError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SubjectError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// A subject the student is preparing an exam for.
///
/// Only `priority` (1 = most urgent) and `complexity` (1 = easiest) feed the
/// scheduler. The rest is carried through to the calendar untouched.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Subject {
    #[pyo3(get, set)]
    pub id: i64,
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub days_left: i32,
    #[pyo3(get, set)]
    pub total_units: i32,
    #[pyo3(get, set)]
    pub completed_units: i32,
    #[pyo3(get, set)]
    pub priority: i32,
    #[pyo3(get, set)]
    pub complexity: i32,
}

impl Subject {
    /// Share of units completed, in percent, rounded to one decimal.
    pub fn progress_percent(&self) -> f64 {
        if self.total_units > 0 {
            let percent = self.completed_units as f64 / self.total_units as f64 * 100.0;
            (percent * 10.0).round() / 10.0
        } else {
            0.0
        }
    }

    pub fn priority_label(&self) -> &'static str {
        match self.priority {
            1 => "Highest",
            2 => "High",
            3 => "Medium",
            4 => "Low",
            5 => "Lowest",
            _ => "Unknown",
        }
    }

    pub fn complexity_label(&self) -> &'static str {
        match self.complexity {
            1 => "Very Easy",
            2 => "Easy",
            3 => "Medium",
            4 => "Hard",
            5 => "Very Hard",
            _ => "Unknown",
        }
    }

    /// Check the record the way the subject form does before it is stored.
    ///
    /// The scheduler accepts anything; callers run this first.
    pub fn validate(&self) -> Result<(), SubjectError> {
        if self.name.trim().is_empty() {
            return Err(SubjectError::EmptyName);
        }
        check_range("priority", self.priority, 1, 5)?;
        check_range("complexity", self.complexity, 1, 5)?;
        check_range("days_left", self.days_left, 1, i32::MAX)?;
        check_range("total_units", self.total_units, 1, i32::MAX)?;
        if !(0..=self.total_units).contains(&self.completed_units) {
            return Err(SubjectError::CompletedUnits {
                completed: self.completed_units,
                total: self.total_units,
            });
        }
        Ok(())
    }
}

/// Validate a batch of subjects and reject repeated ids.
pub fn validate_subjects(subjects: &[Subject]) -> Result<(), SubjectError> {
    let mut seen: FxHashSet<i64> =
        FxHashSet::with_capacity_and_hasher(subjects.len(), Default::default());
    for subject in subjects {
        subject.validate()?;
        if !seen.insert(subject.id) {
            return Err(SubjectError::DuplicateId(subject.id));
        }
    }
    Ok(())
}

#[pymethods]
impl Subject {
    #[new]
    #[pyo3(signature = (id, name, days_left, total_units, priority, complexity, completed_units=0))]
    fn new(
        id: i64,
        name: String,
        days_left: i32,
        total_units: i32,
        priority: i32,
        complexity: i32,
        completed_units: i32,
    ) -> Self {
        Self {
            id,
            name,
            days_left,
            total_units,
            completed_units,
            priority,
            complexity,
        }
    }

    #[getter(progress_percent)]
    fn py_progress_percent(&self) -> f64 {
        self.progress_percent()
    }

    #[getter(priority_label)]
    fn py_priority_label(&self) -> &'static str {
        self.priority_label()
    }

    #[getter(complexity_label)]
    fn py_complexity_label(&self) -> &'static str {
        self.complexity_label()
    }

    fn __repr__(&self) -> String {
        format!(
            "Subject(id={}, name={:?}, priority={}, complexity={})",
            self.id, self.name, self.priority, self.complexity
        )
    }
}

/// One selected study session, handed to the calendar for slotting.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct StudySession {
    #[pyo3(get, set)]
    pub subject: Subject,
    #[pyo3(get, set)]
    pub duration_minutes: i64,
    /// Sessions already packed into the sub-solution this one extended
    #[pyo3(get, set)]
    pub fatigue_level: u32,
    /// Base value after the fatigue discount
    #[pyo3(get, set)]
    pub adjusted_value: f64,
}

#[pymethods]
impl StudySession {
    #[new]
    #[pyo3(signature = (subject, duration_minutes, fatigue_level=0, adjusted_value=0.0))]
    fn new(
        subject: Subject,
        duration_minutes: i64,
        fatigue_level: u32,
        adjusted_value: f64,
    ) -> Self {
        Self {
            subject,
            duration_minutes,
            fatigue_level,
            adjusted_value,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "StudySession(subject={:?}, duration_minutes={}, adjusted_value={})",
            self.subject.name, self.duration_minutes, self.adjusted_value
        )
    }
}

/// Sessions chosen for one day, in subject input order.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleResult {
    #[pyo3(get, set)]
    pub sessions: Vec<StudySession>,
    #[pyo3(get, set)]
    pub total_value: f64,
}

impl ScheduleResult {
    pub fn total_minutes(&self) -> i64 {
        self.sessions.iter().map(|s| s.duration_minutes).sum()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[pymethods]
impl ScheduleResult {
    #[new]
    #[pyo3(signature = (sessions=None, total_value=0.0))]
    fn new(sessions: Option<Vec<StudySession>>, total_value: f64) -> Self {
        Self {
            sessions: sessions.unwrap_or_default(),
            total_value,
        }
    }

    #[getter(total_minutes)]
    fn py_total_minutes(&self) -> i64 {
        self.total_minutes()
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(sessions={}, total_minutes={}, total_value={})",
            self.sessions.len(),
            self.total_minutes(),
            self.total_value
        )
    }
}
