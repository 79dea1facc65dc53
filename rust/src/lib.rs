//! Rust implementation of the daily study-session scheduler.
//!
//! Picks which subjects to study today so the sessions fit the available
//! minutes, valuing urgent subjects higher and discounting each session by
//! how many are already packed into the day.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod knapsack;
pub mod logging;
mod models;

pub use config::KnapsackConfig;
pub use knapsack::{schedule, solve, KnapsackSolution, Pick, SchedulerError, SessionCandidate};
pub use models::{validate_subjects, ScheduleResult, StudySession, Subject, SubjectError};

/// Select the study sessions that fit into today's time limit.
///
/// # Arguments
/// * `subjects` - Subjects to choose from (priority and complexity are used)
/// * `time_limit` - Minutes available today
/// * `config` - Scheduler configuration (defaults when omitted)
///
/// # Returns
/// * ScheduleResult with sessions in subject order
///
/// # Raises
/// * ValueError if `time_limit` is negative or the configuration is invalid
#[pyfunction]
#[pyo3(signature = (subjects, time_limit, config=None))]
fn generate_schedule(
    subjects: Vec<Subject>,
    time_limit: i64,
    config: Option<KnapsackConfig>,
) -> PyResult<ScheduleResult> {
    let config = config.unwrap_or_default();
    match schedule(&subjects, time_limit, &config) {
        Ok(result) => Ok(result),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Check subject records before they reach the scheduler.
///
/// # Raises
/// * ValueError naming the first offending field or duplicate id
#[pyfunction]
#[pyo3(name = "validate_subjects")]
fn py_validate_subjects(subjects: Vec<Subject>) -> PyResult<()> {
    validate_subjects(&subjects)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// The studyplan.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Subject>()?;
    m.add_class::<StudySession>()?;
    m.add_class::<ScheduleResult>()?;

    // Config types
    m.add_class::<KnapsackConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(generate_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_validate_subjects, m)?)?;

    Ok(())
}
