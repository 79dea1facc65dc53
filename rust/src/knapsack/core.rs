//! Entry points: pick the day's sessions under a minute budget.

use thiserror::Error;

use crate::config::KnapsackConfig;
use crate::models::{ScheduleResult, StudySession, Subject};
use crate::{log_changes, log_checks};

use super::candidate::SessionCandidate;
use super::table::DpTable;

/// Errors that can occur during scheduling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A selected candidate with the fatigue it was valued under.
#[derive(Clone, Debug, PartialEq)]
pub struct Pick {
    /// Position of the subject in the input slice
    pub index: usize,
    pub duration_minutes: i64,
    pub fatigue_level: u32,
    pub adjusted_value: f64,
}

/// Raw outcome of the table search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KnapsackSolution {
    /// Picks in input order
    pub picks: Vec<Pick>,
    /// Best aggregate value at the full budget
    pub total_value: f64,
}

impl KnapsackSolution {
    pub fn indices(&self) -> Vec<usize> {
        self.picks.iter().map(|p| p.index).collect()
    }

    pub fn total_minutes(&self) -> i64 {
        self.picks.iter().map(|p| p.duration_minutes).sum()
    }
}

/// Run the fatigue-aware knapsack over `subjects`.
///
/// # Arguments
/// * `subjects` - Subject records; only priority and complexity are read
/// * `budget_minutes` - Minutes available for the day
/// * `config` - Candidate formulas, fatigue penalty and verbosity
///
/// # Returns
/// * `Ok(KnapsackSolution)` whose picks fit the budget, in input order
/// * `Err(SchedulerError::InvalidArgument)` for a negative budget or a
///   table that cannot be allocated
/// * `Err(SchedulerError::InvalidConfig)` if `config` fails validation
pub fn solve(
    subjects: &[Subject],
    budget_minutes: i64,
    config: &KnapsackConfig,
) -> Result<KnapsackSolution, SchedulerError> {
    config.validate()?;
    if budget_minutes < 0 {
        return Err(SchedulerError::InvalidArgument(format!(
            "budget must be non-negative, got {} minutes",
            budget_minutes
        )));
    }
    let capacity = usize::try_from(budget_minutes).map_err(|_| {
        SchedulerError::InvalidArgument(format!(
            "budget of {} minutes exceeds this platform's address space",
            budget_minutes
        ))
    })?;

    if subjects.is_empty() {
        return Ok(KnapsackSolution::default());
    }

    let verbosity = config.verbosity;
    let candidates: Vec<SessionCandidate> = subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| SessionCandidate::derive(index, subject, config))
        .collect();

    let mut table = DpTable::new(candidates.len(), capacity)?;
    for candidate in &candidates {
        let taken = table.fill_row(candidate, config.fatigue_penalty, verbosity);
        log_checks!(
            verbosity,
            "  candidate #{} ({} min, base {}): taken at {} of {} capacities, best {:.3}",
            candidate.index,
            candidate.duration_minutes,
            candidate.base_value,
            taken,
            capacity + 1,
            table.best_value()
        );
    }

    let picks = table.backtrack(&candidates, config.fatigue_penalty);
    let solution = KnapsackSolution {
        picks,
        total_value: table.best_value(),
    };

    log_changes!(
        verbosity,
        "Selected {} of {} sessions: {} of {} minutes, value {:.3}",
        solution.picks.len(),
        subjects.len(),
        solution.total_minutes(),
        budget_minutes,
        solution.total_value
    );

    Ok(solution)
}

/// Select the day's study sessions, ready for the calendar.
///
/// Sessions come back in the order their subjects were given; their
/// durations sum to at most `budget_minutes`.
pub fn schedule(
    subjects: &[Subject],
    budget_minutes: i64,
    config: &KnapsackConfig,
) -> Result<ScheduleResult, SchedulerError> {
    let solution = solve(subjects, budget_minutes, config)?;
    let sessions = solution
        .picks
        .iter()
        .map(|pick| StudySession {
            subject: subjects[pick.index].clone(),
            duration_minutes: pick.duration_minutes,
            fatigue_level: pick.fatigue_level,
            adjusted_value: pick.adjusted_value,
        })
        .collect();

    Ok(ScheduleResult {
        sessions,
        total_value: solution.total_value,
    })
}
