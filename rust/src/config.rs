//! Configuration for the fatigue-aware session scheduler.

use pyo3::prelude::*;

use crate::knapsack::SchedulerError;
use crate::logging::VERBOSITY_DEBUG;

/// Knobs for candidate derivation and the fatigue discount.
///
/// The defaults give `duration = 30 + 10 * complexity` and
/// `base_value = 6 - priority` with a 0.1 penalty per already-packed session.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct KnapsackConfig {
    /// Fraction of base value lost per session already in the sub-solution
    #[pyo3(get, set)]
    pub fatigue_penalty: f64,
    /// Fixed part of every session's duration, in minutes
    #[pyo3(get, set)]
    pub base_minutes: i64,
    /// Extra minutes per complexity point
    #[pyo3(get, set)]
    pub minutes_per_complexity: i64,
    /// Base value is `value_ceiling - priority`
    #[pyo3(get, set)]
    pub value_ceiling: i32,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            fatigue_penalty: 0.1,
            base_minutes: 30,
            minutes_per_complexity: 10,
            value_ceiling: 6,
            verbosity: 0,
        }
    }
}

impl KnapsackConfig {
    /// Reject settings the scheduler cannot reason about.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if !self.fatigue_penalty.is_finite() || self.fatigue_penalty < 0.0 {
            return Err(SchedulerError::InvalidConfig(format!(
                "fatigue_penalty must be a finite non-negative number, got {}",
                self.fatigue_penalty
            )));
        }
        if self.verbosity > VERBOSITY_DEBUG {
            return Err(SchedulerError::InvalidConfig(format!(
                "verbosity must be between 0 and {}, got {}",
                VERBOSITY_DEBUG, self.verbosity
            )));
        }
        Ok(())
    }
}

#[pymethods]
impl KnapsackConfig {
    #[new]
    #[pyo3(signature = (
        fatigue_penalty=None,
        base_minutes=None,
        minutes_per_complexity=None,
        value_ceiling=None,
        verbosity=None
    ))]
    fn new(
        fatigue_penalty: Option<f64>,
        base_minutes: Option<i64>,
        minutes_per_complexity: Option<i64>,
        value_ceiling: Option<i32>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            fatigue_penalty: fatigue_penalty.unwrap_or(defaults.fatigue_penalty),
            base_minutes: base_minutes.unwrap_or(defaults.base_minutes),
            minutes_per_complexity: minutes_per_complexity
                .unwrap_or(defaults.minutes_per_complexity),
            value_ceiling: value_ceiling.unwrap_or(defaults.value_ceiling),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "KnapsackConfig(fatigue_penalty={}, base_minutes={}, minutes_per_complexity={}, value_ceiling={})",
            self.fatigue_penalty, self.base_minutes, self.minutes_per_complexity, self.value_ceiling
        )
    }
}
