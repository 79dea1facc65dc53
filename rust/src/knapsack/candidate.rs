//! Candidate derivation: one fixed-length session per subject.

use crate::config::KnapsackConfig;
use crate::models::Subject;

/// The single session a subject contributes to one scheduling call.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionCandidate {
    /// Position of the subject in the caller's slice
    pub index: usize,
    pub duration_minutes: i64,
    pub base_value: f64,
}

impl SessionCandidate {
    /// Derive the candidate for `subject`.
    ///
    /// Out-of-range priority/complexity follow the same linear formulas, so
    /// durations may be zero or negative and values may be negative.
    pub fn derive(index: usize, subject: &Subject, config: &KnapsackConfig) -> Self {
        let duration_minutes = config
            .base_minutes
            .saturating_add(config.minutes_per_complexity.saturating_mul(subject.complexity as i64));
        let base_value = config.value_ceiling as f64 - subject.priority as f64;
        Self {
            index,
            duration_minutes,
            base_value,
        }
    }

    /// Column this candidate would extend when placed at capacity `t`.
    ///
    /// `None` when the session does not fit (`duration > t`) or when a
    /// non-positive duration would read past the last column.
    #[inline]
    pub fn lookup_column(&self, t: usize, capacity: usize) -> Option<usize> {
        let remaining = (t as i64).checked_sub(self.duration_minutes)?;
        let remaining = usize::try_from(remaining).ok()?;
        (remaining <= capacity).then_some(remaining)
    }

    /// Base value discounted by the number of sessions already packed.
    #[inline]
    pub fn adjusted_value(&self, fatigue_level: u32, fatigue_penalty: f64) -> f64 {
        self.base_value * (1.0 - fatigue_penalty * fatigue_level as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_subject(priority: i32, complexity: i32) -> Subject {
        Subject {
            id: 1,
            name: "Algebra".to_string(),
            days_left: 7,
            total_units: 10,
            completed_units: 0,
            priority,
            complexity,
        }
    }

    #[test]
    fn test_duration_and_value_formulas() {
        let config = KnapsackConfig::default();
        let easiest = SessionCandidate::derive(0, &make_subject(1, 1), &config);
        assert_eq!(easiest.duration_minutes, 40);
        assert_eq!(easiest.base_value, 5.0);

        let hardest = SessionCandidate::derive(3, &make_subject(5, 5), &config);
        assert_eq!(hardest.index, 3);
        assert_eq!(hardest.duration_minutes, 80);
        assert_eq!(hardest.base_value, 1.0);
    }

    #[test]
    fn test_out_of_range_inputs_follow_formulas() {
        let config = KnapsackConfig::default();
        let candidate = SessionCandidate::derive(0, &make_subject(9, -3), &config);
        assert_eq!(candidate.duration_minutes, 0);
        assert_eq!(candidate.base_value, -3.0);

        let extreme = SessionCandidate::derive(0, &make_subject(i32::MIN, i32::MAX), &config);
        assert_eq!(extreme.duration_minutes, 30 + 10 * i32::MAX as i64);
        assert!(extreme.base_value > 0.0);
    }

    #[test]
    fn test_lookup_column() {
        let config = KnapsackConfig::default();
        let candidate = SessionCandidate::derive(0, &make_subject(3, 1), &config);
        assert_eq!(candidate.lookup_column(39, 100), None);
        assert_eq!(candidate.lookup_column(40, 100), Some(0));
        assert_eq!(candidate.lookup_column(100, 100), Some(60));

        let negative = SessionCandidate {
            index: 0,
            duration_minutes: -20,
            base_value: 3.0,
        };
        assert_eq!(negative.lookup_column(10, 30), Some(30));
        assert_eq!(negative.lookup_column(11, 30), None);
    }

    #[test]
    fn test_adjusted_value() {
        let candidate = SessionCandidate {
            index: 0,
            duration_minutes: 40,
            base_value: 3.0,
        };
        assert_eq!(candidate.adjusted_value(0, 0.1), 3.0);
        assert!((candidate.adjusted_value(1, 0.1) - 2.7).abs() < 1e-12);
        assert!((candidate.adjusted_value(2, 0.1) - 2.4).abs() < 1e-12);
    }
}
