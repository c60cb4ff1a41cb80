//! Event format table: attempt counts and scoring rules per WCA event.
//!
//! The table is an explicit immutable value passed into the profile builder
//! and sampler, not a global, so tests substitute their own entries without
//! touching shared state. Looking up an unconfigured event is a fatal
//! configuration error; there is deliberately no fallback rule.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a sorted set of attempt scores collapses into one round score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// WCA "average of 5": drop the single best and single worst, mean the
    /// middle three.
    TrimmedMean,
    /// WCA "mean of 3": mean of all attempts.
    FullMean,
    /// WCA "best of N": smallest attempt wins.
    SingleBest,
}

impl ScoringRule {
    /// Fewest attempts the rule can score.
    pub fn min_attempts(&self) -> usize {
        match self {
            Self::TrimmedMean => 3,
            Self::FullMean | Self::SingleBest => 1,
        }
    }

    /// Collapse one round's attempts into a score. `sorted` must already be
    /// ascending (best time first, DNF sentinel last) and hold at least
    /// [`min_attempts`](Self::min_attempts) entries.
    pub fn aggregate(&self, sorted: &[f64]) -> f64 {
        debug_assert!(sorted.len() >= self.min_attempts());
        match self {
            Self::TrimmedMean => mean(&sorted[1..sorted.len() - 1]),
            Self::FullMean => mean(sorted),
            Self::SingleBest => sorted[0],
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Attempt count and scoring rule for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFormat {
    pub attempt_count: usize,
    pub rule: ScoringRule,
}

impl EventFormat {
    /// Validated constructor: the attempt count must be enough for the rule
    /// to score.
    pub fn new(attempt_count: usize, rule: ScoringRule) -> Result<Self, SimError> {
        let required = rule.min_attempts();
        if attempt_count < required {
            return Err(SimError::InvalidEventFormat {
                attempt_count,
                required,
            });
        }
        Ok(Self {
            attempt_count,
            rule,
        })
    }
}

/// Immutable event id → format mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormatTable {
    formats: BTreeMap<String, EventFormat>,
}

impl EventFormatTable {
    /// Build a table from explicit entries (used by tests and custom setups).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, EventFormat)>,
    {
        Self {
            formats: entries.into_iter().collect(),
        }
    }

    /// The official WCA event formats.
    pub fn wca_defaults() -> Self {
        let ao5 = EventFormat {
            attempt_count: 5,
            rule: ScoringRule::TrimmedMean,
        };
        let mo3 = EventFormat {
            attempt_count: 3,
            rule: ScoringRule::FullMean,
        };
        let bo3 = EventFormat {
            attempt_count: 3,
            rule: ScoringRule::SingleBest,
        };

        let mut formats = BTreeMap::new();
        for event in [
            "333", "222", "444", "555", "sq1", "clock", "333oh", "pyram", "skewb",
        ] {
            formats.insert(event.to_string(), ao5);
        }
        for event in ["666", "777", "333fm"] {
            formats.insert(event.to_string(), mo3);
        }
        for event in ["333bf", "444bf", "555bf"] {
            formats.insert(event.to_string(), bo3);
        }

        Self { formats }
    }

    /// Look up an event's format. Unknown events are a configuration error
    /// and must abort the run before any sampling begins.
    pub fn get(&self, event: &str) -> Result<&EventFormat, SimError> {
        self.formats.get(event).ok_or_else(|| SimError::UnknownEvent {
            event: event.to_string(),
        })
    }

    pub fn contains(&self, event: &str) -> bool {
        self.formats.contains_key(event)
    }
}

impl Default for EventFormatTable {
    fn default() -> Self {
        Self::wca_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_mean_drops_best_and_worst() {
        let rule = ScoringRule::TrimmedMean;
        assert_eq!(rule.aggregate(&[10.0, 20.0, 30.0, 40.0, 50.0]), 30.0);
    }

    #[test]
    fn full_mean_averages_everything() {
        let rule = ScoringRule::FullMean;
        assert_eq!(rule.aggregate(&[10.0, 20.0, 30.0]), 20.0);
    }

    #[test]
    fn single_best_takes_smallest() {
        let rule = ScoringRule::SingleBest;
        assert_eq!(rule.aggregate(&[10.0, 20.0, 30.0, 40.0, 50.0]), 10.0);
    }

    #[test]
    fn wca_defaults_cover_the_standard_events() {
        let table = EventFormatTable::wca_defaults();

        let f333 = table.get("333").unwrap();
        assert_eq!(f333.attempt_count, 5);
        assert_eq!(f333.rule, ScoringRule::TrimmedMean);

        let f666 = table.get("666").unwrap();
        assert_eq!(f666.attempt_count, 3);
        assert_eq!(f666.rule, ScoringRule::FullMean);

        let fbld = table.get("333bf").unwrap();
        assert_eq!(fbld.attempt_count, 3);
        assert_eq!(fbld.rule, ScoringRule::SingleBest);
    }

    #[test]
    fn formats_with_too_few_attempts_are_rejected() {
        let err = EventFormat::new(2, ScoringRule::TrimmedMean).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidEventFormat {
                attempt_count: 2,
                required: 3
            }
        ));
        assert!(EventFormat::new(1, ScoringRule::SingleBest).is_ok());
        assert!(EventFormat::new(5, ScoringRule::TrimmedMean).is_ok());
    }

    #[test]
    #[should_panic]
    fn trimmed_mean_cannot_score_two_attempts() {
        ScoringRule::TrimmedMean.aggregate(&[10.0, 20.0]);
    }

    #[test]
    fn unknown_event_is_a_configuration_error() {
        let table = EventFormatTable::wca_defaults();
        let err = table.get("999").unwrap_err();
        assert!(matches!(err, SimError::UnknownEvent { ref event } if event == "999"));
    }

    #[test]
    fn custom_tables_do_not_touch_the_defaults() {
        let table = EventFormatTable::from_entries([(
            "test".to_string(),
            EventFormat {
                attempt_count: 5,
                rule: ScoringRule::SingleBest,
            },
        )]);
        assert!(table.contains("test"));
        assert!(!table.contains("333"));
        assert!(EventFormatTable::wca_defaults().contains("333"));
    }
}
