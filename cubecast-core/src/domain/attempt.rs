use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of value slots in a WCA results row. Events with fewer attempts
/// leave the trailing slots at zero.
pub const ATTEMPT_SLOTS: usize = 5;

/// One historical competition round for one competitor: up to five attempt
/// values plus the competition date.
///
/// Attempt encoding follows the WCA results export:
/// - positive: solve time in centiseconds
/// - zero: attempt not taken
/// - negative: DNF/DNS (no valid completion)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempts: [i32; ATTEMPT_SLOTS],
    pub date: NaiveDate,
}

impl AttemptRecord {
    pub fn new(attempts: [i32; ATTEMPT_SLOTS], date: NaiveDate) -> Self {
        Self { attempts, date }
    }

    /// Finished attempt values (positive times only).
    pub fn finished(&self) -> impl Iterator<Item = i32> + '_ {
        self.attempts.iter().copied().filter(|&v| v > 0)
    }

    /// Number of non-finish attempts in this round.
    pub fn dnf_count(&self) -> usize {
        self.attempts.iter().filter(|&&v| v < 0).count()
    }

    /// Mean of the finished attempts, or `None` if every attempt was a
    /// non-finish or not taken.
    pub fn instance_average(&self) -> Option<f64> {
        let mut sum = 0i64;
        let mut n = 0usize;
        for v in self.finished() {
            sum += i64::from(v);
            n += 1;
        }
        if n == 0 {
            None
        } else {
            Some(sum as f64 / n as f64)
        }
    }
}
