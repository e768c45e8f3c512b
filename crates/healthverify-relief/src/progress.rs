//! Follow-up readings against a baseline pain level.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use healthverify_contracts::error::HealthVerifyResult;

use crate::triage::PainLevel;

/// One follow-up reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEntry {
    pub baseline: PainLevel,
    pub current: PainLevel,
    /// `baseline - current`; positive means the pain eased.
    pub improvement: i64,
    pub recorded_at: DateTime<Utc>,
}

/// Readings taken while a patient waits, all compared to the first level
/// they reported.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressLog {
    baseline: PainLevel,
    entries: Vec<ProgressEntry>,
}

impl ProgressLog {
    pub fn new(baseline: PainLevel) -> Self {
        Self {
            baseline,
            entries: Vec::new(),
        }
    }

    pub fn baseline(&self) -> PainLevel {
        self.baseline
    }

    /// Record a new reading taken at `recorded_at`.
    pub fn record(&mut self, level: i64, recorded_at: DateTime<Utc>) -> HealthVerifyResult<&ProgressEntry> {
        let current = PainLevel::new(level)?;
        let improvement = i64::from(self.baseline) - i64::from(current);

        debug!(
            baseline = self.baseline.value(),
            current = current.value(),
            improvement,
            "pain reading recorded"
        );

        self.entries.push(ProgressEntry {
            baseline: self.baseline,
            current,
            improvement,
            recorded_at,
        });

        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Improvement at the most recent reading, if any.
    pub fn latest_improvement(&self) -> Option<i64> {
        self.entries.last().map(|e| e.improvement)
    }

    /// Largest improvement seen so far, if any.
    pub fn best_improvement(&self) -> Option<i64> {
        self.entries.iter().map(|e| e.improvement).max()
    }
}
