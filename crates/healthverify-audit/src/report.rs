//! Aggregate reporting over an audit trail.
//!
//! The summary only reads what the records already hold: categories,
//! checksum results, red flags and estimated totals.  Patient references are
//! never part of it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use healthverify_contracts::{
    assessment::{AssessmentRecord, RecordOutcome},
    money::Money,
};

/// Counts and totals for a set of assessment records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,

    /// Accepted assessments per patient category.
    pub by_category: BTreeMap<String, usize>,

    /// Records where a checksum was computed.
    pub checksum_checked: usize,

    /// Records whose checksum matched.
    pub checksum_valid: usize,

    /// `checksum_valid / checksum_checked` as a percentage, 0 when nothing
    /// was checked.
    pub validity_rate: f64,

    /// How often each red flag was raised.
    pub red_flags: BTreeMap<String, usize>,

    /// Sum of accepted estimates, per currency.
    pub estimated_total: BTreeMap<String, Money>,
}

/// Fold `records` into a `TrailSummary`.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a AssessmentRecord>) -> TrailSummary {
    let mut summary = TrailSummary::default();

    for record in records {
        summary.total += 1;

        if let Some(valid) = record.checksum_valid {
            summary.checksum_checked += 1;
            if valid {
                summary.checksum_valid += 1;
            }
        }

        for flag in &record.red_flags {
            *summary.red_flags.entry(flag.clone()).or_default() += 1;
        }

        match &record.outcome {
            RecordOutcome::Accepted {
                category,
                estimated_total,
                currency,
                ..
            } => {
                summary.accepted += 1;
                *summary
                    .by_category
                    .entry(category.as_str().to_string())
                    .or_default() += 1;
                let total = summary.estimated_total.entry(currency.clone()).or_default();
                *total = *total + *estimated_total;
            }
            RecordOutcome::Rejected { .. } => summary.rejected += 1,
        }
    }

    if summary.checksum_checked > 0 {
        summary.validity_rate =
            summary.checksum_valid as f64 / summary.checksum_checked as f64 * 100.0;
    }

    summary
}
