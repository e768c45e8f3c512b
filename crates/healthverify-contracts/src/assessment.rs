//! Intake outcomes and audit records.
//!
//! `IntakeOutcome` is what the intake desk returns to the caller.
//! `AssessmentRecord` is what gets written to the audit trail, one per
//! assessment, whether it was accepted or rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    eligibility::{Classification, CostEstimate, EligibilityStatus, PatientCategory},
    identity::{DocumentKind, IdentityRecord},
    intake::AssessmentId,
    money::Money,
};

/// The outcome of assessing one intake.
///
/// Callers pattern-match on this:
/// - `Accepted` → show the classification and estimate; `red_flags` lists
///   soft signals (e.g. a checksum mismatch) that a clerk should look at
/// - `Rejected` → the document could not be used; nothing was priced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum IntakeOutcome {
    Accepted {
        assessment_id: AssessmentId,
        /// Present only for South African ID documents.
        identity: Option<IdentityRecord>,
        classification: Classification,
        estimate: CostEstimate,
        red_flags: Vec<String>,
    },

    Rejected {
        assessment_id: AssessmentId,
        /// Human-readable explanation, also written to the audit trail.
        reason: String,
    },
}

impl IntakeOutcome {
    pub fn assessment_id(&self) -> &AssessmentId {
        match self {
            IntakeOutcome::Accepted { assessment_id, .. }
            | IntakeOutcome::Rejected { assessment_id, .. } => assessment_id,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, IntakeOutcome::Accepted { .. })
    }
}

/// What the audit trail records about an assessment's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordOutcome {
    Accepted {
        category: PatientCategory,
        eligibility: EligibilityStatus,
        estimated_total: Money,
        currency: String,
    },
    Rejected {
        reason: String,
    },
}

/// An immutable record of one assessment, written to the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    /// Salted hash of the document number; see the audit writer.
    pub patient_ref: String,
    pub document_kind: DocumentKind,
    /// `None` when no checksum applies (non-SA documents, rejected inputs).
    pub checksum_valid: Option<bool>,
    pub red_flags: Vec<String>,
    pub outcome: RecordOutcome,
    /// Wall-clock time the record was created (UTC).
    pub timestamp: DateTime<Utc>,
}
