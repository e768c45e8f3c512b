//! The intake desk: runs one intake through the pipeline in a fixed order.
//!
//!   Document check → Checksum policy → Classify → Estimate → Audit
//!
//! Every assessment produces exactly one audit record, including rejected
//! ones.  A rejection is a valid outcome, not an error; only an audit write
//! failure aborts an assessment.

use tracing::{debug, info, warn};

use healthverify_contracts::{
    assessment::{AssessmentRecord, IntakeOutcome, RecordOutcome},
    error::HealthVerifyResult,
    identity::DocumentKind,
    intake::{AssessmentId, IntakeRequest},
};

use crate::traits::{AuditWriter, Clock, EligibilityPolicy, IdentityValidator};

/// Red flag attached to accepted intakes whose check digit does not match.
pub const CHECKSUM_MISMATCH: &str = "identity number checksum mismatch";

/// What the desk does with an ID number whose checksum fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Accept the intake and attach a red flag for the clerk.
    #[default]
    Flag,
    /// Reject the intake outright.
    Reject,
}

/// Drives intake assessments for one audit trail.
///
/// The desk owns the collaborators and enforces the pipeline ordering on
/// every call to `assess()`.
pub struct IntakeDesk {
    validator: Box<dyn IdentityValidator>,
    policy: Box<dyn EligibilityPolicy>,
    audit: Box<dyn AuditWriter>,
    clock: Box<dyn Clock>,
    checksum_policy: ChecksumPolicy,
}

impl IntakeDesk {
    pub fn new(
        validator: Box<dyn IdentityValidator>,
        policy: Box<dyn EligibilityPolicy>,
        audit: Box<dyn AuditWriter>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            validator,
            policy,
            audit,
            clock,
            checksum_policy: ChecksumPolicy::default(),
        }
    }

    pub fn with_checksum_policy(mut self, checksum_policy: ChecksumPolicy) -> Self {
        self.checksum_policy = checksum_policy;
        self
    }

    /// Assess one intake.
    ///
    /// # Pipeline
    ///
    /// 1. South African IDs go through `IdentityValidator::validate`; other
    ///    documents only get a format check.  Failures → `Rejected`.
    /// 2. A checksum mismatch is flagged or rejected per `ChecksumPolicy`.
    /// 3. The patient is classified (non-SA documents classify without an
    ///    identity and land in manual review).
    /// 4. Requested services are priced for the patient's category.
    /// 5. One `AssessmentRecord` is written to the audit trail.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when the audit write fails.
    pub fn assess(&self, request: &IntakeRequest) -> HealthVerifyResult<IntakeOutcome> {
        let assessment_id = AssessmentId::new();
        let today = self.clock.today();
        let patient_ref = self.audit.patient_ref(&request.document_number);

        debug!(
            assessment_id = %assessment_id.0,
            document_kind = %request.document_kind,
            services = request.services.len(),
            "intake assessment starting"
        );

        // ── Step 1: Document check ───────────────────────────────────────────
        let identity = match request.document_kind {
            DocumentKind::SouthAfricanId => {
                match self.validator.validate(&request.document_number, today) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        return self.reject(
                            assessment_id,
                            patient_ref,
                            request.document_kind,
                            None,
                            err.to_string(),
                        );
                    }
                }
            }
            kind => {
                if !self.validator.document_number_matches(kind, &request.document_number) {
                    return self.reject(
                        assessment_id,
                        patient_ref,
                        kind,
                        None,
                        format!("{} number does not match the expected format", kind),
                    );
                }
                None
            }
        };

        // ── Step 2: Checksum policy ──────────────────────────────────────────
        let checksum_valid = identity.as_ref().map(|record| record.checksum_valid);
        let mut red_flags = Vec::new();

        if checksum_valid == Some(false) {
            match self.checksum_policy {
                ChecksumPolicy::Flag => red_flags.push(CHECKSUM_MISMATCH.to_string()),
                ChecksumPolicy::Reject => {
                    return self.reject(
                        assessment_id,
                        patient_ref,
                        request.document_kind,
                        checksum_valid,
                        CHECKSUM_MISMATCH.to_string(),
                    );
                }
            }
        }

        // ── Step 3: Classification ───────────────────────────────────────────
        let classification = self.validator.classify(identity.as_ref());

        // ── Step 4: Cost estimate ────────────────────────────────────────────
        let estimate = self
            .policy
            .estimate_cost(&request.services, classification.category.as_str());

        // ── Step 5: Audit ────────────────────────────────────────────────────
        let record = AssessmentRecord {
            assessment_id: assessment_id.clone(),
            patient_ref,
            document_kind: request.document_kind,
            checksum_valid,
            red_flags: red_flags.clone(),
            outcome: RecordOutcome::Accepted {
                category: classification.category,
                eligibility: classification.eligibility,
                estimated_total: estimate.total_cost,
                currency: estimate.currency.clone(),
            },
            timestamp: self.clock.now(),
        };
        self.audit.write(&record)?;

        info!(
            assessment_id = %assessment_id.0,
            category = %classification.category,
            eligibility = %classification.eligibility,
            estimated_total = %estimate.total_cost,
            red_flags = red_flags.len(),
            "intake accepted"
        );

        Ok(IntakeOutcome::Accepted {
            assessment_id,
            identity,
            classification,
            estimate,
            red_flags,
        })
    }

    /// Seal the audit trail.
    pub fn close(&self) -> HealthVerifyResult<()> {
        self.audit.finalize()
    }

    fn reject(
        &self,
        assessment_id: AssessmentId,
        patient_ref: String,
        document_kind: DocumentKind,
        checksum_valid: Option<bool>,
        reason: String,
    ) -> HealthVerifyResult<IntakeOutcome> {
        warn!(
            assessment_id = %assessment_id.0,
            document_kind = %document_kind,
            reason = %reason,
            "intake rejected"
        );

        let record = AssessmentRecord {
            assessment_id: assessment_id.clone(),
            patient_ref,
            document_kind,
            checksum_valid,
            red_flags: Vec::new(),
            outcome: RecordOutcome::Rejected {
                reason: reason.clone(),
            },
            timestamp: self.clock.now(),
        };
        self.audit.write(&record)?;

        Ok(IntakeOutcome::Rejected {
            assessment_id,
            reason,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
