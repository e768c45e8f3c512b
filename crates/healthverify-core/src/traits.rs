//! Core trait definitions for the intake pipeline.
//!
//! - `Clock`             : the only source of "today", injected so validation
//!                         is deterministic under test
//! - `IdentityValidator` : parses identity documents and classifies patients
//! - `EligibilityPolicy` : resolves payment tiers and prices services
//! - `AuditWriter`       : records every assessment append-only
//!
//! Implementations must be pure except for `AuditWriter`, which owns the only
//! mutable state in the pipeline.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use healthverify_contracts::{
    assessment::AssessmentRecord,
    eligibility::{Classification, CostEstimate, ServiceEligibility},
    error::{HealthVerifyResult, ValidationError},
    identity::{DocumentKind, IdentityRecord},
};

/// Source of the current date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for tests and reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(Utc.from_utc_datetime(&date.and_time(NaiveTime::default())))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Validates identity documents and maps identities to patient categories.
pub trait IdentityValidator: Send + Sync {
    /// Parse and validate a South African ID number as of `today`.
    ///
    /// Format and birth-date problems are hard failures.  A checksum mismatch
    /// is not: the record comes back with `checksum_valid == false`.
    fn validate(&self, id_number: &str, today: NaiveDate) -> Result<IdentityRecord, ValidationError>;

    /// Return true if `number` has the shape expected for `kind`.
    fn document_number_matches(&self, kind: DocumentKind, number: &str) -> bool;

    /// Classify a patient from a validated identity, or from no identity at
    /// all (non-SA documents).
    fn classify(&self, identity: Option<&IdentityRecord>) -> Classification;
}

/// Resolves payment tiers and cost estimates for a citizenship class.
///
/// Implementations are total: unknown classes and services resolve through
/// documented fallbacks and never fail.
pub trait EligibilityPolicy: Send + Sync {
    /// Eligibility of one service for one citizenship class.
    fn service_eligibility(&self, citizenship_class: &str, service: &str) -> ServiceEligibility;

    /// Price every service in `services`, preserving order and duplicates.
    fn estimate_cost(&self, services: &[String], citizenship_class: &str) -> CostEstimate;
}

/// The audit sink: every assessment, accepted or rejected, is written here.
///
/// A failed write is fatal for the assessment; the desk returns
/// `HealthVerifyError::AuditWriteFailed` instead of an outcome.
pub trait AuditWriter: Send + Sync {
    /// Pseudonymise a document number for storage in an audit record.
    ///
    /// The same number must always map to the same reference for a given
    /// writer so repeat visits can be correlated.
    fn patient_ref(&self, document_number: &str) -> String;

    /// Append one record.  Records are never modified or deleted.
    fn write(&self, record: &AssessmentRecord) -> HealthVerifyResult<()>;

    /// Seal the trail.  Called once when the desk closes.
    fn finalize(&self) -> HealthVerifyResult<()>;
}
