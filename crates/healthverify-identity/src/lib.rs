//! # healthverify-identity
//!
//! Identity document validation for the HealthVerify intake pipeline.
//!
//! ## Overview
//!
//! [`SaIdValidator`] implements the
//! [`IdentityValidator`](healthverify_core::traits::IdentityValidator) trait:
//!
//! - South African ID numbers are parsed into an `IdentityRecord` (birth
//!   date, age, gender, citizenship, check-digit result) by [`sa_id::validate`]
//! - other documents get a format check from [`document::check_document_number`]
//! - [`classify::classify`] maps a citizenship to a patient category
//!
//! Everything here is a pure function of its inputs; "today" is always
//! passed in.
//!
//! ```rust,ignore
//! use healthverify_identity::sa_id;
//!
//! let record = sa_id::validate("8001015009085", today)?;
//! assert!(record.checksum_valid);
//! ```

pub mod classify;
pub mod document;
pub mod sa_id;

use chrono::NaiveDate;
use tracing::debug;

use healthverify_contracts::{
    eligibility::Classification,
    error::ValidationError,
    identity::{DocumentKind, IdentityRecord},
};
use healthverify_core::traits::IdentityValidator;

pub use classify::classify;
pub use document::check_document_number;

/// The production `IdentityValidator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaIdValidator;

impl IdentityValidator for SaIdValidator {
    fn validate(&self, id_number: &str, today: NaiveDate) -> Result<IdentityRecord, ValidationError> {
        let result = sa_id::validate(id_number, today);
        match &result {
            Ok(record) => debug!(
                age = record.age,
                citizenship = %record.citizenship,
                checksum_valid = record.checksum_valid,
                "identity number parsed"
            ),
            Err(err) => debug!(error = %err, "identity number rejected"),
        }
        result
    }

    fn document_number_matches(&self, kind: DocumentKind, number: &str) -> bool {
        check_document_number(kind, number)
    }

    fn classify(&self, identity: Option<&IdentityRecord>) -> Classification {
        classify(identity.map(|record| record.citizenship))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use healthverify_contracts::{
        eligibility::{EligibilityStatus, PatientCategory},
        identity::{Citizenship, DocumentKind},
    };
    use healthverify_core::traits::IdentityValidator;

    use super::{classify, SaIdValidator};

    #[test]
    fn classify_citizen() {
        let c = classify(Some(Citizenship::Citizen));
        assert_eq!(c.category, PatientCategory::Citizen);
        assert_eq!(c.eligibility, EligibilityStatus::FreeCare);
    }

    #[test]
    fn classify_permanent_resident_as_legal_immigrant() {
        let c = classify(Some(Citizenship::PermanentResident));
        assert_eq!(c.category, PatientCategory::LegalImmigrant);
        assert_eq!(c.eligibility, EligibilityStatus::PartialPayment);
    }

    #[test]
    fn classify_without_identity_needs_review() {
        let c = classify(None);
        assert_eq!(c.category, PatientCategory::Undocumented);
        assert_eq!(c.eligibility, EligibilityStatus::ManualReview);
    }

    /// The trait implementation wires validation and classification together.
    #[test]
    fn validator_trait_end_to_end() {
        let validator = SaIdValidator;
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let record = validator.validate("9202204120081", today).unwrap();
        assert!(record.checksum_valid);
        assert_eq!(record.citizenship, Citizenship::PermanentResident);
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(1992, 2, 20).unwrap());

        let classification = validator.classify(Some(&record));
        assert_eq!(classification.category, PatientCategory::LegalImmigrant);

        assert!(validator.document_number_matches(DocumentKind::AsylumPermit, "ASY0123456"));
        assert!(!validator.document_number_matches(DocumentKind::Passport, "ASY0123456"));
    }
}
