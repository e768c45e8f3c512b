//! Patient classification.

use healthverify_contracts::{
    eligibility::{Classification, EligibilityStatus, PatientCategory},
    identity::Citizenship,
};

/// Map a citizenship (if one could be established) to a patient category and
/// headline eligibility status.
///
/// Permanent residents are priced under the `legal_immigrant` rules.  With
/// no established citizenship the patient is treated as undocumented and
/// sent to manual review.
pub fn classify(citizenship: Option<Citizenship>) -> Classification {
    let (category, eligibility) = match citizenship {
        Some(Citizenship::Citizen) => (PatientCategory::Citizen, EligibilityStatus::FreeCare),
        Some(Citizenship::PermanentResident) => {
            (PatientCategory::LegalImmigrant, EligibilityStatus::PartialPayment)
        }
        None => (PatientCategory::Undocumented, EligibilityStatus::ManualReview),
    };
    Classification { category, eligibility }
}
