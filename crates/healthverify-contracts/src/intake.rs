//! Intake request types.
//!
//! An intake is one clerk-captured identity document plus the services the
//! patient is asking for.  The intake desk turns it into an
//! `IntakeOutcome` and one audit record.

use serde::{Deserialize, Serialize};

use crate::identity::DocumentKind;

/// Unique identifier for a single intake assessment.
///
/// Appears in the outcome returned to the caller and in the audit record, so
/// the two can be correlated without storing the identity number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub uuid::Uuid);

impl AssessmentId {
    /// Create a new, unique assessment ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the intake desk needs to assess one patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub document_kind: DocumentKind,
    /// The number read off the document.  Never logged or audited in clear.
    pub document_number: String,
    /// Requested services, in the order they should be priced.
    pub services: Vec<String>,
}

impl IntakeRequest {
    /// Shorthand for the common case of a South African ID number.
    pub fn south_african_id(id_number: impl Into<String>, services: &[&str]) -> Self {
        Self {
            document_kind: DocumentKind::SouthAfricanId,
            document_number: id_number.into(),
            services: services.iter().map(|s| s.to_string()).collect(),
        }
    }
}
