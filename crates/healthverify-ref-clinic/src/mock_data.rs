//! Fictional patients for the reference clinic.
//!
//! All names and document numbers are made up.  The ID numbers are chosen
//! to exercise each branch of intake: valid citizens and residents, a check
//! digit mismatch, an impossible birth date, and non-SA documents.

use chrono::NaiveDate;

use healthverify_contracts::{identity::DocumentKind, intake::IntakeRequest};
use healthverify_relief::PainAssessment;

/// The date the demo clinic runs on, so ages and outcomes are reproducible.
pub fn clinic_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

/// One person in the intake queue.
#[derive(Debug, Clone)]
pub struct QueuedPatient {
    pub name: &'static str,
    pub request: IntakeRequest,
}

fn queued(name: &'static str, kind: DocumentKind, number: &str, services: &[&str]) -> QueuedPatient {
    QueuedPatient {
        name,
        request: IntakeRequest {
            document_kind: kind,
            document_number: number.to_string(),
            services: services.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// The morning intake queue, in arrival order.
pub fn intake_queue() -> Vec<QueuedPatient> {
    vec![
        // Male citizen born 1980-01-01, valid check digit.
        queued(
            "Thabo M.",
            DocumentKind::SouthAfricanId,
            "8001015009085",
            &["emergency_care", "specialist_consultation"],
        ),
        // Female permanent resident born 1992-02-20.
        queued(
            "Naledi K.",
            DocumentKind::SouthAfricanId,
            "9202204120081",
            &["primary_healthcare", "chronic_medication", "maternal_care"],
        ),
        // Same shape as Thabo's number, wrong check digit.
        queued(
            "Sipho D.",
            DocumentKind::SouthAfricanId,
            "8001015009087",
            &["primary_healthcare"],
        ),
        // Month 13.
        queued(
            "Lerato P.",
            DocumentKind::SouthAfricanId,
            "9513135000083",
            &["primary_healthcare"],
        ),
        queued(
            "Amara O.",
            DocumentKind::Passport,
            "M12345678",
            &["emergency_care", "primary_healthcare"],
        ),
        queued(
            "Jean-Paul N.",
            DocumentKind::AsylumPermit,
            "ASY0123456",
            &["emergency_care"],
        ),
        // Too few digits after the prefix.
        queued(
            "Farah A.",
            DocumentKind::WorkPermit,
            "WP98765",
            &["primary_healthcare"],
        ),
    ]
}

/// Service bundles priced in the cost-estimate walk-through.
pub fn service_bundles() -> Vec<(&'static str, Vec<String>)> {
    let bundle = |services: &[&str]| services.iter().map(|s| s.to_string()).collect();
    vec![
        ("routine visit", bundle(&["primary_healthcare", "chronic_medication"])),
        ("antenatal", bundle(&["maternal_care", "primary_healthcare"])),
        ("surgery", bundle(&["specialist_consultation", "elective_surgery"])),
        ("walk-in", bundle(&["emergency_care", "dental_cleaning"])),
    ]
}

/// People in the waiting room reporting pain.
pub fn waiting_room() -> Vec<(&'static str, PainAssessment)> {
    let report = |level: i64, pain_type: &str, location: &str, symptoms: &[&str]| PainAssessment {
        level,
        pain_type: pain_type.to_string(),
        location: location.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        ("Thabo M.", report(5, "aching", "lower back", &["stiffness"])),
        ("Naledi K.", report(3, "cramping", "chest", &["shortness of breath"])),
        ("Sipho D.", report(4, "throbbing", "head", &["Severe headache since morning"])),
        ("Amara O.", report(9, "sharp", "abdomen", &[])),
    ]
}

/// Follow-up readings for the first waiting-room patient, in minutes after
/// the initial report.
pub fn follow_up_readings() -> Vec<(i64, i64)> {
    vec![(15, 4), (30, 3), (45, 3)]
}
