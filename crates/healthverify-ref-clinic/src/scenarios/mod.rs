//! Reference clinic walk-throughs.
//!
//! Each scenario wires real HealthVerify components to the fictional data in
//! `mock_data` and prints what happens at each step.

pub mod cost_estimate;
pub mod intake;
pub mod pain_relief;

use std::sync::Arc;

use healthverify_audit::InMemoryAuditWriter;
use healthverify_contracts::{assessment::AssessmentRecord, error::HealthVerifyResult};
use healthverify_core::{
    traits::{AuditWriter, FixedClock},
    IntakeDesk,
};
use healthverify_eligibility::EligibilityEngine;
use healthverify_identity::SaIdValidator;

use crate::mock_data::clinic_date;

// ── Arc-wrapped audit writer helper ──────────────────────────────────────────

/// Lets the desk own a `Box<dyn AuditWriter>` while the caller keeps an
/// `Arc` for integrity checks and summaries.
pub struct SharedAudit(pub Arc<InMemoryAuditWriter>);

impl AuditWriter for SharedAudit {
    fn patient_ref(&self, document_number: &str) -> String {
        self.0.patient_ref(document_number)
    }
    fn write(&self, record: &AssessmentRecord) -> HealthVerifyResult<()> {
        self.0.write(record)
    }
    fn finalize(&self) -> HealthVerifyResult<()> {
        self.0.finalize()
    }
}

/// Build a desk on the clinic date with the given rules.
///
/// The salt comes from `HEALTHVERIFY_ID_SALT` when set.
pub fn open_desk(engine: EligibilityEngine, trail_id: &str) -> (IntakeDesk, Arc<InMemoryAuditWriter>) {
    let audit = Arc::new(InMemoryAuditWriter::from_env(trail_id));
    let desk = IntakeDesk::new(
        Box::new(SaIdValidator),
        Box::new(engine),
        Box::new(SharedAudit(Arc::clone(&audit))),
        Box::new(FixedClock::on(clinic_date())),
    );
    (desk, audit)
}

/// Run every scenario in order with the given rules.
pub fn run_all(engine: EligibilityEngine) -> HealthVerifyResult<()> {
    intake::run_with_rules(engine.clone())?;
    cost_estimate::run_with_rules(&engine)?;
    pain_relief::run_scenario()
}
