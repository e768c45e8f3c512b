//! Scenario 1: Morning intake queue
//!
//! Runs every queued patient through the intake desk.
//!
//!   1. SA IDs are parsed; others get a format check
//!   2. Checksum mismatches are accepted with a red flag
//!   3. Accepted patients are classified and their services priced
//!   4. Every outcome, including rejections, lands in the audit chain
//!   5. The chain is sealed, verified and summarised

use healthverify_contracts::{assessment::IntakeOutcome, error::HealthVerifyResult};
use healthverify_eligibility::EligibilityEngine;

use crate::{mock_data::intake_queue, scenarios::open_desk};

/// Run Scenario 1 with the built-in eligibility rules.
pub fn run_scenario() -> HealthVerifyResult<()> {
    run_with_rules(EligibilityEngine::builtin()?)
}

/// Run Scenario 1 with a caller-supplied rule set.
pub fn run_with_rules(engine: EligibilityEngine) -> HealthVerifyResult<()> {
    println!("=== Scenario 1: Morning intake queue ===");
    println!();

    let (desk, audit) = open_desk(engine, "front-desk-morning");

    for patient in intake_queue() {
        println!(
            "  {} ({} {})",
            patient.name,
            patient.request.document_kind,
            masked(&patient.request.document_number)
        );

        match desk.assess(&patient.request)? {
            IntakeOutcome::Accepted {
                identity,
                classification,
                estimate,
                red_flags,
                ..
            } => {
                if let Some(identity) = identity {
                    println!(
                        "    Identity:     born {}, age {}, {}, {}",
                        identity.birth_date, identity.age, identity.gender, identity.citizenship
                    );
                }
                println!(
                    "    Category:     {} ({})",
                    classification.category.display_name(),
                    classification.eligibility.description()
                );
                for line in &estimate.breakdown {
                    println!(
                        "    {:<28} {:>10} → {:>10} [{}]",
                        line.service, line.base_cost, line.patient_cost, line.coverage_tier
                    );
                }
                println!("    Estimated:    {} {}", estimate.currency, estimate.total_cost);
                for flag in red_flags {
                    println!("    RED FLAG:     {}", flag);
                }
            }
            IntakeOutcome::Rejected { reason, .. } => {
                println!("    REJECTED:     {}", reason);
            }
        }
        println!();
    }

    desk.close()?;

    let integrity_ok = audit.verify_integrity()?;
    let summary = audit.summary()?;

    println!(
        "  Audit chain integrity:  {} ({} record(s) in chain)",
        if integrity_ok { "VERIFIED" } else { "FAILED" },
        summary.total
    );
    println!(
        "  Accepted / rejected:    {} / {}",
        summary.accepted, summary.rejected
    );
    println!(
        "  Checksum validity:      {:.1}% of {} checked",
        summary.validity_rate, summary.checksum_checked
    );
    for (currency, total) in &summary.estimated_total {
        println!("  Estimated revenue:      {} {}", currency, total);
    }
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}

/// Document numbers are never printed in full; only the last three
/// characters are shown.
fn masked(document_number: &str) -> String {
    let chars: Vec<char> = document_number.chars().collect();
    let shown = chars.len().min(3);
    let hidden = chars.len() - shown;
    std::iter::repeat('*')
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}
