//! Scenario 3: Waiting-room pain triage
//!
//! Each waiting patient is screened for emergency escalation first.  The
//! rest get comfort techniques, and the first patient's follow-up readings
//! are tracked against their initial report.

use chrono::Duration;

use healthverify_contracts::error::HealthVerifyResult;
use healthverify_core::traits::{Clock, FixedClock};
use healthverify_relief::{assess, PainLevel, ProgressLog, ReliefPlan};

use crate::mock_data::{clinic_date, follow_up_readings, waiting_room};

/// Run Scenario 3.
pub fn run_scenario() -> HealthVerifyResult<()> {
    println!("=== Scenario 3: Waiting-room pain triage ===");
    println!();

    let patients = waiting_room();

    for (name, report) in &patients {
        println!(
            "  {} reports {}/10 {} pain ({})",
            name, report.level, report.pain_type, report.location
        );

        match assess(report)? {
            ReliefPlan::Emergency { reasons, .. } => {
                println!("    EMERGENCY: seek medical attention immediately");
                for reason in reasons {
                    println!("      - {}", reason);
                }
            }
            ReliefPlan::Recommendations {
                description,
                techniques,
                warning,
                ..
            } => {
                println!("    Assessment:  {}", description);
                for technique in techniques {
                    let guide = technique.guide();
                    println!("    Technique:   {} ({})", guide.name, guide.duration);
                    if let Some(caution) = guide.warning {
                        println!("                 caution: {}", caution);
                    }
                }
                if warning {
                    println!("    WARNING:     high pain level; alert a nurse if it does not ease");
                }
            }
        }
        println!();
    }

    // ── Follow-up readings ────────────────────────────────────────────────────

    if let Some((name, report)) = patients.first() {
        let mut log = ProgressLog::new(PainLevel::new(report.level)?);
        let start = FixedClock::on(clinic_date()).now() + Duration::hours(8);

        println!("  Follow-up for {} (baseline {})", name, log.baseline());
        for (minutes, level) in follow_up_readings() {
            let entry = log.record(level, start + Duration::minutes(minutes))?;
            println!(
                "    +{:>3} min: {} (improvement {:+})",
                minutes, entry.current, entry.improvement
            );
        }
        if let Some(best) = log.best_improvement() {
            println!("    Best improvement: {} point(s)", best);
        }
        println!();
    }

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
