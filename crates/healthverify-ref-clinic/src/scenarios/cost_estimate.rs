//! Scenario 2: Cost estimates per patient category
//!
//! Prices the same service bundles for every configured citizenship class so
//! the effect of the free, reduced and full tiers is visible side by side.

use healthverify_contracts::{error::HealthVerifyResult, money::Money};
use healthverify_core::traits::EligibilityPolicy;
use healthverify_eligibility::EligibilityEngine;

use crate::mock_data::service_bundles;

/// Run Scenario 2 with the built-in eligibility rules.
pub fn run_scenario() -> HealthVerifyResult<()> {
    run_with_rules(&EligibilityEngine::builtin()?)
}

/// Run Scenario 2 with a caller-supplied rule set.
pub fn run_with_rules(engine: &EligibilityEngine) -> HealthVerifyResult<()> {
    println!("=== Scenario 2: Cost estimates per patient category ===");
    println!();

    for (label, services) in service_bundles() {
        println!("  Bundle: {} ({})", label, services.join(", "));

        for class in engine.classes() {
            let estimate = engine.estimate_cost(&services, class);
            let list_price: Money = estimate.breakdown.iter().map(|l| l.base_cost).sum();
            let tiers: Vec<&str> = estimate
                .breakdown
                .iter()
                .map(|l| l.coverage_tier.as_str())
                .collect();

            println!(
                "    {:<16} {} {:>10} of {:>10}  [{}]",
                class,
                estimate.currency,
                estimate.total_cost,
                list_price,
                tiers.join(", ")
            );
        }
        println!();
    }

    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
