//! HealthVerify clinic front desk: demo CLI
//!
//! Runs the reference clinic walk-throughs, or answers one-off questions
//! against the same components.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- intake
//!   cargo run -p demo -- validate-id 8001015009085
//!   cargo run -p demo -- eligibility --class legal_immigrant --service chronic_medication
//!   cargo run -p demo -- --json estimate --class citizen emergency_care specialist_consultation
//!   cargo run -p demo -- triage --level 5 --location back --symptom stiffness
//!   cargo run -p demo -- --rules my-rules.toml cost-estimate

use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use healthverify_contracts::{eligibility::Classification, identity::IdentityRecord};
use healthverify_core::traits::{Clock, EligibilityPolicy, IdentityValidator, SystemClock};
use healthverify_eligibility::EligibilityEngine;
use healthverify_identity::SaIdValidator;
use healthverify_ref_clinic::scenarios::{self, cost_estimate, intake, pain_relief};
use healthverify_relief::{assess, PainAssessment, ReliefPlan};

type CliResult = Result<(), Box<dyn Error>>;

// ── CLI definition ────────────────────────────────────────────────────────────

/// HealthVerify: identity validation and eligibility for public clinics.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "HealthVerify clinic front-desk demo",
    long_about = "Runs HealthVerify reference scenarios (intake, cost estimation, pain triage)\n\
                  or answers single identity, eligibility and triage queries."
)]
struct Cli {
    /// Eligibility rule file to use instead of the built-in rules.
    #[arg(long, global = true, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Print query results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: morning intake queue through the intake desk.
    Intake,
    /// Scenario 2: service bundles priced for every citizenship class.
    CostEstimate,
    /// Scenario 3: waiting-room pain triage and progress tracking.
    PainRelief,
    /// Validate a South African ID number and classify its holder.
    ValidateId {
        id: String,
        /// Evaluate as of this date (YYYY-MM-DD) instead of today.
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Look up one service for one citizenship class.
    Eligibility {
        #[arg(long)]
        class: String,
        #[arg(long)]
        service: String,
    },
    /// Price a list of services for a citizenship class.
    Estimate {
        #[arg(long)]
        class: String,
        #[arg(required = true)]
        services: Vec<String>,
    },
    /// Triage a pain report.
    Triage {
        /// Pain level, 1-10.
        #[arg(long, allow_negative_numbers = true)]
        level: i64,
        #[arg(long, default_value = "")]
        pain_type: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Repeat for each symptom.
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

/// Rules are loaded only by the subcommands that price or look up services.
fn run(cli: Cli) -> CliResult {
    let rules = cli.rules.as_ref();

    match cli.command {
        Command::RunAll => {
            let engine = load_rules(rules)?;
            print_banner();
            scenarios::run_all(engine)?;
            println!("All scenarios completed successfully.");
        }
        Command::Intake => {
            let engine = load_rules(rules)?;
            print_banner();
            intake::run_with_rules(engine)?;
        }
        Command::CostEstimate => {
            let engine = load_rules(rules)?;
            print_banner();
            cost_estimate::run_with_rules(&engine)?;
        }
        Command::PainRelief => {
            print_banner();
            pain_relief::run_scenario()?;
        }
        Command::ValidateId { id, as_of } => validate_id(&id, as_of, cli.json)?,
        Command::Eligibility { class, service } => {
            let result = load_rules(rules)?.service_eligibility(&class, &service);
            if cli.json {
                print_json(&result)?;
            } else {
                let fee = result
                    .fee_percentage
                    .map(|p| format!("{}%", p))
                    .unwrap_or_else(|| "n/a".to_string());
                println!("{} for {}:", service, class);
                println!("  eligible:      {}", result.eligible);
                println!("  payment tier:  {}", result.payment_tier);
                println!("  patient pays:  {}", fee);
            }
        }
        Command::Estimate { class, services } => {
            let estimate = load_rules(rules)?.estimate_cost(&services, &class);
            if cli.json {
                print_json(&estimate)?;
            } else {
                for line in &estimate.breakdown {
                    println!(
                        "  {:<28} {:>10} → {:>10} [{}]",
                        line.service, line.base_cost, line.patient_cost, line.coverage_tier
                    );
                }
                println!("  Total: {} {}", estimate.currency, estimate.total_cost);
            }
        }
        Command::Triage {
            level,
            pain_type,
            location,
            symptoms,
        } => {
            let plan = assess(&PainAssessment {
                level,
                pain_type,
                location,
                symptoms,
            })?;
            if cli.json {
                print_json(&plan)?;
            } else {
                print_plan(&plan);
            }
        }
    }

    Ok(())
}

// ── Queries ───────────────────────────────────────────────────────────────────

fn load_rules(path: Option<&PathBuf>) -> Result<EligibilityEngine, Box<dyn Error>> {
    let engine = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading eligibility rules");
            EligibilityEngine::from_file(path)?
        }
        None => EligibilityEngine::builtin()?,
    };
    Ok(engine)
}

#[derive(Serialize)]
struct IdReport {
    identity: IdentityRecord,
    classification: Classification,
}

fn validate_id(id: &str, as_of: Option<NaiveDate>, json: bool) -> CliResult {
    let validator = SaIdValidator;
    let today = as_of.unwrap_or_else(|| SystemClock.today());
    let identity = validator.validate(id, today)?;
    let classification = validator.classify(Some(&identity));

    if json {
        return print_json(&IdReport {
            identity,
            classification,
        });
    }

    println!("  Birth date:   {} (age {})", identity.birth_date, identity.age);
    println!("  Gender:       {}", identity.gender);
    println!("  Citizenship:  {}", identity.citizenship);
    println!(
        "  Checksum:     {}",
        if identity.checksum_valid { "valid" } else { "MISMATCH" }
    );
    println!(
        "  Category:     {} ({})",
        classification.category.display_name(),
        classification.eligibility.description()
    );
    Ok(())
}

fn print_plan(plan: &ReliefPlan) {
    match plan {
        ReliefPlan::Emergency { level, reasons } => {
            println!("EMERGENCY ({}): seek medical attention immediately", level);
            for reason in reasons {
                println!("  - {}", reason);
            }
        }
        ReliefPlan::Recommendations {
            level,
            description,
            techniques,
            warning,
        } => {
            println!("{}: {}", level, description);
            for technique in techniques {
                let guide = technique.guide();
                println!();
                println!("{} ({})", guide.name, guide.duration);
                println!("  {}", guide.description);
                for (n, step) in guide.steps.iter().enumerate() {
                    println!("  {}. {}", n + 1, step);
                }
                if let Some(caution) = guide.warning {
                    println!("  Caution: {}", caution);
                }
            }
            if *warning {
                println!();
                println!("Pain this high should be reported to a nurse if it does not ease.");
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("HealthVerify Clinic Front Desk");
    println!("Reference Demo");
    println!("==============================");
    println!();
    println!("Intake pipeline per patient:");
    println!("  [1] Document check: SA ID parsed and checksummed; other documents format-checked");
    println!("  [2] Checksum mismatches flagged for the clerk");
    println!("  [3] Patient classified: citizen / legal immigrant / undocumented");
    println!("  [4] Requested services priced against the eligibility rules");
    println!("  [5] Pseudonymised assessment record appended to the SHA-256 audit chain");
    println!();
}
