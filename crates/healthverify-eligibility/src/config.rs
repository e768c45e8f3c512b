//! Eligibility rule file schema.
//!
//! An `EligibilityConfig` is deserialized from TOML and holds the price
//! table and one `ClassRules` per citizenship class.
//!
//! Example:
//! ```toml
//! currency = "ZAR"
//! default_price = 500
//!
//! [prices]
//! emergency_care = 1500
//!
//! [classes.citizen]
//! free_services = ["emergency_care"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The rule file shipped with the crate.
pub const BUILTIN_RULES: &str = include_str!("../policies/eligibility.toml");

fn default_currency() -> String {
    "ZAR".to_string()
}

/// The top-level structure deserialized from a TOML rule file.
///
/// Unknown keys are rejected, so a misspelled table is an error rather than
/// a silently empty rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EligibilityConfig {
    /// Currency tag carried on every estimate.  Defaults to "ZAR".
    #[serde(default = "default_currency")]
    pub currency: String,

    /// List price for services missing from `prices`, in major units.
    pub default_price: f64,

    /// List price per service, in major units.
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,

    /// Rules per citizenship class.  A class missing here has no rules and
    /// every service resolves to review.
    #[serde(default)]
    pub classes: BTreeMap<String, ClassRules>,
}

/// The service sets for one citizenship class.
///
/// The three sets must be pairwise disjoint; the engine refuses to load a
/// file where a service appears in more than one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassRules {
    /// Services provided free of charge.
    #[serde(default)]
    pub free_services: Vec<String>,

    /// Services charged at the reduced (50%) fee.
    #[serde(default)]
    pub reduced_fee_services: Vec<String>,

    /// Services charged at the full fee.
    #[serde(default)]
    pub full_fee_services: Vec<String>,
}
