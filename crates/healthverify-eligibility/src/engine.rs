//! Rule-based eligibility and cost-estimation engine.
//!
//! `EligibilityEngine` is built from an `EligibilityConfig` and implements
//! the `EligibilityPolicy` trait from healthverify-core.
//!
//! Lookup algorithm for `(class, service)`:
//!
//! 1. Find the class.  An unknown class has no rules.
//! 2. Free set → `none` (0%); reduced set → `partial` (50%); full set →
//!    `full` (100%).
//! 3. Otherwise → `review`, not eligible, no fee percentage.
//!
//! Because the three sets are disjoint (checked at construction), each class
//! is stored as a single service → tier map and the order of step 2 cannot
//! change a result.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use healthverify_contracts::{
    eligibility::{CostEstimate, PaymentTier, ServiceCostLine, ServiceEligibility},
    error::{HealthVerifyError, HealthVerifyResult},
    money::Money,
};
use healthverify_core::traits::EligibilityPolicy;

use crate::config::{EligibilityConfig, BUILTIN_RULES};

/// An `EligibilityPolicy` backed by a static rule set and price table.
///
/// Construct via `builtin`, `from_toml_str`, `from_file` or `new`, then use
/// it through the `EligibilityPolicy` trait.
///
/// ```rust,ignore
/// use healthverify_eligibility::EligibilityEngine;
///
/// let engine = EligibilityEngine::from_file(Path::new("rules/eligibility.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    currency: String,
    default_price: Money,
    prices: HashMap<String, Money>,
    classes: HashMap<String, HashMap<String, PaymentTier>>,
}

impl EligibilityEngine {
    /// Build an engine from a parsed configuration.
    ///
    /// Returns `HealthVerifyError::ConfigError` if the currency tag is empty,
    /// a price is negative or not finite, or a service appears more than once
    /// within a class.
    pub fn new(config: EligibilityConfig) -> HealthVerifyResult<Self> {
        let currency = config.currency.trim().to_string();
        if currency.is_empty() {
            return Err(config_error("currency tag must not be empty".to_string()));
        }

        let default_price = parse_price("default_price", config.default_price)?;

        let prices = config
            .prices
            .into_iter()
            .map(|(service, price)| {
                let money = parse_price(&service, price)?;
                Ok((service, money))
            })
            .collect::<HealthVerifyResult<HashMap<_, _>>>()?;

        let mut classes = HashMap::with_capacity(config.classes.len());
        for (class, rules) in config.classes {
            let mut tiers: HashMap<String, PaymentTier> = HashMap::new();
            let sets = [
                (PaymentTier::None, &rules.free_services),
                (PaymentTier::Partial, &rules.reduced_fee_services),
                (PaymentTier::Full, &rules.full_fee_services),
            ];

            for (tier, services) in sets {
                for service in services {
                    if let Some(existing) = tiers.insert(service.clone(), tier) {
                        if existing == tier {
                            return Err(config_error(format!(
                                "service '{}' is listed twice in '{}' for class '{}'",
                                service,
                                tier_set_name(tier),
                                class
                            )));
                        }
                        return Err(config_error(format!(
                            "service '{}' is listed under both '{}' and '{}' for class '{}'",
                            service,
                            tier_set_name(existing),
                            tier_set_name(tier),
                            class
                        )));
                    }
                }
            }

            classes.insert(class, tiers);
        }

        Ok(Self {
            currency,
            default_price,
            prices,
            classes,
        })
    }

    /// Parse `s` as TOML and build an engine.
    ///
    /// Returns `HealthVerifyError::ConfigError` if the TOML is malformed or
    /// does not match the `EligibilityConfig` schema.
    pub fn from_toml_str(s: &str) -> HealthVerifyResult<Self> {
        let config: EligibilityConfig = toml::from_str(s)
            .map_err(|e| config_error(format!("failed to parse eligibility TOML: {}", e)))?;
        Self::new(config)
    }

    /// Read the file at `path` and parse it as an eligibility rule file.
    pub fn from_file(path: &Path) -> HealthVerifyResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            config_error(format!(
                "failed to read eligibility file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// The rule set shipped with this crate.
    pub fn builtin() -> HealthVerifyResult<Self> {
        Self::from_toml_str(BUILTIN_RULES)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// List price for `service`, falling back to the default price.
    pub fn base_cost(&self, service: &str) -> Money {
        match self.prices.get(service) {
            Some(price) => *price,
            None => {
                debug!(service = %service, default_price = %self.default_price, "no list price; using default");
                self.default_price
            }
        }
    }

    /// Names of the configured citizenship classes, sorted.
    pub fn classes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn tier_for(&self, citizenship_class: &str, service: &str) -> PaymentTier {
        let Some(tiers) = self.classes.get(citizenship_class) else {
            warn!(
                citizenship_class = %citizenship_class,
                "unknown citizenship class; every service needs review"
            );
            return PaymentTier::Review;
        };

        tiers.get(service).copied().unwrap_or(PaymentTier::Review)
    }
}

impl EligibilityPolicy for EligibilityEngine {
    fn service_eligibility(&self, citizenship_class: &str, service: &str) -> ServiceEligibility {
        let tier = self.tier_for(citizenship_class, service);

        debug!(
            citizenship_class = %citizenship_class,
            service = %service,
            tier = %tier,
            "service eligibility resolved"
        );

        ServiceEligibility::for_tier(tier)
    }

    /// Price each service in order.
    ///
    /// A `review` service is charged its full base cost until someone
    /// decides otherwise.
    fn estimate_cost(&self, services: &[String], citizenship_class: &str) -> CostEstimate {
        let breakdown: Vec<ServiceCostLine> = services
            .iter()
            .map(|service| {
                let base_cost = self.base_cost(service);
                let eligibility = self.service_eligibility(citizenship_class, service);
                let patient_cost = match eligibility.fee_percentage {
                    Some(percent) => base_cost.percent(percent),
                    None => base_cost,
                };

                ServiceCostLine {
                    service: service.clone(),
                    base_cost,
                    patient_cost,
                    coverage_tier: eligibility.payment_tier,
                }
            })
            .collect();

        CostEstimate {
            total_cost: breakdown.iter().map(|line| line.patient_cost).sum(),
            breakdown,
            currency: self.currency.clone(),
        }
    }
}

fn parse_price(name: &str, value: f64) -> HealthVerifyResult<Money> {
    Money::from_decimal(value).ok_or_else(|| {
        config_error(format!(
            "price for '{}' must be a finite, non-negative number no larger than {} (got {})",
            name,
            Money::MAX_PRICE,
            value
        ))
    })
}

fn tier_set_name(tier: PaymentTier) -> &'static str {
    match tier {
        PaymentTier::None => "free_services",
        PaymentTier::Partial => "reduced_fee_services",
        PaymentTier::Full => "full_fee_services",
        PaymentTier::Review => "review",
    }
}

fn config_error(reason: String) -> HealthVerifyError {
    HealthVerifyError::ConfigError { reason }
}
