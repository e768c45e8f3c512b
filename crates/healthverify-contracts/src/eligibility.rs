//! Eligibility and cost-estimation types.
//!
//! The eligibility engine consumes a citizenship class and service names and
//! produces `ServiceEligibility` and `CostEstimate` values.  Classes and
//! services are plain strings so rule files can introduce new ones without a
//! code change; `PatientCategory` names the classes the built-in rule set
//! ships with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Cost-sharing category assigned to one service for one citizenship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTier {
    /// Free service.
    None,
    /// Reduced fee.
    Partial,
    /// Full fee.
    Full,
    /// Not covered by any rule; pending manual decision.
    Review,
}

impl PaymentTier {
    /// The fee percentage the patient pays, or `None` for `Review`.
    pub fn fee_percentage(&self) -> Option<u8> {
        match self {
            PaymentTier::None => Some(0),
            PaymentTier::Partial => Some(50),
            PaymentTier::Full => Some(100),
            PaymentTier::Review => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentTier::None => "none",
            PaymentTier::Partial => "partial",
            PaymentTier::Full => "full",
            PaymentTier::Review => "review",
        }
    }
}

impl fmt::Display for PaymentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of looking up one service for one citizenship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEligibility {
    /// False only for the `Review` tier.
    pub eligible: bool,
    pub payment_tier: PaymentTier,
    /// 0, 50 or 100; `None` when the service needs review.
    pub fee_percentage: Option<u8>,
}

impl ServiceEligibility {
    pub fn for_tier(payment_tier: PaymentTier) -> Self {
        Self {
            eligible: payment_tier != PaymentTier::Review,
            payment_tier,
            fee_percentage: payment_tier.fee_percentage(),
        }
    }
}

/// One priced line of a cost estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCostLine {
    pub service: String,
    /// List price from the price table, or the default price.
    pub base_cost: Money,
    /// Portion of `base_cost` the patient is expected to pay.
    pub patient_cost: Money,
    pub coverage_tier: PaymentTier,
}

/// Aggregate estimate across an ordered list of requested services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Sum of every line's `patient_cost`.
    pub total_cost: Money,
    /// One line per requested service, in request order (duplicates kept).
    pub breakdown: Vec<ServiceCostLine>,
    /// Fixed currency tag from configuration, e.g. "ZAR".
    pub currency: String,
}

/// Patient category used as the citizenship class for eligibility lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientCategory {
    Citizen,
    LegalImmigrant,
    Undocumented,
}

impl PatientCategory {
    /// The rule-set key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientCategory::Citizen => "citizen",
            PatientCategory::LegalImmigrant => "legal_immigrant",
            PatientCategory::Undocumented => "undocumented",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PatientCategory::Citizen => "South African Citizen",
            PatientCategory::LegalImmigrant => "Legal Immigrant",
            PatientCategory::Undocumented => "Undocumented Person",
        }
    }
}

impl fmt::Display for PatientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline eligibility shown to the intake clerk for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    FreeCare,
    PartialPayment,
    FullPayment,
    ManualReview,
}

impl EligibilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityStatus::FreeCare => "free_care",
            EligibilityStatus::PartialPayment => "partial_payment",
            EligibilityStatus::FullPayment => "full_payment",
            EligibilityStatus::ManualReview => "manual_review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EligibilityStatus::FreeCare => "Eligible for free public healthcare services",
            EligibilityStatus::PartialPayment => "Partial payment required for some services",
            EligibilityStatus::FullPayment => "Full payment required",
            EligibilityStatus::ManualReview => "Manual review required before services are priced",
        }
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient's category together with the headline status it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: PatientCategory,
    pub eligibility: EligibilityStatus,
}
