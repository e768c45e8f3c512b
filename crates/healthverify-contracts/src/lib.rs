//! # healthverify-contracts
//!
//! Shared types, schemas, and contracts for the HealthVerify eligibility
//! system.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: only data definitions, error types and small helpers.

pub mod assessment;
pub mod eligibility;
pub mod error;
pub mod identity;
pub mod intake;
pub mod money;

#[cfg(test)]
mod tests {
    use super::*;
    use eligibility::{PaymentTier, ServiceEligibility};
    use error::{HealthVerifyError, ValidationError};
    use identity::DocumentKind;
    use intake::AssessmentId;
    use money::Money;

    // ── Money ────────────────────────────────────────────────────────────────

    #[test]
    fn money_percent_rounds_half_up() {
        assert_eq!(Money::from_major(800).percent(50), Money::from_major(400));
        assert_eq!(Money::from_major(1500).percent(0), Money::ZERO);
        assert_eq!(Money::from_major(1500).percent(100), Money::from_major(1500));
        // 50% of 0.01 is half a cent and rounds up.
        assert_eq!(Money::from_minor(1).percent(50), Money::from_minor(1));
        assert_eq!(Money::from_minor(3).percent(50), Money::from_minor(2));
    }

    #[test]
    fn money_from_decimal_rejects_negative_and_non_finite() {
        assert_eq!(Money::from_decimal(450.0), Some(Money::from_major(450)));
        assert_eq!(Money::from_decimal(12.345), Some(Money::from_minor(1235)));
        assert_eq!(Money::from_decimal(-1.0), None);
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
    }

    #[test]
    fn money_from_decimal_caps_prices() {
        assert_eq!(Money::from_decimal(1e17), None);
        assert_eq!(Money::from_decimal(f64::MAX), None);
        assert_eq!(Money::from_decimal(1e14), Some(Money::from_major(100_000_000_000_000)));
        assert!(Money::from_decimal(9.2e14).is_some());
    }

    #[test]
    fn money_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max + Money::from_minor(1), max);
        assert_eq!(Money::from_minor(i64::MIN) + Money::from_minor(-1), Money::from_minor(i64::MIN));
        assert_eq!(Money::from_major(i64::MAX), max);

        let total: Money = std::iter::repeat(Money::MAX_PRICE).take(150).sum();
        assert_eq!(total, max);

        // Exact for any configured price.
        assert_eq!(Money::MAX_PRICE.percent(100), Money::MAX_PRICE);
        assert_eq!(max.percent(100), max);
        assert_eq!(max.percent(200), max);
        assert_eq!(Money::from_minor(i64::MIN).percent(200), Money::from_minor(i64::MIN));
    }

    #[test]
    fn money_sums_and_displays() {
        let total: Money = [Money::from_major(300), Money::from_minor(4550)].into_iter().sum();
        assert_eq!(total.minor(), 34550);
        assert_eq!(total.to_string(), "345.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_minor(-205).to_string(), "-2.05");
    }

    #[test]
    fn money_serializes_as_minor_units() {
        let json = serde_json::to_string(&Money::from_major(15)).unwrap();
        assert_eq!(json, "1500");
    }

    // ── PaymentTier / ServiceEligibility ─────────────────────────────────────

    #[test]
    fn service_eligibility_for_each_tier() {
        let free = ServiceEligibility::for_tier(PaymentTier::None);
        assert!(free.eligible);
        assert_eq!(free.fee_percentage, Some(0));

        let reduced = ServiceEligibility::for_tier(PaymentTier::Partial);
        assert!(reduced.eligible);
        assert_eq!(reduced.fee_percentage, Some(50));

        let full = ServiceEligibility::for_tier(PaymentTier::Full);
        assert!(full.eligible);
        assert_eq!(full.fee_percentage, Some(100));

        let review = ServiceEligibility::for_tier(PaymentTier::Review);
        assert!(!review.eligible);
        assert_eq!(review.fee_percentage, None);
    }

    #[test]
    fn payment_tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&PaymentTier::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&PaymentTier::Review).unwrap(), "\"review\"");
    }

    // ── DocumentKind ─────────────────────────────────────────────────────────

    #[test]
    fn document_kind_parses_form_labels() {
        assert_eq!(DocumentKind::from_label("South African ID"), Some(DocumentKind::SouthAfricanId));
        assert_eq!(DocumentKind::from_label("sa id"), Some(DocumentKind::SouthAfricanId));
        assert_eq!(DocumentKind::from_label("south_african_id"), Some(DocumentKind::SouthAfricanId));
        assert_eq!(DocumentKind::from_label("  Passport "), Some(DocumentKind::Passport));
        assert_eq!(DocumentKind::from_label("Asylum Permit"), Some(DocumentKind::AsylumPermit));
        assert_eq!(DocumentKind::from_label("work_permit"), Some(DocumentKind::WorkPermit));
        assert_eq!(DocumentKind::from_label("drivers licence"), None);
    }

    // ── AssessmentId ─────────────────────────────────────────────────────────

    #[test]
    fn assessment_id_new_produces_unique_values() {
        let ids: Vec<AssessmentId> = (0..100).map(|_| AssessmentId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn error_invalid_format_display() {
        let err = ValidationError::InvalidFormat {
            reason: "expected 13 digits, got 12 characters".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid identity number format"));
        assert!(msg.contains("13 digits"));
    }

    #[test]
    fn error_validation_is_transparent_when_wrapped() {
        let inner = ValidationError::InvalidBirthDate {
            yymmdd: "800230".to_string(),
        };
        let err: HealthVerifyError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.to_string().contains("800230"));
    }

    #[test]
    fn error_config_error_display() {
        let err = HealthVerifyError::ConfigError {
            reason: "service listed twice".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("service listed twice"));
    }

    #[test]
    fn error_audit_write_failed_display() {
        let err = HealthVerifyError::AuditWriteFailed {
            reason: "lock poisoned".to_string(),
        };
        assert!(err.to_string().contains("audit write failed"));
    }

    #[test]
    fn error_invalid_pain_level_display() {
        let err = HealthVerifyError::InvalidPainLevel { level: 11 };
        assert!(err.to_string().contains("11"));
    }
}
