//! Error types for the HealthVerify crates.
//!
//! Identity validation has its own narrow error, `ValidationError`, because
//! callers routinely match on it to decide how to reject an intake.  Every
//! other fallible operation returns `HealthVerifyResult<T>`.

use thiserror::Error;

/// A hard failure while validating an identity number.
///
/// A checksum mismatch is NOT represented here: it is reported as
/// `IdentityRecord::checksum_valid == false` so the caller can apply its own
/// policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input is not exactly 13 ASCII digits.
    #[error("invalid identity number format: {reason}")]
    InvalidFormat { reason: String },

    /// The YYMMDD prefix does not form a real calendar date.
    #[error("invalid birth date '{yymmdd}' in identity number")]
    InvalidBirthDate { yymmdd: String },
}

/// The unified error type for the HealthVerify workspace.
#[derive(Debug, Error)]
pub enum HealthVerifyError {
    /// An identity number failed format or birth-date validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A rule file or other configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The audit writer could not append an assessment record.
    ///
    /// Treated as fatal: an assessment that cannot be audited is not returned.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A pain score outside the 1–10 scale.
    #[error("pain level {level} is outside the 1-10 scale")]
    InvalidPainLevel { level: i64 },
}

/// Convenience alias used throughout the HealthVerify crates.
pub type HealthVerifyResult<T> = Result<T, HealthVerifyError>;
