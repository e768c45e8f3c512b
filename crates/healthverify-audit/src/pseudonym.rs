//! Patient reference pseudonymisation.
//!
//! Audit records never hold a document number.  They hold the hex SHA-256 of
//! the number concatenated with a deployment salt, so the same patient maps
//! to the same reference within a deployment but references cannot be
//! joined across deployments with different salts.

use sha2::{Digest, Sha256};

/// Environment variable holding the deployment salt.
pub const SALT_ENV_VAR: &str = "HEALTHVERIFY_ID_SALT";

/// Salt used when none is configured.  Only suitable for development.
pub const DEVELOPMENT_SALT: &str = "healthverify-dev-salt";

/// Salted SHA-256 hasher for document numbers.
#[derive(Clone)]
pub struct PatientRefHasher {
    salt: String,
}

impl PatientRefHasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Use `HEALTHVERIFY_ID_SALT` if set and non-empty, else the development
    /// salt.
    pub fn from_env() -> Self {
        match std::env::var(SALT_ENV_VAR) {
            Ok(salt) if !salt.is_empty() => Self::new(salt),
            _ => {
                tracing::warn!(
                    env_var = SALT_ENV_VAR,
                    "no patient reference salt configured; using development salt"
                );
                Self::new(DEVELOPMENT_SALT)
            }
        }
    }

    /// Lowercase hex SHA-256 of `document_number ‖ salt`.
    pub fn patient_ref(&self, document_number: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(document_number.as_bytes());
        hasher.update(self.salt.as_bytes());
        hex::encode(hasher.finalize())
    }
}

// The salt is a secret; keep it out of debug output.
impl std::fmt::Debug for PatientRefHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatientRefHasher").finish_non_exhaustive()
    }
}
