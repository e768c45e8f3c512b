//! In-memory implementation of `AuditWriter`.
//!
//! Sealed records live in a `Vec` behind a `Mutex`, so the writer can be
//! shared with an `IntakeDesk` (through an `Arc`) and still be inspected by
//! the caller.  `export_log()` hands out a `TrailExport` snapshot and
//! `verify_integrity()` rechecks the chain in place.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use healthverify_contracts::{
    assessment::AssessmentRecord,
    error::{HealthVerifyError, HealthVerifyResult},
};
use healthverify_core::traits::AuditWriter;

use crate::{
    chain::{self, ChainBreak, ChainedRecord, TrailExport, GENESIS},
    pseudonym::PatientRefHasher,
    report::{summarize, TrailSummary},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct InMemoryState {
    /// Sealed records in append order; a record's position is its index.
    pub(crate) records: Vec<ChainedRecord>,

    pub(crate) finalized: bool,
}

impl InMemoryState {
    fn head(&self) -> Option<&str> {
        self.records.last().map(|link| link.digest.as_str())
    }
}

// ── Public writer ─────────────────────────────────────────────────────────────

/// An append-only audit writer backed by a SHA-256 hash chain.
pub struct InMemoryAuditWriter {
    trail_id: String,
    hasher: PatientRefHasher,
    pub(crate) state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryAuditWriter {
    /// Create a writer for `trail_id` that pseudonymises with `salt`.
    pub fn new(trail_id: impl Into<String>, salt: impl Into<String>) -> Self {
        Self::with_hasher(trail_id, PatientRefHasher::new(salt))
    }

    /// Create a writer whose salt comes from `HEALTHVERIFY_ID_SALT`.
    pub fn from_env(trail_id: impl Into<String>) -> Self {
        Self::with_hasher(trail_id, PatientRefHasher::from_env())
    }

    fn with_hasher(trail_id: impl Into<String>, hasher: PatientRefHasher) -> Self {
        let state = InMemoryState {
            records: Vec::new(),
            finalized: false,
        };
        Self {
            trail_id: trail_id.into(),
            hasher,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn trail_id(&self) -> &str {
        &self.trail_id
    }

    /// Snapshot every record written so far.
    pub fn export_log(&self) -> HealthVerifyResult<TrailExport> {
        let state = self.lock()?;
        Ok(TrailExport {
            trail_id: self.trail_id.clone(),
            records: state.records.clone(),
            exported_at: Utc::now(),
            head: state.head().map(str::to_string),
        })
    }

    /// Recheck positions, links and digests of the whole in-memory chain.
    pub fn verify_integrity(&self) -> HealthVerifyResult<bool> {
        Ok(self.first_break()?.is_none())
    }

    /// The first place the in-memory chain fails verification, if any.
    pub fn first_break(&self) -> HealthVerifyResult<Option<ChainBreak>> {
        let state = self.lock()?;
        Ok(chain::verify(&self.trail_id, &state.records).err())
    }

    /// Aggregate statistics over every record in the trail.
    pub fn summary(&self) -> HealthVerifyResult<TrailSummary> {
        let state = self.lock()?;
        Ok(summarize(state.records.iter().map(|link| &link.record)))
    }

    pub fn len(&self) -> HealthVerifyResult<usize> {
        Ok(self.lock()?.records.len())
    }

    pub fn is_empty(&self) -> HealthVerifyResult<bool> {
        Ok(self.lock()?.records.is_empty())
    }

    fn lock(&self) -> HealthVerifyResult<MutexGuard<'_, InMemoryState>> {
        self.state.lock().map_err(|e| HealthVerifyError::AuditWriteFailed {
            reason: format!("audit state lock poisoned: {}", e),
        })
    }
}

// ── AuditWriter impl ──────────────────────────────────────────────────────────

impl AuditWriter for InMemoryAuditWriter {
    fn patient_ref(&self, document_number: &str) -> String {
        self.hasher.patient_ref(document_number)
    }

    /// Append one record to the chain.
    ///
    /// Fails if the trail has already been finalized.
    fn write(&self, record: &AssessmentRecord) -> HealthVerifyResult<()> {
        let mut state = self.lock()?;
        if state.finalized {
            return Err(HealthVerifyError::AuditWriteFailed {
                reason: format!("audit trail '{}' is already finalized", self.trail_id),
            });
        }

        let position = state.records.len() as u64;
        let previous = state.head().unwrap_or(GENESIS).to_string();
        let link = ChainedRecord::seal(&self.trail_id, position, previous, record.clone())
            .map_err(|e| HealthVerifyError::AuditWriteFailed {
                reason: format!("assessment record could not be encoded: {}", e),
            })?;

        debug!(
            trail_id = %self.trail_id,
            position,
            assessment_id = %record.assessment_id.0,
            "assessment record sealed"
        );

        state.records.push(link);

        Ok(())
    }

    /// Seal the trail.  Later writes fail; finalizing twice is a no-op.
    fn finalize(&self) -> HealthVerifyResult<()> {
        let mut state = self.lock()?;
        if state.finalized {
            return Ok(());
        }
        state.finalized = true;

        info!(
            trail_id = %self.trail_id,
            records = state.records.len(),
            head = state.head().unwrap_or(GENESIS),
            "audit trail finalized"
        );

        Ok(())
    }
}
