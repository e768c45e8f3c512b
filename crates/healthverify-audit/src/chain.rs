//! The trail's hash chain.
//!
//! Every `AssessmentRecord` is sealed into a `ChainedRecord` whose digest
//! commits to the trail, its position, its predecessor's digest and the
//! record itself.  The assessment id, the time the record was taken and the
//! patient reference are committed as explicit fields ahead of the record
//! body, so a verifier can see exactly what was pinned.
//!
//! Digest preimage, in order:
//!
//! ```text
//! DOMAIN_TAG
//! u32 BE length ‖ trail id (UTF-8)
//! u64 BE position
//! previous digest (64 ASCII hex chars, GENESIS for position 0)
//! assessment id (16 raw UUID bytes)
//! i64 BE recorded-at, microseconds since the Unix epoch
//! u32 BE length ‖ patient reference (UTF-8)
//! u32 BE length ‖ compact JSON of the record
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use healthverify_contracts::assessment::AssessmentRecord;

/// Separates audit digests from any other SHA-256 use of the same bytes.
pub const DOMAIN_TAG: &[u8] = b"healthverify.audit.v1\0";

/// The `previous` digest of the record at position 0.
pub const GENESIS: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// One assessment record sealed into a trail.
///
/// Editing the record, moving it to another position or another trail, or
/// relinking it to a different predecessor changes its digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainedRecord {
    /// Zero-based position in the trail.
    pub position: u64,

    pub record: AssessmentRecord,

    /// Digest of the record at `position - 1`, or `GENESIS`.
    pub previous: String,

    /// Hex SHA-256 of the preimage described in the module docs.
    pub digest: String,
}

impl ChainedRecord {
    /// Seal `record` at `position` in `trail_id`, after `previous`.
    pub fn seal(
        trail_id: &str,
        position: u64,
        previous: impl Into<String>,
        record: AssessmentRecord,
    ) -> Result<Self, serde_json::Error> {
        let previous = previous.into();
        let digest = digest(trail_id, position, &previous, &record)?;
        Ok(Self {
            position,
            record,
            previous,
            digest,
        })
    }
}

/// Compute the digest of `record` at `position` in `trail_id`.
pub fn digest(
    trail_id: &str,
    position: u64,
    previous: &str,
    record: &AssessmentRecord,
) -> Result<String, serde_json::Error> {
    let body = serde_json::to_vec(record)?;

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    update_framed(&mut hasher, trail_id.as_bytes());
    hasher.update(position.to_be_bytes());
    hasher.update(previous.as_bytes());
    hasher.update(record.assessment_id.0.as_bytes());
    hasher.update(record.timestamp.timestamp_micros().to_be_bytes());
    update_framed(&mut hasher, record.patient_ref.as_bytes());
    update_framed(&mut hasher, &body);

    Ok(hex::encode(hasher.finalize()))
}

fn update_framed(hasher: &mut Sha256, bytes: &[u8]) {
    // Fields longer than u32::MAX are not representable in a record.
    let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
    hasher.update(bytes);
}

/// Why a sequence of chained records failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainBreak {
    /// Positions must run 0, 1, 2, ... with no gaps, repeats or reordering.
    #[error("expected position {expected}, found {found}")]
    OutOfSequence { expected: u64, found: u64 },

    #[error("record at position {position} does not link to its predecessor")]
    BrokenLink { position: u64 },

    #[error("record at position {position} does not match its digest")]
    DigestMismatch { position: u64 },

    /// The export's head is not the digest of its last record.
    #[error("export head does not match the last record")]
    HeadMismatch,
}

/// Check `records` as the complete trail `trail_id`.
///
/// Reports the first break found.  An empty trail is intact.
pub fn verify(trail_id: &str, records: &[ChainedRecord]) -> Result<(), ChainBreak> {
    let mut previous: &str = GENESIS;

    for (expected, link) in (0u64..).zip(records) {
        if link.position != expected {
            return Err(ChainBreak::OutOfSequence {
                expected,
                found: link.position,
            });
        }
        if link.previous != previous {
            return Err(ChainBreak::BrokenLink {
                position: link.position,
            });
        }
        match digest(trail_id, link.position, &link.previous, &link.record) {
            Ok(recomputed) if recomputed == link.digest => {}
            _ => {
                return Err(ChainBreak::DigestMismatch {
                    position: link.position,
                })
            }
        }
        previous = &link.digest;
    }

    Ok(())
}

/// A snapshot of a whole trail, as handed to an auditor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailExport {
    pub trail_id: String,

    /// Every record in chain order.
    pub records: Vec<ChainedRecord>,

    /// Wall-clock time (UTC) of the export.
    pub exported_at: DateTime<Utc>,

    /// Digest of the last record; `None` for an empty trail.
    pub head: Option<String>,
}

impl TrailExport {
    /// Verify the records against this export's trail id and head.
    pub fn verify(&self) -> Result<(), ChainBreak> {
        verify(&self.trail_id, &self.records)?;
        let last = self.records.last().map(|link| link.digest.as_str());
        if last != self.head.as_deref() {
            return Err(ChainBreak::HeadMismatch);
        }
        Ok(())
    }
}
