//! # healthverify-audit
//!
//! Append-only, SHA-256 hash-chained audit trail of intake assessments.
//!
//! ## Overview
//!
//! Every record the intake desk writes is sealed into a `ChainedRecord` that
//! links to its predecessor by digest, so editing, dropping or reordering a
//! stored record is reported by `chain::verify` as a `ChainBreak`.  Records carry a salted patient reference
//! instead of the document number; see [`pseudonym`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use healthverify_audit::InMemoryAuditWriter;
//! use healthverify_core::traits::AuditWriter;
//!
//! let writer = InMemoryAuditWriter::from_env("clinic-front-desk");
//! writer.write(&record)?;
//! writer.finalize()?;
//!
//! assert!(writer.verify_integrity()?);
//! let summary = writer.summary()?;
//! ```

pub mod chain;
pub mod memory;
pub mod pseudonym;
pub mod report;

pub use chain::{ChainBreak, ChainedRecord, TrailExport, GENESIS};
pub use memory::InMemoryAuditWriter;
pub use pseudonym::{PatientRefHasher, DEVELOPMENT_SALT, SALT_ENV_VAR};
pub use report::{summarize, TrailSummary};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use healthverify_contracts::{
        assessment::{AssessmentRecord, RecordOutcome},
        eligibility::{EligibilityStatus, PatientCategory},
        error::HealthVerifyError,
        identity::DocumentKind,
        intake::AssessmentId,
        money::Money,
    };
    use healthverify_core::traits::AuditWriter;

    use super::{
        chain, summarize, ChainBreak, ChainedRecord, InMemoryAuditWriter, PatientRefHasher, GENESIS,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn writer(trail_id: &str) -> InMemoryAuditWriter {
        InMemoryAuditWriter::new(trail_id, "test-salt")
    }

    fn accepted(category: PatientCategory, rands: i64, checksum_valid: bool) -> AssessmentRecord {
        let eligibility = match category {
            PatientCategory::Citizen => EligibilityStatus::FreeCare,
            PatientCategory::LegalImmigrant => EligibilityStatus::PartialPayment,
            PatientCategory::Undocumented => EligibilityStatus::ManualReview,
        };
        AssessmentRecord {
            assessment_id: AssessmentId::new(),
            patient_ref: "ref".to_string(),
            document_kind: DocumentKind::SouthAfricanId,
            checksum_valid: Some(checksum_valid),
            red_flags: if checksum_valid {
                Vec::new()
            } else {
                vec!["identity number checksum mismatch".to_string()]
            },
            outcome: RecordOutcome::Accepted {
                category,
                eligibility,
                estimated_total: Money::from_major(rands),
                currency: "ZAR".to_string(),
            },
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        }
    }

    fn rejected(reason: &str) -> AssessmentRecord {
        AssessmentRecord {
            assessment_id: AssessmentId::new(),
            patient_ref: "ref".to_string(),
            document_kind: DocumentKind::Passport,
            checksum_valid: None,
            red_flags: Vec::new(),
            outcome: RecordOutcome::Rejected {
                reason: reason.to_string(),
            },
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 0).unwrap(),
        }
    }

    fn write_three(writer: &InMemoryAuditWriter) {
        writer.write(&accepted(PatientCategory::Citizen, 0, true)).unwrap();
        writer.write(&accepted(PatientCategory::LegalImmigrant, 375, true)).unwrap();
        writer.write(&rejected("passport number does not match the expected format")).unwrap();
    }

    // ── Chain ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_hash_chain_integrity() {
        let writer = writer("trail-integrity");
        write_three(&writer);
        assert!(writer.verify_integrity().unwrap());
        assert_eq!(writer.len().unwrap(), 3);
    }

    /// Rewriting a stored outcome breaks the chain.
    #[test]
    fn test_tamper_detection() {
        let writer = writer("trail-tamper");
        write_three(&writer);

        {
            let mut state = writer.state.lock().unwrap();
            state.records[1].record.outcome = RecordOutcome::Rejected {
                reason: "edited later".to_string(),
            };
        }

        assert!(!writer.verify_integrity().unwrap());
        assert_eq!(
            writer.first_break().unwrap(),
            Some(ChainBreak::DigestMismatch { position: 1 })
        );
    }

    /// Backdating a record is caught even though nothing else changed.
    #[test]
    fn test_backdated_record_detected() {
        let writer = writer("trail-backdate");
        write_three(&writer);

        {
            let mut state = writer.state.lock().unwrap();
            state.records[2].record.timestamp = Utc.with_ymd_and_hms(2024, 5, 31, 9, 0, 0).unwrap();
        }

        assert_eq!(
            writer.first_break().unwrap(),
            Some(ChainBreak::DigestMismatch { position: 2 })
        );
    }

    #[test]
    fn test_swapped_assessment_id_detected() {
        let writer = writer("trail-swap-id");
        write_three(&writer);

        let mut log = writer.export_log().unwrap();
        log.records[0].record.assessment_id = AssessmentId::new();
        assert_eq!(log.verify(), Err(ChainBreak::DigestMismatch { position: 0 }));
    }

    /// Dropping a record from the middle leaves a gap in the positions.
    #[test]
    fn test_deleted_record_detected() {
        let writer = writer("trail-delete");
        write_three(&writer);

        let mut log = writer.export_log().unwrap();
        log.records.remove(1);
        assert_eq!(
            chain::verify(&log.trail_id, &log.records),
            Err(ChainBreak::OutOfSequence { expected: 1, found: 2 })
        );
    }

    /// Renumbering after a deletion still fails on the dangling link.
    #[test]
    fn test_renumbered_deletion_detected() {
        let writer = writer("trail-renumber");
        write_three(&writer);

        let mut log = writer.export_log().unwrap();
        log.records.remove(1);
        log.records[1].position = 1;
        assert_eq!(
            chain::verify(&log.trail_id, &log.records),
            Err(ChainBreak::BrokenLink { position: 1 })
        );
    }

    #[test]
    fn test_reordered_records_detected() {
        let writer = writer("trail-reorder");
        write_three(&writer);

        let mut log = writer.export_log().unwrap();
        log.records.swap(0, 1);
        assert_eq!(
            log.verify(),
            Err(ChainBreak::OutOfSequence { expected: 0, found: 1 })
        );
    }

    /// Records sealed in one trail do not verify as another.
    #[test]
    fn test_records_bound_to_trail() {
        let writer = writer("trail-home");
        write_three(&writer);

        let mut log = writer.export_log().unwrap();
        assert!(log.verify().is_ok());
        log.trail_id = "trail-elsewhere".to_string();
        assert_eq!(log.verify(), Err(ChainBreak::DigestMismatch { position: 0 }));
    }

    #[test]
    fn test_truncated_export_detected_by_head() {
        let writer = writer("trail-truncate");
        write_three(&writer);

        let mut log = writer.export_log().unwrap();
        log.records.pop();
        assert!(chain::verify(&log.trail_id, &log.records).is_ok());
        assert_eq!(log.verify(), Err(ChainBreak::HeadMismatch));
    }

    #[test]
    fn test_genesis_and_positions() {
        let writer = writer("trail-seq");
        write_three(&writer);

        let log = writer.export_log().unwrap();
        assert_eq!(log.records[0].previous, GENESIS);
        for (idx, link) in log.records.iter().enumerate() {
            assert_eq!(link.position, idx as u64);
            assert_eq!(link.digest.len(), 64);
            if idx > 0 {
                assert_eq!(link.previous, log.records[idx - 1].digest);
            }
        }
    }

    #[test]
    fn test_seal_matches_writer() {
        let writer = writer("trail-seal");
        let record = accepted(PatientCategory::Citizen, 0, true);
        writer.write(&record).unwrap();

        let sealed = ChainedRecord::seal("trail-seal", 0, GENESIS, record).unwrap();
        assert_eq!(writer.export_log().unwrap().records[0], sealed);
    }

    #[test]
    fn test_export_log() {
        let writer = writer("trail-export");
        write_three(&writer);

        let log = writer.export_log().unwrap();
        assert_eq!(log.trail_id, "trail-export");
        assert_eq!(log.records.len(), 3);
        assert_eq!(log.head.as_deref(), Some(log.records[2].digest.as_str()));
        assert!(log.verify().is_ok());
    }

    #[test]
    fn test_verify_empty() {
        let writer = writer("trail-empty");
        assert!(writer.is_empty().unwrap());
        assert!(writer.verify_integrity().unwrap());
        let log = writer.export_log().unwrap();
        assert!(log.head.is_none());
        assert!(log.verify().is_ok());
        assert!(chain::verify("trail-empty", &[]).is_ok());
    }

    // ── Finalize ──────────────────────────────────────────────────────────────

    #[test]
    fn test_write_after_finalize_fails() {
        let writer = writer("trail-sealed");
        writer.write(&accepted(PatientCategory::Citizen, 0, true)).unwrap();
        writer.finalize().unwrap();
        writer.finalize().unwrap();

        let err = writer
            .write(&accepted(PatientCategory::Citizen, 0, true))
            .unwrap_err();
        assert!(matches!(err, HealthVerifyError::AuditWriteFailed { .. }));
        assert_eq!(writer.len().unwrap(), 1);
    }

    // ── Pseudonymisation ──────────────────────────────────────────────────────

    #[test]
    fn test_patient_ref_is_stable_and_salted() {
        let a = writer("trail-a");
        let b = InMemoryAuditWriter::new("trail-b", "other-salt");

        let first = a.patient_ref("8001015009085");
        assert_eq!(first, a.patient_ref("8001015009085"));
        assert_ne!(first, a.patient_ref("9202204120081"));
        assert_ne!(first, b.patient_ref("8001015009085"));

        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!first.contains("8001015009085"));
    }

    #[test]
    fn test_patient_ref_matches_salted_sha256() {
        // sha256("abc") with an empty salt.
        let hasher = PatientRefHasher::new("");
        assert_eq!(
            hasher.patient_ref("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        // Salt is appended, not prepended.
        assert_eq!(PatientRefHasher::new("c").patient_ref("ab"), hasher.patient_ref("abc"));
    }

    #[test]
    fn test_hasher_debug_hides_salt() {
        let rendered = format!("{:?}", PatientRefHasher::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }

    // ── Summary ───────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_counts() {
        let writer = writer("trail-summary");
        write_three(&writer);
        writer.write(&accepted(PatientCategory::Citizen, 800, false)).unwrap();

        let summary = writer.summary().unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.accepted, 3);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.by_category.get("citizen"), Some(&2));
        assert_eq!(summary.by_category.get("legal_immigrant"), Some(&1));
        assert_eq!(summary.checksum_checked, 3);
        assert_eq!(summary.checksum_valid, 2);
        assert!((summary.validity_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            summary.red_flags.get("identity number checksum mismatch"),
            Some(&1)
        );
        assert_eq!(summary.estimated_total.get("ZAR"), Some(&Money::from_major(1175)));
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = summarize(Vec::<&AssessmentRecord>::new());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.validity_rate, 0.0);
        assert!(summary.estimated_total.is_empty());
    }
}
