//! # healthverify-ref-clinic
//!
//! Reference clinic front desk for HealthVerify.
//!
//! Demonstrates three walk-throughs using mock data:
//!
//! 1. **Morning intake queue**: identity validation, classification, cost
//!    estimation and the audit trail for a mixed queue of documents.
//! 2. **Cost estimates**: the same service bundles priced for every
//!    citizenship class.
//! 3. **Pain triage**: emergency screening, comfort techniques and progress
//!    tracking for patients in the waiting room.
//!
//! All data is fictional. No external systems are contacted.

pub mod mock_data;
pub mod scenarios;
