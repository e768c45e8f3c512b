//! # healthverify-core
//!
//! The trait seams of the HealthVerify system and the intake desk that wires
//! them together.
//!
//! This crate provides:
//! - The four core traits (`Clock`, `IdentityValidator`, `EligibilityPolicy`,
//!   `AuditWriter`)
//! - The `IntakeDesk` that runs an intake through them in a fixed order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use healthverify_core::{IntakeDesk, traits::{EligibilityPolicy, SystemClock}};
//! ```

pub mod desk;
pub mod traits;

pub use desk::{ChecksumPolicy, IntakeDesk};
